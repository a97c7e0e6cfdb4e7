use serde::{Deserialize, Serialize};

/// One competition entry as the judges recorded it.
///
/// Raw scores stay as entered (strings, one per active category). They are
/// parsed to numbers only at scoring time, so a typo is reported against
/// the submission and category it belongs to instead of being silently
/// coerced. An empty string counts as 0. Notes are free text and never
/// consumed by the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Submission {
    pub name: String,
    pub scores: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

/// The full submission set for a competition, as persisted on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    pub version: u32,
    #[serde(default)]
    pub submissions: Vec<Submission>,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Roster {
    /// Create a new empty roster with version 1
    pub fn new() -> Self {
        Self {
            version: 1,
            submissions: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.submissions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.submissions.len()
    }

    pub fn find(&self, name: &str) -> Option<&Submission> {
        self.submissions.iter().find(|s| s.name == name)
    }

    /// Add a submission, keeping entry order.
    /// Returns false (and leaves the roster unchanged) if the name is
    /// already taken; names are unique within a roster.
    pub fn add(&mut self, submission: Submission) -> bool {
        if self.find(&submission.name).is_some() {
            return false;
        }
        self.submissions.push(submission);
        true
    }

    /// Remove a submission by name.
    /// Returns true if it was present, false otherwise.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.submissions.len();
        self.submissions.retain(|s| s.name != name);
        self.submissions.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sub(name: &str) -> Submission {
        Submission {
            name: name.to_string(),
            scores: vec!["10".to_string(), "20".to_string()],
            notes: String::new(),
        }
    }

    #[test]
    fn test_new_roster_empty() {
        let roster = Roster::new();
        assert_eq!(roster.version, 1);
        assert!(roster.is_empty());
    }

    #[test]
    fn test_add_and_find() {
        let mut roster = Roster::new();
        assert!(roster.add(sub("Alpha")));
        assert_eq!(roster.len(), 1);
        assert!(roster.find("Alpha").is_some());
        assert!(roster.find("Beta").is_none());
    }

    #[test]
    fn test_add_rejects_duplicate_name() {
        let mut roster = Roster::new();
        assert!(roster.add(sub("Alpha")));
        assert!(!roster.add(sub("Alpha")));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut roster = Roster::new();
        roster.add(sub("Alpha"));
        assert!(roster.remove("Alpha"));
        assert!(!roster.remove("Alpha"));
        assert!(roster.is_empty());
    }

    #[test]
    fn test_preserves_entry_order() {
        let mut roster = Roster::new();
        roster.add(sub("Charlie"));
        roster.add(sub("Alpha"));
        roster.add(sub("Bravo"));
        let names: Vec<&str> = roster.submissions.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Charlie", "Alpha", "Bravo"]);
    }

    #[test]
    fn test_notes_default_when_absent() {
        let json = r#"{"name": "Alpha", "scores": ["1", "2"]}"#;
        let parsed: Submission = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.notes, "");
    }
}
