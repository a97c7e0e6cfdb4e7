use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::roster::Roster;
use crate::scoring::{CategoryWinner, Report, ScoringConfig};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a submission name to fit its column, accounting for Unicode
fn truncate_name(name: &str, max_width: usize) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= max_width {
        name.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Width of the submission-name column; narrow terminals get a tighter one.
fn name_column_width() -> usize {
    match get_terminal_width() {
        Some(w) if w < 80 => 15,
        _ => 25,
    }
}

/// Format the ranked leaderboard as a fixed-width table.
///
/// When curving is on, each category column shows `raw/final` so the
/// curve's effect stays visible; otherwise just the final score.
pub fn format_leaderboard(
    competition: &str,
    scoring: &ScoringConfig,
    report: &Report,
    use_colors: bool,
) -> String {
    let is_curved = scoring.enable_curve;
    let name_width = name_column_width();

    let cat_headers: Vec<String> = scoring
        .categories
        .iter()
        .map(|c| {
            if is_curved {
                format!("{}(R/C)", truncate_name(&c.name, 10))
            } else {
                truncate_name(&c.name, 15)
            }
        })
        .collect();

    let title = format!("--- {} FINAL LEADERBOARD ---", competition.to_uppercase());
    let header = format!(
        "{:<5} {:<name_width$} {:<12} {}",
        "Rank",
        "Submission Name",
        "Final Score",
        cat_headers
            .iter()
            .map(|h| format!("{:<12}", h))
            .collect::<Vec<_>>()
            .join(" "),
    );
    let rule = "-".repeat(header.chars().count());

    let mut lines = Vec::with_capacity(report.standings.len() + 4);
    if use_colors {
        lines.push(title.bold().to_string());
    } else {
        lines.push(title);
    }
    lines.push(String::new());
    lines.push(header);
    lines.push(rule);

    for (idx, entry) in report.standings.iter().enumerate() {
        let cells: Vec<String> = entry
            .raw_scores
            .iter()
            .zip(&entry.final_scores)
            .map(|(raw, fin)| {
                if is_curved {
                    format!("{:.1}/{:.1}", raw, fin)
                } else {
                    format!("{:.1}", fin)
                }
            })
            .collect();
        let line = format!(
            "{:<5} {:<name_width$} {:<12.2} {}",
            idx + 1,
            truncate_name(&entry.name, name_width),
            entry.final_score,
            cells
                .iter()
                .map(|c| format!("{:<12}", c))
                .collect::<Vec<_>>()
                .join(" "),
        );
        if use_colors && idx == 0 {
            lines.push(line.bold().to_string());
        } else {
            lines.push(line);
        }
    }

    lines.join("\n")
}

/// Format the per-category winner list (highest raw score, ties included).
pub fn format_winners(winners: &[CategoryWinner], use_colors: bool) -> String {
    let mut lines = vec!["--- Category Winners (Highest Raw Score) ---".to_string()];
    for winner in winners {
        let names = winner.names.join(", ");
        let line = if use_colors {
            format!(
                "🏆 {}: {} ({:.1} pts)",
                winner.category.cyan(),
                names.yellow(),
                winner.raw_score
            )
        } else {
            format!("🏆 {}: {} ({:.1} pts)", winner.category, names, winner.raw_score)
        };
        lines.push(line);
    }
    lines.join("\n")
}

/// Format the roster for `podium list`: one line per submission with its
/// raw scores as entered.
pub fn format_roster(roster: &Roster, scoring: &ScoringConfig, use_colors: bool) -> String {
    if roster.is_empty() {
        return "No submissions yet. Add one with `podium add`.".to_string();
    }

    let name_width = name_column_width();
    let header = format!(
        "{:<name_width$} {}",
        "Submission Name",
        scoring
            .categories
            .iter()
            .map(|c| format!("{:<12}", truncate_name(&c.name, 12)))
            .collect::<Vec<_>>()
            .join(" "),
    );
    let rule = "-".repeat(header.chars().count());

    let mut lines = vec![header, rule];
    for sub in &roster.submissions {
        let scores = sub
            .scores
            .iter()
            .map(|s| format!("{:<12}", if s.is_empty() { "-" } else { s.as_str() }))
            .collect::<Vec<_>>()
            .join(" ");
        let name = truncate_name(&sub.name, name_width);
        let line = if use_colors {
            format!("{:<name_width$} {}", name.bold(), scores)
        } else {
            format!("{:<name_width$} {}", name, scores)
        };
        lines.push(line);
    }
    lines.join("\n")
}

/// Render the full report as a Markdown document: title, generation
/// timestamp, methodology, rankings table, and category winners.
pub fn format_markdown_report(
    competition: &str,
    scoring: &ScoringConfig,
    report: &Report,
) -> String {
    let is_curved = scoring.enable_curve;
    let mut doc = String::new();

    doc.push_str(&format!("# {} — Final Results\n\n", competition));
    doc.push_str(&format!(
        "Report generated: {}\n\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M")
    ));

    doc.push_str("## Scoring Methodology\n\n");
    if is_curved {
        doc.push_str(
            "- Score curving: enabled. Scores in each category are scaled so the \
             top score becomes the maximum possible score, proportionally \
             lifting all other scores in that category.\n",
        );
    } else {
        doc.push_str("- Score curving: disabled.\n");
    }
    if scoring.enable_weights {
        doc.push_str("- Custom weights: enabled.\n");
    } else {
        doc.push_str("- Custom weights: disabled (plain average).\n");
    }
    doc.push_str(&format!(
        "- Score scale: {} to {}.\n",
        scoring.scale.min, scoring.scale.max
    ));
    for category in &scoring.categories {
        doc.push_str(&format!(
            "- {}: weight {}%, pre-calculation {}.\n",
            category.name, category.weight, category.precalc
        ));
    }
    doc.push('\n');

    doc.push_str("## Final Rankings\n\n");
    let cat_headers: Vec<String> = scoring
        .categories
        .iter()
        .map(|c| {
            if is_curved {
                format!("{} (Raw/Curved)", c.name)
            } else {
                c.name.clone()
            }
        })
        .collect();
    doc.push_str(&format!(
        "| Rank | Submission | Final Score | {} |\n",
        cat_headers.join(" | ")
    ));
    doc.push_str(&format!(
        "|---|---|---|{}\n",
        "---|".repeat(cat_headers.len())
    ));
    for (idx, entry) in report.standings.iter().enumerate() {
        let cells: Vec<String> = entry
            .raw_scores
            .iter()
            .zip(&entry.final_scores)
            .map(|(raw, fin)| {
                if is_curved {
                    format!("{:.1} / {:.1}", raw, fin)
                } else {
                    format!("{:.1}", fin)
                }
            })
            .collect();
        doc.push_str(&format!(
            "| {} | {} | {:.2} | {} |\n",
            idx + 1,
            entry.name,
            entry.final_score,
            cells.join(" | ")
        ));
    }
    doc.push('\n');

    doc.push_str("## Category Winners (Highest Raw Score)\n\n");
    for winner in &report.winners {
        doc.push_str(&format!(
            "- **{}**: {} ({:.1} pts)\n",
            winner.category,
            winner.names.join(", "),
            winner.raw_score
        ));
    }

    doc
}
