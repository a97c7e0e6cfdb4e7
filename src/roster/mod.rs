pub mod storage;
pub mod types;

pub use storage::{get_roster_path, load_roster, save_roster};
pub use types::{Roster, Submission};
