pub mod formatter;

pub use formatter::{
    format_leaderboard, format_markdown_report, format_roster, format_winners, should_use_colors,
};
