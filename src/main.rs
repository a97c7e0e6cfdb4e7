use clap::{Parser, Subcommand};
use std::path::PathBuf;

const EXIT_SUCCESS: i32 = 0;
const EXIT_SCORING: i32 = 1;
const EXIT_IO: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score everything and print the leaderboard (default if no subcommand)
    Report,
    /// List the current submissions with their raw scores
    List,
    /// Add a submission to the roster
    Add {
        /// Submission name (unique within the roster)
        name: String,
        /// Comma-separated raw scores, one per category (blank entries count as 0)
        #[arg(short, long)]
        scores: String,
        /// Free-text notes (not used for scoring)
        #[arg(short, long, default_value = "")]
        notes: String,
    },
    /// Remove a submission from the roster by name
    Remove { name: String },
    /// Write the full report as a Markdown document
    Export {
        /// Output path (defaults to "<competition>_Results_<date>.md")
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Create a config file interactively
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "podium")]
#[command(about = "Competition scoring and ranking CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/podium/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Path to roster file (defaults to ~/.config/podium/roster.json)
    #[arg(short, long, global = true)]
    roster: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Report);

    // Init doesn't need an existing config.
    if let Commands::Init = command {
        let config_path = cli.config.map(PathBuf::from);
        if let Err(e) = podium::config::init::run_init_wizard(config_path) {
            eprintln!("Init error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
        std::process::exit(EXIT_SUCCESS);
    }

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match podium::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate scoring config at startup
    let scoring = config.scoring.clone().unwrap_or_default();
    if let Err(errors) = podium::scoring::validate_scoring(&scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    if cli.verbose {
        eprintln!(
            "Competition '{}': {} categories, curve {}, weights {}",
            config.competition_name,
            scoring.categories.len(),
            if scoring.enable_curve { "on" } else { "off" },
            if scoring.enable_weights { "on" } else { "off" },
        );
        for category in &scoring.categories {
            eprintln!(
                "  {} (weight {}%, pre-calc {})",
                category.name, category.weight, category.precalc
            );
        }
    }

    // Load roster
    let roster_path = cli
        .roster
        .map(PathBuf::from)
        .unwrap_or_else(podium::roster::get_roster_path);
    let mut roster = match podium::roster::load_roster(&roster_path) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Roster error: {}", e);
            std::process::exit(EXIT_IO);
        }
    };

    if cli.verbose {
        eprintln!(
            "Loaded {} submissions from {}",
            roster.len(),
            roster_path.display()
        );
    }

    let use_colors = podium::output::should_use_colors();

    match command {
        Commands::Report => {
            let report = match podium::scoring::score_report(&scoring, &roster.submissions) {
                Ok(r) => r,
                Err(podium::scoring::ScoreError::EmptyRoster) => {
                    println!("There are no submissions to report. Add one with `podium add`.");
                    std::process::exit(EXIT_SUCCESS);
                }
                Err(e) => {
                    eprintln!("Scoring error: {}", e);
                    std::process::exit(EXIT_SCORING);
                }
            };

            println!(
                "{}",
                podium::output::format_leaderboard(
                    &config.competition_name,
                    &scoring,
                    &report,
                    use_colors
                )
            );
            println!();
            println!(
                "{}",
                podium::output::format_winners(&report.winners, use_colors)
            );
        }
        Commands::List => {
            println!(
                "{}",
                podium::output::format_roster(&roster, &scoring, use_colors)
            );
        }
        Commands::Add {
            name,
            scores,
            notes,
        } => {
            let name = name.trim().to_string();
            if name.is_empty() {
                eprintln!("Submission name cannot be empty.");
                std::process::exit(EXIT_SCORING);
            }

            let scores: Vec<String> = scores.split(',').map(|s| s.trim().to_string()).collect();
            if scores.len() != scoring.categories.len() {
                eprintln!(
                    "Expected {} scores (one per category), got {}.",
                    scoring.categories.len(),
                    scores.len()
                );
                std::process::exit(EXIT_SCORING);
            }

            let added = roster.add(podium::roster::Submission {
                name: name.clone(),
                scores,
                notes,
            });
            if !added {
                eprintln!("A submission named '{}' already exists.", name);
                std::process::exit(EXIT_SCORING);
            }

            if let Err(e) = podium::roster::save_roster(&roster_path, &roster) {
                eprintln!("Roster error: {}", e);
                std::process::exit(EXIT_IO);
            }
            println!("Added '{}' ({} submissions total).", name, roster.len());
        }
        Commands::Remove { name } => {
            if !roster.remove(&name) {
                eprintln!("No submission named '{}'.", name);
                std::process::exit(EXIT_SCORING);
            }
            if let Err(e) = podium::roster::save_roster(&roster_path, &roster) {
                eprintln!("Roster error: {}", e);
                std::process::exit(EXIT_IO);
            }
            println!("Removed '{}' ({} submissions left).", name, roster.len());
        }
        Commands::Export { out } => {
            let report = match podium::scoring::score_report(&scoring, &roster.submissions) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Scoring error: {}", e);
                    std::process::exit(EXIT_SCORING);
                }
            };

            let out_path = out.unwrap_or_else(|| {
                let safe_name: String = config
                    .competition_name
                    .chars()
                    .filter(|c| c.is_alphanumeric() || *c == ' ' || *c == '_')
                    .collect::<String>()
                    .trim()
                    .replace(' ', "_");
                PathBuf::from(format!(
                    "{}_Results_{}.md",
                    safe_name,
                    chrono::Local::now().format("%Y-%m-%d")
                ))
            });

            let doc = podium::output::format_markdown_report(
                &config.competition_name,
                &scoring,
                &report,
            );
            if let Err(e) = std::fs::write(&out_path, doc) {
                eprintln!("Failed to write report to {}: {}", out_path.display(), e);
                std::process::exit(EXIT_IO);
            }
            println!("Report written to {}", out_path.display());
        }
        Commands::Init => unreachable!("handled above"),
    }

    std::process::exit(EXIT_SUCCESS);
}
