use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::{get_config_path, Config};
use crate::scoring::{
    validate_scoring, CategoryConfig, PreCalc, ScaleConfig, ScoringConfig, DEFAULT_COLORS,
};

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout().flush().context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompt user with a message and a default value. Returns default if input is empty.
fn prompt_with_default(message: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{} [{}]: ", message, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let input = prompt(&format!("{} [{}]: ", message, hint))?;
    let input = input.to_lowercase();
    if input.is_empty() {
        Ok(default_yes)
    } else {
        Ok(input == "y" || input == "yes")
    }
}

/// Print text with a typewriter effect, one character at a time.
fn typewriter(text: &str) {
    use std::thread;
    use std::time::Duration;
    for c in text.chars() {
        print!("{}", c);
        std::io::stdout().flush().ok();
        thread::sleep(Duration::from_millis(18));
    }
    println!();
}

/// Parse a pre-calculation name as entered at the prompt.
fn parse_precalc(s: &str) -> Option<PreCalc> {
    match s.to_lowercase().as_str() {
        "none" | "" => Some(PreCalc::None),
        "square-root" | "sqrt" => Some(PreCalc::SquareRoot),
        "log10" => Some(PreCalc::Log10),
        "square" => Some(PreCalc::Square),
        "invert" => Some(PreCalc::Invert),
        "binary" => Some(PreCalc::Binary),
        "z-score" => Some(PreCalc::ZScore),
        "rank-order" => Some(PreCalc::RankOrder),
        "diff-from-average" => Some(PreCalc::DiffFromAverage),
        "pct-of-top-score" => Some(PreCalc::PctOfTopScore),
        _ => None,
    }
}

/// Run the interactive init wizard to create a config file.
///
/// If `default_path` is Some, uses that as the config file path.
/// Otherwise, prompts the user with the default config path.
pub fn run_init_wizard(default_path: Option<PathBuf>) -> Result<()> {
    println!();
    typewriter("Podium Configuration Wizard");
    println!("===========================");
    println!();

    let competition_name = prompt_with_default("Competition name", "New Competition")?;

    // 1. Toggles
    println!();
    typewriter("Score curving scales every category so its top score becomes the maximum possible score, proportionally lifting everyone else in that category.");
    let enable_curve = prompt_yes_no("Enable score curving?", true)?;

    println!();
    typewriter("Custom weights let each category contribute a different share of the final score. Weights are integer percents and must add up to 100.");
    let enable_weights = prompt_yes_no("Enable custom weights?", true)?;

    // 2. Scale
    println!();
    typewriter("The score scale sets the range judges score within. The maximum is also the ceiling that curving and several pre-calculations aim for.");
    let scale = loop {
        let min: i64 = loop {
            let s = prompt_with_default("Scale minimum", "1")?;
            match s.parse() {
                Ok(v) => break v,
                Err(_) => println!("  Invalid: must be an integer. Try again."),
            }
        };
        let max: i64 = loop {
            let s = prompt_with_default("Scale maximum", "100")?;
            match s.parse() {
                Ok(v) => break v,
                Err(_) => println!("  Invalid: must be an integer. Try again."),
            }
        };
        if min < max {
            break ScaleConfig { min, max };
        }
        println!("  Invalid: minimum must be less than maximum. Try again.");
    };

    // 3. Categories
    println!();
    typewriter("Now the categories. Each one has a name, a weight, and an optional pre-calculation applied to raw scores before anything else.");
    typewriter("Pre-calculations:");
    typewriter("  none               -- use the raw score as-is");
    typewriter("  square-root        -- reduces the impact of very high scores");
    typewriter("  log10              -- aggressively compresses high scores");
    typewriter("  square             -- magnifies the spread between high scores");
    typewriter("  invert             -- for 'lower is better' scores such as times");
    typewriter("  binary             -- pass/fail: anything above zero becomes the maximum");
    typewriter("  z-score            -- normalizes against the category average and spread");
    typewriter("  rank-order         -- score becomes the placement within the category");
    typewriter("  diff-from-average  -- score becomes raw minus the category average");
    typewriter("  pct-of-top-score   -- score becomes its percentage of the top raw score");

    let mut categories: Vec<CategoryConfig> = Vec::new();
    loop {
        println!();
        let name = loop {
            let n = prompt(&format!("Category {} name: ", categories.len() + 1))?;
            if n.is_empty() {
                println!("  Category name is required.");
                continue;
            }
            if categories.iter().any(|c| c.name == n) {
                println!("  Category '{}' already exists.", n);
                continue;
            }
            break n;
        };

        let weight: u32 = if enable_weights {
            loop {
                let w = prompt_with_default("  Weight (%)", "0")?;
                match w.parse() {
                    Ok(v) if v <= 100 => break v,
                    Ok(_) => println!("  Invalid: weight cannot exceed 100. Try again."),
                    Err(_) => println!("  Invalid: must be an integer percent. Try again."),
                }
            }
        } else {
            0
        };

        let precalc = loop {
            let p = prompt_with_default("  Pre-calculation", "none")?;
            match parse_precalc(&p) {
                Some(kind) => break kind,
                None => println!("  Invalid: unknown pre-calculation '{}'. Try again.", p),
            }
        };

        let color = DEFAULT_COLORS[categories.len() % DEFAULT_COLORS.len()].to_string();
        categories.push(CategoryConfig {
            name,
            weight,
            precalc,
            color: Some(color),
        });

        let add_more = prompt_yes_no("Add another category?", false)?;
        if !add_more {
            break;
        }
    }

    let scoring = ScoringConfig {
        categories,
        enable_curve,
        enable_weights,
        scale,
    };

    // Same checks as startup, so a bad wizard run fails here and not later.
    if let Err(errors) = validate_scoring(&scoring) {
        println!();
        println!("The configuration is not valid:");
        for error in &errors {
            println!("  - {}", error);
        }
        anyhow::bail!("Aborted: configuration did not validate");
    }

    // 4. Config path
    let default_config_path = default_path.unwrap_or_else(get_config_path);
    println!();
    let path_str = prompt_with_default(
        "Where should the config be saved?",
        &default_config_path.display().to_string(),
    )?;
    let config_path = PathBuf::from(&path_str);

    // Check if file already exists
    if config_path.exists() {
        let overwrite = prompt_yes_no(
            &format!(
                "Config already exists at {}. Overwrite?",
                config_path.display()
            ),
            false,
        )?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    // 5. Write config
    let config = Config {
        competition_name,
        scoring: Some(scoring),
    };

    let yaml = serde_saphyr::to_string(&config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    // Create parent directories
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(&config_path, &yaml)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!();
    println!("Config written to {}", config_path.display());
    println!("Run `podium add` to enter submissions, then `podium report`.");

    Ok(())
}
