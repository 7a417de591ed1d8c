use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::io::{self, Write};

use crate::config::{Config, DEFAULT_BASE_URL};

/// Run the init command - interactively create a config file
pub fn run(force: bool) -> Result<()> {
    let config_path = Config::config_path()?;

    // Check if config already exists
    if config_path.exists() && !force {
        eprintln!(
            "{}: Config already exists at {}",
            "Error".red().bold(),
            config_path.display()
        );
        eprintln!();
        eprintln!("Use {} to overwrite.", "--force".cyan());
        bail!("Config file already exists");
    }

    println!("{}", "bookshelfctl configuration".bold());
    println!();
    println!(
        "This will create a config file at: {}",
        config_path.display().to_string().cyan()
    );
    println!();

    let base_url = prompt_base_url()?;

    // Create config directory
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {:?}", parent))?;
    }

    // Write config file
    let config_content = format!(
        r#"# bookshelfctl configuration

[server]
base_url = "{}"
"#,
        base_url
    );

    std::fs::write(&config_path, &config_content)
        .with_context(|| format!("Failed to write {:?}", config_path))?;

    println!();
    println!(
        "{} Config written to {}",
        "✓".green(),
        config_path.display()
    );
    println!();
    println!("You can now use:");
    println!(
        "  {} - sign in to your bookshelf",
        "bookshelfctl login".cyan()
    );
    println!(
        "  {} - browse your library",
        "bookshelfctl list".cyan()
    );

    Ok(())
}

fn prompt_base_url() -> Result<String> {
    println!("{}", "Step 1: Server address".bold());
    println!();
    println!("The base URL of your bookshelf service.");
    println!();
    println!("{}", "Examples:".bold());
    println!();
    println!("  {}", DEFAULT_BASE_URL.green());
    println!("  {}", "https://books.example.com".green());
    println!();

    print!("Enter base URL [{}]: ", DEFAULT_BASE_URL.green());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let input = input.trim();

    let base_url = if input.is_empty() {
        DEFAULT_BASE_URL.to_string()
    } else {
        input.trim_end_matches('/').to_string()
    };

    Ok(base_url)
}
