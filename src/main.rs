mod cli;
mod config;
mod github;
mod http;
mod logger;
mod triangle;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, Prompt};
use config::Config;

const NO_REPOSITORIES_MESSAGE: &str = "No repositories found or user not found.";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())
        .await
        .context("Cannot load config file")?;

    logger::init(logger::resolve_level(
        cli.log_level.as_deref(),
        config.log_level.as_deref(),
    ))?;

    log::info!("Starting");
    match cli.command {
        Command::Repos { user } => repos(&config, user, cli.json).await,
        Command::Triangle { a, b, c } => classify_triangle([a, b, c], cli.json).await,
    }
}

async fn repos(config: &Config, user: Option<String>, json: bool) -> Result<()> {
    let user = Prompt::new()
        .or_ask(user, "Enter GitHub user ID: ")
        .await
        .context("Cannot read the user id")?;

    log::info!("Looking up repositories of {}", user);
    let repos = github::lookup(config, &user).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&repos)?);
    } else if repos.is_empty() {
        println!("{}", NO_REPOSITORIES_MESSAGE);
    } else {
        for repo in &repos {
            println!("{}", repo);
        }
    }

    Ok(())
}

async fn classify_triangle(sides: [Option<String>; 3], json: bool) -> Result<()> {
    let mut prompt = Prompt::new();
    let [a, b, c] = sides;

    let a = prompt.or_ask(a, "Enter side a: ").await?;
    let b = prompt.or_ask(b, "Enter side b: ").await?;
    let c = prompt.or_ask(c, "Enter side c: ").await?;

    let classification = triangle::classify(a.as_str(), b.as_str(), c.as_str())
        .context("Cannot classify the triangle")?;
    log::debug!("{} {} {} is {:?}", a, b, c, classification);

    if json {
        let output = serde_json::json!({
            "sides": [a, b, c],
            "classification": classification,
            "family": classification.family(),
            "right": classification.is_right(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", classification);
    }

    Ok(())
}
