use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin, Stdout};

#[derive(Parser, Debug)]
#[command(
    name = "repotri",
    version,
    about = "Counts the commits of a GitHub user's repositories and classifies triangles"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file, defaults to ./repotri.yaml when present
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List a user's repositories with their commit counts
    Repos {
        /// GitHub user id, prompted for when omitted
        user: Option<String>,
    },

    /// Classify a triangle from its three side lengths
    Triangle {
        /// Sides prompted for when omitted
        #[arg(allow_negative_numbers = true)]
        a: Option<String>,
        #[arg(allow_negative_numbers = true)]
        b: Option<String>,
        #[arg(allow_negative_numbers = true)]
        c: Option<String>,
    },
}

/// Line based prompt on stdin/stdout
pub struct Prompt {
    lines: Lines<BufReader<Stdin>>,
    stdout: Stdout,
}

impl Prompt {
    pub fn new() -> Self {
        Prompt {
            lines: BufReader::new(io::stdin()).lines(),
            stdout: io::stdout(),
        }
    }

    pub async fn ask(&mut self, message: &str) -> Result<String> {
        self.stdout.write_all(message.as_bytes()).await?;
        self.stdout.flush().await?;

        let line = self
            .lines
            .next_line()
            .await?
            .context("No input given")?;

        Ok(line.trim().to_owned())
    }

    /// Returns `value` or asks for it when absent
    pub async fn or_ask(&mut self, value: Option<String>, message: &str) -> Result<String> {
        match value {
            Some(value) => Ok(value),
            None => self.ask(message).await,
        }
    }
}

impl Default for Prompt {
    fn default() -> Self {
        Self::new()
    }
}
