//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "question-bot")]
#[command(about = "Telegram bot relaying user questions to an admin chat", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
}
