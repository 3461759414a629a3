//! CLI command definitions

use clap::{Parser, Subcommand};
use jury_domain::VoteChoice;
use std::path::PathBuf;

/// CLI arguments for crowd-jury
#[derive(Parser, Debug)]
#[command(name = "crowd-jury")]
#[command(author, version, about = "Crowd moderation - randomly drawn juror panels vote on reported content")]
#[command(long_about = r#"
crowd-jury runs crowd moderation for user content.

Reported content is put before a randomly drawn, odd-sized panel of juror
accounts. Each juror votes appropriate, revision or inappropriate:

  appropriate     content stays, report flags are cleared
  revision        content is hidden until the author revises it
  inappropriate   content is deleted, author and panel are notified

A tie seats a fresh panel that votes only on the tied options. Authors
collect strikes for removed or repeatedly revised content and are locked
at three.

Configuration files are loaded from (in priority order):
1. JURY_* environment variables   (JURY_MODERATION__PANEL_SIZE=7)
2. --config <path>                Explicit config file
3. ./jury.toml                    Project-level config
4. ~/.config/crowd-jury/config.toml   Global config

Example:
  crowd-jury add-account juror@example.com --juror
  crowd-jury post post-1 author@example.com "hello world"
  crowd-jury report post-1 reader@example.com
  crowd-jury vote post-1 juror@example.com appropriate
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print machine-readable JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Data file to use instead of the configured one
    #[arg(long, value_name = "PATH", global = true)]
    pub data: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Cast a juror's vote on a content item
    Vote {
        content_id: String,
        /// Voting juror (account email)
        juror: String,
        /// appropriate | revision | inappropriate
        #[arg(value_parser = parse_choice)]
        choice: VoteChoice,
    },

    /// Report a content item for moderation
    Report { content_id: String, reporter: String },

    /// Seat a fresh panel on a stalled item
    Reassign { content_id: String },

    /// List items waiting for a juror's vote
    Queue { juror: String },

    /// List an author's items that are under moderation
    Reported { author: String },

    /// Show a content item and its moderation state
    Show { content_id: String },

    /// Show an account
    Account { email: String },

    /// Create an account
    AddAccount {
        email: String,
        /// Make the account eligible for panels
        #[arg(long)]
        juror: bool,
    },

    /// Publish a content item
    Post {
        content_id: String,
        author: String,
        content: String,
    },

    /// Show effective configuration and its sources
    Config,
}

fn parse_choice(s: &str) -> Result<VoteChoice, String> {
    s.parse().map_err(|e: jury_domain::DomainError| e.to_string())
}
