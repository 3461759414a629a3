//! CLI entrypoint for crowd-jury
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use jury_application::{
    CastVoteInput, ModerationCoordinator, ModerationLogger, ModerationStore, NoModerationLogger,
    ReassignPanelUseCase, ReportContentInput, ReportContentUseCase, ReviewQueueUseCase,
    SubmitContentInput, SubmitContentUseCase,
};
use jury_domain::{Account, ConfigIssue, ContentId, Severity};
use jury_infrastructure::{ConfigLoader, JsonFileModerationStore, JsonlModerationLogger};
use jury_presentation::{Cli, Command, ConsoleFormatter};
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.verbose, config.logging.dir.as_deref());

    info!("Starting crowd-jury");

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Warning => warn!("{}", issue.message),
            Severity::Error => error!("{}", issue.message),
        }
    }
    if ConfigIssue::has_errors(&issues) {
        bail!("Invalid configuration, see errors above");
    }

    let moderation = config.moderation.to_moderation_config();
    let data_path = cli
        .data
        .clone()
        .unwrap_or_else(|| config.storage.resolve_path());
    let json = cli.json;

    let audit_log = config.logging.audit_log.as_deref();

    let output = match cli.command {
        Command::Config => {
            if json {
                ConsoleFormatter::format_json(&moderation)
            } else {
                let mut lines = ConfigLoader::describe_sources(cli.config.as_deref());
                lines.push(String::new());
                lines.push(ConsoleFormatter::format_config(&moderation));
                lines.push(format!("Data file: {}", data_path.display()));
                lines.join("\n")
            }
        }

        Command::Vote {
            content_id,
            juror,
            choice,
        } => {
            let coordinator =
                ModerationCoordinator::new(open_store(&data_path).await?, moderation)
                    .with_logger(audit_logger(audit_log));
            let outcome = coordinator
                .cast_vote(CastVoteInput::new(content_id.as_str(), juror, choice))
                .await?;
            if json {
                ConsoleFormatter::format_json(&outcome)
            } else {
                ConsoleFormatter::format_vote(&content_id, &outcome)
            }
        }

        Command::Report {
            content_id,
            reporter,
        } => {
            let use_case = ReportContentUseCase::new(open_store(&data_path).await?, moderation)
                .with_logger(audit_logger(audit_log));
            let outcome = use_case
                .execute(ReportContentInput::new(content_id.as_str(), reporter))
                .await?;
            if json {
                ConsoleFormatter::format_json(&outcome)
            } else {
                ConsoleFormatter::format_report(&content_id, &outcome)
            }
        }

        Command::Reassign { content_id } => {
            let use_case = ReassignPanelUseCase::new(open_store(&data_path).await?, moderation)
                .with_logger(audit_logger(audit_log));
            let outcome = use_case.execute(&ContentId::new(content_id.as_str())).await?;
            if json {
                ConsoleFormatter::format_json(&outcome)
            } else {
                ConsoleFormatter::format_panel(&content_id, &outcome)
            }
        }

        Command::Queue { juror } => {
            let items = ReviewQueueUseCase::new(open_store(&data_path).await?)
                .pending_for_juror(&juror)
                .await?;
            if json {
                ConsoleFormatter::format_json(&items)
            } else {
                ConsoleFormatter::format_queue(&format!("Awaiting vote from {}", juror), &items)
            }
        }

        Command::Reported { author } => {
            let items = ReviewQueueUseCase::new(open_store(&data_path).await?)
                .reported_for_author(&author)
                .await?;
            if json {
                ConsoleFormatter::format_json(&items)
            } else {
                ConsoleFormatter::format_queue(&format!("Under moderation for {}", author), &items)
            }
        }

        Command::Show { content_id } => {
            let store = open_store(&data_path).await?;
            let Some(stored) = store.get_content(&ContentId::new(content_id.as_str())).await? else {
                bail!("Content {} not found", content_id);
            };
            if json {
                ConsoleFormatter::format_json(&stored.item)
            } else {
                ConsoleFormatter::format_item(&stored.item)
            }
        }

        Command::Account { email } => {
            let store = open_store(&data_path).await?;
            let Some(account) = store.get_account(&email).await? else {
                bail!("Account {} not found", email);
            };
            if json {
                ConsoleFormatter::format_json(&account)
            } else {
                ConsoleFormatter::format_account(&account)
            }
        }

        Command::AddAccount { email, juror } => {
            let account = if juror {
                Account::juror(email)
            } else {
                Account::new(email)
            };
            open_store(&data_path)
                .await?
                .insert_account(account.clone())
                .await?;
            if json {
                ConsoleFormatter::format_json(&account)
            } else {
                ConsoleFormatter::format_account(&account)
            }
        }

        Command::Post {
            content_id,
            author,
            content,
        } => {
            let item = SubmitContentUseCase::new(open_store(&data_path).await?)
                .execute(SubmitContentInput::new(content_id, author, content))
                .await?;
            if json {
                ConsoleFormatter::format_json(&item)
            } else {
                ConsoleFormatter::format_item(&item)
            }
        }
    };

    println!("{}", output);

    Ok(())
}

async fn open_store(path: &Path) -> Result<Arc<JsonFileModerationStore>> {
    let store = JsonFileModerationStore::open(path)
        .await
        .with_context(|| format!("Failed to open data file {}", path.display()))?;
    Ok(Arc::new(store))
}

/// JSONL audit logger if configured and writable, otherwise a no-op
fn audit_logger(path: Option<&Path>) -> Arc<dyn ModerationLogger> {
    match path.and_then(JsonlModerationLogger::new) {
        Some(audit) => {
            info!("Audit log: {}", audit.path().display());
            Arc::new(audit)
        }
        None => Arc::new(NoModerationLogger),
    }
}

/// Initialize logging based on verbosity level
///
/// Logs go to stderr, or to a daily rolling file when `dir` is set.
fn init_logging(verbose: u8, dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    match dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "crowd-jury.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            None
        }
    }
}
