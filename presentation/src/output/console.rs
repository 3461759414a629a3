//! Console output formatter for moderation results

use colored::Colorize;
use jury_application::{ModerationConfig, PanelOutcome, ReportOutcome, VoteOutcome};
use jury_domain::{Account, ContentItem, ModerationStatus, VoteTally};
use serde::Serialize;

/// Formats moderation results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format any result as pretty JSON
    pub fn format_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Describe what a vote did
    pub fn format_vote(content_id: &str, outcome: &VoteOutcome) -> String {
        match outcome {
            VoteOutcome::ContentMissing => {
                format!("{} {} no longer exists", "Skipped:".dimmed(), content_id)
            }
            VoteOutcome::Duplicate => format!(
                "{} already voted on {}",
                "Skipped:".dimmed(),
                content_id
            ),
            VoteOutcome::Recorded {
                status,
                votes,
                panel_size,
            } => format!(
                "{} {}/{} votes on {} ({})",
                "Recorded:".green().bold(),
                votes,
                panel_size,
                content_id,
                Self::status(*status)
            ),
            VoteOutcome::RevoteStarted { options, panel } => format!(
                "{} {} tied between {}\n{}\n{}",
                "Revote:".yellow().bold(),
                content_id,
                Self::join(options.iter().map(|o| o.as_str())),
                "New panel:".cyan().bold(),
                Self::indent(&panel.join("\n"), "  ")
            ),
            VoteOutcome::RevoteStalled { options } => format!(
                "{} {} tied between {} but no eligible jurors are left; run `crowd-jury reassign {}` once more jurors exist",
                "Stalled:".red().bold(),
                content_id,
                Self::join(options.iter().map(|o| o.as_str())),
                content_id
            ),
            VoteOutcome::Resolved { status, strike } => {
                let mut line = format!(
                    "{} {} is {}",
                    "Resolved:".green().bold(),
                    content_id,
                    Self::status(*status)
                );
                if *strike {
                    line.push_str(&format!(" ({})", "author struck".red()));
                }
                line
            }
            VoteOutcome::Removed { notified } => format!(
                "{} {} was removed; notified {}",
                "Removed:".red().bold(),
                content_id,
                notified.join(", ")
            ),
        }
    }

    /// Describe what a report did
    pub fn format_report(content_id: &str, outcome: &ReportOutcome) -> String {
        match outcome {
            ReportOutcome::ContentMissing => {
                format!("{} {} no longer exists", "Skipped:".dimmed(), content_id)
            }
            ReportOutcome::Counted { report_count } => format!(
                "{} {} has {} report(s)",
                "Reported:".green().bold(),
                content_id,
                report_count
            ),
            ReportOutcome::PanelAssigned {
                report_count,
                panel,
            } => format!(
                "{} {} has {} report(s), panel seated:\n{}",
                "Reported:".green().bold(),
                content_id,
                report_count,
                Self::indent(&panel.join("\n"), "  ")
            ),
            ReportOutcome::PanelStalled { report_count } => format!(
                "{} {} has {} report(s) but no eligible jurors are available",
                "Stalled:".red().bold(),
                content_id,
                report_count
            ),
        }
    }

    /// Describe what a reassignment did
    pub fn format_panel(content_id: &str, outcome: &PanelOutcome) -> String {
        match outcome {
            PanelOutcome::ContentMissing => {
                format!("{} {} no longer exists", "Skipped:".dimmed(), content_id)
            }
            PanelOutcome::AlreadyEmpaneled { panel } => format!(
                "{} {} already has a panel of {}",
                "Unchanged:".dimmed(),
                content_id,
                panel.len()
            ),
            PanelOutcome::NotActive { status } => format!(
                "{} {} is {}, not under moderation",
                "Unchanged:".dimmed(),
                content_id,
                Self::status(*status)
            ),
            PanelOutcome::Assigned { panel } => format!(
                "{} {}\n{}",
                "Panel seated:".green().bold(),
                content_id,
                Self::indent(&panel.join("\n"), "  ")
            ),
            PanelOutcome::Stalled => format!(
                "{} {} still has no eligible jurors",
                "Stalled:".red().bold(),
                content_id
            ),
        }
    }

    /// Full view of a content item
    pub fn format_item(item: &ContentItem) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!("Content {}", item.id)));
        output.push('\n');
        output.push_str(&format!("{} {}\n", "Author:".cyan().bold(), item.author));
        output.push_str(&format!(
            "{} {}{}\n",
            "Status:".cyan().bold(),
            Self::status(item.status),
            if item.hidden { " (hidden)" } else { "" }
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Reports:".cyan().bold(),
            item.report_count
        ));
        output.push_str(&format!("\n{}\n", Self::indent(&item.content, "  ")));

        output.push_str(&Self::section_header("Panel"));
        if item.jurors.is_empty() {
            output.push_str(&format!("{}\n", "(none)".dimmed()));
        }
        for juror in &item.jurors {
            let vote = item
                .votes
                .iter()
                .find(|v| &v.juror == juror)
                .map(|v| v.choice.as_str().to_string())
                .unwrap_or_else(|| "pending".dimmed().to_string());
            output.push_str(&format!("  {} {}\n", juror, vote));
        }
        if !item.votes.is_empty() {
            output.push_str(&format!(
                "  {} {}\n",
                "Tally:".dimmed(),
                VoteTally::from_votes(&item.votes).summary()
            ));
        }
        if item.revote_round {
            output.push_str(&format!(
                "  {} {}\n",
                "Revote options:".yellow(),
                Self::join(item.revote_options.iter().map(|o| o.as_str()))
            ));
        }

        if !item.moderation_history.is_empty() {
            output.push_str(&Self::section_header("History"));
            for entry in &item.moderation_history {
                output.push_str(&format!(
                    "  {} {}\n",
                    Self::status(entry.decision),
                    format!("@{}", entry.timestamp).dimmed()
                ));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// One line per item
    pub fn format_queue(title: &str, items: &[ContentItem]) -> String {
        let mut output = format!("{} ({})\n", title.cyan().bold(), items.len());
        if items.is_empty() {
            output.push_str(&format!("  {}\n", "nothing here".dimmed()));
        }
        for item in items {
            output.push_str(&format!(
                "  {:<16} {:<14} {} votes, {} reports\n",
                item.id.as_str(),
                item.status.as_str(),
                item.votes.len(),
                item.report_count
            ));
        }
        output
    }

    pub fn format_account(account: &Account) -> String {
        let mut output = String::new();
        output.push_str(&Self::header(&account.email));
        output.push('\n');
        output.push_str(&format!(
            "{} {}\n",
            "Juror:".cyan().bold(),
            if account.is_juror { "yes" } else { "no" }
        ));
        let strikes = format!("{}", account.strikes);
        output.push_str(&format!(
            "{} {}{}\n",
            "Strikes:".cyan().bold(),
            if account.strikes > 0 {
                strikes.red().to_string()
            } else {
                strikes
            },
            if account.locked {
                format!(" {}", "(locked)".red().bold())
            } else {
                String::new()
            }
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Posts:".cyan().bold(),
            Self::join(account.posts.iter().map(|p| p.as_str()))
        ));

        if !account.notifications.is_empty() {
            output.push_str(&Self::section_header("Notifications"));
            for notification in &account.notifications {
                let about = notification
                    .related_content_id
                    .as_ref()
                    .map(|id| format!(" [{}]", id))
                    .unwrap_or_default();
                output.push_str(&format!("  {}{}\n", notification.message, about));
            }
        }

        output.push_str(&Self::footer());
        output
    }

    pub fn format_config(config: &ModerationConfig) -> String {
        format!(
            "{}\n  panel_size               {}\n  report_threshold         {}\n  max_commit_attempts      {}\n  enforce_panel_membership {}\n",
            "[moderation]".cyan().bold(),
            config.panel_size,
            config.report_threshold,
            config.max_commit_attempts,
            config.enforce_panel_membership
        )
    }

    fn status(status: ModerationStatus) -> String {
        let name = status.as_str();
        match status {
            ModerationStatus::Appropriate => name.green().to_string(),
            ModerationStatus::Revision => name.yellow().to_string(),
            ModerationStatus::Inappropriate | ModerationStatus::Deleted => name.red().to_string(),
            ModerationStatus::UnderReview | ModerationStatus::Revote => name.cyan().to_string(),
        }
    }

    fn join<'a>(parts: impl Iterator<Item = &'a str>) -> String {
        let joined = parts.collect::<Vec<_>>().join(", ");
        if joined.is_empty() {
            "-".to_string()
        } else {
            joined
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
