//! Command-line presentation layer for Incident Desk.
//!
//! # Responsibility
//! - Parse user commands and invoke core store operations.
//! - Gate submissions on draft validation before reconciliation.
//! - Render projections and acknowledgments as plain text.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use incidentdesk_core::db::open_db;
use incidentdesk_core::{
    default_log_level, init_logging, project, IncidentDraft, IncidentService, Notice, Severity,
    SeverityFilter, SortOrder, SqliteKeyValueStore, SubmitOutcome,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "incidentdesk", version, about = "Local incident-tracking dashboard")]
struct Cli {
    /// Database file holding the persisted collection.
    #[arg(long, default_value = "incidentdesk.db")]
    db: PathBuf,

    /// Directory for rolling log files. Logging stays off when unset.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error).
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report an incident; a matching title updates the existing record.
    Report {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        /// Severity of the incident (low|medium|high).
        #[arg(long)]
        severity: Severity,
    },
    /// List incidents with optional severity filter and sort order.
    List {
        /// Severity filter (all|low|medium|high).
        #[arg(long, default_value = "all")]
        severity: SeverityFilter,
        /// Sort order over the report time (newest|oldest).
        #[arg(long, default_value = "newest")]
        order: SortOrder,
    },
    /// Delete one incident by id.
    Delete { id: i64 },
    /// Restore the first-run example incidents.
    Reset,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let log_dir = absolute(log_dir)?;
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        let log_dir = log_dir
            .to_str()
            .context("log directory must be valid UTF-8")?;
        init_logging(level, log_dir).map_err(|err| anyhow::anyhow!(err))?;
    }

    let conn = open_db(&cli.db)
        .with_context(|| format!("failed to open database `{}`", cli.db.display()))?;
    let store = SqliteKeyValueStore::try_new(&conn)?;
    let mut service = IncidentService::open(store)?;

    match cli.command {
        Command::Report {
            title,
            description,
            severity,
        } => {
            let draft = IncidentDraft {
                title,
                description,
                severity,
                reported_at: Utc::now(),
            };
            draft.validate()?;

            match service.submit(&draft)? {
                SubmitOutcome::Created { id } => println!("created incident #{id}"),
                SubmitOutcome::Updated { id } => println!("updated incident #{id}"),
            }
        }
        Command::List { severity, order } => {
            let view = project(service.incidents(), severity, order);
            if view.is_empty() {
                println!("no incidents match the current filter");
            }
            for incident in &view {
                println!(
                    "#{} [{}] {} — reported {}",
                    incident.id,
                    incident.severity,
                    incident.title,
                    incident.reported_at.to_rfc3339()
                );
                println!("    {}", incident.description);
            }
        }
        Command::Delete { id } => match service.delete(id)? {
            Some(removed) => {
                let notice = Notice::new(
                    format!("Successfully deleted incident \"{}\"", removed.title),
                    Utc::now(),
                );
                println!("{}", notice.message());
            }
            None => println!("no incident with id {id}"),
        },
        Command::Reset => {
            service.reset()?;
            println!("restored {} example incidents", service.incidents().len());
        }
    }

    Ok(())
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    Ok(cwd.join(path))
}
