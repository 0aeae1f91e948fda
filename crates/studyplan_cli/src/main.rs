//! `studyplan` command-line front end.
//!
//! Each invocation is one UI event: resolve config, open the store, apply
//! the command through the core service, then re-render the active screen.

mod config;
mod edit_cmds;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use log::{info, warn};

use studyplan_core::db::open_db;
use studyplan_core::{
    init_logging, local_now, render_app, AutoConfirm, Confirm, Confirmation, PlanService,
    PlanStore, Screen, SqliteKvStore, TaskFilter, TaskStatus, EXPORT_FILE_NAME,
};

use config::AppConfig;
use edit_cmds::{ExamCommand, SubjectCommand, TaskCommand};

#[derive(Parser)]
#[command(name = "studyplan", version, about = "Plan subjects, exams and study tasks")]
struct Cli {
    /// Database file (overrides STUDYPLAN_DB env var)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Answer yes to every confirmation prompt
    #[arg(long, short = 'y', global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the active screen, switching to SCREEN first when given
    Show {
        /// dashboard | subjects | exams | tasks | today
        screen: Option<String>,
        /// Task list status filter (todo | doing | done)
        #[arg(long)]
        status: Option<String>,
        /// Task list subject id filter
        #[arg(long)]
        subject: Option<String>,
    },
    /// Switch to the read-only demo plan
    Demo,
    /// Switch to your own plan (stays on the demo if none exists)
    MyPlan,
    /// Reset your plan to an empty "My Plan"
    New,
    /// Export your plan as pretty JSON
    Export {
        #[arg(long, default_value = EXPORT_FILE_NAME)]
        out: PathBuf,
    },
    /// Import a plan JSON file, replacing your plan
    Import { path: PathBuf },
    /// Subject management
    Subject {
        #[command(subcommand)]
        command: SubjectCommand,
    },
    /// Exam management
    Exam {
        #[command(subcommand)]
        command: ExamCommand,
    },
    /// Task management
    Task {
        #[command(subcommand)]
        command: TaskCommand,
    },
}

/// Asks on stdin; anything but `y`/`yes` declines.
struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        print!("{prompt} [y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}

fn confirmation_message(outcome: Confirmation, accepted: &str) -> String {
    match outcome {
        Confirmation::Accepted => accepted.to_string(),
        Confirmation::Declined => "Cancelled.".to_string(),
    }
}

fn task_filter(status: Option<&str>, subject: Option<String>) -> anyhow::Result<TaskFilter> {
    let status = match status {
        Some(value) => match TaskStatus::parse(value) {
            Some(status) => Some(status),
            None => bail!("unknown status `{value}`; expected todo|doing|done"),
        },
        None => None,
    };
    Ok(TaskFilter {
        status,
        subject_id: subject.filter(|id| !id.is_empty()),
    })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::resolve(cli.db.as_deref());

    if let Err(err) = init_logging(config.log_level, &config.log_dir) {
        eprintln!("warning: file logging disabled: {err}");
    }

    if let Some(parent) = config.db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create data directory {}", parent.display()))?;
    }
    let conn = open_db(&config.db_path)
        .with_context(|| format!("failed to open planner database {}", config.db_path.display()))?;
    let service = PlanService::new(PlanStore::new(SqliteKvStore::new(&conn)));

    let auto = AutoConfirm(true);
    let stdin = StdinConfirm;
    let confirm: &dyn Confirm = if cli.yes { &auto } else { &stdin };

    let mut filter = TaskFilter::default();
    let message = match cli.command {
        Commands::Show {
            screen,
            status,
            subject,
        } => {
            if let Some(name) = screen {
                match Screen::parse(&name) {
                    Some(screen) => service.store().set_active_screen(screen)?,
                    None => {
                        warn!("event=screen_switch module=cli status=ignored screen={name}");
                        eprintln!("unknown screen `{name}` ignored");
                    }
                }
            }
            filter = task_filter(status.as_deref(), subject)?;
            None
        }
        Commands::Demo => {
            service.view_demo()?;
            None
        }
        Commands::MyPlan => {
            let mode = service.view_my_plan()?;
            Some(format!("Active plan: {mode}"))
        }
        Commands::New => {
            let outcome = service.create_fresh_plan(confirm)?;
            Some(confirmation_message(outcome, "Created a new empty plan."))
        }
        Commands::Export { out } => {
            service.export_user_plan_to(&out)?;
            Some(format!("Exported plan to {}", out.display()))
        }
        Commands::Import { path } => {
            let outcome = service
                .import_user_plan_from(&path, confirm)
                .with_context(|| format!("could not import {}", path.display()))?;
            Some(confirmation_message(outcome, "Import successful."))
        }
        Commands::Subject { command } => Some(edit_cmds::run_subject_command(
            command, &service, confirm,
        )?),
        Commands::Exam { command } => {
            Some(edit_cmds::run_exam_command(command, &service, confirm)?)
        }
        Commands::Task { command } => {
            Some(edit_cmds::run_task_command(command, &service, confirm)?)
        }
    };

    if let Some(message) = message {
        println!("{message}\n");
    }
    let screen = render_app(service.store(), local_now(), &filter)?;
    print!("{screen}");
    info!("event=cli_command module=cli status=ok");
    Ok(())
}
