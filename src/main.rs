use clap::{Parser, Subcommand};
use freela::application::engine::CalculatorEngine;
use freela::domain::job::JobDraft;
use freela::domain::ports::SnapshotStoreBox;
use freela::domain::profile::Profile;
use freela::infrastructure::json_file::JsonFileStore;
use freela::interfaces::csv::job_reader::JobReader;
use freela::interfaces::csv::job_writer::JobWriter;
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the persisted profile and job list
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Path to a RocksDB database to use instead of plain JSON files
    #[cfg(feature = "storage-rocksdb")]
    #[arg(long)]
    db_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show or edit the income/availability profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Manage the job list
    Job {
        #[command(subcommand)]
        action: JobAction,
    },
    /// Export the job list with derived metrics as CSV
    Export {
        /// Output file; stdout when omitted
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Print the profile and the derived hourly rate
    Show,
    /// Replace the profile; omitted fields keep their current value
    Set {
        #[arg(long)]
        monthly_income: Option<Decimal>,
        #[arg(long)]
        hours_per_day: Option<Decimal>,
        #[arg(long)]
        days_per_week: Option<Decimal>,
        #[arg(long)]
        vacation_weeks: Option<Decimal>,
    },
    /// Restore the default profile
    Reset,
}

#[derive(Subcommand)]
enum JobAction {
    /// Append a job to the list
    Add {
        name: String,
        #[arg(long)]
        hours_per_day: Decimal,
        #[arg(long)]
        total_hours: Decimal,
    },
    /// List jobs with days-to-complete and money value
    List,
    /// Flip completion for the job at a 0-based index
    Toggle { index: usize },
    /// Delete the job at a 0-based index
    Rm { index: usize },
    /// Add jobs from a CSV file (header: name,hoursPerDay,totalHours)
    Import { file: PathBuf },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    flexi_logger::Logger::try_with_env_or_str("warn")
        .into_diagnostic()?
        .log_to_stderr()
        .start()
        .into_diagnostic()?;

    let store = open_store(&cli)?;
    let engine = CalculatorEngine::initialize(store).await;

    match cli.command {
        Command::Profile { action } => run_profile(&engine, action).await,
        Command::Job { action } => run_job(&engine, action).await,
        Command::Export { output } => run_export(&engine, output).await,
    }
}

fn open_store(cli: &Cli) -> Result<SnapshotStoreBox> {
    #[cfg(feature = "storage-rocksdb")]
    if let Some(db_path) = &cli.db_path {
        let store = freela::infrastructure::rocksdb::RocksDbStore::open(db_path)
            .into_diagnostic()?;
        return Ok(Box::new(store));
    }

    let dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => dirs::data_dir()
            .ok_or_else(|| miette::miette!("no data directory available; pass --data-dir"))?
            .join("freela"),
    };
    let store = JsonFileStore::open(dir).into_diagnostic()?;
    Ok(Box::new(store))
}

async fn run_profile(engine: &CalculatorEngine, action: ProfileAction) -> Result<()> {
    match action {
        ProfileAction::Show => {
            let profile = engine.profile().await;
            println!("monthly income: {}", profile.monthly_income);
            println!("hours per day: {}", profile.hours_per_day.value());
            println!("days per week: {}", profile.days_per_week);
            println!("vacation weeks: {}", profile.vacation_weeks);
            match engine.hourly_rate().await {
                Some(rate) => println!("hourly rate: {rate}"),
                None => println!("hourly rate: undefined"),
            }
        }
        ProfileAction::Set {
            monthly_income,
            hours_per_day,
            days_per_week,
            vacation_weeks,
        } => {
            let current = engine.profile().await;
            let next = Profile::new(
                monthly_income.unwrap_or_else(|| current.monthly_income.value()),
                hours_per_day.unwrap_or_else(|| current.hours_per_day.value()),
                days_per_week.unwrap_or(current.days_per_week),
                vacation_weeks.unwrap_or(current.vacation_weeks),
            )
            .into_diagnostic()?;
            engine.set_profile(next).await.into_diagnostic()?;
        }
        ProfileAction::Reset => engine.reset_profile().await.into_diagnostic()?,
    }
    Ok(())
}

async fn run_job(engine: &CalculatorEngine, action: JobAction) -> Result<()> {
    match action {
        JobAction::Add {
            name,
            hours_per_day,
            total_hours,
        } => {
            engine
                .add_job(JobDraft {
                    name,
                    hours_per_day,
                    total_hours,
                })
                .await
                .into_diagnostic()?;
        }
        JobAction::List => {
            let rows = engine.job_overview().await;
            if rows.is_empty() {
                println!("no jobs yet");
            }
            for (index, (job, metrics)) in rows.iter().enumerate() {
                let mark = if job.is_completed { "x" } else { " " };
                println!(
                    "{index}. [{mark}] {} - {} h/day, {} h total, {} days, value {}",
                    job.name,
                    job.hours_per_day.value(),
                    job.total_hours.value(),
                    metrics.days_label(),
                    metrics.value_label(),
                );
            }
        }
        JobAction::Toggle { index } => {
            engine.toggle_job_completion(index).await.into_diagnostic()?;
        }
        JobAction::Rm { index } => engine.delete_job(index).await.into_diagnostic()?,
        JobAction::Import { file } => {
            let file = File::open(file).into_diagnostic()?;
            let reader = JobReader::new(file);
            for draft in reader.drafts() {
                match draft {
                    Ok(draft) => engine.add_job(draft).await.into_diagnostic()?,
                    Err(e) => eprintln!("Error reading job: {e}"),
                }
            }
        }
    }
    Ok(())
}

async fn run_export(engine: &CalculatorEngine, output: Option<PathBuf>) -> Result<()> {
    let rows = engine.job_overview().await;
    match output {
        Some(path) => {
            let file = File::create(path).into_diagnostic()?;
            JobWriter::new(file).write_jobs(rows).into_diagnostic()?;
        }
        None => {
            let stdout = io::stdout();
            JobWriter::new(stdout.lock()).write_jobs(rows).into_diagnostic()?;
        }
    }
    Ok(())
}
