//! `aurora` CLI — inspect speaker availability and check candidate bookings.
//!
//! ## Usage
//!
//! ```sh
//! # Which weekday does a date fall on?
//! aurora weekday --date 2026-03-16
//!
//! # Start-time bounds for a date (schedule from file)
//! aurora range -i availability.json --date 2026-03-16
//!
//! # List bookable 30-minute slots (schedule from stdin)
//! cat availability.json | aurora slots --date 2026-03-16
//!
//! # Validate a booking; exits 1 with the advisory message if rejected
//! aurora validate -i availability.json --date 2026-03-16 --time 16:45
//!
//! # Check a schedule for inverted windows before saving it
//! AURORA_SCHEDULE=availability.json aurora check
//! ```

use anyhow::{Context, Result};
use aurora_availability::{
    parse_date, weekday_of, BookingError, ClockTime, WeeklyAvailability, SESSION_MINUTES,
};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{self, Read};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "aurora",
    version,
    about = "Aurora speaker availability and booking checker"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Availability JSON file (reads from stdin if omitted)
    #[arg(short = 'i', long = "schedule", env = "AURORA_SCHEDULE", global = true)]
    schedule: Option<String>,

    /// Emit JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    /// Log debug output to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the weekday a date falls on
    Weekday {
        /// Calendar date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
    /// Print the earliest and latest selectable start time for a date
    Range {
        /// Calendar date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
    /// List every 30-minute session start on a date
    Slots {
        /// Calendar date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
    /// Validate a proposed session start
    Validate {
        /// Calendar date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Proposed start time (HH:MM)
        #[arg(long)]
        time: String,
    },
    /// Check that every open day's window starts before it ends
    Check,
}

#[derive(Serialize)]
struct RangeOutput {
    min: ClockTime,
    max: ClockTime,
    disabled: bool,
}

#[derive(Serialize)]
struct ValidateOutput {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Weekday { date } => {
            let day = weekday_of(read_date(&date)?);
            if cli.json {
                println!("{}", serde_json::to_string(&day)?);
            } else {
                println!("{}", day);
            }
        }
        Commands::Range { date } => {
            let date = read_date(&date)?;
            let schedule = load_schedule(cli.schedule.as_deref())?;
            let range = aurora_availability::selectable_range(date, &schedule);
            let sessions_fit = aurora_availability::accepts_sessions(date, &schedule);
            if cli.json {
                let out = RangeOutput {
                    min: range.min,
                    max: range.max,
                    disabled: !sessions_fit,
                };
                println!("{}", serde_json::to_string(&out)?);
            } else if !aurora_availability::is_bookable(date, &schedule) {
                println!("{} is not available", weekday_of(date));
            } else if !sessions_fit {
                println!(
                    "{} window is shorter than one {}-minute session",
                    weekday_of(date),
                    SESSION_MINUTES
                );
            } else {
                println!("{}-{}", range.min, range.max);
            }
        }
        Commands::Slots { date } => {
            let date = read_date(&date)?;
            let schedule = load_schedule(cli.schedule.as_deref())?;
            let slots = aurora_availability::slot_starts(date, &schedule);
            if cli.json {
                println!("{}", serde_json::to_string(&slots)?);
            } else {
                for slot in slots {
                    println!("{}", slot);
                }
            }
        }
        Commands::Validate { date, time } => {
            let date = read_date(&date)?;
            let time: ClockTime = time.parse().context("Failed to parse --time")?;
            let schedule = load_schedule(cli.schedule.as_deref())?;
            let result = aurora_availability::validate(date, time, &schedule);
            report_validation(result, cli.json)?;
        }
        Commands::Check => {
            let schedule = load_schedule(cli.schedule.as_deref())?;
            schedule
                .check_windows()
                .context("Schedule has an invalid availability window")?;
            print_week(&schedule, cli.json)?;
        }
    }

    Ok(())
}

/// Install a stderr `fmt` subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Print the outcome of `validate` and exit 1 on rejection.
fn report_validation(result: std::result::Result<(), BookingError>, json: bool) -> Result<()> {
    let error = result.err();
    if json {
        let out = ValidateOutput {
            valid: error.is_none(),
            error: error.map(|e| e.to_string()),
        };
        println!("{}", serde_json::to_string(&out)?);
    } else {
        match &error {
            None => println!("OK ({}-minute session fits)", SESSION_MINUTES),
            Some(e) => println!("{}", e),
        }
    }

    if error.is_some() {
        process::exit(1);
    }
    Ok(())
}

fn print_week(schedule: &WeeklyAvailability, json: bool) -> Result<()> {
    if json {
        println!("{}", schedule.to_json()?);
        return Ok(());
    }
    for entry in schedule.iter() {
        if entry.is_available {
            println!("{:<9}  {}-{}", entry.day, entry.start_time, entry.end_time);
        } else {
            println!("{:<9}  unavailable", entry.day);
        }
    }
    if !schedule.has_any_availability() {
        println!("No open days: learners cannot book this speaker");
    }
    Ok(())
}

fn read_date(date: &str) -> Result<NaiveDate> {
    parse_date(date).context("Failed to parse --date")
}

fn load_schedule(path: Option<&str>) -> Result<WeeklyAvailability> {
    let json = read_input(path)?;
    let schedule =
        WeeklyAvailability::from_json(&json).context("Failed to parse availability JSON")?;
    tracing::debug!(
        open_days = schedule.iter().filter(|d| d.is_available).count(),
        "loaded schedule"
    );
    Ok(schedule)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
