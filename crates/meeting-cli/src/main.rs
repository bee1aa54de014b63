//! `meet` CLI — derive free time and find shared meeting windows.
//!
//! ## Usage
//!
//! ```sh
//! # Free time for one calendar
//! meet free --busy 9:00-10:30 --busy 12:00-13:00 --range 9:00-20:00
//!
//! # Meeting windows for two calendars described in a JSON request (stdin or -i)
//! meet find -i request.json
//!
//! # Override the request's duration and emit JSON
//! meet find -i request.json --duration 45 --json
//!
//! # Verbose engine logging
//! RUST_LOG=meeting_engine=debug meet find -i request.json
//! ```

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use meeting_engine::{
    derive_free_time_with, find_meeting_windows, Calendar, EmptySchedulePolicy, Interval,
};
use serde::Deserialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "meet",
    version,
    about = "Find windows where two calendars are both free"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the free intervals of a single calendar
    Free {
        /// Busy interval as START-END (repeatable)
        #[arg(short, long = "busy", value_name = "START-END")]
        busy: Vec<Interval>,
        /// Day range as START-END
        #[arg(short, long, value_name = "START-END")]
        range: Interval,
        /// Treat an empty calendar as free for the whole range
        #[arg(long)]
        allow_empty: bool,
        /// Emit JSON instead of one interval per line
        #[arg(long)]
        json: bool,
    },
    /// Find meeting windows for two calendars
    Find {
        /// Request JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Minimum meeting length in minutes (overrides the request)
        #[arg(short, long)]
        duration: Option<u32>,
        /// Treat an empty calendar as free for the whole range
        #[arg(long)]
        allow_empty: bool,
        /// Emit JSON instead of one interval per line
        #[arg(long)]
        json: bool,
    },
}

/// Two calendars and the meeting length to search for.
#[derive(Debug, Deserialize)]
struct MeetingRequest {
    #[serde(default)]
    duration: Option<u32>,
    first: Calendar,
    second: Calendar,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Free {
            busy,
            range,
            allow_empty,
            json,
        } => {
            let free = derive_free_time_with(&busy, range, policy(allow_empty))
                .context("Failed to derive free time")?;
            info!(free = free.len(), "free time computed");
            print_intervals(&free, json)?;
        }
        Commands::Find {
            input,
            duration,
            allow_empty,
            json,
        } => {
            let raw = read_input(input.as_deref())?;
            let request: MeetingRequest =
                serde_json::from_str(&raw).context("Failed to parse meeting request JSON")?;
            let duration = duration.or(request.duration).context(
                "No meeting duration given: pass --duration or set \"duration\" in the request",
            )?;
            debug!(duration, "searching for meeting windows");

            let MeetingRequest { first, second, .. } = request;
            let policy = policy(allow_empty);
            let mut windows = find_meeting_windows(&first, &second, duration, policy)
                .context("Invalid calendar in meeting request")?;
            windows.sort();
            windows.dedup();
            info!(windows = windows.len(), "meeting windows found");
            print_intervals(&windows, json)?;
        }
    }

    Ok(())
}

fn policy(allow_empty: bool) -> EmptySchedulePolicy {
    if allow_empty {
        EmptySchedulePolicy::WholeRangeFree
    } else {
        EmptySchedulePolicy::Reject
    }
}

fn print_intervals(intervals: &[Interval], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(intervals)?);
    } else {
        for interval in intervals {
            println!("{}", interval);
        }
    }
    Ok(())
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
