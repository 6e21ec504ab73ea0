#![warn(clippy::pedantic)]

//! Command line front end of the workout tracker.

use std::{
    io,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use log::{LevelFilter, debug};
use workout_storage::FileStorage;

mod handler;

use handler::Handler;

#[derive(Parser)]
#[command(name = "workout", version)]
#[command(about = "Track weekly workouts and plan the training days", long_about = None)]
struct Cli {
    /// Directory of the data files
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
    /// Exercise catalog file [default: <DATA_DIR>/exercises.csv]
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Completion log file [default: <DATA_DIR>/stat_save.csv]
    #[arg(long, global = true)]
    completions: Option<PathBuf>,
    /// Use this date instead of today (YYYY-MM-DD)
    #[arg(long, global = true)]
    date: Option<NaiveDate>,
    /// Print more messages, repeat for more detail
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the exercises completed this week
    Progress,
    /// List the body parts with pending exercises
    Bodyparts,
    /// Show the pending exercises of the selected body parts
    Pending {
        /// Body part to include
        #[arg(short, long = "bodypart", value_name = "BODYPART")]
        bodyparts: Vec<String>,
        /// Include all body parts
        #[arg(long, conflicts_with = "bodyparts")]
        all: bool,
    },
    /// Log a completed exercise
    Log {
        exercise: String,
        #[arg(long)]
        reps: Option<String>,
        #[arg(long)]
        weight: Option<String>,
    },
    /// Suggest a workout plan for the week
    Plan {
        /// Start a new distribution cycle
        #[arg(long)]
        refresh: bool,
    },
    /// Show the application log
    History,
    /// Show or change the default reps and weight
    Settings {
        #[arg(long)]
        reps: Option<u32>,
        #[arg(long)]
        weight: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
    let mut storage = FileStorage::new(&data_dir);
    if let Some(catalog) = cli.catalog {
        storage = storage.with_catalog(catalog);
    }
    if let Some(completions) = cli.completions {
        storage = storage.with_completions(completions);
    }

    workout_app::log::init(
        Arc::new(Mutex::new(storage.clone())),
        level_filter(cli.verbose),
    )?;
    debug!("using data directory {}", data_dir.display());

    let today = cli.date.unwrap_or_else(|| Local::now().date_naive());
    let mut handler = Handler::new(storage, today, io::stdout().lock());

    match cli.command {
        Commands::Progress => handler.progress(),
        Commands::Bodyparts => handler.bodyparts(),
        Commands::Pending { bodyparts, all } => handler.pending(&bodyparts, all),
        Commands::Log {
            exercise,
            reps,
            weight,
        } => handler.log(&exercise, reps, weight),
        Commands::Plan { refresh } => handler.plan(refresh),
        Commands::History => handler.history(),
        Commands::Settings { reps, weight } => handler.settings_command(reps, weight),
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from(".workout"), |dir| dir.join("workout"))
}

fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
