#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod command;
mod logging;
mod terminal;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lessons_core::OutputFormat;

use command::{
    AddInput, AddStrategy, CommandStrategy, InitStrategy, InteractiveInput, InteractiveStrategy,
    ShowInput, ShowStrategy, VersionStrategy,
};

#[derive(Parser)]
#[command(name = "lessons")]
#[command(about = "Lesson schedule parser and viewer", long_about = None)]
struct Cli {
    /// Lesson file (overrides schedule.path from the config)
    #[arg(short = 'f', long, global = true)]
    file: Option<PathBuf>,

    /// Config file (defaults to ~/lessons/config.json)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the schedule in chronological order
    Show {
        /// Only lessons of this teacher (matched by surname)
        #[arg(short = 't', long)]
        teacher: Option<String>,

        /// Output format: tsv or json
        #[arg(long, default_value = "tsv")]
        format: OutputFormat,
    },
    /// Print the schedule, filter by teacher and optionally add a lesson
    Interactive,
    /// Append a lesson to the lesson file
    Add {
        /// Date, DD.MM.YYYY
        #[arg(short = 'd', long)]
        date: String,

        /// Time, HH:MM
        #[arg(short = 'T', long)]
        time: String,

        /// Teacher name
        #[arg(short = 't', long)]
        teacher: String,
    },
    /// Initialize configuration
    Init,
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = command::load_config(cli.config.as_deref())?;
    logging::init(&config.log_level, cli.verbose)?;

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Show { teacher, format } => ShowStrategy.execute(ShowInput {
            file: command::lesson_file(&config, cli.file),
            teacher,
            format,
        }),
        Commands::Interactive => InteractiveStrategy.execute(InteractiveInput {
            file: command::lesson_file(&config, cli.file),
            affirmative_answers: config.interactive.affirmative_answers,
        }),
        Commands::Add {
            date,
            time,
            teacher,
        } => AddStrategy.execute(AddInput {
            file: command::lesson_file(&config, cli.file),
            date,
            time,
            teacher,
        }),
        Commands::Init => InitStrategy.execute(()),
        Commands::Version => VersionStrategy.execute(()),
    }
}
