//! Advent of Code 2025 CLI

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;

use aoc2025::error::FixSuggestion;
use aoc2025::{input, registry, AocError, DayAnswers};

#[derive(Parser)]
#[command(name = "aoc2025")]
#[command(about = "Advent of Code 2025 solutions")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve one day
    Solve {
        /// Day number (1-12)
        day: u8,

        /// Puzzle input file (defaults to <input-dir>/dayNN.txt)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Directory holding dayNN.txt inputs
        #[arg(long, default_value = "inputs")]
        input_dir: PathBuf,

        /// Print only part 1 or part 2
        #[arg(short, long)]
        part: Option<u8>,

        /// Print answers as JSON
        #[arg(long)]
        json: bool,
    },

    /// Solve every day that has a discovered input
    All {
        /// Directory searched recursively for dayNN.txt inputs
        #[arg(long, default_value = "inputs")]
        input_dir: PathBuf,

        /// Print answers as JSON
        #[arg(long)]
        json: bool,
    },

    /// List implemented days and which inputs are present
    Days {
        /// Directory searched recursively for dayNN.txt inputs
        #[arg(long, default_value = "inputs")]
        input_dir: PathBuf,
    },
}

fn main() {
    // Initialize tracing; quiet by default, RUST_LOG opens it up
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Solve {
            day,
            input,
            input_dir,
            part,
            json,
        } => solve_one(day, input.as_deref(), &input_dir, part, json),
        Commands::All { input_dir, json } => solve_all(&input_dir, json),
        Commands::Days { input_dir } => list_days(&input_dir),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        let fix = e
            .downcast_ref::<AocError>()
            .and_then(FixSuggestion::fix_suggestion);
        if let Some(suggestion) = fix {
            eprintln!("  {} {}", "Fix:".yellow(), suggestion);
        }
        std::process::exit(1);
    }
}

fn solve_one(
    day_no: u8,
    input: Option<&Path>,
    input_dir: &Path,
    part: Option<u8>,
    json: bool,
) -> anyhow::Result<()> {
    if let Some(p) = part {
        if p != 1 && p != 2 {
            anyhow::bail!("part must be 1 or 2, got {p}");
        }
    }

    let day = registry::find(day_no).ok_or(AocError::UnknownDay { day: day_no })?;
    let data = input::load(day.number, input_dir, input)?;

    let started = Instant::now();
    let answers = (day.solve)(&data).with_context(|| format!("day {}", day.number))?;
    tracing::info!(
        day = day.number,
        elapsed = ?started.elapsed(),
        "solved"
    );

    let shown = match part {
        Some(p) => {
            let answer = answers.part(p).ok_or(AocError::MissingPart {
                day: day.number,
                part: p,
            })?;
            match p {
                1 => DayAnswers::part1_only(answer),
                _ => DayAnswers::part2_only(answer),
            }
        }
        None => answers,
    };

    if json {
        println!("{}", day_json(day, &shown)?);
    } else {
        print_day(day, &shown, part.is_some());
    }
    Ok(())
}

fn solve_all(input_dir: &Path, json: bool) -> anyhow::Result<()> {
    let inputs = input::discover(input_dir);
    let started = Instant::now();
    let mut report = serde_json::Map::new();
    let mut solved = 0;

    for day in registry::DAYS {
        let Some(path) = inputs.get(&day.number) else {
            if !json {
                println!(
                    "{} Day {:02}: {}",
                    "·".dimmed(),
                    day.number,
                    "no input".dimmed()
                );
            }
            continue;
        };

        let data = input::load(day.number, input_dir, Some(path.as_path()))?;
        let answers = (day.solve)(&data).with_context(|| format!("day {}", day.number))?;
        solved += 1;

        if json {
            report.insert(format!("day{:02}", day.number), day_json(day, &answers)?);
        } else {
            print_day(day, &answers, false);
        }
    }

    if json {
        println!("{}", serde_json::Value::Object(report));
    } else {
        println!(
            "{} {} day(s) solved in {:.1?}",
            "✓".green(),
            solved,
            started.elapsed()
        );
    }
    Ok(())
}

fn list_days(input_dir: &Path) -> anyhow::Result<()> {
    let inputs = input::discover(input_dir);
    println!("{}", "Implemented days:".bold());
    for day in registry::DAYS {
        let marker = if inputs.contains_key(&day.number) {
            "✓".green()
        } else {
            "·".dimmed()
        };
        println!("  {} {:>2}  {}", marker, day.number, day.title);
    }
    Ok(())
}

fn print_day(day: &registry::Day, answers: &DayAnswers, filtered: bool) {
    println!("{} Day {:02}: {}", "→".cyan(), day.number, day.title.bold());
    for (no, answer) in [(1u8, answers.part1.as_deref()), (2, answers.part2.as_deref())] {
        match answer {
            Some(a) => println!("  part {no}: {}", a.green().bold()),
            None if !filtered => println!("  part {no}: {}", "(not solved)".dimmed()),
            None => {}
        }
    }
}

fn day_json(day: &registry::Day, answers: &DayAnswers) -> anyhow::Result<serde_json::Value> {
    let mut value = serde_json::to_value(answers)?;
    if let serde_json::Value::Object(map) = &mut value {
        map.insert("day".to_string(), day.number.into());
        map.insert("title".to_string(), day.title.into());
    }
    Ok(value)
}
