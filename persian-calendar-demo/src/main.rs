use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Parser;
use persian_calendar::{
    CalendarConfig, CalendarWidget, NoopReporter, SelectionMode, SelectionReporter,
};
use persian_calendar_math::{CalendarDate, CalendarType};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

mod reporter;
mod script;
mod view;

use reporter::JsonFileReporter;
use script::{Command, parse_line};

#[derive(Parser)]
#[command(name = "persian-calendar-demo")]
#[command(version, about = "Drive a Jalali/Gregorian calendar from the terminal", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Calendar type (jalali or gregorian), overrides the file
    #[arg(long = "calendar", value_parser = parse_calendar_type)]
    calendar_type: Option<CalendarType>,
    /// Selection mode (single or range), overrides the file
    #[arg(long = "selection", value_parser = parse_selection_mode)]
    selection_mode: Option<SelectionMode>,
    /// Disable dates before today
    #[arg(long)]
    disable_past: bool,
    /// Treat this ISO date (YYYY-MM-DD) as today
    #[arg(long)]
    today: Option<CalendarDate>,
    /// Write every selection to this JSON file
    #[arg(short, long)]
    store: Option<PathBuf>,
    /// Token sent with each save request, defaults to the configured one
    #[arg(long)]
    token: Option<String>,
    /// Commands to run instead of reading stdin, e.g. `next` `click 12`
    commands: Vec<String>,
}

fn parse_calendar_type(value: &str) -> Result<CalendarType, String> {
    CalendarType::from_name(value).ok_or_else(|| format!("unknown calendar type `{value}`"))
}

fn parse_selection_mode(value: &str) -> Result<SelectionMode, String> {
    SelectionMode::from_name(value).ok_or_else(|| format!("unknown selection mode `{value}`"))
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => CalendarConfig::load(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => CalendarConfig::default(),
    };
    let expected_token = config.security_token.clone();
    if let Some(calendar_type) = cli.calendar_type {
        config.calendar_type = calendar_type;
    }
    if let Some(selection_mode) = cli.selection_mode {
        config.selection_mode = selection_mode;
    }
    if cli.disable_past {
        config.disable_past_dates = true;
    }
    if let Some(token) = cli.token.clone() {
        config.security_token = token;
    }

    let (reporter, writer) = match cli.store.clone() {
        Some(path) => {
            let (reporter, writer) = JsonFileReporter::spawn(path, expected_token);
            (reporter as Arc<dyn SelectionReporter>, Some(writer))
        }
        None => (Arc::new(NoopReporter) as Arc<dyn SelectionReporter>, None),
    };
    let mut widget = match cli.today {
        Some(today) => CalendarWidget::with_today(config, reporter, today),
        None => CalendarWidget::new(config, reporter),
    };

    println!("{}", view::render_month(&widget.render()));
    if cli.commands.is_empty() {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
            if !apply(&mut widget, &line)? {
                break;
            }
        }
    } else {
        for line in &cli.commands {
            if !apply(&mut widget, line)? {
                break;
            }
        }
    }

    // Closes the store channel so the writer can finish.
    drop(widget);
    if let Some(writer) = writer {
        let stored = writer.await.context("selection writer panicked")?;
        info!("Stored {stored} selection(s)");
    }
    Ok(())
}

/// Runs one script line. Returns `false` once the script asks to quit.
fn apply(widget: &mut CalendarWidget, line: &str) -> Result<bool> {
    match parse_line(line)? {
        None => {}
        Some(Command::Quit) => return Ok(false),
        Some(Command::Show) => println!("{}", view::render_month(&widget.render())),
        Some(Command::Event(event)) => {
            if widget.handle(event) {
                println!("{}", view::render_month(&widget.render()));
            } else {
                println!("(ignored)");
            }
        }
    }
    Ok(true)
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(
            "error,persian_calendar=info,persian_calendar_demo=info",
        ) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}
