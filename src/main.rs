use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use deskcalc::calculator::{EvaluationService, Locale};
use deskcalc::config::Config;
use deskcalc::keypad::Keypad;

#[derive(Parser)]
#[command(name = "deskcalc")]
#[command(about = "A keypad desk calculator", version)]
struct Cli {
    /// Path to the config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Language for error messages (overrides the config file)
    #[arg(long, global = true, value_enum)]
    locale: Option<Locale>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate a single expression and print the result
    Eval {
        /// Expression such as `12*3` or `-1.5/4`
        #[arg(allow_hyphen_values = true)]
        expression: String,

        /// Print the full evaluation record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Type keys line by line; `=` evaluates and `C` clears
    Keypad,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let locale = cli.locale.unwrap_or(config.locale);
    let service = EvaluationService::with_locale(locale);

    match cli.command.unwrap_or(Command::Keypad) {
        Command::Eval { expression, json } => run_eval(service, &expression, json),
        Command::Keypad => run_keypad(service),
    }
}

fn run_eval(service: EvaluationService, expression: &str, json: bool) -> Result<()> {
    if json {
        let evaluation = service.evaluate_detailed(expression);
        let out = serde_json::to_string_pretty(&evaluation)
            .context("Failed to serialize evaluation")?;
        println!("{out}");
    } else {
        println!("{}", service.evaluate(expression));
    }
    Ok(())
}

fn run_keypad(service: EvaluationService) -> Result<()> {
    let mut keypad = Keypad::new(service);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{}", Keypad::render_layout())?;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        let ignored = keypad.press_all(&line);
        if !ignored.is_empty() {
            tracing::warn!(?ignored, "ignoring characters without a key");
        }
        writeln!(stdout, "{}", keypad.display())?;
        stdout.flush()?;
    }

    Ok(())
}
