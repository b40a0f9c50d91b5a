//! deskcalc - CLI Entry Point
//!
//! Commands:
//! - `deskcalc eval <expr>` - Evaluate an equation and print the result
//! - `deskcalc tui` - Interactive calculator (default)
//! - `deskcalc test` - Built-in self-test

use clap::{Parser, Subcommand};
use deskcalc::Config;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "deskcalc")]
#[command(author = "Yigit")]
#[command(version = "0.1.0")]
#[command(about = "A desktop calculator with binary and fraction conversions")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Number of history entries shown
    #[arg(long, global = true)]
    history_window: Option<usize>,

    /// Milliseconds before convert mode reverts
    #[arg(long, global = true)]
    convert_timeout_ms: Option<u64>,

    /// Write logs to this file (the TUI logs nowhere otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an equation
    Eval {
        /// The equation, e.g. "1/3+2"
        expression: String,
        /// Also show the result in binary
        #[arg(short, long)]
        binary: bool,
        /// Also show the result as a fraction
        #[arg(short, long)]
        fraction: bool,
        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
    },
    /// Interactive terminal calculator
    Tui,
    /// Run the built-in self-test
    Test,
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let interactive = matches!(cli.command, None | Some(Commands::Tui));
    if let Err(e) = setup_logging(cli.verbose, cli.log_file.as_deref(), interactive) {
        eprintln!("❌ Failed to set up logging: {}", e);
        std::process::exit(1);
    }

    match cli.command {
        Some(Commands::Eval { expression, binary, fraction, json }) => {
            eval_expression(&config, &expression, binary, fraction, json);
        }
        Some(Commands::Test) => {
            run_self_test();
        }
        Some(Commands::Tui) | None => {
            run_tui(&config);
        }
    }
}

/// Merge the config file (if any) with command-line overrides.
fn load_config(cli: &Cli) -> Result<Config, deskcalc::ConfigError> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(window) = cli.history_window {
        config.history_window = window;
    }
    if let Some(timeout) = cli.convert_timeout_ms {
        config.convert_timeout_ms = timeout;
    }
    config.validate()?;
    Ok(config)
}

/// Log to stderr for one-shot commands; only to a file under the TUI.
fn setup_logging(
    verbose: bool,
    log_file: Option<&std::path::Path>,
    interactive: bool,
) -> std::io::Result<()> {
    use std::sync::Arc;
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("deskcalc=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("deskcalc=warn"))
    };

    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Arc::new(file))
                .with_target(false)
                .with_ansi(false)
                .init();
        }
        // Anything written to stderr would tear the TUI
        None if interactive => {}
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
    }

    Ok(())
}

/// Report printed by `eval --json`.
#[derive(Serialize)]
struct EvalReport {
    equation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    binary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fraction: Option<String>,
}

fn eval_expression(config: &Config, expression: &str, binary: bool, fraction: bool, json: bool) {
    use deskcalc::Engine;

    let mut engine = Engine::with_config(config);
    let rejected: Vec<char> = expression
        .chars()
        .filter(|c| !c.is_whitespace())
        .filter(|&c| !engine.append_token(c))
        .collect();
    if !rejected.is_empty() {
        tracing::warn!(?rejected, "ignored characters");
    }

    let mut report = EvalReport {
        equation: engine.display_equation(),
        result: None,
        value: None,
        error: None,
        binary: None,
        fraction: None,
    };

    match engine.evaluate() {
        Ok(Some(eval)) => {
            report.result = Some(eval.formatted_result);
            report.value = Some(eval.value);
            if binary {
                report.binary = Some(engine.convert_to_binary().to_string());
            }
            if fraction {
                report.fraction = Some(engine.convert_to_fraction().to_string());
            }
        }
        Ok(None) => report.error = Some("EMPTY EQUATION".into()),
        Err(e) => report.error = Some(e.to_string()),
    }

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("❌ Failed to serialize report: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        match (&report.result, &report.error) {
            (Some(result), _) => println!("{} = {}", report.equation, result),
            (None, Some(error)) => println!("{}", error),
            (None, None) => {}
        }
        if let Some(bin) = &report.binary {
            println!("binary:   {}", bin);
        }
        if let Some(frac) = &report.fraction {
            println!("fraction: {}", frac);
        }
    }

    if report.error.is_some() {
        std::process::exit(1);
    }
}

#[cfg(feature = "tui")]
fn run_tui(config: &Config) {
    if let Err(e) = deskcalc::run_calculator(config) {
        eprintln!("❌ Calculator error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "tui"))]
fn run_tui(_config: &Config) {
    println!("deskcalc v0.1.0");
    println!("Built without the terminal front-end. Use `deskcalc eval <expr>`.");
}

fn run_self_test() {
    use deskcalc::{format_number, to_binary, to_fraction, CalcError, Engine};

    println!("━━━ deskcalc Self-Test ━━━");
    println!();

    let mut passed = 0;
    let mut failed = 0;

    let mut check = |name: &str, ok: bool, detail: String| {
        print!("{}... ", name);
        if ok {
            println!("✓");
            passed += 1;
        } else {
            println!("✗ ({})", detail);
            failed += 1;
        }
    };

    let evaluate = |equation: &str| {
        let mut engine = Engine::new();
        for c in equation.chars() {
            engine.append_token(c);
        }
        engine.evaluate().map(|e| e.map(|e| e.formatted_result))
    };

    let got = evaluate("2+3*4");
    check("Operator precedence", got == Ok(Some("14".into())), format!("{:?}", got));

    let got = evaluate("5/0");
    check("Division by zero", got == Err(CalcError::DivisionByZero), format!("{:?}", got));

    let got = evaluate("2++2");
    check("Operator sequence", got == Err(CalcError::InvalidOperatorSequence), format!("{:?}", got));

    let got = format_number(1.0 / 3.0);
    check("Rounded display", got == "0.333", got);

    let got = to_binary(2.5);
    check("Binary conversion", got == Ok("10.1".into()), format!("{:?}", got));

    let got = to_fraction(1.0 / 3.0);
    check("Repeating fraction", got == Ok("1/3".into()), format!("{:?}", got));

    println!();
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Results: {} passed, {} failed", passed, failed);

    if failed == 0 {
        println!("✓ All tests passed!");
    } else {
        std::process::exit(1);
    }
}
