//! # Rumus CLI
//!
//! Terminal shell over `rumus_core`: browse the formula catalog, or pick a
//! formula and type its inputs to get a formatted result.
//!
//! ```bash
//! rumus --list
//! rumus --show force
//! rumus --formula linear_motion
//! RUST_LOG=rumus_core=debug rumus --formula force --settings settings.json
//! ```

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rumus_core::calculator::{CalculationRequest, Calculator};
use rumus_core::catalog::CATALOG;
use rumus_core::errors::CalcError;
use rumus_core::formulas::FormulaSpec;
use rumus_core::settings::Settings;

#[derive(Debug, Parser)]
#[command(name = "rumus", version, about = "Junior-high physics formulas and calculators")]
struct Cli {
    /// List every formula, grouped by category
    #[arg(long)]
    list: bool,

    /// Show the full catalog entry for a formula id
    #[arg(long, value_name = "ID")]
    show: Option<String>,

    /// Run the calculator for a formula id
    #[arg(long, value_name = "ID")]
    formula: Option<String>,

    /// JSON settings file (formatting, gravity, cache)
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Also print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let settings = match load_settings(cli.settings.as_ref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };
    tracing::debug!(?settings, "Settings loaded");

    if cli.list {
        print_catalog();
        return;
    }

    if let Some(id) = cli.show.as_deref() {
        match CATALOG.get_by_id(id) {
            Ok(spec) => print_spec(spec),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let calculator = Calculator::new(settings);
    let formula_id = match cli.formula {
        Some(id) => id,
        None => {
            print_catalog();
            prompt("\nFormula id: ").unwrap_or_default()
        }
    };

    if let Err(e) = run_calculator(&calculator, &formula_id, cli.json) {
        eprintln!("Error: {}", e);
        if cli.json {
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
        std::process::exit(1);
    }
}

fn load_settings(path: Option<&PathBuf>) -> Result<Settings, CalcError> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };
    let json = std::fs::read_to_string(path)
        .map_err(|e| CalcError::settings(format!("cannot read '{}': {}", path.display(), e)))?;
    Settings::from_json(&json)
}

fn run_calculator(calculator: &Calculator, formula_id: &str, json: bool) -> Result<(), CalcError> {
    let formula = CATALOG.formula(formula_id)?;
    let spec = formula.spec();

    println!();
    println!("{}  ({})", spec.title, spec.formula);
    println!("═══════════════════════════════════════");

    let mut request = CalculationRequest::new(formula_id);
    for field in formula.input_fields() {
        let hint = if field.optional { ", blank for default" } else { "" };
        let label = format!("{} [{}{}]: ", field.label, field.unit, hint);
        let text = prompt(&label).unwrap_or_default();
        request = request.with_input(field.name, text);
    }

    let result = calculator.calculate(&request)?;

    println!();
    println!("Result: {}", calculator.display(&result));

    if json {
        println!();
        println!("JSON Output:");
        if let Ok(out) = serde_json::to_string_pretty(&result) {
            println!("{}", out);
        }
    }
    Ok(())
}

/// Read one line from stdin; `None` on I/O failure or EOF
fn prompt(message: &str) -> Option<String> {
    print!("{}", message);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim_end_matches(['\r', '\n']).to_string()),
    }
}

fn print_catalog() {
    println!("Rumus - Physics Formulas");
    println!("========================");
    for (category, formulas) in CATALOG.category_index() {
        println!();
        println!("{}:", category);
        for formula in formulas {
            let spec = formula.spec();
            println!(
                "  {} {:<18} {:<20} {}",
                spec.icon.unwrap_or(" "),
                spec.id,
                spec.formula,
                spec.difficulty.map(|d| d.display_name()).unwrap_or("")
            );
        }
    }
}

fn print_spec(spec: &FormulaSpec) {
    println!("{} {}", spec.icon.unwrap_or(""), spec.title);
    println!("Category: {}", spec.category);
    println!();
    println!("  {}", spec.formula);
    println!("  {}", spec.formula_display);
    println!();
    println!("{}", spec.description);
    println!();
    println!("Variables:");
    for var in spec.variables {
        println!("  {:<4} {:<18} {}", var.symbol, var.name, var.unit);
    }
    println!();
    println!("Example:");
    for line in spec.example.lines() {
        println!("  {}", line);
    }
}
