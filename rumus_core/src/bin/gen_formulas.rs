//! Regenerate the formula reference (`rumus_core/FORMULAS.md`) from the registry.
//!
//! ```bash
//! cargo run --bin gen-formulas            # rewrite the file
//! cargo run --bin gen-formulas -- --stdout  # print instead of writing
//! cargo run --bin gen-formulas -- --check   # exit 1 if the file is stale
//! ```
//!
//! Paths are relative to the workspace root.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use rumus_core::formulas::generate_formulas_markdown;

const REFERENCE_PATH: &str = "rumus_core/FORMULAS.md";

#[derive(Debug, PartialEq, Eq)]
enum Mode {
    Write,
    Stdout,
    Check,
}

fn parse_mode(args: impl IntoIterator<Item = String>) -> Result<Mode, String> {
    let mut mode = Mode::Write;
    for arg in args {
        mode = match arg.as_str() {
            "--stdout" => Mode::Stdout,
            "--check" => Mode::Check,
            other => {
                return Err(format!("unknown argument '{other}' (expected --stdout or --check)"))
            }
        };
    }
    Ok(mode)
}

fn main() -> ExitCode {
    let mode = match parse_mode(std::env::args().skip(1)) {
        Ok(mode) => mode,
        Err(msg) => {
            eprintln!("gen-formulas: {msg}");
            return ExitCode::from(2);
        }
    };

    let reference = generate_formulas_markdown();
    let path = Path::new(REFERENCE_PATH);

    match mode {
        Mode::Stdout => {
            print!("{reference}");
            ExitCode::SUCCESS
        }
        Mode::Check => match fs::read_to_string(path) {
            Ok(current) if current == reference => {
                println!("{} is up to date", path.display());
                ExitCode::SUCCESS
            }
            Ok(_) => {
                eprintln!("{} is stale; run gen-formulas to refresh it", path.display());
                ExitCode::FAILURE
            }
            Err(e) => {
                eprintln!("cannot read {}: {e}", path.display());
                ExitCode::FAILURE
            }
        },
        Mode::Write => match fs::write(path, &reference) {
            Ok(()) => {
                let bytes = reference.len();
                println!("Wrote formula reference ({bytes} bytes) to {}", path.display());
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("cannot write {}: {e}", path.display());
                ExitCode::FAILURE
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!(parse_mode(args(&[])), Ok(Mode::Write));
        assert_eq!(parse_mode(args(&["--stdout"])), Ok(Mode::Stdout));
        assert_eq!(parse_mode(args(&["--check"])), Ok(Mode::Check));
        assert!(parse_mode(args(&["--force"])).unwrap_err().contains("--force"));
    }

    #[test]
    fn test_reference_is_deterministic() {
        assert_eq!(generate_formulas_markdown(), generate_formulas_markdown());
    }
}
