use colored::Colorize;
use std::process::ExitCode;

fn main() -> ExitCode {
    match filter_analyzer::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "Error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
