//! Display functions for command results

use super::formatters::{format_grid, format_placements, format_words};
use crate::commands::{CheckResult, SolveReport};
use crate::core::Puzzle;
use colored::Colorize;

/// Print the grid and the words to find
pub fn print_puzzle(puzzle: &Puzzle) {
    println!("\n{}", format_grid(puzzle.grid()));
    println!("the words to be found: ");
    println!("{}\n", format_words(puzzle.words()));
}

/// Print the answer key
pub fn print_solve_report(report: &SolveReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {}",
        "ANSWER KEY".bright_cyan().bold(),
        format!("({} x {} grid)", report.rows, report.cols).bright_black()
    );
    println!("{}", "═".repeat(60).cyan());

    let width = report
        .solutions
        .iter()
        .map(|s| s.word.chars().count())
        .max()
        .unwrap_or(0);

    for solution in &report.solutions {
        let word = format!("{:<width$}", solution.word);
        if solution.is_found() {
            println!(
                "  {}  {}",
                word.bright_white().bold(),
                format_placements(&solution.placements).green()
            );
        } else {
            println!("  {}  {}", word.bright_white().bold(), "not found".red());
        }
    }

    println!();
    let missing = report.missing();
    if missing == 0 {
        println!(
            "{}",
            format!("✅ All {} words located", report.solutions.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ {missing} of {} words not in the grid", report.solutions.len())
                .red()
                .bold()
        );
    }
}

/// Print the score for a single guess
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Checking: {} {} {}",
        result.word.bright_yellow().bold(),
        result.direction,
        result.index
    );
    println!("{}", "─".repeat(60).cyan());

    println!(
        "  {} {}:      {}",
        result.direction.axis(),
        result.index,
        result.line
    );
    println!("  Words left: {}", result.remaining);
    println!("  Multiplier: x{}", result.direction.factor());

    println!();
    if result.points > 0 {
        println!(
            "{}",
            format!("✅ Correct guess: {} points", result.points)
                .green()
                .bold()
        );
    } else {
        println!("{}", "❌ Incorrect guess: 0 points".red().bold());
    }
}
