//! Command-line front end: prints every solution, the first-solution
//! trace, or a bounded set of solutions.
//!
//! Run with: `cargo run --bin nqueens-cli -- 8`

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use nqueens_trace::board::{format_coordinates, parse_positive, render_board};
use nqueens_trace::export::{format_columns, save_solutions_csv, save_trace_csv};
use nqueens_trace::{
    search_for_first_solution, search_until_k_solutions, solve, BoardSize, Error, Placement,
    TraceEvent,
};

#[derive(Parser, Debug)]
#[command(name = "nqueens-cli")]
#[command(about = "Place N non-attacking queens by backtracking")]
struct Args {
    /// Board size (NxN); asked for on stdin when omitted
    n: Option<String>,

    /// Print the trial/backtrack trace leading to the first solution
    #[arg(short, long, conflicts_with = "max_solutions")]
    first: bool,

    /// Stop after this many solutions
    #[arg(short, long)]
    max_solutions: Option<String>,

    /// Skip the text board for each solution
    #[arg(long)]
    no_boards: bool,

    /// Write the solutions to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the trace steps to a CSV file
    #[arg(long)]
    trace_csv: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", error_message(&err));
            ExitCode::FAILURE
        }
    }
}

fn error_message(err: &Error) -> String {
    match err {
        Error::Csv(_) | Error::Io(_) => format!("Could not write output: {}", err),
        _ => format!("Invalid input: {}", err),
    }
}

fn run(args: &Args) -> nqueens_trace::Result<()> {
    let raw = match &args.n {
        Some(raw) => raw.clone(),
        None => prompt("Board size (e.g. 4 or 8): ")?,
    };
    let size: BoardSize = raw.parse()?;
    let n = size.get();
    let limit = args.max_solutions.as_deref().map(parse_positive).transpose()?;

    println!("Empty {} board:", size);
    println!("{}", render_board(&[], n));

    let (solutions, trace): (Vec<Placement>, Vec<TraceEvent>) = if args.first {
        let trace = search_for_first_solution(n);
        let solutions = trace
            .last()
            .map(|event| vec![event.state().to_vec()])
            .unwrap_or_default();
        print_trace(&trace);
        (solutions, trace)
    } else if let Some(k) = limit {
        let result = search_until_k_solutions(n, k);
        (result.solutions, result.trace)
    } else if args.trace_csv.is_some() {
        let result = search_until_k_solutions(n, usize::MAX);
        (result.solutions, result.trace)
    } else {
        (solve(n), Vec::new())
    };

    print!("{}", solution_report(&solutions, n, !args.no_boards));

    if let Some(path) = &args.csv {
        save_solutions_csv(path, &solutions)?;
        println!("Solutions written to {}", path.display());
    }
    if let Some(path) = &args.trace_csv {
        save_trace_csv(path, 1, &trace)?;
        println!("{} steps written to {}", trace.len(), path.display());
    }
    Ok(())
}

fn solution_report(solutions: &[Placement], n: usize, boards: bool) -> String {
    let mut out = format!("\n=> Total solutions found: {}\n", solutions.len());
    for (index, solution) in solutions.iter().enumerate() {
        out.push_str(&format!(
            "\n--- Solution {}: {} ---\n",
            index + 1,
            format_columns(solution)
        ));
        if boards {
            out.push_str(&render_board(solution, n));
            out.push('\n');
        }
        out.push_str(&format!(
            "Queen coordinates (row, col): {}\n",
            format_coordinates(solution)
        ));
    }
    out
}

fn print_trace(trace: &[TraceEvent]) {
    if trace.is_empty() {
        println!("No solution exists for this board.");
        return;
    }
    for (step, event) in trace.iter().enumerate() {
        println!("{:>5}: {}", step + 1, event);
    }
}

fn prompt(message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from(["nqueens-cli", "6", "--max-solutions", "2", "--no-boards"])
            .unwrap();
        assert_eq!(args.n.as_deref(), Some("6"));
        assert_eq!(args.max_solutions.as_deref(), Some("2"));
        assert!(args.no_boards);
        assert!(!args.first);
    }

    #[test]
    fn test_first_conflicts_with_max_solutions() {
        assert!(Args::try_parse_from(["nqueens-cli", "4", "--first", "--max-solutions", "1"]).is_err());
    }

    #[test]
    fn test_report_lists_every_solution() {
        let report = solution_report(&solve(4), 4, true);
        assert!(report.contains("=> Total solutions found: 2"));
        assert!(report.contains("--- Solution 1: [1, 3, 0, 2] ---\n- Q - -\n- - - Q\nQ - - -\n- - Q -\n"));
        assert!(report.contains("Queen coordinates (row, col): (0, 2), (1, 0), (2, 3), (3, 1)"));
    }

    #[test]
    fn test_report_without_boards_or_solutions() {
        let report = solution_report(&solve(3), 3, false);
        assert_eq!(report, "\n=> Total solutions found: 0\n");
        let report = solution_report(&solve(4), 4, false);
        assert!(!report.contains("- Q"));
    }

    #[test]
    fn test_error_messages_separate_input_from_output() {
        assert!(error_message(&Error::NonPositive(0)).starts_with("Invalid input:"));
        assert!(error_message(&Error::NotANumber("x".into())).starts_with("Invalid input:"));
        let io = Error::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "missing dir"));
        assert!(error_message(&io).starts_with("Could not write output:"));
    }

    #[test]
    fn test_run_rejects_bad_board_size() {
        let args = Args::try_parse_from(["nqueens-cli", "0"]).unwrap();
        assert!(matches!(run(&args), Err(Error::NonPositive(0))));
        let args = Args::try_parse_from(["nqueens-cli", "abc"]).unwrap();
        assert!(matches!(run(&args), Err(Error::NotANumber(_))));
    }
}
