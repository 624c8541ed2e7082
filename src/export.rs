//! CSV export of solution collections and trace step streams.

use std::io;
use std::path::Path;

use serde::Serialize;

use crate::board::format_coordinates;
use crate::error::{Error, Result};
use crate::trace::TraceEvent;

const SOLUTION_HEADER: [&str; 3] = ["solution", "columns", "coordinates"];
const STEP_HEADER: [&str; 6] = ["step", "kind", "row", "candidate", "state", "label"];

/// Label of the empty board shown before any step.
pub const INITIAL_LABEL: &str = "step_000_initial";

#[derive(Serialize)]
struct SolutionRecord {
    solution: usize,
    columns: String,
    coordinates: String,
}

#[derive(Serialize)]
struct StepRecord {
    step: usize,
    kind: &'static str,
    row: Option<usize>,
    candidate: Option<usize>,
    state: String,
    label: String,
}

/// `[1, 3, 0, 2]`
pub fn format_columns(state: &[usize]) -> String {
    format!("{:?}", state)
}

/// Stable per-step name, e.g. `step_004_trying_row_1_col_3` or
/// `step_007_backtrack_0_3`.
pub fn step_label(step: usize, event: &TraceEvent) -> String {
    let joined = event
        .state()
        .iter()
        .map(|col| col.to_string())
        .collect::<Vec<_>>()
        .join("_");
    match event {
        TraceEvent::Trying { state, candidate } => {
            format!("step_{:03}_trying_row_{}_col_{}", step, state.len(), candidate)
        }
        TraceEvent::Backtrack { .. } => format!("step_{:03}_backtrack_{}", step, joined),
        TraceEvent::Solution { .. } => format!("step_{:03}_solution_{}", step, joined),
    }
}

fn writer<W: io::Write>(inner: W) -> csv::Writer<W> {
    csv::WriterBuilder::new().has_headers(false).from_writer(inner)
}

/// Writes one row per solution, numbered from 1. The header is written even
/// when there are no solutions.
pub fn write_solutions_csv<W: io::Write>(inner: W, solutions: &[Vec<usize>]) -> Result<()> {
    let mut wtr = writer(inner);
    wtr.write_record(SOLUTION_HEADER)?;
    for (i, solution) in solutions.iter().enumerate() {
        wtr.serialize(SolutionRecord {
            solution: i + 1,
            columns: format_columns(solution),
            coordinates: format_coordinates(solution),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes one row per event; the first event is numbered `first_step`.
pub fn write_trace_csv<'a, W, I>(inner: W, first_step: usize, events: I) -> Result<()>
where
    W: io::Write,
    I: IntoIterator<Item = &'a TraceEvent>,
{
    let mut wtr = writer(inner);
    wtr.write_record(STEP_HEADER)?;
    for (offset, event) in events.into_iter().enumerate() {
        let step = first_step + offset;
        let row = match event {
            TraceEvent::Trying { state, .. } => Some(state.len()),
            _ => None,
        };
        wtr.serialize(StepRecord {
            step,
            kind: event.kind().as_str(),
            row,
            candidate: event.candidate(),
            state: format_columns(event.state()),
            label: step_label(step, event),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn save_solutions_csv(path: impl AsRef<Path>, solutions: &[Vec<usize>]) -> Result<()> {
    let path = path.as_ref();
    write_solutions_csv(std::fs::File::create(path)?, solutions)?;
    log::info!("wrote {} solutions to {}", solutions.len(), path.display());
    Ok(())
}

pub fn save_trace_csv<'a, I>(path: impl AsRef<Path>, first_step: usize, events: I) -> Result<()>
where
    I: IntoIterator<Item = &'a TraceEvent>,
{
    let path = path.as_ref();
    write_trace_csv(std::fs::File::create(path)?, first_step, events)?;
    log::info!("wrote trace to {}", path.display());
    Ok(())
}

/// In-memory solutions CSV, for targets without a filesystem.
pub fn solutions_csv_string(solutions: &[Vec<usize>]) -> Result<String> {
    let mut buf = Vec::new();
    write_solutions_csv(&mut buf, solutions)?;
    String::from_utf8(buf).map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// In-memory trace CSV, for targets without a filesystem.
pub fn trace_csv_string<'a, I>(first_step: usize, events: I) -> Result<String>
where
    I: IntoIterator<Item = &'a TraceEvent>,
{
    let mut buf = Vec::new();
    write_trace_csv(&mut buf, first_step, events)?;
    String::from_utf8(buf).map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}
