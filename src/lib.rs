//! N-Queens placement search with step traces.
//!
//! - [`candidates`] computes the safe columns for the next row.
//! - [`search`] drives the backtracking: every solution, the trace up to the
//!   first solution, or a bounded number of solutions with their trace.
//! - [`playback`] and [`export`] consume traces for the viewer and for CSV.

pub mod board;
pub mod candidates;
pub mod error;
pub mod export;
pub mod playback;
pub mod search;
pub mod settings;
pub mod trace;

pub use board::{BoardSize, Placement};
pub use candidates::{candidates, CandidateSet};
pub use error::{Error, Result};
pub use playback::{Frame, Playback};
pub use search::{search_for_first_solution, search_until_k_solutions, solve, BoundedSearch, Stepper};
pub use settings::{SearchMode, Settings};
pub use trace::{StepKind, TraceEvent};
