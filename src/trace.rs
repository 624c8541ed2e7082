use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Placement;

/// Tag attached to each presented frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    /// Empty board shown before the first event.
    Initial,
    Trying,
    Backtrack,
    Solution,
}

impl StepKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StepKind::Initial => "initial",
            StepKind::Trying => "trying",
            StepKind::Backtrack => "backtrack",
            StepKind::Solution => "solution",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded search step. Every variant owns its own snapshot of the
/// placement, taken when the step happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TraceEvent {
    /// About to place `candidate` in row `state.len()`.
    Trying { state: Placement, candidate: usize },
    /// The last queen was removed; `state` is what remains.
    Backtrack { state: Placement },
    Solution { state: Placement },
}

impl TraceEvent {
    pub fn kind(&self) -> StepKind {
        match self {
            TraceEvent::Trying { .. } => StepKind::Trying,
            TraceEvent::Backtrack { .. } => StepKind::Backtrack,
            TraceEvent::Solution { .. } => StepKind::Solution,
        }
    }

    pub fn state(&self) -> &[usize] {
        match self {
            TraceEvent::Trying { state, .. }
            | TraceEvent::Backtrack { state }
            | TraceEvent::Solution { state } => state,
        }
    }

    pub fn candidate(&self) -> Option<usize> {
        match self {
            TraceEvent::Trying { candidate, .. } => Some(*candidate),
            _ => None,
        }
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::Trying { state, candidate } => {
                write!(f, "trying row {} col {} from {:?}", state.len(), candidate, state)
            }
            TraceEvent::Backtrack { state } => write!(f, "backtrack to {:?}", state),
            TraceEvent::Solution { state } => write!(f, "solution {:?}", state),
        }
    }
}
