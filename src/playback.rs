use std::collections::VecDeque;

use crate::board::Placement;
use crate::search::Stepper;
use crate::trace::{StepKind, TraceEvent};

/// What a viewer shows for the most recent step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub state: Placement,
    pub kind: StepKind,
    /// Column being tried in row `state.len()`, for trying frames only.
    pub candidate: Option<usize>,
}

impl Frame {
    fn initial() -> Self {
        Self {
            state: Vec::new(),
            kind: StepKind::Initial,
            candidate: None,
        }
    }
}

/// Pulls trace events from a [`Stepper`] one at a time and keeps the
/// current frame plus a bounded history of past events.
#[derive(Debug)]
pub struct Playback {
    stepper: Stepper,
    frame: Frame,
    history: VecDeque<TraceEvent>,
    history_limit: usize,
    dropped: usize,
}

impl Playback {
    pub const DEFAULT_HISTORY_LIMIT: usize = 10_000;

    pub fn new(stepper: Stepper) -> Self {
        Self {
            stepper,
            frame: Frame::initial(),
            history: VecDeque::new(),
            history_limit: Self::DEFAULT_HISTORY_LIMIT,
            dropped: 0,
        }
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit.max(1);
        self
    }

    /// Advances one event. `None` once the search is exhausted or has hit
    /// its solution limit; the last frame stays in place.
    pub fn step(&mut self) -> Option<StepKind> {
        let event = self.stepper.next()?;
        let kind = event.kind();
        self.frame = Frame {
            state: event.state().to_vec(),
            kind,
            candidate: event.candidate(),
        };
        self.history.push_back(event);
        if self.history.len() > self.history_limit {
            self.history.pop_front();
            self.dropped += 1;
        }
        Some(kind)
    }

    /// Steps until a solution appears. Returns false if the search ran out
    /// first.
    pub fn run_until_solution(&mut self) -> bool {
        while let Some(kind) = self.step() {
            if kind == StepKind::Solution {
                return true;
            }
        }
        false
    }

    /// Takes up to `max_steps` steps and returns how many were solutions.
    pub fn run_for(&mut self, max_steps: usize) -> usize {
        let mut found = 0;
        for _ in 0..max_steps {
            match self.step() {
                Some(StepKind::Solution) => found += 1,
                Some(_) => {}
                None => break,
            }
        }
        found
    }

    pub fn current(&self) -> &Frame {
        &self.frame
    }

    pub fn is_finished(&self) -> bool {
        self.stepper.is_finished()
    }

    pub fn board_size(&self) -> usize {
        self.stepper.board_size()
    }

    pub fn solutions(&self) -> &[Placement] {
        self.stepper.solutions()
    }

    /// Retained events, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &TraceEvent> + '_ {
        self.history.iter()
    }

    /// 1-based step number of the oldest retained event.
    pub fn first_retained_step(&self) -> usize {
        self.dropped + 1
    }

    pub fn steps_taken(&self) -> usize {
        self.dropped + self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::search_for_first_solution;

    #[test]
    fn test_starts_on_initial_frame() {
        let playback = Playback::new(Stepper::first_solution(4));
        assert_eq!(playback.current().kind, StepKind::Initial);
        assert!(playback.current().state.is_empty());
        assert_eq!(playback.current().candidate, None);
        assert_eq!(playback.steps_taken(), 0);
    }

    #[test]
    fn test_step_updates_frame() {
        let mut playback = Playback::new(Stepper::first_solution(4));
        assert_eq!(playback.step(), Some(StepKind::Trying));
        assert_eq!(
            playback.current(),
            &Frame {
                state: vec![],
                kind: StepKind::Trying,
                candidate: Some(0)
            }
        );
    }

    #[test]
    fn test_run_until_solution_replays_first_trace() {
        let mut playback = Playback::new(Stepper::first_solution(5));
        assert!(playback.run_until_solution());
        assert_eq!(playback.current().kind, StepKind::Solution);
        let replayed: Vec<_> = playback.history().cloned().collect();
        assert_eq!(replayed, search_for_first_solution(5));
        assert_eq!(playback.step(), None);
        assert!(playback.is_finished());
    }

    #[test]
    fn test_no_solution_board() {
        let mut playback = Playback::new(Stepper::first_solution(3));
        assert!(!playback.run_until_solution());
        assert!(playback.solutions().is_empty());
        assert!(playback.is_finished());
    }

    #[test]
    fn test_run_for_counts_solutions() {
        let mut playback = Playback::new(Stepper::exhaustive(6));
        assert_eq!(playback.run_for(usize::MAX), 4);
        assert_eq!(playback.solutions().len(), 4);
    }

    #[test]
    fn test_history_limit() {
        let mut playback = Playback::new(Stepper::exhaustive(5)).with_history_limit(10);
        playback.run_for(25);
        assert_eq!(playback.history().count(), 10);
        assert_eq!(playback.steps_taken(), 25);
        assert_eq!(playback.first_retained_step(), 16);
    }
}
