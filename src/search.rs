//! Depth-first backtracking over rows.
//!
//! [`solve`], [`search_for_first_solution`] and [`search_until_k_solutions`]
//! run to completion and hand back everything they recorded. [`Stepper`]
//! walks the same tree one event at a time with an explicit frame stack, so
//! a presentation layer can pace it without holding the whole trace.

use crate::board::Placement;
use crate::candidates::candidates;
use crate::trace::TraceEvent;

/// Solutions and trace of a bounded search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoundedSearch {
    pub solutions: Vec<Placement>,
    pub trace: Vec<TraceEvent>,
}

/// Every solution for an `n`x`n` board, in discovery order.
pub fn solve(n: usize) -> Vec<Placement> {
    let mut state = Vec::with_capacity(n);
    let mut solutions = Vec::new();
    search(&mut state, &mut solutions, n);
    log::debug!("{}-queens: {} solutions", n, solutions.len());
    solutions
}

fn search(state: &mut Placement, solutions: &mut Vec<Placement>, n: usize) {
    if state.len() == n {
        solutions.push(state.clone());
        return;
    }
    for candidate in candidates(state, n).iter() {
        state.push(candidate);
        search(state, solutions, n);
        state.pop();
    }
}

/// Trace of the search up to and including the first solution.
///
/// Empty when the board has no solution. No backtrack event is emitted when
/// unwinding leaves the board empty.
pub fn search_for_first_solution(n: usize) -> Vec<TraceEvent> {
    let mut state = Vec::with_capacity(n);
    let mut trace = Vec::new();
    if search_first(&mut state, &mut trace, n) {
        log::debug!("{}-queens: first solution after {} events", n, trace.len());
        trace
    } else {
        log::debug!("{}-queens: no solution", n);
        Vec::new()
    }
}

fn search_first(state: &mut Placement, trace: &mut Vec<TraceEvent>, n: usize) -> bool {
    if state.len() == n {
        trace.push(TraceEvent::Solution {
            state: state.clone(),
        });
        return true;
    }
    for candidate in candidates(state, n).iter() {
        trace.push(TraceEvent::Trying {
            state: state.clone(),
            candidate,
        });
        state.push(candidate);
        if search_first(state, trace, n) {
            return true;
        }
        state.pop();
        if !state.is_empty() {
            trace.push(TraceEvent::Backtrack {
                state: state.clone(),
            });
        }
    }
    false
}

/// Exhaustive search that stops everywhere once `k` solutions are found.
///
/// Every descent is preceded by a trying event and every unwind followed by
/// a backtrack event, including the unwind to the empty board. `k == 0`
/// records nothing.
pub fn search_until_k_solutions(n: usize, k: usize) -> BoundedSearch {
    let mut result = BoundedSearch::default();
    if k > 0 {
        let mut state = Vec::with_capacity(n);
        search_bounded(&mut state, &mut result, n, k);
    }
    log::debug!(
        "{}-queens: {} of at most {} solutions, {} events",
        n,
        result.solutions.len(),
        k,
        result.trace.len()
    );
    result
}

fn search_bounded(state: &mut Placement, out: &mut BoundedSearch, n: usize, k: usize) -> bool {
    if state.len() == n {
        out.solutions.push(state.clone());
        out.trace.push(TraceEvent::Solution {
            state: state.clone(),
        });
        return out.solutions.len() >= k;
    }
    for candidate in candidates(state, n).iter() {
        out.trace.push(TraceEvent::Trying {
            state: state.clone(),
            candidate,
        });
        state.push(candidate);
        if search_bounded(state, out, n, k) {
            return true;
        }
        state.pop();
        out.trace.push(TraceEvent::Backtrack {
            state: state.clone(),
        });
    }
    false
}

/// Open columns of one expanded row, consumed front to back.
#[derive(Debug)]
struct Frame {
    columns: std::vec::IntoIter<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Start,
    Expand,
    Descend(usize),
    Leaf,
    Done,
}

/// Lazy, explicit-stack version of the searches above.
///
/// Yields exactly the events the matching eager function records, in the
/// same order.
#[derive(Debug)]
pub struct Stepper {
    n: usize,
    limit: Option<usize>,
    backtrack_to_empty: bool,
    state: Placement,
    frames: Vec<Frame>,
    solutions: Vec<Placement>,
    phase: Phase,
}

impl Stepper {
    fn new(n: usize, limit: Option<usize>, backtrack_to_empty: bool) -> Self {
        let phase = if limit == Some(0) {
            Phase::Done
        } else {
            Phase::Start
        };
        Self {
            n,
            limit,
            backtrack_to_empty,
            state: Vec::with_capacity(n),
            frames: Vec::with_capacity(n),
            solutions: Vec::new(),
            phase,
        }
    }

    /// Same events as [`search_for_first_solution`], but also yields the
    /// exploration when no solution exists.
    pub fn first_solution(n: usize) -> Self {
        Self::new(n, Some(1), false)
    }

    /// Same events as [`search_until_k_solutions`].
    pub fn bounded(n: usize, k: usize) -> Self {
        Self::new(n, Some(k), true)
    }

    /// Bounded search without a bound.
    pub fn exhaustive(n: usize) -> Self {
        Self::new(n, None, true)
    }

    pub fn board_size(&self) -> usize {
        self.n
    }

    /// Solutions recorded so far.
    pub fn solutions(&self) -> &[Placement] {
        &self.solutions
    }

    /// The live placement between events.
    pub fn state(&self) -> &[usize] {
        &self.state
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Done
    }

    fn push_frame(&mut self) {
        let columns = candidates(&self.state, self.n).to_vec().into_iter();
        self.frames.push(Frame { columns });
    }

    fn record_solution(&mut self) -> TraceEvent {
        self.solutions.push(self.state.clone());
        let reached = self
            .limit
            .is_some_and(|limit| self.solutions.len() >= limit);
        self.phase = if reached { Phase::Done } else { Phase::Leaf };
        TraceEvent::Solution {
            state: self.state.clone(),
        }
    }

    fn backtrack(&mut self) -> Option<TraceEvent> {
        self.state.pop();
        if self.state.is_empty() && !self.backtrack_to_empty {
            return None;
        }
        Some(TraceEvent::Backtrack {
            state: self.state.clone(),
        })
    }
}

impl Iterator for Stepper {
    type Item = TraceEvent;

    fn next(&mut self) -> Option<TraceEvent> {
        loop {
            match self.phase {
                Phase::Done => return None,
                Phase::Start => {
                    if self.n == 0 {
                        let event = self.record_solution();
                        self.phase = Phase::Done;
                        return Some(event);
                    }
                    self.push_frame();
                    self.phase = Phase::Expand;
                }
                Phase::Expand => {
                    let next = self.frames.last_mut().and_then(|frame| frame.columns.next());
                    if let Some(candidate) = next {
                        self.phase = Phase::Descend(candidate);
                        return Some(TraceEvent::Trying {
                            state: self.state.clone(),
                            candidate,
                        });
                    }
                    self.frames.pop();
                    if self.frames.is_empty() {
                        self.phase = Phase::Done;
                        return None;
                    }
                    if let Some(event) = self.backtrack() {
                        return Some(event);
                    }
                }
                Phase::Descend(candidate) => {
                    self.state.push(candidate);
                    if self.state.len() == self.n {
                        return Some(self.record_solution());
                    }
                    self.push_frame();
                    self.phase = Phase::Expand;
                }
                Phase::Leaf => {
                    self.phase = Phase::Expand;
                    if let Some(event) = self.backtrack() {
                        return Some(event);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::is_consistent;
    use crate::trace::StepKind;
    use proptest::prelude::*;

    #[test]
    fn test_known_solution_counts() {
        let expected = [(1, 1), (2, 0), (3, 0), (4, 2), (5, 10), (6, 4), (7, 40), (8, 92)];
        for (n, count) in expected {
            assert_eq!(solve(n).len(), count, "n = {}", n);
        }
    }

    #[test]
    fn test_four_queens_order() {
        assert_eq!(solve(4), vec![vec![1, 3, 0, 2], vec![2, 0, 3, 1]]);
    }

    #[test]
    fn test_solutions_are_lexicographic_and_deterministic() {
        let first = solve(6);
        assert_eq!(first, solve(6));
        assert!(first.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_first_eight_queens_solution() {
        let trace = search_for_first_solution(8);
        assert_eq!(
            trace.last(),
            Some(&TraceEvent::Solution {
                state: vec![0, 4, 7, 5, 2, 6, 1, 3]
            })
        );
        assert_eq!(trace.last().unwrap().state(), solve(8)[0].as_slice());
    }

    #[test]
    fn test_first_solution_four_queens_trace() {
        let trace = search_for_first_solution(4);
        let expected = vec![
            TraceEvent::Trying { state: vec![], candidate: 0 },
            TraceEvent::Trying { state: vec![0], candidate: 2 },
            TraceEvent::Backtrack { state: vec![0] },
            TraceEvent::Trying { state: vec![0], candidate: 3 },
            TraceEvent::Trying { state: vec![0, 3], candidate: 1 },
            TraceEvent::Backtrack { state: vec![0, 3] },
            TraceEvent::Backtrack { state: vec![0] },
            TraceEvent::Trying { state: vec![], candidate: 1 },
            TraceEvent::Trying { state: vec![1], candidate: 3 },
            TraceEvent::Trying { state: vec![1, 3], candidate: 0 },
            TraceEvent::Trying { state: vec![1, 3, 0], candidate: 2 },
            TraceEvent::Solution { state: vec![1, 3, 0, 2] },
        ];
        assert_eq!(trace, expected);
    }

    #[test]
    fn test_first_solution_none() {
        assert!(search_for_first_solution(2).is_empty());
        assert!(search_for_first_solution(3).is_empty());
        assert_eq!(
            search_for_first_solution(1),
            vec![
                TraceEvent::Trying { state: vec![], candidate: 0 },
                TraceEvent::Solution { state: vec![0] },
            ]
        );
    }

    #[test]
    fn test_bounded_four_queens_one() {
        let result = search_until_k_solutions(4, 1);
        assert_eq!(result.solutions, vec![solve(4)[0].clone()]);
        assert_eq!(
            result.trace.last(),
            Some(&TraceEvent::Solution { state: vec![1, 3, 0, 2] })
        );
        // Unlike first-solution mode, the unwind to the empty board is recorded.
        assert!(result
            .trace
            .contains(&TraceEvent::Backtrack { state: vec![] }));
    }

    #[test]
    fn test_bounded_limits() {
        assert_eq!(search_until_k_solutions(6, 2).solutions, solve(6)[..2].to_vec());
        assert_eq!(search_until_k_solutions(6, 100).solutions, solve(6));
        assert_eq!(search_until_k_solutions(6, 0), BoundedSearch::default());
        assert!(search_until_k_solutions(3, 5).solutions.is_empty());
    }

    #[test]
    fn test_bounded_exhausted_trace_ends_in_empty_backtrack() {
        let result = search_until_k_solutions(3, 1);
        assert_eq!(
            result.trace.last(),
            Some(&TraceEvent::Backtrack { state: vec![] })
        );
    }

    #[test]
    fn test_trace_state_lengths() {
        for n in 1..=6 {
            let result = search_until_k_solutions(n, usize::MAX);
            for event in &result.trace {
                match event.kind() {
                    StepKind::Trying | StepKind::Backtrack => assert!(event.state().len() < n),
                    StepKind::Solution => assert_eq!(event.state().len(), n),
                    StepKind::Initial => unreachable!(),
                }
            }
        }
    }

    #[test]
    fn test_trace_snapshots_are_independent() {
        let result = search_until_k_solutions(5, 3);
        let solution_events: Vec<_> = result
            .trace
            .iter()
            .filter(|e| e.kind() == StepKind::Solution)
            .map(|e| e.state().to_vec())
            .collect();
        assert_eq!(solution_events, result.solutions);
    }

    #[test]
    fn test_stepper_matches_first_solution() {
        for n in 1..=8 {
            let lazy: Vec<_> = Stepper::first_solution(n).collect();
            let eager = search_for_first_solution(n);
            if eager.is_empty() {
                assert!(lazy.iter().all(|e| e.kind() != StepKind::Solution));
            } else {
                assert_eq!(lazy, eager, "n = {}", n);
            }
        }
    }

    #[test]
    fn test_stepper_matches_bounded() {
        for n in 1..=7 {
            for k in [1, 2, 3, usize::MAX] {
                let mut stepper = Stepper::bounded(n, k);
                let trace: Vec<_> = stepper.by_ref().collect();
                let eager = search_until_k_solutions(n, k);
                assert_eq!(trace, eager.trace, "n = {}, k = {}", n, k);
                assert_eq!(stepper.solutions(), eager.solutions.as_slice());
                assert!(stepper.is_finished());
            }
        }
    }

    #[test]
    fn test_stepper_exhaustive_finds_everything() {
        let mut stepper = Stepper::exhaustive(8);
        stepper.by_ref().for_each(drop);
        assert_eq!(stepper.solutions(), solve(8).as_slice());
        assert!(stepper.state().is_empty());
        assert_eq!(stepper.next(), None);
    }

    #[test]
    fn test_stepper_zero_limit() {
        let mut stepper = Stepper::bounded(4, 0);
        assert!(stepper.is_finished());
        assert_eq!(stepper.next(), None);
    }

    proptest! {
        #[test]
        fn prop_every_solution_is_valid(n in 1usize..=8) {
            for solution in solve(n) {
                prop_assert_eq!(solution.len(), n);
                prop_assert!(is_consistent(&solution, n));
            }
        }
    }
}
