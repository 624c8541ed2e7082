//! Safe columns for the next row of a partial placement.

/// Columns still open for the next row.
///
/// Stored as a membership mask over `0..n`, so iteration is always in
/// ascending column order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateSet {
    open: Vec<bool>,
}

impl CandidateSet {
    /// Every column of an `n`-wide board.
    pub fn full(n: usize) -> Self {
        Self { open: vec![true; n] }
    }

    /// Removes `col`; out-of-range or already removed columns are ignored.
    pub fn discard(&mut self, col: usize) {
        if let Some(slot) = self.open.get_mut(col) {
            *slot = false;
        }
    }

    pub fn contains(&self, col: usize) -> bool {
        self.open.get(col).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.open.iter().filter(|&&open| open).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.open.contains(&true)
    }

    /// Open columns, ascending.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.open
            .iter()
            .enumerate()
            .filter_map(|(col, &open)| open.then_some(col))
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

/// Columns where a queen can go in row `state.len()` without being attacked
/// by any queen already in `state`.
pub fn candidates(state: &[usize], n: usize) -> CandidateSet {
    let mut set = CandidateSet::full(n);
    let target_row = state.len();
    for (row, &col) in state.iter().enumerate() {
        let dist = target_row - row;
        set.discard(col);
        set.discard(col + dist);
        if let Some(left) = col.checked_sub(dist) {
            set.discard(left);
        }
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::is_consistent;
    use proptest::prelude::*;

    #[test]
    fn test_empty_state_opens_every_column() {
        assert_eq!(candidates(&[], 5).to_vec(), vec![0, 1, 2, 3, 4]);
        assert_eq!(candidates(&[], 1).to_vec(), vec![0]);
    }

    #[test]
    fn test_single_queen() {
        // Queen at (0, 1) closes columns 0, 1, 2 for row 1.
        assert_eq!(candidates(&[1], 4).to_vec(), vec![3]);
        // Queen at (0, 0) closes columns 0 and 1.
        assert_eq!(candidates(&[0], 4).to_vec(), vec![2, 3]);
    }

    #[test]
    fn test_dead_end() {
        // [0, 2] on a 4x4 board leaves nothing for row 2.
        let set = candidates(&[0, 2], 4);
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_discard_is_idempotent() {
        let mut set = CandidateSet::full(3);
        set.discard(1);
        set.discard(1);
        set.discard(7);
        assert_eq!(set.to_vec(), vec![0, 2]);
        assert!(!set.contains(1));
        assert!(!set.contains(7));
    }

    #[test]
    fn test_pure() {
        let state = [1, 3];
        assert_eq!(candidates(&state, 6), candidates(&state, 6));
    }

    fn consistent_prefix() -> impl Strategy<Value = (Vec<usize>, usize)> {
        (1usize..=9, prop::collection::vec(0usize..9, 0..9)).prop_map(|(n, picks)| {
            // Greedily keep picks that leave the prefix consistent.
            let mut state = Vec::new();
            for pick in picks {
                if state.len() + 1 >= n {
                    break;
                }
                let open = candidates(&state, n).to_vec();
                if open.is_empty() {
                    break;
                }
                state.push(open[pick % open.len()]);
            }
            (state, n)
        })
    }

    proptest! {
        #[test]
        fn prop_candidates_match_brute_force((state, n) in consistent_prefix()) {
            prop_assume!(state.len() < n);
            let expected: Vec<usize> = (0..n)
                .filter(|&col| {
                    let mut next = state.clone();
                    next.push(col);
                    is_consistent(&next, n)
                })
                .collect();
            prop_assert_eq!(candidates(&state, n).to_vec(), expected);
        }
    }
}
