//! Greedy minimum-spaced selection over ranked candidates.

use crate::classify::Candidate;

/// Greedily accepts ranked candidates under a minimum index spacing and an
/// optional cap.
///
/// Walks the candidates once, in rank order: the first is accepted
/// unconditionally, each later one only if its index is at least
/// `min_distance` away from every accepted index. The walk stops as soon as
/// `max_count` acceptances are reached. The returned indices keep acceptance
/// (rank) order, not numeric order.
///
/// `max_count = Some(0)` yields an empty selection; `min_distance = 0`
/// disables the spacing constraint.
pub(crate) fn greedy_select(
    ranked: &[Candidate],
    min_distance: usize,
    max_count: Option<usize>,
) -> Vec<usize> {
    let mut selection: Vec<usize> = Vec::new();
    if max_count == Some(0) {
        return selection;
    }
    for candidate in ranked {
        // Vacuously true for the first candidate: it is always accepted.
        let spaced = selection
            .iter()
            .all(|&picked| candidate.index.abs_diff(picked) >= min_distance);
        if spaced {
            selection.push(candidate.index);
        }
        if Some(selection.len()) == max_count {
            break;
        }
    }
    selection
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(indices: &[usize]) -> Vec<Candidate> {
        indices
            .iter()
            .map(|&index| Candidate {
                index,
                severity: 0.0,
            })
            .collect()
    }

    #[test]
    fn test_keeps_rank_order() {
        let selected = greedy_select(&ranked(&[6, 3, 9]), 1, None);
        assert_eq!(selected, vec![6, 3, 9]);
    }

    #[test]
    fn test_spacing_excludes_near_candidates() {
        // |6 - 3| = 3 < 4, so 3 is skipped; 12 is far enough.
        let selected = greedy_select(&ranked(&[6, 3, 12]), 4, None);
        assert_eq!(selected, vec![6, 12]);
    }

    #[test]
    fn test_spacing_checked_against_every_accepted() {
        // 10 is >= 4 from 0 but only 2 from 8.
        let selected = greedy_select(&ranked(&[0, 8, 10, 20]), 4, None);
        assert_eq!(selected, vec![0, 8, 20]);
    }

    #[test]
    fn test_cap_stops_walk() {
        let selected = greedy_select(&ranked(&[5, 10, 15, 20]), 1, Some(2));
        assert_eq!(selected, vec![5, 10]);
    }

    #[test]
    fn test_cap_zero_is_empty() {
        let selected = greedy_select(&ranked(&[5, 10]), 1, Some(0));
        assert!(selected.is_empty());
    }

    #[test]
    fn test_min_distance_zero_accepts_all() {
        let selected = greedy_select(&ranked(&[3, 4, 5]), 0, None);
        assert_eq!(selected, vec![3, 4, 5]);
    }

    #[test]
    fn test_exact_distance_is_accepted() {
        // Spacing is inclusive: a gap of exactly min_distance qualifies.
        let selected = greedy_select(&ranked(&[0, 4]), 4, None);
        assert_eq!(selected, vec![0, 4]);
    }

    #[test]
    fn test_first_candidate_always_accepted() {
        let selected = greedy_select(&ranked(&[7]), 1000, Some(5));
        assert_eq!(selected, vec![7]);
    }

    #[test]
    fn test_empty_candidates() {
        assert!(greedy_select(&[], 1, None).is_empty());
    }
}
