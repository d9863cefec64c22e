//! Out-of-band classification and severity ranking.

use std::cmp::Ordering;

use crate::config::{CutoffBand, Direction};

/// One out-of-band frame with its ranking severity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Candidate {
    /// Frame index into the original sequence.
    pub index: usize,
    /// Direction-dependent severity (see [`classify`]).
    pub severity: f64,
}

/// Classifies scores against the band and returns candidates in rank order.
///
/// - `Above`: score > upper, most positive first.
/// - `Below`: score < lower, most negative first.
/// - `Both`: score outside either limit, ranked by distance to the band
///   midpoint, farthest first.
///
/// Ranking is stable: equal severities keep original index order, so reruns
/// on identical input select identically. NaN scores satisfy no comparison
/// and are never candidates.
pub(crate) fn classify(scores: &[f64], band: &CutoffBand, direction: Direction) -> Vec<Candidate> {
    let mid = band.midpoint();
    let mut candidates: Vec<Candidate> = Vec::new();
    for (index, &score) in scores.iter().enumerate() {
        match direction {
            Direction::Above if score > band.upper() => candidates.push(Candidate {
                index,
                severity: score,
            }),
            Direction::Below if score < band.lower() => candidates.push(Candidate {
                index,
                severity: score,
            }),
            Direction::Both if score < band.lower() || score > band.upper() => {
                candidates.push(Candidate {
                    index,
                    severity: (score - mid).abs(),
                })
            }
            _ => {}
        }
    }

    // Stable sort keeps index order on severity ties. Candidates never hold
    // NaN severities, so the Equal fallback is unreachable in practice.
    match direction {
        Direction::Below => candidates
            .sort_by(|a, b| a.severity.partial_cmp(&b.severity).unwrap_or(Ordering::Equal)),
        Direction::Above | Direction::Both => candidates
            .sort_by(|a, b| b.severity.partial_cmp(&a.severity).unwrap_or(Ordering::Equal)),
    }
    candidates
}
