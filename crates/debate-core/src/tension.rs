//! Debate tension heuristic.
//!
//! A pure function of the turn log, recomputed in full after every append:
//! - 20 per distinct sentiment beyond the first
//! - 15 per rebuttal
//! - a flat 20 once the log holds at least three turns
//!
//! The sum is clamped to 0..=100.

use std::collections::BTreeSet;
use debate_types::turn::DebateTurn;

pub const MAX_TENSION: u8 = 100;

const DISTINCT_SENTIMENT_WEIGHT: u32 = 20;
const REBUTTAL_WEIGHT: u32 = 15;
const SUSTAINED_EXCHANGE_BONUS: u32 = 20;
const SUSTAINED_EXCHANGE_LEN: usize = 3;

pub fn score(turns: &[DebateTurn]) -> u8 {
    let distinct: BTreeSet<_> = turns.iter().filter_map(|t| t.sentiment.as_ref()).collect();
    let sentiment_term = DISTINCT_SENTIMENT_WEIGHT * (distinct.len().saturating_sub(1) as u32);

    let rebuttals = turns.iter().filter(|t| t.is_rebuttal).count() as u32;
    let rebuttal_term = REBUTTAL_WEIGHT.saturating_mul(rebuttals);

    let recency_term = if turns.len() >= SUSTAINED_EXCHANGE_LEN {
        SUSTAINED_EXCHANGE_BONUS
    } else {
        0
    };

    let raw = sentiment_term
        .saturating_add(rebuttal_term)
        .saturating_add(recency_term);
    raw.min(u32::from(MAX_TENSION)) as u8
}
