//! Ordered turn log plus the state derived from it.

use debate_types::summary::SentimentBreakdown;
use debate_types::turn::DebateTurn;

use crate::tension;

/// Owns the turn log. Insertion order is display order; nothing is
/// reordered or deduplicated.
#[derive(Debug, Clone)]
pub struct ResponseAggregator {
    turns: Vec<DebateTurn>,
    current_wave: u32,
    active_speaker: Option<String>,
    tension: u8,
}

impl ResponseAggregator {
    pub fn new() -> Self {
        Self {
            turns: Vec::new(),
            current_wave: 1,
            active_speaker: None,
            tension: 0,
        }
    }

    /// Append a live turn, then refresh wave, speaker, and tension from it.
    pub fn append(&mut self, turn: DebateTurn) {
        let wave = turn.wave.max(1);
        if wave < self.current_wave {
            log::warn!(
                "Turn from {} reports wave {} after wave {}",
                turn.persona_id,
                wave,
                self.current_wave
            );
        }
        self.active_speaker = Some(turn.persona_id.clone());
        self.current_wave = wave;
        self.turns.push(turn);
        self.tension = tension::score(&self.turns);
    }

    pub fn clear_active_speaker(&mut self) {
        self.active_speaker = None;
    }

    pub fn reset(&mut self) {
        self.turns.clear();
        self.current_wave = 1;
        self.active_speaker = None;
        self.tension = 0;
    }

    pub fn turns(&self) -> &[DebateTurn] {
        &self.turns
    }

    pub fn current_wave(&self) -> u32 {
        self.current_wave
    }

    pub fn active_speaker(&self) -> Option<&str> {
        self.active_speaker.as_deref()
    }

    pub fn tension(&self) -> u8 {
        self.tension
    }

    pub fn sentiment_tally(&self) -> SentimentBreakdown {
        SentimentBreakdown::tally(&self.turns)
    }

    /// Group the log by wave for display. Groups appear in order of their
    /// first turn; turns keep their log order within a group.
    pub fn waves(&self) -> Vec<(u32, Vec<&DebateTurn>)> {
        let mut groups: Vec<(u32, Vec<&DebateTurn>)> = Vec::new();
        for turn in &self.turns {
            let wave = turn.wave.max(1);
            match groups.iter_mut().find(|(w, _)| *w == wave) {
                Some((_, members)) => members.push(turn),
                None => groups.push((wave, vec![turn])),
            }
        }
        groups
    }
}

impl Default for ResponseAggregator {
    fn default() -> Self {
        Self::new()
    }
}
