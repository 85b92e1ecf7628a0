use serde::{Deserialize, Serialize};

use super::{FlowError, Ledger, TxKind};
use crate::GAME_ENTRY_FEE;

/// Tap-to-score session record: `Idle → Playing → Ended`. Transient in
/// memory during a round; the caller persists it only when the round
/// ends, so the entry-fee debit always lands in the ledger first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameSession {
    pub is_playing: bool,
    pub gorillas_rescued: u32,
    pub score: u32,
    pub round_number: u32,
    pub session_start_time: Option<i64>,
    pub session_end_time: Option<i64>,
}

impl GameSession {
    /// `Idle → Playing`. Requires the entry fee to be coverable; debits
    /// it up front (non-refundable) and resets the round counters.
    pub fn start(&mut self, ledger: &mut Ledger, now_ms: i64) -> Result<(), FlowError> {
        if ledger.balance() < GAME_ENTRY_FEE {
            return Err(FlowError::InsufficientBalance);
        }
        ledger.record(TxKind::Game, -GAME_ENTRY_FEE, "Jungle Game Entry Fee", now_ms);
        self.is_playing = true;
        self.gorillas_rescued = 0;
        self.score = 0;
        self.round_number += 1;
        self.session_start_time = Some(now_ms);
        self.session_end_time = None;
        Ok(())
    }

    /// One tap: exactly one gorilla, plus a score delta in `[25, 74]`
    /// derived from a unit-interval roll. Ignored outside a round.
    pub fn rescue(&mut self, roll: f64) {
        if !self.is_playing {
            return;
        }
        self.gorillas_rescued += 1;
        self.score += score_delta(roll);
    }

    /// `Playing → Ended`. Stamps the end time; the caller persists.
    pub fn finish(&mut self, now_ms: i64) {
        if !self.is_playing {
            return;
        }
        self.is_playing = false;
        self.session_end_time = Some(now_ms);
    }
}

/// Maps a uniform roll in `[0, 1)` to an integer score in `[25, 74]`.
/// The uniform range is a placeholder scoring rule, kept as policy.
pub fn score_delta(roll: f64) -> u32 {
    25 + ((roll * 50.0) as u32).min(49)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn funded(amount: f64) -> Ledger {
        let mut ledger = Ledger::default();
        if amount > 0.0 {
            ledger.record(TxKind::Reward, amount, "Daily reward claim", 0);
        }
        ledger
    }

    #[test]
    fn start_refused_without_the_entry_fee() {
        let mut session = GameSession::default();
        let mut ledger = funded(0.0);
        assert_eq!(
            session.start(&mut ledger, 1_000),
            Err(FlowError::InsufficientBalance)
        );
        assert_eq!(session, GameSession::default());
        assert_eq!(ledger.entries.len(), 0);
    }

    #[test]
    fn start_debits_exactly_one_token() {
        let mut session = GameSession::default();
        let mut ledger = funded(5.0);
        session.start(&mut ledger, 1_000).unwrap();
        assert!(session.is_playing);
        assert_eq!(session.round_number, 1);
        assert_eq!(session.session_start_time, Some(1_000));
        assert_eq!(ledger.balance(), 4.0);
        assert_eq!(ledger.entries[0].amount, -1.0);
    }

    #[test]
    fn start_resets_the_round_counters() {
        let mut session = GameSession {
            gorillas_rescued: 12,
            score: 450,
            round_number: 3,
            ..Default::default()
        };
        let mut ledger = funded(2.0);
        session.start(&mut ledger, 1_000).unwrap();
        assert_eq!(session.gorillas_rescued, 0);
        assert_eq!(session.score, 0);
        assert_eq!(session.round_number, 4);
        assert_eq!(session.session_end_time, None);
    }

    #[test]
    fn each_tap_rescues_one_gorilla_with_a_bounded_delta() {
        let mut session = GameSession::default();
        let mut ledger = funded(1.0);
        session.start(&mut ledger, 0).unwrap();

        session.rescue(0.0);
        assert_eq!(session.gorillas_rescued, 1);
        assert_eq!(session.score, 25);

        session.rescue(0.999_999);
        assert_eq!(session.gorillas_rescued, 2);
        assert_eq!(session.score, 25 + 74);
    }

    #[test]
    fn score_delta_spans_the_full_range() {
        assert_eq!(score_delta(0.0), 25);
        assert_eq!(score_delta(0.5), 50);
        assert_eq!(score_delta(0.98), 74);
        // A roll of exactly 1.0 still stays inside the range.
        assert_eq!(score_delta(1.0), 74);
        for _ in 0..1_000 {
            let delta = score_delta(rand::random::<f64>());
            assert!((25..=74).contains(&delta));
        }
    }

    #[test]
    fn taps_outside_a_round_are_ignored() {
        let mut session = GameSession::default();
        session.rescue(0.5);
        assert_eq!(session.gorillas_rescued, 0);
        assert_eq!(session.score, 0);
    }

    #[test]
    fn finish_stamps_the_end_time_once() {
        let mut session = GameSession::default();
        let mut ledger = funded(1.0);
        session.start(&mut ledger, 1_000).unwrap();
        session.finish(2_000);
        assert!(!session.is_playing);
        assert_eq!(session.session_end_time, Some(2_000));

        // Finishing an ended session changes nothing.
        session.finish(9_000);
        assert_eq!(session.session_end_time, Some(2_000));
    }
}
