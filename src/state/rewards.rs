use serde::{Deserialize, Serialize};

use super::{FlowError, Ledger, TxKind};
use crate::{CLAIM_COOLDOWN_MS, REWARD_AMOUNT};

/// Periodic reward record. Only `last_claimed_at` is authoritative:
/// `can_claim` and `next_claim_time` are recomputed from it every second,
/// and `total_claimed` is refreshed from the ledger fold at claim time.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RewardState {
    pub last_claimed_at: Option<i64>,
    pub total_claimed: f64,
    pub can_claim: bool,
    pub next_claim_time: i64,
}

impl RewardState {
    /// Eligible when never claimed or the 6-hour cooldown has elapsed.
    pub fn eligible(&self, now_ms: i64) -> bool {
        match self.last_claimed_at {
            None => true,
            Some(at) => now_ms - at >= CLAIM_COOLDOWN_MS,
        }
    }

    /// Countdown string, recomputed from `last_claimed_at` alone.
    pub fn countdown(&self, now_ms: i64) -> String {
        let Some(at) = self.last_claimed_at else {
            return "Ready!".to_string();
        };
        let diff = at + CLAIM_COOLDOWN_MS - now_ms;
        if diff <= 0 {
            return "Ready!".to_string();
        }
        let hours = diff / 3_600_000;
        let minutes = diff % 3_600_000 / 60_000;
        let seconds = diff % 60_000 / 1_000;
        format!("{hours}:{minutes:02}:{seconds:02}")
    }

    /// The claim operation. A no-op unless eligible: stamps the claim
    /// time, credits the ledger, and refreshes the derived total.
    pub fn claim(&mut self, ledger: &mut Ledger, now_ms: i64) -> Result<(), FlowError> {
        if !self.eligible(now_ms) {
            return Err(FlowError::CooldownActive);
        }
        self.last_claimed_at = Some(now_ms);
        self.next_claim_time = now_ms + CLAIM_COOLDOWN_MS;
        self.can_claim = false;
        ledger.record(TxKind::Reward, REWARD_AMOUNT, "Daily reward claim", now_ms);
        self.total_claimed = ledger.total_credited(TxKind::Reward);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eligible_when_never_claimed() {
        assert!(RewardState::default().eligible(0));
    }

    #[test]
    fn eligible_exactly_at_the_cooldown_boundary() {
        let state = RewardState {
            last_claimed_at: Some(1_000),
            ..Default::default()
        };
        assert!(!state.eligible(1_000));
        assert!(!state.eligible(1_000 + CLAIM_COOLDOWN_MS - 1));
        assert!(state.eligible(1_000 + CLAIM_COOLDOWN_MS));
        assert!(state.eligible(1_000 + CLAIM_COOLDOWN_MS + 1));
    }

    #[test]
    fn first_claim_credits_five_and_closes_the_window() {
        let mut state = RewardState::default();
        let mut ledger = Ledger::default();

        state.claim(&mut ledger, 50_000).unwrap();

        assert_eq!(state.last_claimed_at, Some(50_000));
        assert_eq!(state.total_claimed, 5.0);
        assert_eq!(ledger.balance(), 5.0);
        assert!(!state.eligible(50_001));
        assert_eq!(state.next_claim_time, 50_000 + CLAIM_COOLDOWN_MS);
    }

    #[test]
    fn ineligible_claim_is_a_no_op() {
        let mut state = RewardState::default();
        let mut ledger = Ledger::default();
        state.claim(&mut ledger, 0).unwrap();

        let before_state = state.clone();
        let before_ledger = ledger.clone();
        assert_eq!(
            state.claim(&mut ledger, CLAIM_COOLDOWN_MS - 1),
            Err(FlowError::CooldownActive)
        );
        assert_eq!(state, before_state);
        assert_eq!(ledger, before_ledger);
    }

    #[test]
    fn countdown_formats_remaining_time() {
        let state = RewardState {
            last_claimed_at: Some(0),
            ..Default::default()
        };
        // 6h out: full cooldown still pending.
        assert_eq!(state.countdown(0), "6:00:00");
        // 1h 2m 3s remaining.
        assert_eq!(state.countdown(CLAIM_COOLDOWN_MS - 3_723_000), "1:02:03");
        assert_eq!(state.countdown(CLAIM_COOLDOWN_MS), "Ready!");
        assert_eq!(RewardState::default().countdown(0), "Ready!");
    }
}
