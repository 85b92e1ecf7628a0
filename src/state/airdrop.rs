use serde::{Deserialize, Serialize};

use super::{FlowError, Ledger, TxKind};
use crate::{AIRDROP_AMOUNT, AIRDROP_ROUND};

/// One-time (per round) airdrop gate: `pending → reacted → claimed`,
/// strictly monotonic. Claiming is reaction-gated; there is no separate
/// verification flag on this step.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AirdropState {
    pub has_reacted: bool,
    pub has_claimed: bool,
    pub reaction_date: Option<i64>,
    pub claim_date: Option<i64>,
    pub total_claimed: f64,
}

impl AirdropState {
    /// Local-only reaction flag. Reacting again keeps the first timestamp.
    pub fn react(&mut self, now_ms: i64) {
        if !self.has_reacted {
            self.has_reacted = true;
            self.reaction_date = Some(now_ms);
        }
    }

    pub fn claimable(&self) -> bool {
        self.has_reacted && !self.has_claimed
    }

    /// Reaction-gated, once-per-round claim.
    pub fn claim(&mut self, ledger: &mut Ledger, now_ms: i64) -> Result<(), FlowError> {
        if !self.has_reacted {
            return Err(FlowError::NotEligible);
        }
        if self.has_claimed {
            return Err(FlowError::AlreadyClaimed);
        }
        self.has_claimed = true;
        self.claim_date = Some(now_ms);
        ledger.record(
            TxKind::Airdrop,
            AIRDROP_AMOUNT,
            format!("Airdrop Round #{AIRDROP_ROUND}"),
            now_ms,
        );
        self.total_claimed = ledger.total_credited(TxKind::Airdrop);
        Ok(())
    }

    pub fn status_label(&self) -> &'static str {
        if self.has_claimed {
            "Claimed"
        } else if self.has_reacted {
            "Ready"
        } else {
            "Pending"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_requires_a_reaction_first() {
        let mut state = AirdropState::default();
        let mut ledger = Ledger::default();
        assert_eq!(state.claim(&mut ledger, 0), Err(FlowError::NotEligible));
        assert!(!state.has_claimed);
        assert_eq!(ledger.balance(), 0.0);
    }

    #[test]
    fn reacted_then_claimed_credits_once() {
        let mut state = AirdropState::default();
        let mut ledger = Ledger::default();

        state.react(100);
        assert_eq!(state.reaction_date, Some(100));
        assert!(state.claimable());

        state.claim(&mut ledger, 200).unwrap();
        assert!(state.has_claimed);
        assert_eq!(state.claim_date, Some(200));
        assert_eq!(state.total_claimed, 5.0);
        assert_eq!(ledger.balance(), 5.0);

        // Second attempt is a no-op.
        let before = ledger.clone();
        assert_eq!(state.claim(&mut ledger, 300), Err(FlowError::AlreadyClaimed));
        assert_eq!(ledger, before);
        assert_eq!(state.total_claimed, 5.0);
    }

    #[test]
    fn progression_is_monotonic() {
        let mut state = AirdropState::default();
        state.react(100);
        state.react(500);
        assert_eq!(state.reaction_date, Some(100));
        assert!(state.has_reacted);
    }

    #[test]
    fn status_label_tracks_the_machine() {
        let mut state = AirdropState::default();
        let mut ledger = Ledger::default();
        assert_eq!(state.status_label(), "Pending");
        state.react(0);
        assert_eq!(state.status_label(), "Ready");
        state.claim(&mut ledger, 1).unwrap();
        assert_eq!(state.status_label(), "Claimed");
    }
}
