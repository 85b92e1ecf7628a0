mod airdrop;
mod game;
mod identity;
mod ledger;
mod profile;
mod rewards;
mod store;

pub use airdrop::AirdropState;
pub use game::{score_delta, GameSession};
pub use identity::{IdentityVerifier, MockWorldId};
pub use ledger::{parse_withdrawal, withdraw, Ledger, Transaction, TxKind, TxStatus};
pub use profile::UserProfile;
pub use rewards::RewardState;
pub use store::AppStore;

use thiserror::Error;

/// Everything that can abort a user action. Each failure is terminal for
/// the attempt; the triggering page surfaces it via a blocking alert and
/// leaves state untouched.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FlowError {
    #[error("Invalid amount")]
    InvalidAmount,
    #[error("Insufficient balance")]
    InsufficientBalance,
    #[error("Reward cooldown has not elapsed yet")]
    CooldownActive,
    #[error("React on the community post first")]
    NotEligible,
    #[error("Airdrop already claimed this round")]
    AlreadyClaimed,
    #[error("World ID verification failed")]
    VerificationFailed,
}
