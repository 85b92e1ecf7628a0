use crate::platform;
use crate::SIGN_IN_DELAY_MS;

use super::{FlowError, UserProfile};

/// The external identity check behind the sign-in flow. A trait so the
/// simulated verifier can be swapped for a real one, or for a
/// deterministic double in tests.
#[allow(async_fn_in_trait)]
pub trait IdentityVerifier {
    async fn verify(&self) -> Result<UserProfile, FlowError>;
}

/// Simulated World ID verification: a fixed delay, then a mock profile
/// with a random identifier and wallet address.
#[derive(Clone, Copy, Debug, Default)]
pub struct MockWorldId;

impl IdentityVerifier for MockWorldId {
    async fn verify(&self) -> Result<UserProfile, FlowError> {
        platform::sleep_ms(SIGN_IN_DELAY_MS).await;
        Ok(UserProfile {
            id: format!("world_{}", random_string(9, BASE36)),
            wallet: format!("0x{}", random_string(40, HEX)),
            verified: true,
            joined_at: platform::now_ms(),
        })
    }
}

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const HEX: &[u8] = b"0123456789abcdef";

fn random_string(len: usize, alphabet: &[u8]) -> String {
    (0..len)
        .map(|_| {
            let idx = (platform::random_unit() * alphabet.len() as f64) as usize;
            alphabet[idx.min(alphabet.len() - 1)] as char
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic stand-in for the external check.
    struct StaticVerifier {
        outcome: Result<UserProfile, FlowError>,
    }

    impl IdentityVerifier for StaticVerifier {
        async fn verify(&self) -> Result<UserProfile, FlowError> {
            self.outcome.clone()
        }
    }

    #[tokio::test]
    async fn mock_verifier_yields_a_verified_profile() {
        let profile = MockWorldId.verify().await.unwrap();
        assert!(profile.verified);
        assert!(profile.id.starts_with("world_"));
        assert_eq!(profile.id.len(), "world_".len() + 9);
        assert!(profile.wallet.starts_with("0x"));
        assert_eq!(profile.wallet.len(), 42);
    }

    #[tokio::test]
    async fn failures_leave_no_profile_behind() {
        let verifier = StaticVerifier {
            outcome: Err(FlowError::VerificationFailed),
        };
        assert_eq!(
            verifier.verify().await,
            Err(FlowError::VerificationFailed)
        );
    }

    #[test]
    fn random_strings_stay_inside_their_alphabet() {
        let id = random_string(64, HEX);
        assert_eq!(id.len(), 64);
        assert!(id.bytes().all(|b| HEX.contains(&b)));
    }
}
