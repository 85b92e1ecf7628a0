use serde::{Deserialize, Serialize};

/// Mock identity created at sign-in and never deleted. The token balance
/// is not stored here; it is derived from the ledger.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub id: String,
    pub wallet: String,
    pub verified: bool,
    pub joined_at: i64,
}

impl UserProfile {
    /// `0x1234...abcd` style abbreviation. Falls back to the full string
    /// when it is short or a stored value cuts off a char boundary.
    pub fn short_wallet(&self) -> String {
        if self.wallet.len() > 10 {
            if let (Some(head), Some(tail)) = (
                self.wallet.get(..6),
                self.wallet.get(self.wallet.len() - 4..),
            ) {
                return format!("{head}...{tail}");
            }
        }
        self.wallet.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_wallet(wallet: &str) -> UserProfile {
        UserProfile {
            wallet: wallet.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn long_addresses_are_abbreviated() {
        let profile = with_wallet("0xdeadbeefdeadbeefdeadbeefdeadbeefdeadbeef");
        assert_eq!(profile.short_wallet(), "0xdead...beef");
    }

    #[test]
    fn short_addresses_pass_through() {
        assert_eq!(with_wallet("0xabcdef").short_wallet(), "0xabcdef");
        assert_eq!(with_wallet("").short_wallet(), "");
    }

    #[test]
    fn multibyte_stored_values_fall_back_whole() {
        // A tampered record can hold anything; the cut points land inside
        // the multibyte chars here, so the full string comes back.
        let profile = with_wallet("0x猩猩猩猩猩猩猩猩猩");
        assert_eq!(profile.short_wallet(), "0x猩猩猩猩猩猩猩猩猩");
    }
}
