use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{AirdropState, GameSession, Ledger, RewardState, UserProfile};

pub const PROFILE_KEY: &str = "tarzon_profile";
pub const REWARDS_KEY: &str = "tarzon_rewards";
pub const AIRDROP_KEY: &str = "tarzon_airdrop";
pub const GAME_KEY: &str = "tarzon_game";
pub const LEDGER_KEY: &str = "tarzon_ledger";

/// Raw string-keyed storage: localStorage on the web, an in-memory map on
/// desktop and in tests. Synchronous, no transactions, no schema.
pub trait StorageBackend {
    fn get_raw(&self, key: &str) -> Option<String>;
    fn set_raw(&self, key: &str, value: &str);
}

#[cfg(target_arch = "wasm32")]
struct LocalStorageBackend;

#[cfg(target_arch = "wasm32")]
impl StorageBackend for LocalStorageBackend {
    fn get_raw(&self, key: &str) -> Option<String> {
        use gloo_storage::Storage;
        gloo_storage::LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set_raw(&self, key: &str, value: &str) {
        use gloo_storage::Storage;
        if let Err(e) = gloo_storage::LocalStorage::raw().set_item(key, value) {
            tracing::error!("storage write failed for {key}: {e:?}");
        }
    }
}

#[derive(Default)]
pub struct MemoryBackend {
    values: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

impl StorageBackend for MemoryBackend {
    fn get_raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set_raw(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

/// Typed accessors over the persisted records, injected into views
/// through context instead of ad-hoc key reads. Each record is an
/// independent JSON blob; absent or malformed data reads as the default.
#[derive(Clone)]
pub struct AppStore {
    backend: Rc<dyn StorageBackend>,
}

impl AppStore {
    pub fn shared() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self {
                backend: Rc::new(LocalStorageBackend),
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::in_memory()
        }
    }

    pub fn in_memory() -> Self {
        Self {
            backend: Rc::new(MemoryBackend::default()),
        }
    }

    fn read<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        let Some(raw) = self.backend.get_raw(key) else {
            return T::default();
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("malformed record at {key}, using defaults: {e}");
                T::default()
            }
        }
    }

    fn write<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.backend.set_raw(key, &raw),
            Err(e) => tracing::error!("failed to encode {key}: {e}"),
        }
    }

    pub fn profile(&self) -> Option<UserProfile> {
        self.read(PROFILE_KEY)
    }

    pub fn save_profile(&self, profile: &UserProfile) {
        self.write(PROFILE_KEY, profile);
    }

    pub fn rewards(&self) -> RewardState {
        self.read(REWARDS_KEY)
    }

    pub fn save_rewards(&self, rewards: &RewardState) {
        self.write(REWARDS_KEY, rewards);
    }

    pub fn airdrop(&self) -> AirdropState {
        self.read(AIRDROP_KEY)
    }

    pub fn save_airdrop(&self, airdrop: &AirdropState) {
        self.write(AIRDROP_KEY, airdrop);
    }

    pub fn game(&self) -> GameSession {
        self.read(GAME_KEY)
    }

    pub fn save_game(&self, game: &GameSession) {
        self.write(GAME_KEY, game);
    }

    pub fn ledger(&self) -> Ledger {
        self.read(LEDGER_KEY)
    }

    pub fn save_ledger(&self, ledger: &Ledger) {
        self.write(LEDGER_KEY, ledger);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_records_read_as_defaults() {
        let store = AppStore::in_memory();
        assert_eq!(store.profile(), None);
        assert_eq!(store.rewards(), RewardState::default());
        assert_eq!(store.airdrop(), AirdropState::default());
        assert_eq!(store.game(), GameSession::default());
        assert_eq!(store.ledger(), Ledger::default());
    }

    #[test]
    fn malformed_records_read_as_defaults() {
        let store = AppStore::in_memory();
        store.backend.set_raw(REWARDS_KEY, "not json at all {");
        store.backend.set_raw(LEDGER_KEY, "[1, 2, 3]");
        assert_eq!(store.rewards(), RewardState::default());
        assert_eq!(store.ledger(), Ledger::default());
    }

    #[test]
    fn records_round_trip() {
        let store = AppStore::in_memory();
        let profile = UserProfile {
            id: "world_abc123def".to_string(),
            wallet: "0xdeadbeef".to_string(),
            verified: true,
            joined_at: 1_700_000_000_000,
        };
        store.save_profile(&profile);
        assert_eq!(store.profile(), Some(profile));

        let mut rewards = RewardState::default();
        rewards.last_claimed_at = Some(42);
        store.save_rewards(&rewards);
        assert_eq!(store.rewards(), rewards);
    }

    #[test]
    fn records_use_the_published_field_names() {
        let store = AppStore::in_memory();
        let mut rewards = RewardState::default();
        rewards.last_claimed_at = Some(42);
        store.save_rewards(&rewards);

        let raw = store.backend.get_raw(REWARDS_KEY).unwrap();
        assert!(raw.contains("\"lastClaimedAt\":42"));
        assert!(raw.contains("\"totalClaimed\""));
        assert!(raw.contains("\"nextClaimTime\""));
    }
}
