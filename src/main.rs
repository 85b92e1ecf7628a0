#![allow(non_snake_case)]

mod components;
mod hooks;
mod pages;
mod platform;
mod route;
mod state;

use dioxus::prelude::*;
use route::Route;
use state::{AppStore, UserProfile};

// Configuration
pub const TOKEN_SYMBOL: &str = "$TARZON";
pub const REWARD_AMOUNT: f64 = 5.0;
pub const AIRDROP_AMOUNT: f64 = 5.0;
pub const GAME_ENTRY_FEE: f64 = 1.0;
pub const CLAIM_COOLDOWN_MS: i64 = 6 * 60 * 60 * 1000;
pub const AIRDROP_ROUND: u32 = 5;
pub const COMMUNITY_URL: &str = "https://puf.community/tarzon";

// Simulated latencies (ms)
pub const CLAIM_DELAY_MS: u32 = 1_000;
pub const AIRDROP_DELAY_MS: u32 = 1_500;
pub const SIGN_IN_DELAY_MS: u32 = 1_500;
pub const WITHDRAW_DELAY_MS: u32 = 2_000;

fn main() {
    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default();

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Global state providers: the typed store plus the two records every
    // page shares (identity and the balance ledger).
    let store = use_context_provider(AppStore::shared);
    {
        let store = store.clone();
        use_context_provider(move || {
            Signal::new(SessionState {
                profile: store.profile(),
            })
        });
    }
    use_context_provider(move || Signal::new(store.ledger()));

    rsx! {
        Router::<Route> {}
    }
}

// Global state types
#[derive(Clone, Default, Debug)]
pub struct SessionState {
    pub profile: Option<UserProfile>,
}
