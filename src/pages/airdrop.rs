use dioxus::prelude::*;

use crate::hooks::{use_daily_countdown, use_ledger};
use crate::platform;
use crate::state::AppStore;
use crate::{AIRDROP_DELAY_MS, AIRDROP_ROUND, COMMUNITY_URL, TOKEN_SYMBOL};

#[component]
pub fn Airdrop() -> Element {
    let store = use_context::<AppStore>();
    let mut ledger = use_ledger();
    let countdown = use_daily_countdown();

    let mut airdrop = use_signal({
        let store = store.clone();
        move || store.airdrop()
    });
    let mut claiming = use_signal(|| false);
    let mut show_success = use_signal(|| false);

    let state = airdrop.read().clone();
    let in_flight = *claiming.read();

    let on_react = {
        let store = store.clone();
        move |_| {
            // Opening the community post counts as the reaction; there is
            // no real verification of the external action.
            platform::open_external(COMMUNITY_URL);
            let mut state = airdrop.read().clone();
            state.react(platform::now_ms());
            store.save_airdrop(&state);
            airdrop.set(state);
        }
    };

    let on_claim = {
        let store = store.clone();
        move |_| {
            if !airdrop.read().claimable() || *claiming.read() {
                return;
            }
            claiming.set(true);

            let store = store.clone();
            spawn(async move {
                // Simulated claim verification
                platform::sleep_ms(AIRDROP_DELAY_MS).await;

                let now = platform::now_ms();
                let mut state = airdrop.read().clone();
                let mut log = ledger.read().clone();
                match state.claim(&mut log, now) {
                    Ok(()) => {
                        store.save_airdrop(&state);
                        store.save_ledger(&log);
                        airdrop.set(state);
                        ledger.set(log);
                        tracing::info!("airdrop round {AIRDROP_ROUND} claimed");

                        show_success.set(true);
                        spawn(async move {
                            platform::sleep_ms(3_000).await;
                            show_success.set(false);
                        });
                    }
                    Err(e) => platform::alert(&e.to_string()),
                }
                claiming.set(false);
            });
        }
    };

    rsx! {
        div { class: "space-y-6",
            header {
                h1 { class: "text-2xl font-bold text-secondary flex items-center gap-2", "📈 Airdrop" }
                p { class: "text-sm text-muted-foreground mt-1", "React & Claim Your Tokens" }
            }

            // Success banner
            if *show_success.read() {
                div { class: "p-4 rounded-lg bg-green-500/10 border border-green-500/30 flex items-center gap-3",
                    span { class: "text-green-500", "✓" }
                    div {
                        p { class: "font-semibold text-green-600", "Success!" }
                        p { class: "text-sm text-green-600", "5 {TOKEN_SYMBOL} added to your balance" }
                    }
                }
            }

            // Airdrop card
            div { class: "rounded-lg border border-secondary/30 bg-gradient-to-br from-secondary/10 to-primary/5 p-6 space-y-4",
                div { class: "text-center",
                    div { class: "flex justify-center mb-4",
                        div { class: "p-6 rounded-full bg-secondary/20 text-4xl", "📈" }
                    }
                    h2 { class: "text-3xl font-bold text-secondary", "5 {TOKEN_SYMBOL}" }
                    p { class: "text-sm text-muted-foreground", "Available once per airdrop round" }
                }

                // Step 1: react
                div {
                    class: if state.has_reacted {
                        "p-4 rounded-lg border bg-green-500/10 border-green-500/30"
                    } else {
                        "p-4 rounded-lg border bg-background/50 border-border"
                    },
                    div { class: "flex items-center justify-between mb-2",
                        span { class: "font-semibold", "❤ React on PUF Community" }
                        if state.has_reacted {
                            span { class: "text-green-500", "✓" }
                        }
                    }
                    p { class: "text-xs text-muted-foreground mb-3",
                        "Show your support by reacting to the TARZON post on PUF"
                    }
                    if state.has_reacted {
                        p { class: "text-xs text-green-600 font-semibold", "Verified!" }
                    } else {
                        button {
                            class: "w-full py-2 rounded-lg border border-border text-sm hover:bg-muted/20",
                            onclick: on_react,
                            "↗ Open PUF Community"
                        }
                    }
                }

                // Step 2: claim
                div {
                    class: if state.has_claimed {
                        "p-4 rounded-lg border bg-green-500/10 border-green-500/30"
                    } else if state.has_reacted {
                        "p-4 rounded-lg border bg-background/50 border-secondary/50"
                    } else {
                        "p-4 rounded-lg border bg-background/50 border-border opacity-50"
                    },
                    div { class: "flex items-center justify-between mb-2",
                        span { class: "font-semibold", "Claim Airdrop" }
                        if state.has_claimed {
                            span { class: "text-green-500", "✓" }
                        }
                    }
                    p { class: "text-xs text-muted-foreground mb-3",
                        if state.has_claimed {
                            "You have claimed this airdrop round"
                        } else if state.has_reacted {
                            "Ready to claim! You have verified your reaction"
                        } else {
                            "React on PUF first to unlock this step"
                        }
                    }
                    button {
                        class: "w-full py-2 rounded-lg text-sm font-semibold bg-secondary hover:bg-secondary/90 disabled:opacity-50",
                        disabled: !state.claimable() || in_flight,
                        onclick: on_claim,
                        if in_flight {
                            "Claiming..."
                        } else if state.has_claimed {
                            "Already Claimed"
                        } else {
                            "Claim Now"
                        }
                    }
                }

                // Stats
                div { class: "grid grid-cols-2 gap-3 pt-4 border-t border-border",
                    div { class: "text-center",
                        p { class: "text-sm text-muted-foreground", "Total Claimed" }
                        p { class: "text-2xl font-bold text-secondary", {format!("{}", state.total_claimed)} }
                    }
                    div { class: "text-center",
                        p { class: "text-sm text-muted-foreground", "Status" }
                        p { class: "text-lg font-semibold text-accent", {state.status_label()} }
                    }
                }
            }

            // Current round
            div { class: "rounded-lg border border-accent/30 bg-accent/5 p-4 space-y-2",
                h3 { class: "text-base font-semibold", "Current Airdrop Round" }
                div { class: "flex justify-between text-sm",
                    span { class: "text-muted-foreground", "Round" }
                    span { class: "font-semibold", "#{AIRDROP_ROUND}" }
                }
                div { class: "flex justify-between text-sm",
                    span { class: "text-muted-foreground", "Time Remaining" }
                    span { class: "font-semibold font-mono", "{countdown}" }
                }
                div { class: "flex justify-between text-sm",
                    span { class: "text-muted-foreground", "Reward" }
                    span { class: "font-semibold text-accent", "5 {TOKEN_SYMBOL}" }
                }
                div { class: "flex justify-between text-sm",
                    span { class: "text-muted-foreground", "Participants" }
                    span { class: "font-semibold", "2,847" }
                }
            }
        }
    }
}
