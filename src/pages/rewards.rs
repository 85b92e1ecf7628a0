use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::hooks::use_ledger;
use crate::platform;
use crate::state::{AppStore, TxKind};
use crate::{CLAIM_DELAY_MS, TOKEN_SYMBOL};

#[component]
pub fn Rewards() -> Element {
    let store = use_context::<AppStore>();
    let mut ledger = use_ledger();

    // Read once on mount; the countdown below never re-reads storage.
    let mut reward = use_signal({
        let store = store.clone();
        move || store.rewards()
    });
    let mut time_remaining = use_signal(|| reward.read().countdown(platform::now_ms()));
    let mut claiming = use_signal(|| false);

    // 1s tick recomputing eligibility from lastClaimedAt only
    let ticking = use_hook(|| Rc::new(Cell::new(false)));
    use_effect(move || {
        if !ticking.get() {
            ticking.set(true);

            spawn(async move {
                loop {
                    platform::sleep_ms(1_000).await;
                    time_remaining.set(reward.read().countdown(platform::now_ms()));
                }
            });
        }
    });

    let eligible = reward.read().eligible(platform::now_ms());
    let in_flight = *claiming.read();
    let total_claimed = ledger.read().total_credited(TxKind::Reward);

    let on_claim = {
        let store = store.clone();
        move |_| {
            if !reward.read().eligible(platform::now_ms()) || *claiming.read() {
                return;
            }
            claiming.set(true);

            let store = store.clone();
            spawn(async move {
                // Simulated network latency
                platform::sleep_ms(CLAIM_DELAY_MS).await;

                let now = platform::now_ms();
                let mut state = reward.read().clone();
                let mut log = ledger.read().clone();
                match state.claim(&mut log, now) {
                    Ok(()) => {
                        store.save_rewards(&state);
                        store.save_ledger(&log);
                        time_remaining.set(state.countdown(now));
                        reward.set(state);
                        ledger.set(log);
                        tracing::info!("daily reward claimed");
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
                h1 { class: "text-2xl font-bold text-primary flex items-center gap-2", "🎁 Claim Rewards" }
                p { class: "text-sm text-muted-foreground mt-1", "Earn 5 {TOKEN_SYMBOL} every 6 hours" }
            }

            // Claim card
            div { class: "rounded-lg border border-primary/30 bg-gradient-to-br from-primary/10 to-accent/5 p-6 space-y-4",
                div { class: "text-center",
                    div { class: "flex justify-center mb-4",
                        div { class: "p-6 rounded-full bg-primary/20 text-4xl", "🎁" }
                    }
                    h2 { class: "text-3xl font-bold text-primary", "5 {TOKEN_SYMBOL}" }
                    p { class: "text-sm text-muted-foreground", "Available to claim every 6 hours" }
                }

                // Status
                div { class: "flex items-center justify-center gap-2 p-3 rounded-lg bg-background/50",
                    if eligible {
                        span { class: "font-semibold text-green-500", "✓ Ready to Claim!" }
                    } else {
                        span { class: "font-semibold text-muted-foreground", "⏱ Next claim in" }
                    }
                }

                // Timer
                if !eligible {
                    div { class: "text-center p-4 rounded-lg bg-background/50 border border-border",
                        p { class: "text-muted-foreground text-sm mb-2", "Time Remaining" }
                        p { class: "text-3xl font-mono font-bold text-accent", "{time_remaining}" }
                    }
                }

                // Claim button
                button {
                    class: "w-full py-4 rounded-lg text-lg font-bold bg-primary hover:bg-primary/90 disabled:opacity-50",
                    disabled: !eligible || in_flight,
                    onclick: on_claim,
                    if in_flight {
                        "Claiming..."
                    } else if eligible {
                        "Claim Now"
                    } else {
                        "Come Back Later"
                    }
                }

                // Stats
                div { class: "grid grid-cols-2 gap-3 pt-4 border-t border-border",
                    div { class: "text-center",
                        p { class: "text-sm text-muted-foreground", "Total Claimed" }
                        p { class: "text-2xl font-bold text-primary", {format!("{total_claimed}")} }
                    }
                    div { class: "text-center",
                        p { class: "text-sm text-muted-foreground", "Next Claim" }
                        p { class: "text-lg font-semibold text-accent", "5 {TOKEN_SYMBOL}" }
                    }
                }
            }

            // How it works
            div { class: "rounded-lg border border-muted/30 p-4",
                h3 { class: "text-base font-semibold flex items-center gap-2 mb-3", "ℹ How it Works" }
                div { class: "space-y-3",
                    HowToStep { number: 1, title: "Login with World ID", detail: "Verify your identity once" }
                    HowToStep { number: 2, title: "Claim Every 6 Hours", detail: "Fixed 5 {TOKEN_SYMBOL} per claim" }
                    HowToStep { number: 3, title: "Watch Your Balance Grow", detail: "Tokens added to your wallet" }
                }
            }

            // Tip
            div { class: "p-4 rounded-lg bg-accent/10 border border-accent/20",
                p { class: "text-sm",
                    span { class: "font-semibold", "Pro Tip: " }
                    "Combine with Airdrops and Games to earn even more {TOKEN_SYMBOL}!"
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct HowToStepProps {
    number: u8,
    title: &'static str,
    detail: String,
}

#[component]
fn HowToStep(props: HowToStepProps) -> Element {
    rsx! {
        div { class: "flex gap-3",
            div { class: "flex-shrink-0 w-6 h-6 rounded-full bg-primary/20 flex items-center justify-center text-sm font-bold text-primary",
                "{props.number}"
            }
            div {
                p { class: "font-semibold text-sm", "{props.title}" }
                p { class: "text-xs text-muted-foreground", "{props.detail}" }
            }
        }
    }
}
