use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::hooks::{use_daily_countdown, use_ledger};
use crate::platform;
use crate::route::Route;
use crate::state::AppStore;
use crate::{GAME_ENTRY_FEE, TOKEN_SYMBOL};

#[component]
pub fn Game() -> Element {
    let store = use_context::<AppStore>();
    let mut ledger = use_ledger();
    let countdown = use_daily_countdown();

    let mut session = use_signal({
        let store = store.clone();
        move || store.game()
    });
    let mut show_game_screen = use_signal(|| false);
    let mut confirm_exit = use_signal(|| false);
    // In-game stopwatch, in tenths of a second.
    let mut game_timer = use_signal(|| 0u32);

    // 100ms tick while a round is running
    let ticking = use_hook(|| Rc::new(Cell::new(false)));
    use_effect(move || {
        if !ticking.get() {
            ticking.set(true);

            spawn(async move {
                loop {
                    platform::sleep_ms(100).await;
                    if session.read().is_playing {
                        let next = *game_timer.read() + 1;
                        game_timer.set(next);
                    }
                }
            });
        }
    });

    let on_start = {
        let store = store.clone();
        move |_| {
            if ledger.read().balance() < GAME_ENTRY_FEE {
                platform::alert(&format!(
                    "Not enough {TOKEN_SYMBOL}. You need 1 {TOKEN_SYMBOL} to play."
                ));
                return;
            }

            let now = platform::now_ms();
            let mut state = session.read().clone();
            let mut log = ledger.read().clone();
            match state.start(&mut log, now) {
                Ok(()) => {
                    // The entry fee is durable immediately; the session
                    // record is only persisted when the round ends.
                    store.save_ledger(&log);
                    ledger.set(log);
                    session.set(state);
                    game_timer.set(0);
                    confirm_exit.set(false);
                    show_game_screen.set(true);
                    tracing::info!("game round started");
                }
                Err(e) => platform::alert(&e.to_string()),
            }
        }
    };

    let on_rescue = move |_| {
        let mut state = session.read().clone();
        state.rescue(platform::random_unit());
        session.set(state);
    };

    // Leaving mid-round forfeits the entry fee, so ask first.
    let on_exit = move |_| {
        if session.read().is_playing {
            confirm_exit.set(true);
        } else {
            show_game_screen.set(false);
        }
    };

    let on_confirm_end = {
        let store = store.clone();
        move |_| {
            let mut state = session.read().clone();
            state.finish(platform::now_ms());
            store.save_game(&state);
            session.set(state);
            confirm_exit.set(false);
            show_game_screen.set(false);
            tracing::info!("game round ended");
        }
    };

    let on_continue_playing = move |_| confirm_exit.set(false);

    let state = session.read().clone();
    let balance = ledger.read().balance();
    let elapsed = *game_timer.read() as f64 / 10.0;

    // Active game screen
    if *show_game_screen.read() && state.is_playing {
        return rsx! {
            div { class: "fixed inset-0 bg-background z-50 overflow-hidden",
                // Round header
                div { class: "flex items-center justify-between p-4 border-b border-border",
                    div {
                        p { class: "text-sm text-muted-foreground", "Gorillas Rescued" }
                        p { class: "text-2xl font-bold text-accent", "{state.gorillas_rescued}" }
                    }
                    div {
                        p { class: "text-sm text-muted-foreground", "Score" }
                        p { class: "text-2xl font-bold text-primary", "{state.score}" }
                    }
                    div {
                        p { class: "text-sm text-muted-foreground", "Time" }
                        p { class: "text-lg font-mono font-bold", {format!("{elapsed:.1}s")} }
                    }
                }

                // Play area
                div { class: "flex flex-col items-center justify-center p-4 h-full",
                    div { class: "w-full max-w-xs flex flex-col items-center justify-center gap-8",
                        div { class: "relative w-32 h-32 rounded-full bg-gradient-to-b from-primary/30 to-secondary/30 flex items-center justify-center animate-pulse",
                            span { class: "text-5xl", "🔥" }
                        }
                        div { class: "text-center",
                            p { class: "text-lg font-bold mb-4", "Gorilla in Danger!" }
                            div { class: "text-6xl mb-4", "🦍" }
                            p { class: "text-sm text-muted-foreground", "Tap rapidly to rescue" }
                        }
                        button {
                            class: "w-full py-8 rounded-lg text-xl font-bold bg-accent hover:bg-accent/90 animate-pulse",
                            onclick: on_rescue,
                            "RESCUE GORILLA"
                        }
                        button {
                            class: "py-2 px-4 rounded-lg border border-border text-xs",
                            onclick: on_exit,
                            "✕ Exit Game"
                        }
                    }
                }

                // Exit confirmation
                if *confirm_exit.read() {
                    div { class: "fixed inset-0 bg-black/50 z-50 flex items-center justify-center p-4",
                        div { class: "w-full max-w-xs rounded-lg border border-border bg-card p-4 space-y-3",
                            h3 { class: "text-center font-bold", "End Game Session?" }
                            p { class: "text-center text-sm text-muted-foreground",
                                "You have rescued {state.gorillas_rescued} gorillas with {state.score} points"
                            }
                            p { class: "text-sm text-center text-muted-foreground",
                                "Your entry fee of 1 {TOKEN_SYMBOL} will not be refunded."
                            }
                            div { class: "flex gap-3",
                                button {
                                    class: "flex-1 py-2 rounded-lg border border-border",
                                    onclick: on_continue_playing,
                                    "Continue Playing"
                                }
                                button {
                                    class: "flex-1 py-2 rounded-lg bg-destructive hover:bg-destructive/90",
                                    onclick: on_confirm_end,
                                    "End Game"
                                }
                            }
                        }
                    }
                }
            }
        };
    }

    // Lobby
    rsx! {
        div { class: "space-y-6",
            header {
                h1 { class: "text-2xl font-bold text-accent flex items-center gap-2", "🔥 Jungle Rescue" }
                p { class: "text-sm text-muted-foreground mt-1", "Save gorillas, win rewards" }
            }

            div { class: "rounded-lg border border-accent/30 bg-gradient-to-br from-accent/10 to-primary/5 p-6 space-y-4",
                div { class: "text-center",
                    h2 { class: "text-2xl font-bold", "Save the Gorillas" }
                    p { class: "text-sm text-muted-foreground", "Escape the burning jungle & rescue gorillas" }
                }

                // Session info
                div { class: "p-4 rounded-lg bg-background/50 space-y-3",
                    div { class: "flex justify-between items-center",
                        span { class: "text-sm text-muted-foreground", "Your Balance" }
                        span { class: "text-lg font-bold text-accent", {format!("{balance} {TOKEN_SYMBOL}")} }
                    }
                    div { class: "flex justify-between items-center",
                        span { class: "text-sm text-muted-foreground", "Entry Fee" }
                        span { class: "text-lg font-bold text-destructive", "1 {TOKEN_SYMBOL}" }
                    }
                    div { class: "h-px bg-border" }
                    div { class: "flex justify-between items-center",
                        span { class: "text-sm text-muted-foreground", "Session Active" }
                        span { class: "text-lg font-bold font-mono text-accent", "{countdown}" }
                    }
                }

                // Lifetime stats
                div { class: "grid grid-cols-3 gap-3 p-4 rounded-lg bg-background/50",
                    div { class: "text-center",
                        p { class: "text-xs text-muted-foreground mb-1", "Gorillas Saved" }
                        p { class: "text-2xl font-bold text-accent", "{state.gorillas_rescued}" }
                    }
                    div { class: "text-center",
                        p { class: "text-xs text-muted-foreground mb-1", "Best Score" }
                        p { class: "text-2xl font-bold text-primary", "{state.score}" }
                    }
                    div { class: "text-center",
                        p { class: "text-xs text-muted-foreground mb-1", "Games Played" }
                        p { class: "text-2xl font-bold", "{state.round_number}" }
                    }
                }

                button {
                    class: "w-full py-4 rounded-lg text-lg font-bold bg-accent hover:bg-accent/90 disabled:opacity-50",
                    disabled: balance < GAME_ENTRY_FEE,
                    onclick: on_start,
                    if balance < GAME_ENTRY_FEE { "Not Enough Tokens" } else { "▶ Start Game" }
                }
            }

            // How to play
            div { class: "rounded-lg border border-muted/30 p-4",
                h3 { class: "text-base font-semibold flex items-center gap-2 mb-3", "ℹ How to Play" }
                div { class: "space-y-3",
                    PlayStep { number: 1, title: "Pay Entry Fee", detail: "1 {TOKEN_SYMBOL} to participate" }
                    PlayStep { number: 2, title: "Rescue Gorillas", detail: "Tap to rescue gorillas from the burning jungle" }
                    PlayStep { number: 3, title: "Check Leaderboard", detail: "Top 50 players earn rewards" }
                    PlayStep { number: 4, title: "Earn Rewards", detail: "Daily 24-hour rounds with prize pools" }
                }
            }

            // Leaderboard preview
            div { class: "rounded-lg border border-primary/30 p-4",
                div { class: "flex items-center justify-between mb-3",
                    h3 { class: "text-base font-semibold flex items-center gap-2", "🏆 Today's Top Players" }
                    Link { to: Route::Leaderboard {}, class: "text-sm text-primary", "View All" }
                }
                div { class: "space-y-2",
                    PreviewRow { rank: 1, player: "GorillaMaster", gorillas: 245, reward: 500 }
                    PreviewRow { rank: 2, player: "JunglePro", gorillas: 198, reward: 300 }
                    PreviewRow { rank: 3, player: "RescueHero", gorillas: 156, reward: 150 }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct PlayStepProps {
    number: u8,
    title: &'static str,
    detail: String,
}

#[component]
fn PlayStep(props: PlayStepProps) -> Element {
    rsx! {
        div { class: "flex gap-3",
            div { class: "flex-shrink-0 w-6 h-6 rounded-full bg-accent/20 flex items-center justify-center text-xs font-bold text-accent",
                "{props.number}"
            }
            div {
                p { class: "font-semibold text-sm", "{props.title}" }
                p { class: "text-xs text-muted-foreground", "{props.detail}" }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct PreviewRowProps {
    rank: u32,
    player: &'static str,
    gorillas: u32,
    reward: u32,
}

#[component]
fn PreviewRow(props: PreviewRowProps) -> Element {
    rsx! {
        div { class: "flex items-center justify-between p-2 rounded-lg bg-muted/20",
            div { class: "flex items-center gap-3 flex-1",
                span { class: "font-bold text-accent w-6", "#{props.rank}" }
                div { class: "flex-1",
                    p { class: "font-semibold text-sm", "{props.player}" }
                    p { class: "text-xs text-muted-foreground", "{props.gorillas} gorillas" }
                }
            }
            span { class: "text-sm font-bold text-accent", "{props.reward} {TOKEN_SYMBOL}" }
        }
    }
}
