use dioxus::prelude::*;

use crate::components::AuthModal;
use crate::hooks::{use_ledger, use_session};
use crate::route::Route;

#[component]
pub fn Layout() -> Element {
    let session = use_session();
    let ledger = use_ledger();

    // Sign-in gate: no routed page renders until a profile exists.
    if session.read().profile.is_none() {
        return rsx! { AuthModal {} };
    }

    let balance = ledger.read().balance();

    rsx! {
        div { class: "min-h-screen bg-background pb-24",
            // Header: logo + live balance
            header { class: "sticky top-0 z-40 border-b border-border bg-background/95 backdrop-blur",
                div { class: "mx-auto max-w-md px-4 py-4 flex items-center justify-between",
                    Link { to: Route::Home {},
                        h1 { class: "text-2xl font-bold text-primary", "TARZON" }
                        p { class: "text-xs text-muted-foreground", "Worldcoin Chain" }
                    }
                    div { class: "text-right",
                        p { class: "text-sm text-muted-foreground", "Balance" }
                        p { class: "text-2xl font-bold text-accent", {format!("{balance:.2}")} }
                    }
                }
            }

            // Routed page
            main { class: "mx-auto max-w-md px-4 py-6",
                Outlet::<Route> {}
            }

            // Bottom tab bar
            nav { class: "fixed bottom-0 left-0 right-0 border-t border-border bg-card/95 backdrop-blur",
                div { class: "mx-auto max-w-md px-4 py-2",
                    div { class: "flex justify-around items-center",
                        NavTab { to: Route::Rewards {}, label: "Rewards", icon: "🎁" }
                        NavTab { to: Route::Airdrop {}, label: "Airdrop", icon: "📈" }
                        NavTab { to: Route::Game {}, label: "Game", icon: "🎮" }
                        NavTab { to: Route::Leaderboard {}, label: "Rank", icon: "📊" }
                        NavTab { to: Route::Wallet {}, label: "Wallet", icon: "👛" }
                    }
                }
            }
        }
    }
}

#[component]
fn NavTab(to: Route, label: &'static str, icon: &'static str) -> Element {
    rsx! {
        Link {
            to,
            class: "flex flex-col items-center py-3 px-4 rounded-lg text-muted-foreground hover:text-foreground transition-colors",
            span { class: "text-lg mb-1", "{icon}" }
            span { class: "text-xs font-medium", "{label}" }
        }
    }
}
