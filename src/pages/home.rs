use dioxus::prelude::*;

use crate::hooks::use_daily_countdown;
use crate::route::Route;
use crate::TOKEN_SYMBOL;

#[component]
pub fn Home() -> Element {
    let countdown = use_daily_countdown();

    rsx! {
        div { class: "space-y-6",
            // Featured actions grid
            div { class: "grid grid-cols-2 gap-4",
                FeatureCard {
                    to: Route::Rewards {},
                    icon: "🎁",
                    title: "Claim Rewards",
                    line1: "+5 {TOKEN_SYMBOL}",
                    line2: "Every 6 hours",
                    span2: false,
                }
                FeatureCard {
                    to: Route::Airdrop {},
                    icon: "📈",
                    title: "Airdrop",
                    line1: "+5 {TOKEN_SYMBOL}",
                    line2: "React & Claim",
                    span2: false,
                }
                FeatureCard {
                    to: Route::Game {},
                    icon: "🔥",
                    title: "Jungle Rescue",
                    line1: "Save Gorillas & Earn",
                    line2: "1 {TOKEN_SYMBOL} to enter • Top 50 get rewards",
                    span2: true,
                }
                FeatureCard {
                    to: Route::Leaderboard {},
                    icon: "🎮",
                    title: "Leaderboard",
                    line1: "Check your rank & prizes",
                    line2: "Daily 24-hour rounds",
                    span2: true,
                }
                FeatureCard {
                    to: Route::Wallet {},
                    icon: "👛",
                    title: "Wallet",
                    line1: "Balance & transactions",
                    line2: "Withdraw to Worldcoin Chain",
                    span2: true,
                }
            }

            // Round status
            div { class: "rounded-lg border border-primary/30 bg-primary/5 p-4 space-y-2",
                h3 { class: "text-base font-semibold flex items-center gap-2", "🔥 Current Game Session" }
                div { class: "flex justify-between text-sm",
                    span { class: "text-muted-foreground", "Time Remaining" }
                    span { class: "font-semibold font-mono", "{countdown}" }
                }
                div { class: "flex justify-between text-sm",
                    span { class: "text-muted-foreground", "Participants" }
                    span { class: "font-semibold", "1,247" }
                }
                div { class: "flex justify-between text-sm",
                    span { class: "text-muted-foreground", "Prize Pool" }
                    span { class: "font-semibold text-accent", "50,000 {TOKEN_SYMBOL}" }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct FeatureCardProps {
    to: Route,
    icon: &'static str,
    title: &'static str,
    line1: String,
    line2: String,
    span2: bool,
}

#[component]
fn FeatureCard(props: FeatureCardProps) -> Element {
    let span_class = if props.span2 { "col-span-2" } else { "" };

    rsx! {
        Link {
            to: props.to.clone(),
            class: "{span_class} rounded-lg border border-border bg-card hover:border-primary/50 transition-colors",
            div { class: "p-4 text-center",
                div { class: "flex justify-center mb-3",
                    div { class: "p-3 rounded-lg bg-primary/10 text-xl", "{props.icon}" }
                }
                h3 { class: "font-semibold text-sm mb-1", "{props.title}" }
                p { class: "text-xs text-muted-foreground", "{props.line1}" }
                p { class: "text-xs text-muted-foreground mt-2", "{props.line2}" }
            }
        }
    }
}
