use dioxus::prelude::*;

use crate::hooks::{use_daily_countdown, use_ledger};
use crate::state::AppStore;
use crate::TOKEN_SYMBOL;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Today,
    Week,
    Stats,
}

struct RankedPlayer {
    rank: u32,
    player: &'static str,
    gorillas: u32,
    score: u32,
    reward: u32,
}

// Display-only standings; there is no backend feeding this board.
const TOP_PLAYERS: &[RankedPlayer] = &[
    RankedPlayer { rank: 1, player: "GorillaMaster", gorillas: 245, score: 12_250, reward: 500 },
    RankedPlayer { rank: 2, player: "JunglePro", gorillas: 198, score: 9_900, reward: 300 },
    RankedPlayer { rank: 3, player: "RescueHero", gorillas: 156, score: 7_800, reward: 150 },
    RankedPlayer { rank: 4, player: "TarzanFan", gorillas: 134, score: 6_700, reward: 75 },
    RankedPlayer { rank: 5, player: "ApeSaver", gorillas: 121, score: 6_050, reward: 50 },
    RankedPlayer { rank: 6, player: "WildRunner", gorillas: 108, score: 5_400, reward: 25 },
    RankedPlayer { rank: 7, player: "FireFighter", gorillas: 95, score: 4_750, reward: 25 },
    RankedPlayer { rank: 8, player: "CanopyKing", gorillas: 87, score: 4_350, reward: 25 },
    RankedPlayer { rank: 9, player: "VineSwinger", gorillas: 76, score: 3_800, reward: 25 },
    RankedPlayer { rank: 10, player: "BananaBoss", gorillas: 64, score: 3_200, reward: 25 },
];

/// Mean score delta across the round's rescues.
fn avg_per_rescue(score: u32, gorillas: u32) -> u32 {
    if gorillas == 0 {
        0
    } else {
        score / gorillas
    }
}

fn medal(rank: u32) -> &'static str {
    match rank {
        1 => "🥇",
        2 => "🥈",
        3 => "🥉",
        _ => "",
    }
}

#[component]
pub fn Leaderboard() -> Element {
    let store = use_context::<AppStore>();
    let ledger = use_ledger();
    let countdown = use_daily_countdown();

    let mut active_tab = use_signal(|| Tab::Today);

    let game = use_hook(move || store.game());
    let tab = *active_tab.read();
    let lifetime_earned = ledger.read().total_earned();
    let avg_rescue = avg_per_rescue(game.score, game.gorillas_rescued);

    rsx! {
        div { class: "space-y-6",
            header {
                h1 { class: "text-2xl font-bold text-primary flex items-center gap-2", "📊 Leaderboard" }
                p { class: "text-sm text-muted-foreground mt-1", "Top rescuers win daily prizes" }
            }

            // Round countdown
            div { class: "rounded-lg border border-accent/30 bg-accent/5 p-4 flex items-center justify-between",
                div {
                    p { class: "text-sm text-muted-foreground", "Round ends in" }
                    p { class: "text-xl font-mono font-bold text-accent", "{countdown}" }
                }
                div { class: "text-right",
                    p { class: "text-sm text-muted-foreground", "Prize Pool" }
                    p { class: "text-xl font-bold text-primary", "50,000 {TOKEN_SYMBOL}" }
                }
            }

            // Your position
            div { class: "rounded-lg border border-primary/30 bg-gradient-to-br from-primary/10 to-accent/5 p-4",
                h3 { class: "text-base font-semibold mb-3", "Your Position" }
                div { class: "grid grid-cols-3 gap-3",
                    div { class: "text-center",
                        p { class: "text-xs text-muted-foreground mb-1", "Rank" }
                        p { class: "text-2xl font-bold text-primary", "#847" }
                    }
                    div { class: "text-center",
                        p { class: "text-xs text-muted-foreground mb-1", "Gorillas" }
                        p { class: "text-2xl font-bold text-accent", "{game.gorillas_rescued}" }
                    }
                    div { class: "text-center",
                        p { class: "text-xs text-muted-foreground mb-1", "Score" }
                        p { class: "text-2xl font-bold", "{game.score}" }
                    }
                }
            }

            // Tabs
            div { class: "flex gap-2",
                TabButton { label: "Today", selected: tab == Tab::Today, onclick: move |_| active_tab.set(Tab::Today) }
                TabButton { label: "This Week", selected: tab == Tab::Week, onclick: move |_| active_tab.set(Tab::Week) }
                TabButton { label: "My Stats", selected: tab == Tab::Stats, onclick: move |_| active_tab.set(Tab::Stats) }
            }

            match tab {
                // The weekly board reuses today's standings
                Tab::Today | Tab::Week => rsx! {
                    div { class: "space-y-2",
                        for p in TOP_PLAYERS {
                            div {
                                key: "{p.rank}",
                                class: if p.rank <= 3 {
                                    "flex items-center justify-between p-3 rounded-lg border border-accent/30 bg-accent/5"
                                } else {
                                    "flex items-center justify-between p-3 rounded-lg border border-border bg-card"
                                },
                                div { class: "flex items-center gap-3 flex-1",
                                    span { class: "font-bold text-accent w-8",
                                        if p.rank <= 3 { {medal(p.rank)} } else { "#{p.rank}" }
                                    }
                                    div { class: "flex-1",
                                        p { class: "font-semibold text-sm", "{p.player}" }
                                        p { class: "text-xs text-muted-foreground",
                                            "{p.gorillas} gorillas • {p.score} pts"
                                        }
                                    }
                                }
                                span { class: "text-sm font-bold text-accent", "+{p.reward} {TOKEN_SYMBOL}" }
                            }
                        }
                    }
                },
                Tab::Stats => rsx! {
                    div { class: "space-y-3",
                        StatRow { label: "Games Played", value: format!("{}", game.round_number) }
                        StatRow { label: "Gorillas Rescued", value: format!("{}", game.gorillas_rescued) }
                        StatRow { label: "Best Score", value: format!("{}", game.score) }
                        StatRow { label: "Avg per Rescue", value: format!("{avg_rescue}") }
                        StatRow { label: "Lifetime Earned", value: format!("{lifetime_earned} {TOKEN_SYMBOL}") }
                    }
                },
            }

            // Prize tiers
            div { class: "rounded-lg border border-muted/30 p-4",
                h3 { class: "text-base font-semibold mb-3", "🏆 Prize Distribution" }
                div { class: "space-y-2 text-sm",
                    PrizeRow { tier: "🥇 1st Place", amount: "500 {TOKEN_SYMBOL}" }
                    PrizeRow { tier: "🥈 2nd Place", amount: "300 {TOKEN_SYMBOL}" }
                    PrizeRow { tier: "🥉 3rd Place", amount: "150 {TOKEN_SYMBOL}" }
                    PrizeRow { tier: "4th - 5th", amount: "50-75 {TOKEN_SYMBOL}" }
                    PrizeRow { tier: "6th - 50th", amount: "25 {TOKEN_SYMBOL}" }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct TabButtonProps {
    label: &'static str,
    selected: bool,
    onclick: EventHandler<MouseEvent>,
}

#[component]
fn TabButton(props: TabButtonProps) -> Element {
    rsx! {
        button {
            class: if props.selected {
                "flex-1 py-2 rounded-lg text-sm font-semibold bg-primary text-primary-foreground"
            } else {
                "flex-1 py-2 rounded-lg text-sm border border-border hover:bg-muted/20"
            },
            onclick: move |e| props.onclick.call(e),
            "{props.label}"
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct StatRowProps {
    label: &'static str,
    value: String,
}

#[component]
fn StatRow(props: StatRowProps) -> Element {
    rsx! {
        div { class: "flex items-center justify-between p-3 rounded-lg border border-border bg-card",
            span { class: "text-sm text-muted-foreground", "{props.label}" }
            span { class: "font-bold", "{props.value}" }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct PrizeRowProps {
    tier: &'static str,
    amount: String,
}

#[component]
fn PrizeRow(props: PrizeRowProps) -> Element {
    rsx! {
        div { class: "flex justify-between",
            span { class: "text-muted-foreground", "{props.tier}" }
            span { class: "font-semibold text-accent", "{props.amount}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_per_rescue_is_the_mean_delta() {
        assert_eq!(avg_per_rescue(150, 3), 50);
        assert_eq!(avg_per_rescue(74, 1), 74);
        // A round with no rescues shows zero instead of dividing by it.
        assert_eq!(avg_per_rescue(0, 0), 0);
    }
}
