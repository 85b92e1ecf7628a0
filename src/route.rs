use dioxus::prelude::*;

use crate::components::Layout;
use crate::pages::{Airdrop, Game, Home, Leaderboard, Rewards, Wallet};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},
    #[route("/rewards")]
    Rewards {},
    #[route("/airdrop")]
    Airdrop {},
    #[route("/game")]
    Game {},
    #[route("/leaderboard")]
    Leaderboard {},
    #[route("/wallet")]
    Wallet {},
}
