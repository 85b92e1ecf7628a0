mod airdrop;
mod game;
mod home;
mod leaderboard;
mod rewards;
mod wallet;

pub use airdrop::Airdrop;
pub use game::Game;
pub use home::Home;
pub use leaderboard::Leaderboard;
pub use rewards::Rewards;
pub use wallet::Wallet;
