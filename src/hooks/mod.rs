mod use_countdown;
mod use_ledger;
mod use_session;

pub use use_countdown::{format_hms, ms_until_utc_midnight, use_daily_countdown};
pub use use_ledger::use_ledger;
pub use use_session::use_session;
