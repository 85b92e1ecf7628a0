use dioxus::prelude::*;

use crate::state::Ledger;

/// Global ledger signal, provided once at app start from the store.
/// Pages mutate a working copy, persist it through
/// [`crate::state::AppStore::save_ledger`], and write it back here so the
/// balance shown in the shell stays consistent across pages.
pub fn use_ledger() -> Signal<Ledger> {
    use_context::<Signal<Ledger>>()
}
