use dioxus::prelude::*;

use crate::SessionState;

/// Signed-in identity, if any. `None` keeps the shell on the auth modal.
pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}
