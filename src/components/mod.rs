mod auth_modal;
mod layout;

pub use auth_modal::AuthModal;
pub use layout::Layout;
