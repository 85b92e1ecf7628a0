use dioxus::prelude::*;
use futures::StreamExt;

use crate::hooks::use_session;
use crate::platform;
use crate::state::{AppStore, IdentityVerifier, MockWorldId};

#[derive(Clone)]
enum AuthAction {
    SignIn,
}

#[component]
pub fn AuthModal() -> Element {
    let store = use_context::<AppStore>();
    let mut session = use_session();
    let mut connecting = use_signal(|| false);

    // Use coroutine for lifecycle-safe async sign-in
    let auth_coro = use_coroutine(move |mut rx: UnboundedReceiver<AuthAction>| {
        let store = store.clone();
        async move {
            while let Some(action) = rx.next().await {
                match action {
                    AuthAction::SignIn => {
                        connecting.set(true);
                        match MockWorldId.verify().await {
                            Ok(profile) => {
                                tracing::info!("signed in as {}", profile.id);
                                store.save_profile(&profile);
                                session.write().profile = Some(profile);
                            }
                            Err(e) => {
                                tracing::error!("sign-in failed: {e}");
                                platform::alert(&e.to_string());
                            }
                        }
                        connecting.set(false);
                    }
                }
            }
        }
    });

    let sign_in = move |_| {
        auth_coro.send(AuthAction::SignIn);
    };

    let is_connecting = *connecting.read();

    rsx! {
        div { class: "min-h-screen bg-background flex items-center justify-center p-4",
            div { class: "w-full max-w-sm rounded-lg border border-primary/30 bg-card p-6",
                div { class: "text-center space-y-2 mb-6",
                    div { class: "flex justify-center mb-4",
                        div { class: "p-4 rounded-full bg-primary/10 text-3xl", "🌍" }
                    }
                    h2 { class: "text-2xl font-bold", "Welcome to TARZON" }
                    p { class: "text-sm text-muted-foreground",
                        "Sign in with World ID to claim rewards and play games"
                    }
                }
                button {
                    class: "w-full py-3 rounded-lg font-semibold bg-primary hover:bg-primary/90 text-primary-foreground disabled:opacity-50",
                    disabled: is_connecting,
                    onclick: sign_in,
                    if is_connecting { "Connecting..." } else { "Sign in with World ID" }
                }
                p { class: "text-xs text-center text-muted-foreground mt-4",
                    "Powered by Worldcoin on World App"
                }
            }
        }
    }
}
