use dioxus::prelude::*;

use crate::hooks::{use_ledger, use_session};
use crate::platform;
use crate::state::{parse_withdrawal, withdraw, AppStore, TxStatus};
use crate::{TOKEN_SYMBOL, WITHDRAW_DELAY_MS};

#[component]
pub fn Wallet() -> Element {
    let store = use_context::<AppStore>();
    let mut ledger = use_ledger();
    let session = use_session();

    let mut copied = use_signal(|| false);
    let mut show_withdraw = use_signal(|| false);
    let mut withdraw_amount = use_signal(String::new);
    let mut processing = use_signal(|| false);

    let wallet_address = session
        .read()
        .profile
        .as_ref()
        .map(|p| p.wallet.clone())
        .unwrap_or_default();
    let short_address = session
        .read()
        .profile
        .as_ref()
        .map(|p| p.short_wallet())
        .unwrap_or_default();

    let log = ledger.read().clone();
    let balance = log.balance();
    let total_earned = log.total_earned();
    let in_flight = *processing.read();

    let on_copy = {
        let wallet_address = wallet_address.clone();
        move |_| {
            platform::copy_to_clipboard(&wallet_address);
            copied.set(true);
            spawn(async move {
                platform::sleep_ms(2_000).await;
                copied.set(false);
            });
        }
    };

    let on_withdraw = {
        let store = store.clone();
        move |_| {
            if *processing.read() {
                return;
            }
            let balance = ledger.read().balance();
            let amount = match parse_withdrawal(withdraw_amount.read().as_str(), balance) {
                Ok(amount) => amount,
                Err(e) => {
                    platform::alert(&e.to_string());
                    return;
                }
            };
            processing.set(true);

            let store = store.clone();
            spawn(async move {
                // Simulated on-chain transfer
                platform::sleep_ms(WITHDRAW_DELAY_MS).await;

                let now = platform::now_ms();
                let mut log = ledger.read().clone();
                withdraw(&mut log, amount, now);
                store.save_ledger(&log);
                ledger.set(log);
                tracing::info!("withdrew {amount} to wallet");

                processing.set(false);
                show_withdraw.set(false);
                withdraw_amount.set(String::new());
            });
        }
    };

    rsx! {
        div { class: "space-y-6",
            header {
                h1 { class: "text-2xl font-bold text-primary flex items-center gap-2", "👛 Wallet" }
                p { class: "text-sm text-muted-foreground mt-1", "Your {TOKEN_SYMBOL} balance & history" }
            }

            // Balance card
            div { class: "rounded-lg border border-primary/30 bg-gradient-to-br from-primary/10 to-accent/5 p-6 space-y-4",
                div { class: "text-center",
                    p { class: "text-sm text-muted-foreground mb-1", "Total Balance" }
                    h2 { class: "text-4xl font-bold text-primary", {format!("{balance:.2}")} }
                    p { class: "text-sm text-muted-foreground", "{TOKEN_SYMBOL}" }
                }

                // Address row
                div { class: "flex items-center justify-between p-3 rounded-lg bg-background/50",
                    div {
                        p { class: "text-xs text-muted-foreground", "Wallet Address" }
                        p { class: "text-sm font-mono", "{short_address}" }
                    }
                    button {
                        class: "py-1 px-3 rounded-lg border border-border text-xs hover:bg-muted/20",
                        onclick: on_copy,
                        if *copied.read() { "✓ Copied" } else { "Copy" }
                    }
                }

                div { class: "flex gap-3",
                    button {
                        class: "flex-1 py-3 rounded-lg font-semibold bg-primary hover:bg-primary/90 disabled:opacity-50",
                        disabled: balance <= 0.0,
                        onclick: move |_| show_withdraw.set(true),
                        "↑ Withdraw"
                    }
                    button {
                        class: "flex-1 py-3 rounded-lg font-semibold border border-border opacity-50",
                        disabled: true,
                        "↓ Deposit"
                    }
                }
            }

            // Withdraw sheet
            if *show_withdraw.read() {
                div { class: "fixed inset-0 bg-black/50 z-50 flex items-end justify-center",
                    div { class: "w-full max-w-md rounded-t-lg border border-border bg-card p-4 space-y-4",
                        div { class: "flex items-center justify-between",
                            h3 { class: "font-bold", "Withdraw {TOKEN_SYMBOL}" }
                            button {
                                class: "text-muted-foreground",
                                onclick: move |_| {
                                    if !*processing.read() {
                                        show_withdraw.set(false);
                                        withdraw_amount.set(String::new());
                                    }
                                },
                                "✕"
                            }
                        }
                        div {
                            p { class: "text-sm text-muted-foreground mb-2",
                                {format!("Available: {balance:.2} {TOKEN_SYMBOL}")}
                            }
                            input {
                                class: "w-full p-3 rounded-lg border border-border bg-background font-mono",
                                r#type: "text",
                                inputmode: "decimal",
                                placeholder: "0.00",
                                value: "{withdraw_amount}",
                                oninput: move |e| withdraw_amount.set(e.value()),
                            }
                        }
                        p { class: "text-xs text-muted-foreground",
                            "Tokens are sent to your connected Worldcoin Chain address"
                        }
                        button {
                            class: "w-full py-3 rounded-lg font-bold bg-primary hover:bg-primary/90 disabled:opacity-50",
                            disabled: in_flight,
                            onclick: on_withdraw,
                            if in_flight { "Processing..." } else { "Confirm Withdrawal" }
                        }
                    }
                }
            }

            // Earnings summary
            div { class: "rounded-lg border border-accent/30 bg-accent/5 p-4 flex items-center justify-between",
                div {
                    p { class: "text-sm text-muted-foreground", "Lifetime Earned" }
                    p { class: "text-xl font-bold text-accent", {format!("{total_earned} {TOKEN_SYMBOL}")} }
                }
                span { class: "text-3xl", "🏆" }
            }

            // Transaction history
            div { class: "rounded-lg border border-muted/30 p-4",
                h3 { class: "text-base font-semibold mb-3", "Recent Transactions" }
                if log.entries.is_empty() {
                    div { class: "text-center py-8",
                        p { class: "text-3xl mb-2", "📭" }
                        p { class: "text-sm text-muted-foreground", "No transactions yet" }
                        p { class: "text-xs text-muted-foreground", "Claim rewards or play games to get started" }
                    }
                } else {
                    div { class: "space-y-2",
                        for tx in log.entries.iter() {
                            div {
                                key: "{tx.id}",
                                class: "flex items-center justify-between p-3 rounded-lg bg-muted/10",
                                div { class: "flex items-center gap-3",
                                    span { class: "text-lg",
                                        if tx.amount >= 0.0 { "↓" } else { "↑" }
                                    }
                                    div {
                                        p { class: "text-sm font-semibold", "{tx.description}" }
                                        p { class: "text-xs text-muted-foreground",
                                            {platform::format_timestamp(tx.timestamp)}
                                        }
                                    }
                                }
                                div { class: "text-right",
                                    p {
                                        class: if tx.amount >= 0.0 {
                                            "text-sm font-bold text-green-500"
                                        } else {
                                            "text-sm font-bold text-destructive"
                                        },
                                        if tx.amount >= 0.0 {
                                            {format!("+{} {TOKEN_SYMBOL}", tx.amount)}
                                        } else {
                                            {format!("{} {TOKEN_SYMBOL}", tx.amount)}
                                        }
                                    }
                                    p { class: "text-xs text-muted-foreground",
                                        if tx.status == TxStatus::Pending { "Pending" } else { "Done" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
