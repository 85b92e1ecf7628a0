use serde::{Deserialize, Serialize};

use super::FlowError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Reward,
    Claim,
    Game,
    Airdrop,
    Prize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    #[default]
    Completed,
    Pending,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TxKind,
    /// Signed: credits positive, debits negative.
    pub amount: f64,
    pub description: String,
    pub timestamp: i64,
    pub status: TxStatus,
}

impl Transaction {
    pub fn is_credit(&self) -> bool {
        self.amount > 0.0
    }
}

/// Append-only transaction log, newest first. The single source of truth
/// for the token balance; per-feature totals are folds over it, so the
/// recorded totals can never drift from the events that produced them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ledger {
    pub entries: Vec<Transaction>,
}

impl Ledger {
    /// Prepends one entry and returns it.
    pub fn record(
        &mut self,
        kind: TxKind,
        amount: f64,
        description: impl Into<String>,
        now_ms: i64,
    ) -> &Transaction {
        let tx = Transaction {
            id: format!("{}-{}", now_ms, self.entries.len()),
            kind,
            amount,
            description: description.into(),
            timestamp: now_ms,
            status: TxStatus::Completed,
        };
        self.entries.insert(0, tx);
        &self.entries[0]
    }

    /// Net balance folded over every entry.
    pub fn balance(&self) -> f64 {
        self.entries.iter().map(|tx| tx.amount).sum()
    }

    /// Sum of credits of one kind (the per-feature "total claimed").
    pub fn total_credited(&self, kind: TxKind) -> f64 {
        self.entries
            .iter()
            .filter(|tx| tx.kind == kind && tx.is_credit())
            .map(|tx| tx.amount)
            .sum()
    }

    /// Lifetime earnings: every credit regardless of kind.
    pub fn total_earned(&self) -> f64 {
        self.entries
            .iter()
            .filter(|tx| tx.is_credit())
            .map(|tx| tx.amount)
            .sum()
    }
}

/// Withdrawal input validation. Non-numeric, non-finite, zero, negative,
/// and over-balance amounts are all rejected before anything mutates.
pub fn parse_withdrawal(input: &str, balance: f64) -> Result<f64, FlowError> {
    let amount: f64 = input.trim().parse().map_err(|_| FlowError::InvalidAmount)?;
    if !amount.is_finite() || amount <= 0.0 || amount > balance {
        return Err(FlowError::InvalidAmount);
    }
    Ok(amount)
}

/// Appends exactly one negative entry for an already validated amount.
pub fn withdraw(ledger: &mut Ledger, amount: f64, now_ms: i64) {
    ledger.record(TxKind::Claim, -amount, "Withdrawal to wallet", now_ms);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Ledger {
        let mut ledger = Ledger::default();
        ledger.record(TxKind::Reward, 5.0, "Daily reward claim", 1_000);
        ledger.record(TxKind::Game, -1.0, "Jungle Game Entry Fee", 2_000);
        ledger.record(TxKind::Airdrop, 5.0, "Airdrop Round #5", 3_000);
        ledger
    }

    #[test]
    fn balance_is_the_fold_of_signed_amounts() {
        assert_eq!(seeded().balance(), 9.0);
        assert_eq!(Ledger::default().balance(), 0.0);
    }

    #[test]
    fn entries_are_newest_first() {
        let ledger = seeded();
        assert_eq!(ledger.entries[0].kind, TxKind::Airdrop);
        assert_eq!(ledger.entries[2].kind, TxKind::Reward);
    }

    #[test]
    fn totals_only_count_credits_of_that_kind() {
        let mut ledger = seeded();
        withdraw(&mut ledger, 2.0, 4_000);
        assert_eq!(ledger.total_credited(TxKind::Reward), 5.0);
        assert_eq!(ledger.total_credited(TxKind::Airdrop), 5.0);
        // The game debit and the withdrawal are not credits.
        assert_eq!(ledger.total_credited(TxKind::Game), 0.0);
        assert_eq!(ledger.total_credited(TxKind::Claim), 0.0);
        assert_eq!(ledger.total_earned(), 10.0);
    }

    #[test]
    fn withdrawal_rejects_bad_input() {
        assert_eq!(parse_withdrawal("abc", 10.0), Err(FlowError::InvalidAmount));
        assert_eq!(parse_withdrawal("", 10.0), Err(FlowError::InvalidAmount));
        assert_eq!(parse_withdrawal("0", 10.0), Err(FlowError::InvalidAmount));
        assert_eq!(parse_withdrawal("-3", 10.0), Err(FlowError::InvalidAmount));
        assert_eq!(parse_withdrawal("10.01", 10.0), Err(FlowError::InvalidAmount));
        assert_eq!(parse_withdrawal("NaN", 10.0), Err(FlowError::InvalidAmount));
    }

    #[test]
    fn withdrawal_debits_exactly_the_requested_amount() {
        let mut ledger = seeded();
        let before = ledger.entries.len();
        let amount = parse_withdrawal("2.5", ledger.balance()).unwrap();
        withdraw(&mut ledger, amount, 5_000);
        assert_eq!(ledger.entries.len(), before + 1);
        assert_eq!(ledger.entries[0].amount, -2.5);
        assert_eq!(ledger.entries[0].kind, TxKind::Claim);
        assert_eq!(ledger.balance(), 6.5);
    }

    #[test]
    fn full_balance_is_withdrawable() {
        assert_eq!(parse_withdrawal("9", 9.0), Ok(9.0));
    }
}
