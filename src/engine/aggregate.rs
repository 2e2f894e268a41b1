//! Profit/loss aggregation over both ledgers.

use serde::Serialize;

use super::Ledger;
use crate::domain::Outcome;

/// Profit, loss and net of one ledger (or of both combined).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LedgerTotals {
    pub profit: i64,
    pub loss: i64,
    pub net: i64,
}

impl LedgerTotals {
    fn from_amounts(amounts: impl Iterator<Item = (i64, i64)>) -> Self {
        let (profit, loss) = amounts.fold((0i64, 0i64), |(p, l), (dp, dl)| {
            (p.saturating_add(dp), l.saturating_add(dl))
        });
        Self {
            profit,
            loss,
            net: profit.saturating_sub(loss),
        }
    }

    fn combine(a: LedgerTotals, b: LedgerTotals) -> Self {
        Self {
            profit: a.profit.saturating_add(b.profit),
            loss: a.loss.saturating_add(b.loss),
            net: a.net.saturating_add(b.net),
        }
    }
}

/// Sign of the combined net.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NetStatus {
    Profit,
    Loss,
    Zero,
}

impl NetStatus {
    pub fn from_net(net: i64) -> Self {
        match net {
            n if n > 0 => NetStatus::Profit,
            n if n < 0 => NetStatus::Loss,
            _ => NetStatus::Zero,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NetStatus::Profit => "Profit",
            NetStatus::Loss => "Loss",
            NetStatus::Zero => "Zero",
        }
    }
}

/// Figures for the running financial summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Aggregates {
    pub matches: LedgerTotals,
    pub casino: LedgerTotals,
    pub combined: LedgerTotals,
    pub status: NetStatus,
}

impl Aggregates {
    pub fn combined_net(&self) -> i64 {
        self.combined.net
    }

    /// Absolute combined net followed by its status, e.g. "₹300 Profit".
    pub fn headline(&self) -> String {
        format!("₹{} {}", self.combined.net.unsigned_abs(), self.status.label())
    }
}

/// Reduce both ledgers. Unset outcomes contribute to neither side.
pub fn summarize(ledger: &Ledger) -> Aggregates {
    let matches = LedgerTotals::from_amounts(ledger.positions.values().map(|p| {
        (
            p.contribution(Outcome::Profit),
            p.contribution(Outcome::Loss),
        )
    }));
    let casino = LedgerTotals::from_amounts(ledger.casino.iter().map(|e| {
        (
            e.contribution(Outcome::Profit),
            e.contribution(Outcome::Loss),
        )
    }));
    let combined = LedgerTotals::combine(matches, casino);

    Aggregates {
        matches,
        casino,
        combined,
        status: NetStatus::from_net(combined.net),
    }
}
