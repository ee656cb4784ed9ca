//! In-process adapters

mod cooldown_ledger;

pub use cooldown_ledger::InMemoryCooldownLedger;
