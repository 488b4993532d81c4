use serde::{Deserialize, Serialize};

use super::account::Account;
use super::bill::RecurringCharge;
use super::investment::InvestmentAccount;
use super::liability::Liability;
use super::settings::UserSettings;
use super::transaction::Transaction;
use crate::errors::CoreError;

/// Everything the engine reads. Every calculator sees the same snapshot.
///
/// The engine never mutates a snapshot; callers replace it wholesale when
/// upstream data changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinancialSnapshot {
    pub accounts: Vec<Account>,

    pub transactions: Vec<Transaction>,

    pub liabilities: Vec<Liability>,

    /// Recurring charges (bills)
    pub bills: Vec<RecurringCharge>,

    pub investments: Vec<InvestmentAccount>,

    pub settings: UserSettings,
}

impl FinancialSnapshot {
    /// Parse a snapshot exported by the data layer.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize snapshot: {e}")))
    }

    /// Copy with every transaction in canonical direction form.
    pub fn normalized(&self) -> Self {
        Self {
            transactions: self.transactions.iter().map(Transaction::normalized).collect(),
            ..self.clone()
        }
    }

    /// Transactions still awaiting settlement.
    pub fn pending_transactions(&self) -> Vec<&Transaction> {
        self.transactions.iter().filter(|t| t.pending).collect()
    }
}
