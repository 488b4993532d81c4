use serde::{Deserialize, Serialize};

/// Kind of bank account reported by the data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Checking,
    Savings,
    Credit,
    Investment,
    Loan,
}

impl AccountType {
    /// Only checking balances count as money available right now.
    pub fn is_liquid(&self) -> bool {
        matches!(self, AccountType::Checking)
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountType::Checking => write!(f, "checking"),
            AccountType::Savings => write!(f, "savings"),
            AccountType::Credit => write!(f, "credit"),
            AccountType::Investment => write!(f, "investment"),
            AccountType::Loan => write!(f, "loan"),
        }
    }
}

/// A linked account as last synced from the bank-linking integration.
///
/// Snapshots are replaced wholesale on refresh; the engine only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,

    /// Bank or brokerage name (e.g., "Chase")
    pub institution: String,

    #[serde(rename = "type")]
    pub account_type: AccountType,

    /// Balance usable right now (excludes holds)
    pub available_balance: f64,

    /// Ledger balance
    pub current_balance: f64,

    /// ISO currency code, uppercased
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Account {
    pub fn new(
        id: impl Into<String>,
        institution: impl Into<String>,
        account_type: AccountType,
        available_balance: f64,
        current_balance: f64,
    ) -> Self {
        Self {
            id: id.into(),
            institution: institution.into(),
            account_type,
            available_balance,
            current_balance,
            currency: default_currency(),
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into().to_uppercase();
        self
    }
}
