use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which way money moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    Inflow,
    Outflow,
}

impl Direction {
    /// Direction implied by a signed amount: negative is money leaving.
    pub fn from_signed_amount(amount: f64) -> Self {
        if amount < 0.0 {
            Direction::Outflow
        } else {
            Direction::Inflow
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Inflow => write!(f, "INFLOW"),
            Direction::Outflow => write!(f, "OUTFLOW"),
        }
    }
}

/// A posted or pending transaction.
///
/// Sources disagree on how direction is signalled: some send an explicit
/// `direction`, others only a signed `amount`. [`Transaction::direction`] is
/// the one rule that reconciles both, and [`Transaction::normalized`] bakes
/// it in at the ingestion boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,

    pub account_id: String,

    /// When the transaction posted (or was authorized, if pending)
    pub posted_date: DateTime<Utc>,

    /// Signed in legacy sources, magnitude-only once normalized
    pub amount: f64,

    /// Explicit direction, when the source provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,

    #[serde(default)]
    pub merchant_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_category: Option<String>,

    #[serde(default)]
    pub pending: bool,
}

impl Transaction {
    pub fn new(
        id: impl Into<String>,
        account_id: impl Into<String>,
        posted_date: DateTime<Utc>,
        amount: f64,
    ) -> Self {
        Self {
            id: id.into(),
            account_id: account_id.into(),
            posted_date,
            amount,
            direction: None,
            merchant_name: String::new(),
            raw_category: None,
            pending: false,
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn with_merchant(mut self, merchant: impl Into<String>) -> Self {
        self.merchant_name = merchant.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.raw_category = Some(category.into());
        self
    }

    pub fn pending(mut self) -> Self {
        self.pending = true;
        self
    }

    /// Explicit direction wins; otherwise the sign of `amount` decides.
    pub fn direction(&self) -> Direction {
        self.direction
            .unwrap_or_else(|| Direction::from_signed_amount(self.amount))
    }

    /// Unsigned size of the transaction.
    pub fn magnitude(&self) -> f64 {
        self.amount.abs()
    }

    pub fn is_outflow(&self) -> bool {
        self.direction() == Direction::Outflow
    }

    /// Canonical form: explicit direction, non-negative amount.
    pub fn normalized(&self) -> Self {
        Self {
            direction: Some(self.direction()),
            amount: self.magnitude(),
            ..self.clone()
        }
    }
}
