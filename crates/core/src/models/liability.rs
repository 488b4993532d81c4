use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiabilityType {
    CreditCard,
    AutoLoan,
    StudentLoan,
    Mortgage,
    PersonalLoan,
    Bnpl,
    Loan,
}

impl std::fmt::Display for LiabilityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LiabilityType::CreditCard => write!(f, "credit_card"),
            LiabilityType::AutoLoan => write!(f, "auto_loan"),
            LiabilityType::StudentLoan => write!(f, "student_loan"),
            LiabilityType::Mortgage => write!(f, "mortgage"),
            LiabilityType::PersonalLoan => write!(f, "personal_loan"),
            LiabilityType::Bnpl => write!(f, "bnpl"),
            LiabilityType::Loan => write!(f, "loan"),
        }
    }
}

/// A debt owed by the user. Every optional field may be missing from the
/// data source; calculators treat absence as "not applicable".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Liability {
    pub id: String,

    pub name: String,

    #[serde(rename = "type")]
    pub liability_type: LiabilityType,

    /// Amount currently owed (positive)
    pub current_balance: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_limit: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_payment: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,

    /// Annual percentage rate, e.g. `24.99`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apr: Option<f64>,

    /// Flat late fee charged when a payment is missed
    #[serde(default, alias = "lateFeeRule", skip_serializing_if = "Option::is_none")]
    pub late_fee: Option<f64>,
}

impl Liability {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        liability_type: LiabilityType,
        current_balance: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            liability_type,
            current_balance,
            credit_limit: None,
            minimum_payment: None,
            due_date: None,
            apr: None,
            late_fee: None,
        }
    }

    pub fn with_credit_limit(mut self, limit: f64) -> Self {
        self.credit_limit = Some(limit);
        self
    }

    pub fn with_minimum_payment(mut self, payment: f64) -> Self {
        self.minimum_payment = Some(payment);
        self
    }

    pub fn with_due_date(mut self, due: NaiveDate) -> Self {
        self.due_date = Some(due);
        self
    }

    pub fn with_apr(mut self, apr: f64) -> Self {
        self.apr = Some(apr);
        self
    }

    pub fn with_late_fee(mut self, fee: f64) -> Self {
        self.late_fee = Some(fee);
        self
    }

    pub fn is_credit_card(&self) -> bool {
        self.liability_type == LiabilityType::CreditCard
    }
}
