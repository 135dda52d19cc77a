pub mod handlers;

use centime_repo::transaction_repo::TransactionKind;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::validate;
use crate::validate::ValidationError;

/// A new income or expense entry against a named category. The category must already exist. If no
/// date is given the entry is recorded at the current time.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Deposit {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub description: String,
    pub category: String,
    pub date: Option<DateTime<Utc>>,
    pub note: Option<String>,
}

impl Deposit {
    pub const fn new(
        kind: TransactionKind,
        amount: Decimal,
        description: String,
        category: String,
        date: Option<DateTime<Utc>>,
        note: Option<String>,
    ) -> Deposit {
        Deposit {
            kind,
            amount,
            description,
            category,
            date,
            note,
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        validate::amount(self.amount)?;
        validate::required("Description", &self.description)?;
        validate::length("Description", &self.description, 6, 50)?;
        validate::required("Category", &self.category)?;
        Ok(())
    }
}
