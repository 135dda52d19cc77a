use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[async_trait]
pub trait TransactionRepo: Sync + Send {
    async fn create_transaction(
        &self,
        user: i64,
        new_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError>;

    async fn income_total(&self, user: i64) -> Result<Decimal, TransactionRepoError>;

    async fn expense_total(&self, user: i64) -> Result<Decimal, TransactionRepoError>;

    /// Income total minus expense total over the user's entire history.
    async fn net_income(&self, user: i64) -> Result<Decimal, TransactionRepoError>;

    /// Sum of expenses dated within the given calendar month, UTC.
    async fn monthly_expenses(
        &self,
        user: i64,
        month: u32,
        year: i32,
    ) -> Result<Decimal, TransactionRepoError>;

    async fn expenses_by_category(
        &self,
        user: i64,
        category_id: i64,
    ) -> Result<Vec<Transaction>, TransactionRepoError>;
}

#[derive(Error, Debug)]
pub enum TransactionRepoError {
    #[error("{month}/{year} is not a valid month")]
    InvalidMonth { month: u32, year: i32 },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            _ => Err(anyhow::anyhow!("Unknown transaction kind {}", s)),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Transaction {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub description: String,
    pub category_id: i64,
    pub date: DateTime<Utc>,
    pub note: Option<String>,
}

impl Transaction {
    pub const fn new(
        id: i64,
        kind: TransactionKind,
        amount: Decimal,
        description: String,
        category_id: i64,
        date: DateTime<Utc>,
        note: Option<String>,
    ) -> Transaction {
        Transaction {
            id,
            kind,
            amount,
            description,
            category_id,
            date,
            note,
        }
    }
}

#[derive(Clone, Debug)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub description: String,
    pub category_id: i64,
    pub date: DateTime<Utc>,
    pub note: Option<String>,
}

impl NewTransaction {
    pub const fn new(
        kind: TransactionKind,
        amount: Decimal,
        description: String,
        category_id: i64,
        date: DateTime<Utc>,
        note: Option<String>,
    ) -> NewTransaction {
        NewTransaction {
            kind,
            amount,
            description,
            category_id,
            date,
            note,
        }
    }
}

/// Half-open UTC range covering the calendar month. `month` is 1-based.
pub(crate) fn month_range(
    month: u32,
    year: i32,
) -> Result<(DateTime<Utc>, DateTime<Utc>), TransactionRepoError> {
    let start = month_start(month, year)
        .ok_or(TransactionRepoError::InvalidMonth { month, year })?;
    let end = if month == 12 {
        month_start(1, year + 1)
    } else {
        month_start(month + 1, year)
    }
    .ok_or(TransactionRepoError::InvalidMonth { month, year })?;
    Ok((start, end))
}

fn month_start(month: u32, year: i32) -> Option<DateTime<Utc>> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)?.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&start))
}
