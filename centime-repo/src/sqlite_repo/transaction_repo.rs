use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{query, query_as, query_scalar, Executor, FromRow, Pool, Sqlite};
use tracing::instrument;

use crate::money;
use crate::transaction_repo::{
    month_range, NewTransaction, Transaction, TransactionKind, TransactionRepo,
    TransactionRepoError,
};

pub struct SqliteTransactionRepo {
    pool: Pool<Sqlite>,
}

impl SqliteTransactionRepo {
    pub fn new(pool: Pool<Sqlite>) -> SqliteTransactionRepo {
        SqliteTransactionRepo { pool }
    }
}

#[derive(FromRow)]
struct TransactionEntry {
    id: i64,
    kind: String,
    amount_minor: i64,
    description: String,
    category_id: i64,
    date: DateTime<Utc>,
    note: Option<String>,
}

impl TryFrom<TransactionEntry> for Transaction {
    type Error = anyhow::Error;

    fn try_from(entry: TransactionEntry) -> Result<Self, Self::Error> {
        Ok(Transaction::new(
            entry.id,
            entry.kind.parse()?,
            money::from_minor_units(entry.amount_minor),
            entry.description,
            entry.category_id,
            entry.date,
            entry.note,
        ))
    }
}

impl SqliteTransactionRepo {
    #[instrument(skip(db_executor, new_transaction))]
    async fn insert_transaction_entry<'e, E>(
        db_executor: E,
        user: i64,
        new_transaction: &NewTransaction,
        amount_minor: i64,
    ) -> Result<i64, TransactionRepoError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let result = query(
            "INSERT INTO transactions (user_id, kind, amount_minor, description, category_id, date) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(user)
        .bind(new_transaction.kind.as_str())
        .bind(amount_minor)
        .bind(&new_transaction.description)
        .bind(new_transaction.category_id)
        .bind(new_transaction.date)
        .execute(db_executor)
        .await
        .context("Unable to insert transaction")?;
        Ok(result.last_insert_rowid())
    }

    async fn kind_total(
        &self,
        user: i64,
        kind: TransactionKind,
    ) -> Result<Decimal, TransactionRepoError> {
        let total: i64 = query_scalar::<_, i64>(
            "SELECT COALESCE(SUM(amount_minor), 0) FROM transactions WHERE user_id = ?1 AND kind = ?2",
        )
        .bind(user)
        .bind(kind.as_str())
        .fetch_one(&self.pool)
        .await
        .with_context(|| format!("Unable to total {} transactions for user {}", kind, user))?;
        Ok(money::from_minor_units(total))
    }
}

#[async_trait]
impl TransactionRepo for SqliteTransactionRepo {
    #[instrument(skip(self, new_transaction))]
    async fn create_transaction(
        &self,
        user: i64,
        new_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError> {
        let amount_minor = money::to_minor_units(new_transaction.amount)?;

        let mut tx = self
            .pool
            .begin()
            .await
            .context("Unable to start database transaction")?;

        let id =
            Self::insert_transaction_entry(&mut *tx, user, &new_transaction, amount_minor).await?;
        if let Some(note) = &new_transaction.note {
            query("INSERT INTO expenses (transaction_id, note) VALUES (?1, ?2)")
                .bind(id)
                .bind(note)
                .execute(&mut *tx)
                .await
                .context("Unable to insert transaction note")?;
        }

        tx.commit()
            .await
            .context("Unable to commit database transaction")?;

        Ok(Transaction::new(
            id,
            new_transaction.kind,
            new_transaction.amount,
            new_transaction.description,
            new_transaction.category_id,
            new_transaction.date,
            new_transaction.note,
        ))
    }

    #[instrument(skip(self))]
    async fn income_total(&self, user: i64) -> Result<Decimal, TransactionRepoError> {
        self.kind_total(user, TransactionKind::Income).await
    }

    #[instrument(skip(self))]
    async fn expense_total(&self, user: i64) -> Result<Decimal, TransactionRepoError> {
        self.kind_total(user, TransactionKind::Expense).await
    }

    #[instrument(skip(self))]
    async fn net_income(&self, user: i64) -> Result<Decimal, TransactionRepoError> {
        let net: i64 = query_scalar::<_, i64>(
            "SELECT COALESCE(SUM(CASE WHEN kind = 'income' THEN amount_minor ELSE -amount_minor END), 0) FROM transactions WHERE user_id = ?1",
        )
        .bind(user)
        .fetch_one(&self.pool)
        .await
        .with_context(|| format!("Unable to get net income for user {}", user))?;
        Ok(money::from_minor_units(net))
    }

    #[instrument(skip(self))]
    async fn monthly_expenses(
        &self,
        user: i64,
        month: u32,
        year: i32,
    ) -> Result<Decimal, TransactionRepoError> {
        let (start, end) = month_range(month, year)?;
        let total: i64 = query_scalar::<_, i64>(
            "SELECT COALESCE(SUM(amount_minor), 0) FROM transactions WHERE user_id = ?1 AND kind = 'expense' AND date >= ?2 AND date < ?3",
        )
        .bind(user)
        .bind(start)
        .bind(end)
        .fetch_one(&self.pool)
        .await
        .with_context(|| format!("Unable to get expenses for user {} in {}/{}", user, month, year))?;
        Ok(money::from_minor_units(total))
    }

    #[instrument(skip(self))]
    async fn expenses_by_category(
        &self,
        user: i64,
        category_id: i64,
    ) -> Result<Vec<Transaction>, TransactionRepoError> {
        let entries: Vec<TransactionEntry> = query_as::<_, TransactionEntry>(
            "SELECT t.id, t.kind, t.amount_minor, t.description, t.category_id, t.date, e.note \
             FROM transactions t \
             LEFT JOIN expenses e ON e.transaction_id = t.id \
             WHERE t.user_id = ?1 AND t.kind = 'expense' AND t.category_id = ?2 \
             ORDER BY t.id",
        )
        .bind(user)
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .with_context(|| {
            format!(
                "Unable to get expenses for user {} in category {}",
                user, category_id
            )
        })?;

        let transactions = entries
            .into_iter()
            .map(Transaction::try_from)
            .collect::<Result<Vec<Transaction>, anyhow::Error>>()?;
        Ok(transactions)
    }
}
