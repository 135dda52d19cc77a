use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::anyhow;
use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::money;
use crate::transaction_repo::{
    month_range, NewTransaction, Transaction, TransactionKind, TransactionRepo,
    TransactionRepoError,
};

struct State {
    user_transactions: HashMap<i64, Vec<Transaction>>,
    next_id: i64,
}

pub struct MemTransactionRepo {
    state: RwLock<State>,
}

impl MemTransactionRepo {
    pub fn new() -> MemTransactionRepo {
        let state = State {
            user_transactions: HashMap::new(),
            next_id: 1,
        };
        MemTransactionRepo {
            state: RwLock::new(state),
        }
    }

    fn read_lock(&self) -> Result<RwLockReadGuard<State>, anyhow::Error> {
        self.state
            .read()
            .map_err(|_| anyhow!("Unable to acquire lock"))
    }

    fn write_lock(&self) -> Result<RwLockWriteGuard<State>, anyhow::Error> {
        self.state
            .write()
            .map_err(|_| anyhow!("Unable to acquire lock"))
    }

    fn sum_where<F>(&self, user: i64, predicate: F) -> Result<Decimal, TransactionRepoError>
    where
        F: Fn(&Transaction) -> bool,
    {
        let read_guard = self.read_lock()?;

        let Some(transactions) = read_guard.user_transactions.get(&user) else {
            return Ok(Decimal::ZERO);
        };
        let sum = transactions
            .iter()
            .filter(|t| predicate(t))
            .map(|t| t.amount)
            .sum::<Decimal>();
        Ok(sum)
    }
}

#[async_trait]
impl TransactionRepo for MemTransactionRepo {
    async fn create_transaction(
        &self,
        user: i64,
        new_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError> {
        // Same scale restriction the persistent store enforces.
        money::to_minor_units(new_transaction.amount)?;

        let mut write_guard = self.write_lock()?;

        let id = write_guard.next_id;
        write_guard.next_id += 1;

        let transaction = Transaction::new(
            id,
            new_transaction.kind,
            new_transaction.amount,
            new_transaction.description,
            new_transaction.category_id,
            new_transaction.date,
            new_transaction.note,
        );

        write_guard
            .user_transactions
            .entry(user)
            .or_insert_with(Vec::new)
            .push(transaction.clone());

        Ok(transaction)
    }

    async fn income_total(&self, user: i64) -> Result<Decimal, TransactionRepoError> {
        self.sum_where(user, |t| t.kind == TransactionKind::Income)
    }

    async fn expense_total(&self, user: i64) -> Result<Decimal, TransactionRepoError> {
        self.sum_where(user, |t| t.kind == TransactionKind::Expense)
    }

    async fn net_income(&self, user: i64) -> Result<Decimal, TransactionRepoError> {
        let income = self.income_total(user).await?;
        let expense = self.expense_total(user).await?;
        Ok(income - expense)
    }

    async fn monthly_expenses(
        &self,
        user: i64,
        month: u32,
        year: i32,
    ) -> Result<Decimal, TransactionRepoError> {
        let (start, end) = month_range(month, year)?;
        self.sum_where(user, |t| {
            t.kind == TransactionKind::Expense && t.date >= start && t.date < end
        })
    }

    async fn expenses_by_category(
        &self,
        user: i64,
        category_id: i64,
    ) -> Result<Vec<Transaction>, TransactionRepoError> {
        let read_guard = self.read_lock()?;

        let Some(transactions) = read_guard.user_transactions.get(&user) else {
            return Ok(Vec::new());
        };
        let expenses = transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::Expense && t.category_id == category_id)
            .cloned()
            .collect();
        Ok(expenses)
    }
}
