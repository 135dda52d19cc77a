pub mod handlers;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Income total minus expense total over the user's entire history.
#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub struct NetIncome {
    pub net_income: Decimal,
}

#[derive(Serialize, Deserialize, PartialEq, Debug)]
pub struct MonthlyExpenses {
    pub month: u32,
    pub year: i32,
    pub total: Decimal,
}
