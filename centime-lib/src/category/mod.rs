pub mod handlers;

use serde::{Deserialize, Serialize};

use crate::validate;
use crate::validate::ValidationError;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NewCategory {
    pub name: String,
}

impl NewCategory {
    fn validate(&self) -> Result<(), ValidationError> {
        validate::required("Category", &self.name)?;
        validate::length("Category", &self.name, 1, 50)?;
        Ok(())
    }
}
