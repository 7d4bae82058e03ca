use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Relates to the sale row stored in carlot_db, but is a clean type
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    pub id: i32,
    pub date: String,
    pub salesperson: String,
    pub customer_name: String,
    pub car_make: String,
    pub car_model: String,
    pub car_year: i32,
    /// Kept as entered. Parsed fallibly when a report is aggregated.
    pub sale_price: String,
    pub commission_rate: f64,
    pub commission_earned: f64,
}

/// Payload for adding or editing a sale. Same shape as [`SaleRecord`] minus
/// the store assigned id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaleRecordForm {
    pub date: String,
    pub salesperson: String,
    pub customer_name: String,
    pub car_make: String,
    pub car_model: String,
    pub car_year: i32,
    pub sale_price: String,
    pub commission_rate: f64,
    pub commission_earned: f64,
}

/// Reports group on `salesperson` and `car_make`, so those may never be empty.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0} must not be empty")]
pub struct EmptyGroupingField(pub &'static str);

impl SaleRecordForm {
    pub fn validate(&self) -> Result<(), EmptyGroupingField> {
        if self.salesperson.trim().is_empty() {
            return Err(EmptyGroupingField("salesperson"));
        }
        if self.car_make.trim().is_empty() {
            return Err(EmptyGroupingField("car_make"));
        }
        Ok(())
    }
}
