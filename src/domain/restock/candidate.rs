//! Restock Candidate - One item considered for restocking, as entered.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Labels of the raw restock fields, in input order.
pub const RESTOCK_FIELD_NAMES: [&str; 8] = [
    "Urgency",
    "Stock On Hand",
    "Stock Required",
    "Delivery Time",
    "Scarcity",
    "Price",
    "Quality Grade",
    "Service & Warranty",
];

/// A validated restock candidate with its eight raw fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestockCandidate {
    pub name: String,
    pub urgency: f64,
    pub stock_on_hand: f64,
    pub stock_required: f64,
    pub delivery_time: f64,
    pub scarcity: f64,
    pub price: f64,
    pub quality: f64,
    pub service: f64,
}

impl RestockCandidate {
    /// Validates a name and raw field list taken from an input form.
    ///
    /// # Errors
    /// - Blank name: `EmptyField`
    /// - Not exactly eight fields: `WrongFieldCount`
    /// - NaN or infinite field: `InvalidFormat` naming the field
    pub fn from_raw(name: &str, fields: &[f64]) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }

        let [urgency, stock_on_hand, stock_required, delivery_time, scarcity, price, quality, service] =
            <[f64; 8]>::try_from(fields).map_err(|_| {
                ValidationError::wrong_field_count("criteria", RESTOCK_FIELD_NAMES.len(), fields.len())
            })?;

        if let Some(index) = fields.iter().position(|v| !v.is_finite()) {
            return Err(ValidationError::invalid_format(
                RESTOCK_FIELD_NAMES[index],
                "must be a finite number",
            ));
        }

        Ok(Self {
            name: name.to_string(),
            urgency,
            stock_on_hand,
            stock_required,
            delivery_time,
            scarcity,
            price,
            quality,
            service,
        })
    }
}
