//! Restock Profile - Turns validated candidates into scored criteria.

use serde::{Deserialize, Serialize};

use crate::domain::topsis::{Alternative, CriteriaSpec, CriterionKind, FeatureDeriver, MalformedInput};

use super::RestockCandidate;

/// Labels of the derived criteria, in scoring order.
pub const RESTOCK_CRITERIA_NAMES: [&str; 7] = [
    "Urgency",
    "Supply Gap",
    "Delivery Time",
    "Scarcity",
    "Price",
    "Quality Grade",
    "Service & Warranty",
];

const RESTOCK_WEIGHTS: [f64; 7] = [0.3, 0.25, 0.2, 0.2, 0.07, 0.05, 0.03];

const RESTOCK_KINDS: [CriterionKind; 7] = [
    CriterionKind::Benefit,
    CriterionKind::Benefit,
    CriterionKind::Cost,
    CriterionKind::Cost,
    CriterionKind::Cost,
    CriterionKind::Benefit,
    CriterionKind::Benefit,
];

/// How the delivery-time criterion is presented to the ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryTimeMode {
    /// Rescaled across all candidates to 0..=100, fastest = 100.
    #[default]
    Percentage,
    /// Raw delivery time as entered.
    Raw,
}

/// The fixed restock weighting and feature derivation.
pub struct RestockProfile;

impl RestockProfile {
    /// Weights and kinds for the seven derived criteria.
    pub fn criteria_spec() -> Result<CriteriaSpec, MalformedInput> {
        CriteriaSpec::new(RESTOCK_WEIGHTS.to_vec(), RESTOCK_KINDS.to_vec())
    }

    /// Derives `[urgency, supply gap %, delivery, scarcity, price, quality, service]`
    /// for every candidate.
    ///
    /// The delivery column is computed from the complete candidate list
    /// before any row is assembled.
    pub fn derive(candidates: &[RestockCandidate], delivery: DeliveryTimeMode) -> Vec<Alternative> {
        let delivery_times: Vec<f64> = candidates.iter().map(|c| c.delivery_time).collect();
        let delivery_column = match delivery {
            DeliveryTimeMode::Percentage => FeatureDeriver::delivery_time_percentages(&delivery_times),
            DeliveryTimeMode::Raw => delivery_times,
        };

        candidates
            .iter()
            .zip(delivery_column)
            .map(|(c, delivery)| {
                Alternative::new(
                    c.name.clone(),
                    vec![
                        c.urgency,
                        FeatureDeriver::supply_gap_percentage(c.stock_on_hand, c.stock_required),
                        delivery,
                        c.scarcity,
                        c.price,
                        c.quality,
                        c.service,
                    ],
                )
            })
            .collect()
    }
}
