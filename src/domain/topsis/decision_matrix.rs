//! Decision Matrix - Alternatives, criteria profile, and the numeric matrix they form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::MalformedInput;

/// A named alternative with its criteria values in profile order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub name: String,
    pub criteria: Vec<f64>,
}

impl Alternative {
    /// Creates a new alternative.
    pub fn new(name: impl Into<String>, criteria: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            criteria,
        }
    }
}

/// Direction of preference for a criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionKind {
    /// Higher values are preferable.
    Benefit,
    /// Lower values are preferable.
    Cost,
}

impl CriterionKind {
    /// Returns the wire label for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            CriterionKind::Benefit => "benefit",
            CriterionKind::Cost => "cost",
        }
    }
}

impl FromStr for CriterionKind {
    type Err = MalformedInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "benefit" => Ok(CriterionKind::Benefit),
            "cost" => Ok(CriterionKind::Cost),
            other => Err(MalformedInput::UnknownCriterionKind(other.to_string())),
        }
    }
}

impl fmt::Display for CriterionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weights and kinds for each criterion, validated to line up.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriteriaSpec {
    weights: Vec<f64>,
    kinds: Vec<CriterionKind>,
}

impl CriteriaSpec {
    /// Creates a criteria profile.
    ///
    /// Weights are used as given; they do not need to sum to 1.
    pub fn new(weights: Vec<f64>, kinds: Vec<CriterionKind>) -> Result<Self, MalformedInput> {
        if weights.len() != kinds.len() {
            return Err(MalformedInput::CriteriaCountMismatch {
                weights: weights.len(),
                kinds: kinds.len(),
            });
        }
        if weights.is_empty() {
            return Err(MalformedInput::NoCriteria);
        }
        if let Some((index, &value)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(MalformedInput::InvalidWeight { index, value });
        }

        Ok(Self { weights, kinds })
    }

    /// Parses criterion kinds from their wire labels and builds the profile.
    pub fn parse<S: AsRef<str>>(weights: Vec<f64>, kinds: &[S]) -> Result<Self, MalformedInput> {
        let kinds = kinds
            .iter()
            .map(|k| k.as_ref().parse())
            .collect::<Result<Vec<CriterionKind>, _>>()?;
        Self::new(weights, kinds)
    }

    /// Creates a builder for assembling a profile criterion by criterion.
    pub fn builder() -> CriteriaSpecBuilder {
        CriteriaSpecBuilder::default()
    }

    /// Number of criteria.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether there are no criteria.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn kinds(&self) -> &[CriterionKind] {
        &self.kinds
    }
}

/// Builder for constructing CriteriaSpec instances.
#[derive(Debug, Default)]
pub struct CriteriaSpecBuilder {
    weights: Vec<f64>,
    kinds: Vec<CriterionKind>,
}

impl CriteriaSpecBuilder {
    /// Appends a criterion of the given kind.
    pub fn criterion(mut self, kind: CriterionKind, weight: f64) -> Self {
        self.weights.push(weight);
        self.kinds.push(kind);
        self
    }

    /// Appends a benefit criterion.
    pub fn benefit(self, weight: f64) -> Self {
        self.criterion(CriterionKind::Benefit, weight)
    }

    /// Appends a cost criterion.
    pub fn cost(self, weight: f64) -> Self {
        self.criterion(CriterionKind::Cost, weight)
    }

    /// Builds and validates the profile.
    pub fn build(self) -> Result<CriteriaSpec, MalformedInput> {
        CriteriaSpec::new(self.weights, self.kinds)
    }
}

/// Rectangular matrix of finite values: one row per alternative, one column per criterion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionMatrix {
    rows: Vec<Vec<f64>>,
    columns: usize,
}

impl DecisionMatrix {
    /// Creates a matrix from rows, checking shape and finiteness.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, MalformedInput> {
        let columns = rows.first().map(Vec::len).ok_or(MalformedInput::NoAlternatives)?;
        if columns == 0 {
            return Err(MalformedInput::NoCriteria);
        }

        for (row, values) in rows.iter().enumerate() {
            if values.len() != columns {
                return Err(MalformedInput::RaggedMatrix {
                    row,
                    expected: columns,
                    actual: values.len(),
                });
            }
            if let Some(column) = values.iter().position(|v| !v.is_finite()) {
                return Err(MalformedInput::NonFiniteValue { row, column });
            }
        }

        Ok(Self { rows, columns })
    }

    /// Builds a matrix from the criteria of each alternative.
    pub fn from_alternatives(alternatives: &[Alternative]) -> Result<Self, MalformedInput> {
        Self::from_rows(alternatives.iter().map(|a| a.criteria.clone()).collect())
    }

    /// Wraps rows that are already known to be rectangular.
    pub(crate) fn from_shaped(rows: Vec<Vec<f64>>, columns: usize) -> Self {
        Self { rows, columns }
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// Iterates the values of column `j` from top to bottom.
    pub fn column(&self, j: usize) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().filter_map(move |row| row.get(j).copied())
    }

    /// Applies `f(column, value)` to every cell, keeping the shape.
    pub(crate) fn map_cells(&self, f: impl Fn(usize, f64) -> f64) -> Self {
        let rows = self
            .rows
            .iter()
            .map(|row| row.iter().enumerate().map(|(j, &v)| f(j, v)).collect())
            .collect();
        Self::from_shaped(rows, self.columns)
    }
}
