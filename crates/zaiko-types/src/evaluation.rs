//! Inventory level evaluation verdict.

use serde::{Deserialize, Serialize};

/// Current inventory above `optimal * OVERSTOCK_RATIO` counts as overstock.
pub const OVERSTOCK_RATIO: f64 = 1.2;

/// Current inventory below `optimal * UNDERSTOCK_RATIO` counts as understock.
pub const UNDERSTOCK_RATIO: f64 = 0.8;

/// Qualitative verdict on the current inventory level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Evaluation {
    /// Current inventory is below 80% of the optimal level.
    Understock,
    /// Current inventory is above 120% of the optimal level.
    Overstock,
    /// Current inventory is within the normal band.
    Normal,
}

impl Evaluation {
    /// Classifies a current inventory value against an optimal level.
    ///
    /// Checked in order, first match wins: overstock, then understock,
    /// then normal. Both comparisons are strict, so a value sitting
    /// exactly on a threshold is normal.
    #[must_use]
    pub fn classify(current_inventory: f64, optimal_inventory: f64) -> Self {
        if current_inventory > optimal_inventory * OVERSTOCK_RATIO {
            Self::Overstock
        } else if current_inventory < optimal_inventory * UNDERSTOCK_RATIO {
            Self::Understock
        } else {
            Self::Normal
        }
    }

    /// Returns the evaluation as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Understock => "understock",
            Self::Overstock => "overstock",
            Self::Normal => "normal",
        }
    }

    /// Returns a human-readable sentence for display.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Understock => "Inventory may be insufficient.",
            Self::Overstock => "Inventory may be excessive.",
            Self::Normal => "Inventory is at a normal level.",
        }
    }
}

impl std::fmt::Display for Evaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
