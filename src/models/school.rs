use serde::{Deserialize, Serialize};

use super::enums::SchoolType;

/// A school near the looked-up address, as listed by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct School {
    pub name: String,
    /// Miles from the address.
    pub distance: f64,
    /// Out of 10.
    pub rating: Option<f64>,
    pub school_type: SchoolType,
}
