use serde::{Deserialize, Serialize};

/// Structured attributes of a property.
///
/// Either every field is present or none is: the details parser never
/// returns a partially populated record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyDetails {
    pub square_feet: Option<f64>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<f64>,
    /// USD.
    pub estimated_value: Option<f64>,
    pub year_built: Option<u32>,
}

impl PropertyDetails {
    /// True when the details could not be extracted.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert!(PropertyDetails::default().is_empty());
    }

    #[test]
    fn populated_is_not_empty() {
        let details = PropertyDetails {
            square_feet: Some(1200.0),
            bedrooms: Some(3),
            bathrooms: Some(2.0),
            estimated_value: Some(450_000.0),
            year_built: Some(1995),
        };
        assert!(!details.is_empty());
    }
}
