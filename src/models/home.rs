use serde::{Deserialize, Serialize};

use super::property::PropertyDetails;
use super::school::School;

/// Everything gathered for one address lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeInformation {
    pub address: String,
    pub overview: String,
    pub details: PropertyDetails,
    /// In the order the model listed them.
    pub nearby_schools: Vec<School>,
}
