use super::parser::{parse_property_details, parse_schools};
use super::prompt::{
    build_details_prompt, build_overview_prompt, build_schools_prompt, DETAILS_SYSTEM_PROMPT,
    OVERVIEW_SYSTEM_PROMPT, SCHOOLS_SYSTEM_PROMPT,
};
use super::types::LlmClient;
use super::{LlmError, RetrievalError};
use crate::models::{HomeInformation, PropertyDetails, School};

/// Runs one address lookup against the generation service:
/// overview → details → schools, one call each, in that order.
pub struct HomeInfoRetriever {
    llm: Box<dyn LlmClient + Send + Sync>,
}

impl HomeInfoRetriever {
    pub fn new(llm: Box<dyn LlmClient + Send + Sync>) -> Self {
        Self { llm }
    }

    /// Gather overview, details and nearby schools for `address`.
    ///
    /// The address is used as given; validate it beforehand. Only a failed
    /// overview call is an error. Details fall back to an all-empty record
    /// and schools to an empty list.
    pub fn get_home_information(&self, address: &str) -> Result<HomeInformation, RetrievalError> {
        let _span = tracing::info_span!("get_home_information", address).entered();

        let overview = self
            .property_overview(address)
            .map_err(RetrievalError::Overview)?;
        let details = self.property_details(address);
        let nearby_schools = self.nearby_schools(address);

        tracing::info!(
            details_found = !details.is_empty(),
            schools = nearby_schools.len(),
            "Home information retrieved"
        );

        Ok(HomeInformation {
            address: address.to_string(),
            overview,
            details,
            nearby_schools,
        })
    }

    fn property_overview(&self, address: &str) -> Result<String, LlmError> {
        self.llm
            .generate(OVERVIEW_SYSTEM_PROMPT, &build_overview_prompt(address))
            .inspect_err(|e| tracing::error!(error = %e, "Overview request failed"))
    }

    fn property_details(&self, address: &str) -> PropertyDetails {
        match self
            .llm
            .generate(DETAILS_SYSTEM_PROMPT, &build_details_prompt(address))
        {
            Ok(text) => parse_property_details(&text),
            Err(e) => {
                tracing::warn!(error = %e, "Details request failed, continuing without details");
                PropertyDetails::default()
            }
        }
    }

    fn nearby_schools(&self, address: &str) -> Vec<School> {
        match self
            .llm
            .generate(SCHOOLS_SYSTEM_PROMPT, &build_schools_prompt(address))
        {
            Ok(text) => parse_schools(&text),
            Err(e) => {
                tracing::warn!(error = %e, "Schools request failed, continuing without schools");
                Vec::new()
            }
        }
    }
}
