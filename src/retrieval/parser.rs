//! Best-effort extraction of typed records from model output.
//!
//! Fields are found by label (`Label: value`, colon optional for the details
//! block), case-insensitively. Absence is reported as `None` or by dropping a
//! school block; nothing here returns an error. Numbers are ASCII digits
//! only, matching what `str::parse` converts.
//!
//! The two entry points degrade differently:
//! `parse_property_details` is all-or-nothing, while `parse_schools` keeps
//! every block that parsed and skips the rest.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{PropertyDetails, School, SchoolType};

static SQUARE_FEET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Square\s*Feet:?\s*([0-9][0-9,]*)").unwrap());
static BEDROOMS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Bedrooms?:?\s*([0-9]+)").unwrap());
static BATHROOMS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Bathrooms?:?\s*([0-9]+\.?[0-9]*)").unwrap());
static ESTIMATED_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Estimated\s*Value:?\s*\$?\s*([0-9][0-9,]*)").unwrap());
static YEAR_BUILT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Year\s*Built:?\s*([0-9]{4})").unwrap());

static SCHOOL_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Name:\s*([^\n]+)").unwrap());
static SCHOOL_DISTANCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Distance:\s*([0-9]+\.?[0-9]*)").unwrap());
static SCHOOL_RATING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Rating:\s*([0-9]+\.?[0-9]*)").unwrap());
static SCHOOL_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Type:\s*(elementary school|middle school|high school)").unwrap()
});

/// A line holding nothing but whitespace separates two school blocks.
static BLANK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n[ \t]*\r?\n").unwrap());

/// First capture group of `pattern` in `text`.
fn capture<'t>(pattern: &Regex, text: &'t str) -> Option<&'t str> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Parse a number that may carry thousands separators (`1,200`).
fn parse_grouped_number(raw: &str) -> Option<f64> {
    raw.replace(',', "").parse::<f64>().ok()
}

/// Parse the five-line details response.
///
/// Returns an all-`None` record unless every field was found and converted.
pub fn parse_property_details(text: &str) -> PropertyDetails {
    match try_parse_property_details(text) {
        Some(details) => details,
        None => {
            tracing::warn!(
                response_len = text.len(),
                "Property details response did not match the expected format"
            );
            PropertyDetails::default()
        }
    }
}

fn try_parse_property_details(text: &str) -> Option<PropertyDetails> {
    let square_feet = parse_grouped_number(capture(&SQUARE_FEET, text)?)?;
    let bedrooms = capture(&BEDROOMS, text)?.parse::<u32>().ok()?;
    let bathrooms = capture(&BATHROOMS, text)?.parse::<f64>().ok()?;
    let estimated_value = parse_grouped_number(capture(&ESTIMATED_VALUE, text)?)?;
    let year_built = capture(&YEAR_BUILT, text)?.parse::<u32>().ok()?;

    Some(PropertyDetails {
        square_feet: Some(square_feet),
        bedrooms: Some(bedrooms),
        bathrooms: Some(bathrooms),
        estimated_value: Some(estimated_value),
        year_built: Some(year_built),
    })
}

/// Parse the schools response, one school per blank-line-separated block.
///
/// Blocks lacking a name, distance, rating or recognised type are skipped.
/// The result keeps the order of the response and is not capped.
pub fn parse_schools(text: &str) -> Vec<School> {
    let mut schools = Vec::new();

    for (index, block) in BLANK_LINE
        .split(text)
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .enumerate()
    {
        match parse_school_block(block) {
            Some(school) => schools.push(school),
            None => tracing::debug!(block = index, "Skipping unparseable school entry"),
        }
    }

    schools
}

fn parse_school_block(block: &str) -> Option<School> {
    let name = capture(&SCHOOL_NAME, block)?.trim();
    let distance = capture(&SCHOOL_DISTANCE, block)?.parse::<f64>().ok()?;
    let rating = capture(&SCHOOL_RATING, block)?.parse::<f64>().ok()?;
    let school_type = capture(&SCHOOL_TYPE, block)?.parse::<SchoolType>().ok()?;

    if name.is_empty() {
        return None;
    }

    Some(School {
        name: name.to_string(),
        distance,
        rating: Some(rating),
        school_type,
    })
}
