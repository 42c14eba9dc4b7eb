//! US postal address validation.
//!
//! The four field predicates are pure; `Address::new` runs all of them and is
//! the only way to build an `Address`.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

const STREET_MIN_CHARS: usize = 5;
const STREET_MAX_CHARS: usize = 100;
const CITY_MAX_CHARS: usize = 50;

/// The 50 state postal codes. DC and the territories are not accepted.
const US_STATE_CODES: [&str; 50] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", //
    "HI", "ID", "IL", "IN", "IA", "KS", "KY", "LA", "ME", "MD", //
    "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ", //
    "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", //
    "SD", "TN", "TX", "UT", "VT", "VA", "WA", "WV", "WI", "WY",
];

static STATE_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| US_STATE_CODES.iter().copied().collect());

// Prefix match: `^` anchors the start, the tail is unconstrained.
static STREET_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\d+.*\b(?:street|st|avenue|ave|road|rd|boulevard|blvd|lane|ln|drive|dr)\b",
    )
    .unwrap()
});

static ZIP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}(?:-[0-9]{4})?$").unwrap());

/// Street line: house number first, a street-type word somewhere after it.
pub fn validate_street(street: &str) -> bool {
    if street.trim().chars().count() < STREET_MIN_CHARS
        || street.chars().count() > STREET_MAX_CHARS
    {
        return false;
    }
    STREET_PATTERN.is_match(street)
}

/// Letters and whitespace only, 1 to 50 characters.
pub fn validate_city(city: &str) -> bool {
    !city.is_empty()
        && city.chars().count() <= CITY_MAX_CHARS
        && city.chars().all(|c| c.is_alphabetic() || c.is_whitespace())
}

/// Two-letter postal code of one of the 50 states, any case.
pub fn validate_state(state: &str) -> bool {
    state.chars().count() == 2
        && state.chars().all(char::is_alphabetic)
        && STATE_SET.contains(state.to_uppercase().as_str())
}

/// ZIP or ZIP+4.
pub fn validate_zipcode(zipcode: &str) -> bool {
    ZIP_PATTERN.is_match(zipcode)
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("Invalid street address format: {0:?}")]
    InvalidStreet(String),

    #[error("Invalid city name: {0:?}")]
    InvalidCity(String),

    #[error("Invalid state code: {0:?}")]
    InvalidState(String),

    #[error("Invalid ZIP code: {0:?}")]
    InvalidZipcode(String),
}

/// A US address whose four fields passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    street: String,
    city: String,
    state: String,
    zipcode: String,
}

impl Address {
    /// Validate each field in order and report the first one that fails.
    /// The state code is stored upper-cased.
    pub fn new(
        street: &str,
        city: &str,
        state: &str,
        zipcode: &str,
    ) -> Result<Self, AddressError> {
        if !validate_street(street) {
            return Err(AddressError::InvalidStreet(street.to_string()));
        }
        if !validate_city(city) {
            return Err(AddressError::InvalidCity(city.to_string()));
        }
        if !validate_state(state) {
            return Err(AddressError::InvalidState(state.to_string()));
        }
        if !validate_zipcode(zipcode) {
            return Err(AddressError::InvalidZipcode(zipcode.to_string()));
        }

        Ok(Self {
            street: street.to_string(),
            city: city.to_string(),
            state: state.to_uppercase(),
            zipcode: zipcode.to_string(),
        })
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn zipcode(&self) -> &str {
        &self.zipcode
    }

    /// Single-line form sent to the model, e.g. `123 Main St, Springfield, IL 62701`.
    pub fn full_address(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.street, self.city, self.state, self.zipcode
        )
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full_address())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── street ──

    #[test]
    fn street_accepts_number_name_and_type() {
        assert!(validate_street("123 Main St"));
        assert!(validate_street("4500 Sunset Boulevard"));
        assert!(validate_street("77 Elm Drive Apt 4"));
    }

    #[test]
    fn street_is_case_insensitive() {
        assert!(validate_street("123 MAIN STREET"));
        assert!(validate_street("9 oak ave"));
    }

    #[test]
    fn street_rejects_too_short() {
        assert!(!validate_street("123"));
        assert!(!validate_street("1 St"));
    }

    #[test]
    fn street_short_after_trim_is_rejected() {
        assert!(!validate_street("   1 St    "));
    }

    #[test]
    fn street_rejects_missing_number() {
        assert!(!validate_street("Avenue"));
        assert!(!validate_street("Main Street"));
    }

    #[test]
    fn street_must_start_with_digits() {
        assert!(!validate_street("Apt 5, 123 Main St"));
        assert!(!validate_street(" 123 Main St"));
    }

    #[test]
    fn street_rejects_too_long() {
        let long = "1".repeat(110);
        assert!(!validate_street(&long));

        let mut padded = String::from("123 Main St ");
        padded.push_str(&"x".repeat(STREET_MAX_CHARS));
        assert!(!validate_street(&padded));
    }

    #[test]
    fn street_type_must_be_a_whole_word() {
        assert!(!validate_street("123 Stanford Way"));
        assert!(!validate_street("42 Rdx Place"));
    }

    #[test]
    fn street_requires_a_type_word() {
        assert!(!validate_street("123 Main Way"));
    }

    // ── city ──

    #[test]
    fn city_accepts_letters_and_spaces() {
        assert!(validate_city("Los Angeles"));
        assert!(validate_city("Springfield"));
    }

    #[test]
    fn city_rejects_digits_and_punctuation() {
        assert!(!validate_city("Los Angeles 123"));
        assert!(!validate_city("St. Louis"));
        assert!(!validate_city("Winston-Salem"));
    }

    #[test]
    fn city_rejects_empty_and_too_long() {
        assert!(!validate_city(""));
        assert!(!validate_city(&"A".repeat(51)));
        assert!(validate_city(&"A".repeat(50)));
    }

    // ── state ──

    #[test]
    fn state_accepts_known_codes() {
        assert!(validate_state("CA"));
        assert!(validate_state("ny"));
        assert!(validate_state("Wy"));
    }

    #[test]
    fn state_rejects_unknown_and_wrong_length() {
        assert!(!validate_state("ZZ"));
        assert!(!validate_state("C"));
        assert!(!validate_state("California"));
        assert!(!validate_state(""));
    }

    #[test]
    fn state_excludes_dc_and_territories() {
        for code in ["DC", "PR", "GU", "VI", "AS", "MP"] {
            assert!(!validate_state(code), "{code} should be rejected");
        }
    }

    #[test]
    fn state_set_has_fifty_distinct_codes() {
        assert_eq!(STATE_SET.len(), 50);
        assert!(US_STATE_CODES.iter().all(|c| validate_state(c)));
    }

    // ── zip ──

    #[test]
    fn zipcode_accepts_zip_and_zip_plus_four() {
        assert!(validate_zipcode("90210"));
        assert!(validate_zipcode("90210-1234"));
    }

    #[test]
    fn zipcode_rejects_malformed() {
        assert!(!validate_zipcode("1234"));
        assert!(!validate_zipcode("123456"));
        assert!(!validate_zipcode("ABCDE"));
        assert!(!validate_zipcode("90210-123"));
        assert!(!validate_zipcode("90210 1234"));
        assert!(!validate_zipcode("90210\n"));
    }

    #[test]
    fn validators_are_idempotent() {
        for input in ["123 Main St", "Avenue", "CA", "90210-1234", "Los Angeles"] {
            assert_eq!(validate_street(input), validate_street(input));
            assert_eq!(validate_city(input), validate_city(input));
            assert_eq!(validate_state(input), validate_state(input));
            assert_eq!(validate_zipcode(input), validate_zipcode(input));
        }
    }

    // ── Address ──

    #[test]
    fn address_formats_full_line() {
        let address = Address::new("123 Main St", "Springfield", "il", "62701").unwrap();
        assert_eq!(address.state(), "IL");
        assert_eq!(address.full_address(), "123 Main St, Springfield, IL 62701");
        assert_eq!(address.to_string(), address.full_address());
    }

    #[test]
    fn address_reports_first_invalid_field() {
        assert!(matches!(
            Address::new("Main", "Springfield", "IL", "62701"),
            Err(AddressError::InvalidStreet(_))
        ));
        assert!(matches!(
            Address::new("123 Main St", "Springfield 9", "XX", "62701"),
            Err(AddressError::InvalidCity(_))
        ));
        assert!(matches!(
            Address::new("123 Main St", "Springfield", "XX", "62701"),
            Err(AddressError::InvalidState(_))
        ));
        assert!(matches!(
            Address::new("123 Main St", "Springfield", "IL", "627"),
            Err(AddressError::InvalidZipcode(_))
        ));
    }
}
