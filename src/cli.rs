//! Interactive address entry and report rendering.

use std::io::{self, BufRead, Write};

use clap::Parser;

use crate::address::{
    validate_city, validate_state, validate_street, validate_zipcode, Address, AddressError,
};
use crate::models::{HomeInformation, PropertyDetails};

#[derive(Parser, Debug)]
#[command(name = "home-info")]
#[command(
    version,
    about = "Look up an overview, property details and nearby schools for a US address"
)]
pub struct Args {
    /// Model name; overrides OPENAI_MODEL
    #[arg(long)]
    pub model: Option<String>,

    /// API base URL; overrides OPENAI_BASE_URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Print the result as JSON instead of a text report
    #[arg(long)]
    pub json: bool,
}

/// Ask for `label` until `is_valid` accepts the (normalized) answer.
///
/// Returns `UnexpectedEof` if input ends before a valid answer arrives.
pub fn prompt_until_valid<R, W>(
    input: &mut R,
    output: &mut W,
    label: &str,
    normalize: fn(&str) -> String,
    is_valid: fn(&str) -> bool,
    retry_message: &str,
) -> io::Result<String>
where
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{label}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a valid value was entered",
            ));
        }

        let value = normalize(&line);
        if is_valid(&value) {
            return Ok(value);
        }
        writeln!(output, "{retry_message}")?;
    }
}

fn trimmed(s: &str) -> String {
    s.trim().to_string()
}

fn trimmed_upper(s: &str) -> String {
    s.trim().to_uppercase()
}

/// Prompt for the four address fields, re-asking each until it validates.
pub fn read_address<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Address> {
    let street = prompt_until_valid(
        input,
        output,
        "Enter street address (e.g., 123 Main Street): ",
        trimmed,
        validate_street,
        "Invalid street address format. Please try again.",
    )?;
    let city = prompt_until_valid(
        input,
        output,
        "Enter city: ",
        trimmed,
        validate_city,
        "Invalid city name. Please try again.",
    )?;
    let state = prompt_until_valid(
        input,
        output,
        "Enter state (2-letter code): ",
        trimmed_upper,
        validate_state,
        "Invalid state code. Please enter a valid US state code (e.g., CA).",
    )?;
    let zipcode = prompt_until_valid(
        input,
        output,
        "Enter ZIP code: ",
        trimmed,
        validate_zipcode,
        "Invalid ZIP code. Please enter a 5-digit ZIP or ZIP+4 code.",
    )?;

    Address::new(&street, &city, &state, &zipcode)
        .map_err(|e: AddressError| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// `1234567.5` → `$1,234,567.50`. Non-finite amounts render as `N/A`.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "N/A".to_string();
    }

    let fixed = format!("{:.2}", amount.abs());
    let (dollars, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, digit) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

/// Floats keep their decimal point: `1200.0`, not `1200`.
fn decimal(value: f64) -> String {
    format!("{value:?}")
}

fn or_na<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| v.to_string())
}

fn render_details(details: &PropertyDetails, out: &mut String) {
    out.push_str(&format!("Square Feet: {}\n", or_na(details.square_feet.map(decimal))));
    out.push_str(&format!("Bedrooms: {}\n", or_na(details.bedrooms)));
    out.push_str(&format!("Bathrooms: {}\n", or_na(details.bathrooms.map(decimal))));
    out.push_str(&format!(
        "Estimated Value: {}\n",
        details
            .estimated_value
            .map_or_else(|| "N/A".to_string(), format_currency)
    ));
    out.push_str(&format!("Year Built: {}\n", or_na(details.year_built)));
}

/// Plain-text report of a lookup.
pub fn render_report(info: &HomeInformation) -> String {
    let mut out = String::new();

    out.push_str("\nProperty Overview:\n");
    out.push_str(info.overview.trim_end());
    out.push('\n');

    out.push_str("\nProperty Details:\n");
    render_details(&info.details, &mut out);

    out.push_str("\nNearby Schools:\n");
    if info.nearby_schools.is_empty() {
        out.push_str("No school information available.\n");
    }
    for school in &info.nearby_schools {
        out.push_str(&format!("{} ({})\n", school.name, school.school_type));
        out.push_str(&format!("  Distance: {} miles\n", decimal(school.distance)));
        out.push_str(&format!("  Rating: {}/10\n", or_na(school.rating.map(decimal))));
        out.push('\n');
    }

    out
}
