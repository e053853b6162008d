//! Client field validation.
//!
//! # Responsibility
//! - Check a client record against the field rules before persistence.
//! - Report every violation as a human-readable message for redisplay.
//!
//! # Invariants
//! - Pure: no I/O, no side effects, same input gives same output.
//! - Output is sorted lexicographically; duplicate messages are kept.
//! - A blank optional field is treated as absent and never format-checked.
//! - Length and shape rules see the value exactly as it will be stored;
//!   trimming only decides blank versus absent.

use crate::model::client::Client;
use once_cell::sync::Lazy;
use regex::Regex;

/// Message emitted when `company_name` is missing or blank.
pub const COMPANY_NAME_REQUIRED: &str = "Company Name is required";
/// Message emitted when `website_url` does not look like a web address.
pub const WEBSITE_URL_INVALID: &str = "Website URL is not a valid URL";
/// Message emitted when `phone_number` has an unsupported shape.
pub const PHONE_NUMBER_INVALID: &str = "Phone Number is not a valid phone number";
/// Message emitted when `state` is not a two-letter code.
pub const STATE_INVALID: &str = "State must be a two-letter code";
/// Message emitted when `zip_code` is neither `NNNNN` nor `NNNNN-NNNN`.
pub const ZIP_CODE_INVALID: &str = "Zip Code must be five digits or ZIP+4";

const COMPANY_NAME_MAX_CHARS: usize = 50;
const WEBSITE_URL_MAX_CHARS: usize = 100;
const STREET_ADDRESS_MAX_CHARS: usize = 100;
const CITY_MAX_CHARS: usize = 50;
const PHONE_MIN_DIGITS: usize = 7;
const PHONE_MAX_DIGITS: usize = 15;

static WEBSITE_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(https?://)?[a-z0-9](?:[a-z0-9-]*[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]*[a-z0-9])?)+(?::\d{1,5})?(?:[/?#]\S*)?$",
    )
    .expect("valid website url regex")
});
static PHONE_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9(][0-9 ().\-]*$").expect("valid phone regex"));
static STATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]{2}$").expect("valid state regex"));
static ZIP_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{5}(?:-[0-9]{4})?$").expect("valid zip regex"));

/// Validates a client and returns all violated rules as sorted messages.
///
/// An empty vector means the record may be persisted.
pub fn validate_client(client: &Client) -> Vec<String> {
    let mut errors = Vec::new();

    if client.company_name.trim().is_empty() {
        errors.push(COMPANY_NAME_REQUIRED.to_string());
    } else {
        check_max_chars(
            &mut errors,
            "Company Name",
            &client.company_name,
            COMPANY_NAME_MAX_CHARS,
        );
    }

    if let Some(url) = present(&client.website_url) {
        check_max_chars(&mut errors, "Website URL", url, WEBSITE_URL_MAX_CHARS);
        if !WEBSITE_URL_RE.is_match(url) {
            errors.push(WEBSITE_URL_INVALID.to_string());
        }
    }

    if let Some(phone) = present(&client.phone_number) {
        if !is_valid_phone_number(phone) {
            errors.push(PHONE_NUMBER_INVALID.to_string());
        }
    }

    if let Some(street) = present(&client.street_address) {
        check_max_chars(
            &mut errors,
            "Street Address",
            street,
            STREET_ADDRESS_MAX_CHARS,
        );
    }

    if let Some(city) = present(&client.city) {
        check_max_chars(&mut errors, "City", city, CITY_MAX_CHARS);
    }

    if let Some(state) = present(&client.state) {
        if !STATE_RE.is_match(state) {
            errors.push(STATE_INVALID.to_string());
        }
    }

    if let Some(zip) = present(&client.zip_code) {
        if !ZIP_CODE_RE.is_match(zip) {
            errors.push(ZIP_CODE_INVALID.to_string());
        }
    }

    errors.sort();
    errors
}

/// Returns the untrimmed value when the optional field carries non-blank text.
fn present(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .filter(|raw| !raw.trim().is_empty())
}

fn check_max_chars(errors: &mut Vec<String>, label: &str, value: &str, max_chars: usize) {
    if value.chars().count() > max_chars {
        errors.push(format!("{label} must be at most {max_chars} characters"));
    }
}

fn is_valid_phone_number(value: &str) -> bool {
    if !PHONE_NUMBER_RE.is_match(value) {
        return false;
    }
    let digits = value.chars().filter(char::is_ascii_digit).count();
    (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits)
}
