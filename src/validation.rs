//! Credential grammar checks.
//!
//! Names are ASCII letters joined by hyphens, apostrophes, or (for multi-word
//! last names) spaces. A name starts and ends with a letter and never holds two
//! hyphen/apostrophe characters side by side.

use once_cell::sync::Lazy;
use regex::Regex;

static NAME_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z' -]*[A-Za-z]$").expect("name pattern compiles"));

// `regex` has no lookahead, so adjacency is a separate negative match.
static ADJACENT_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-']{2}").expect("separator pattern compiles"));

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

pub fn validate_name(name: &str) -> bool {
    NAME_SHAPE.is_match(name) && !ADJACENT_SEPARATORS.is_match(name)
}

/// `local@domain.tld`: one `@`, no whitespace, and a dot inside the domain
/// with something on both sides of it.
pub fn validate_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Uppercases letters that follow a non-letter, lowercases the rest.
pub fn title_case(value: &str) -> String {
    let mut output = String::with_capacity(value.len());
    let mut after_letter = false;

    for c in value.chars() {
        if c.is_alphabetic() {
            if after_letter {
                output.extend(c.to_lowercase());
            } else {
                output.extend(c.to_uppercase());
            }
            after_letter = true;
        } else {
            output.push(c);
            after_letter = false;
        }
    }

    output
}
