//! Product form validation.
//!
//! User input arrives as raw text, one string per field. [`ProductDraft`]
//! checks every field (not fail-fast) and either yields a [`ValidProduct`] or
//! the full list of [`FieldError`]s so a client can report them inline.
//!
//! Rules:
//! - `code`: integer, greater than zero
//! - `name`: at least 2 characters
//! - `description`: at least 5 characters
//! - `quantity`: integer, zero or more. An empty quantity counts as zero.
//!
//! Text fields are trimmed before the length check and stored trimmed.
//! Lengths are counted in characters, not bytes.

use crate::model::Product;
use serde::Serialize;
use std::fmt;

pub const NAME_MIN_CHARS: usize = 2;
pub const DESCRIPTION_MIN_CHARS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Code,
    Name,
    Description,
    Quantity,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Code => "code",
            Field::Name => "name",
            Field::Description => "description",
            Field::Quantity => "quantity",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    fn new(field: Field, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

/// All field failures of one submission, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(pub Vec<FieldError>);

impl FieldErrors {
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn for_field(&self, field: Field) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

/// Raw form input.
#[derive(Debug, Clone, Default)]
pub struct ProductDraft {
    pub code: String,
    pub name: String,
    pub description: String,
    pub quantity: String,
}

/// A draft that passed validation. The only way to get one is
/// [`ProductDraft::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidProduct {
    code: u64,
    name: String,
    description: String,
    quantity: u64,
}

impl ValidProduct {
    pub fn code(&self) -> u64 {
        self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stamps `created_at` with the current time.
    pub fn into_product(self) -> Product {
        Product::new(self.code, self.name, self.description, self.quantity)
    }
}

impl ProductDraft {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        quantity: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            description: description.into(),
            quantity: quantity.into(),
        }
    }

    pub fn validate(&self) -> Result<ValidProduct, FieldErrors> {
        let mut errors = Vec::new();

        let code = match parse_whole(&self.code) {
            Some(Whole::NonNegative(n)) if n > 0 => Some(n),
            Some(_) => {
                errors.push(FieldError::new(Field::Code, "Code must be a positive number"));
                None
            }
            None if self.code.trim().is_empty() => {
                errors.push(FieldError::new(Field::Code, "Code must be a positive number"));
                None
            }
            None => {
                errors.push(FieldError::new(Field::Code, "Code must be a whole number"));
                None
            }
        };

        let name = self.name.trim();
        if name.chars().count() < NAME_MIN_CHARS {
            errors.push(FieldError::new(
                Field::Name,
                "Name must be at least 2 characters",
            ));
        }

        let description = self.description.trim();
        if description.chars().count() < DESCRIPTION_MIN_CHARS {
            errors.push(FieldError::new(
                Field::Description,
                "Description must be at least 5 characters",
            ));
        }

        let quantity = if self.quantity.trim().is_empty() {
            Some(0)
        } else {
            match parse_whole(&self.quantity) {
                Some(Whole::NonNegative(n)) => Some(n),
                Some(Whole::Negative) => {
                    errors.push(FieldError::new(
                        Field::Quantity,
                        "Quantity cannot be negative",
                    ));
                    None
                }
                None => {
                    errors.push(FieldError::new(
                        Field::Quantity,
                        "Quantity must be a whole number",
                    ));
                    None
                }
            }
        };

        match (code, quantity) {
            (Some(code), Some(quantity)) if errors.is_empty() => Ok(ValidProduct {
                code,
                name: name.to_string(),
                description: description.to_string(),
                quantity,
            }),
            _ => Err(FieldErrors(errors)),
        }
    }
}

/// A signed whole number, kept as sign plus magnitude so every `u64` parses.
enum Whole {
    Negative,
    NonNegative(u64),
}

fn parse_whole(raw: &str) -> Option<Whole> {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if negative {
        // "-0" is still zero
        if digits.bytes().all(|b| b == b'0') {
            return Some(Whole::NonNegative(0));
        }
        return Some(Whole::Negative);
    }
    digits.parse::<u64>().ok().map(Whole::NonNegative)
}
