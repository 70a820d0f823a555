use regex::Regex;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::models::employee::{Employee, Field, Gender};

static GROUPED_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,3}( [0-9]{3})*$").expect("valid salary pattern"));

/// Inline validation messages keyed by field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut by_field = BTreeMap::new();
        for (name, field_errors) in errors.field_errors() {
            let Ok(field) = name.parse::<Field>() else {
                log::warn!("validation error for unknown field {name}");
                continue;
            };
            if let Some(error) = field_errors.first() {
                let message = error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                by_field.insert(field, message);
            }
        }
        FieldErrors(by_field)
    }
}

/// Checks the draft without touching it. An empty result means it may be saved.
pub fn validate_form(draft: &Employee) -> FieldErrors {
    match draft.validate() {
        Ok(()) => FieldErrors::default(),
        Err(errors) => FieldErrors::from(errors),
    }
}

pub fn is_grouped_salary(value: &str) -> bool {
    GROUPED_DIGITS.is_match(value)
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

fn required(value: &str, message: &'static str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(invalid("required", message));
    }
    Ok(())
}

pub fn validate_employee_number(value: &str) -> Result<(), ValidationError> {
    required(value, "Employee number is required")?;
    match value.trim().parse::<f64>() {
        Ok(number) if number.is_finite() && number >= 0.0 => Ok(()),
        _ => Err(invalid(
            "not_positive",
            "Employee number must be a positive number",
        )),
    }
}

pub fn validate_first_name(value: &str) -> Result<(), ValidationError> {
    required(value, "First name is required")
}

pub fn validate_last_name(value: &str) -> Result<(), ValidationError> {
    required(value, "Last name is required")
}

pub fn validate_salutation(value: &str) -> Result<(), ValidationError> {
    required(value, "Salutation is required")
}

pub fn validate_gender(gender: &Gender) -> Result<(), ValidationError> {
    if gender.is_unset() {
        return Err(invalid("required", "Gender is required"));
    }
    Ok(())
}

pub fn validate_gross_salary(value: &str) -> Result<(), ValidationError> {
    required(value, "Gross Salary is required")?;
    if !is_grouped_salary(value) {
        return Err(invalid(
            "not_grouped",
            "Gross salary must be numeric and grouped with spaces (e.g. 1 000 000)",
        ));
    }
    Ok(())
}
