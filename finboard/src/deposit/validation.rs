//! Declarative field validation for the deposit form.
//!
//! A [`Schema`] lists the rules for each field; validating a [`FieldValues`]
//! record runs every rule on every field and reports all failures at once.

use itertools::Itertools;
use std::collections::BTreeMap;
use std::fmt::Display;
use thiserror::Error;

/// Form fields, named as the form exposes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Date,
    Description,
    TransferValue,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Description => "description",
            Self::TransferValue => "transferValue",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Values submitted with the form. A field that was never supplied is absent,
/// which is different from an empty string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldValues(BTreeMap<Field, String>);

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.0.insert(field, value.into());
        self
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// Present and non-empty
    Required(&'static str),
    /// At least `n` characters when present
    MinChars(usize, &'static str),
}

impl Rule {
    fn check(&self, value: Option<&str>) -> Result<(), &'static str> {
        match (self, value) {
            (Rule::Required(message), None) => Err(*message),
            (Rule::Required(message), Some(v)) if v.is_empty() => Err(*message),
            (Rule::MinChars(n, message), Some(v)) if v.chars().count() < *n => Err(*message),
            _ => Ok(()),
        }
    }
}

/// Per-field error messages, in rule order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<Field, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: Field, message: impl Into<String>) {
        self.0.entry(field).or_default().push(message.into());
    }

    pub fn get(&self, field: Field) -> &[String] {
        self.0.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Message shown next to the field (the last one reported).
    pub fn message(&self, field: Field) -> Option<&str> {
        self.get(field).last().map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn field_names(&self) -> String {
        self.fields().map(|f| f.name()).join(", ")
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("validation failed for {}", .errors.field_names())]
pub struct ValidationError {
    pub errors: FieldErrors,
}

#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<(Field, Vec<Rule>)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, field: Field, rules: Vec<Rule>) -> Self {
        self.fields.push((field, rules));
        self
    }

    pub fn validate(&self, values: &FieldValues) -> Result<(), ValidationError> {
        let mut errors = FieldErrors::new();

        for (field, rules) in &self.fields {
            let value = values.get(*field);
            for rule in rules {
                if let Err(message) = rule.check(value) {
                    errors.push(*field, message);
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { errors })
        }
    }
}

pub const DATE_REQUIRED: &str = "Obrigatório data";
pub const DESCRIPTION_TOO_SHORT: &str = "Obrigatório descrição (min. 3 caracteres)";
pub const TRANSFER_VALUE_REQUIRED: &str = "Obrigatório transferência (max. 10000)";

/// Rules checked on every deposit/payment submission.
pub fn deposit_schema() -> Schema {
    Schema::new()
        .field(Field::Date, vec![Rule::Required(DATE_REQUIRED)])
        .field(
            Field::Description,
            vec![Rule::MinChars(3, DESCRIPTION_TOO_SHORT)],
        )
        .field(
            Field::TransferValue,
            vec![Rule::Required(TRANSFER_VALUE_REQUIRED)],
        )
}
