//! Client-supplied record payloads and their validation rules.
//!
//! A payload arrives with every field optional so that a missing field is
//! reported as a validation failure rather than a deserialization error.
//! [`RecordPayload::validate`] checks it against the kind's rules and yields
//! the owned [`RecordFields`] that the persistence layer writes.

use serde::Deserialize;
use validator::{ValidateLength, ValidateRange};

use crate::error::CoreError;
use crate::kind::{RecordKind, MAX_NAME_LENGTH, MAX_SPECIES_LENGTH};
use crate::types::DbId;

/// JSON body accepted by create and replace.
///
/// `dateCreated` is server-assigned; if a client sends it, it is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPayload {
    pub id: Option<DbId>,
    pub name: Option<String>,
    pub species: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
}

/// Validated record contents, ready to insert or to replace a row with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFields {
    pub name: String,
    pub species: String,
    pub age: i32,
    pub gender: Option<String>,
}

impl RecordPayload {
    /// Check the payload against `kind`'s rules.
    ///
    /// Every violation is collected; the error message joins them with `"; "`.
    pub fn validate(&self, kind: RecordKind) -> Result<RecordFields, CoreError> {
        let mut problems = Vec::new();

        let name = required_text(self.name.as_ref(), "Name", MAX_NAME_LENGTH, &mut problems);
        let species = required_text(
            self.species.as_ref(),
            "Species",
            MAX_SPECIES_LENGTH,
            &mut problems,
        );

        let range = kind.age_range();
        let age = match self.age {
            None => {
                problems.push("Age is required".to_string());
                None
            }
            Some(age)
                if !age.validate_range(
                    Some(*range.start()),
                    Some(*range.end()),
                    None,
                    None,
                ) =>
            {
                problems.push(format!(
                    "Age must be between {} and {}",
                    range.start(),
                    range.end()
                ));
                None
            }
            Some(age) => Some(age),
        };

        if let (Some(gender), Some(max)) = (&self.gender, kind.max_gender_length()) {
            if !gender.validate_length(None, Some(max), None) {
                problems.push(format!("Gender must be {max} or less characters"));
            }
        }

        match (name, species, age) {
            (Some(name), Some(species), Some(age)) if problems.is_empty() => Ok(RecordFields {
                name,
                species,
                age,
                gender: self.gender.clone(),
            }),
            _ => Err(CoreError::Validation(problems.join("; "))),
        }
    }
}

fn required_text(
    value: Option<&String>,
    label: &str,
    max: u64,
    problems: &mut Vec<String>,
) -> Option<String> {
    match value {
        Some(text) if !text.trim().is_empty() => {
            if text.validate_length(None, Some(max), None) {
                Some(text.clone())
            } else {
                problems.push(format!("{label} must be {max} or less characters"));
                None
            }
        }
        _ => {
            problems.push(format!("{label} is required"));
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
