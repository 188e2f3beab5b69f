//! Per-field validation state for the registration form.
//!
//! SYSTEM CONTEXT
//! ==============
//! `FieldValidator` is owned by the form page through a signal. Blur handlers
//! call `validate_field`, the submit handler calls `validate_form`; components
//! render each field's `FieldStatus` and replay a shake whenever the field's
//! shake sequence number moves.
//!
//! The one-shot waiver lives here rather than in the rule table: it depends
//! on interaction history, not on the value.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use crate::util::fields::FieldId;
use crate::util::rules::{self, DEFAULT_MIN_AGE, FieldError, RuleContext, ValidationResult};

/// Fields whose required check is waived on their first blur.
pub const DEFAULT_ONE_SHOT_FIELDS: [FieldId; 3] = [FieldId::Photograph, FieldId::PassportPhoto, FieldId::ResidencyPhoto];

/// Visual annotation for one field. A field is in exactly one state, so it
/// never carries both a success and an error class.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FieldStatus {
    #[default]
    Untouched,
    Valid,
    Invalid(FieldError),
}

impl FieldStatus {
    pub fn class(&self) -> Option<&'static str> {
        match self {
            Self::Untouched => None,
            Self::Valid => Some("is-valid"),
            Self::Invalid(_) => Some("is-invalid"),
        }
    }

    pub fn message(&self) -> Option<String> {
        match self {
            Self::Invalid(err) => Some(err.to_string()),
            _ => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}

/// Current raw value of every field, keyed by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    values: HashMap<FieldId, String>,
}

impl FormValues {
    pub fn get(&self, field: FieldId) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldValidator {
    statuses: HashMap<FieldId, FieldStatus>,
    one_shot: HashSet<FieldId>,
    shake_seq: HashMap<FieldId, u64>,
    min_age: u32,
}

impl Default for FieldValidator {
    fn default() -> Self {
        Self::new(DEFAULT_ONE_SHOT_FIELDS, DEFAULT_MIN_AGE)
    }
}

impl FieldValidator {
    pub fn new(one_shot_fields: impl IntoIterator<Item = FieldId>, min_age: u32) -> Self {
        Self {
            statuses: HashMap::new(),
            one_shot: one_shot_fields.into_iter().collect(),
            shake_seq: HashMap::new(),
            min_age,
        }
    }

    pub fn status(&self, field: FieldId) -> FieldStatus {
        self.statuses.get(&field).cloned().unwrap_or_default()
    }

    /// Bumped every time `field` fails validation.
    pub fn shake_seq(&self, field: FieldId) -> u64 {
        self.shake_seq.get(&field).copied().unwrap_or(0)
    }

    /// Whether the next blur of `field` still waives its required check.
    pub fn is_first_interaction(&self, field: FieldId) -> bool {
        self.one_shot.contains(&field)
    }

    /// First field in page order that currently shows an error.
    pub fn first_invalid(&self) -> Option<FieldId> {
        FieldId::ALL.into_iter().find(|field| self.status(*field).is_invalid())
    }

    /// Blur path. Consults (and consumes) the field's one-shot waiver, then
    /// applies the field's rule and annotates the result.
    pub fn validate_field(&mut self, field: FieldId, value: &str, today: NaiveDate) -> ValidationResult {
        let waived = self.one_shot.remove(&field);
        if waived && value.trim().is_empty() {
            log::debug!("required check waived once for {}", field.name());
            self.statuses.insert(field, FieldStatus::Untouched);
            return ValidationResult::success();
        }
        let result = rules::validate(field, value, &self.context(today));
        self.annotate(field, result.clone());
        result.into()
    }

    /// Submit path. Clears every annotation, then re-checks all fields. The
    /// one-shot waivers are neither applied nor consumed.
    pub fn validate_form(&mut self, values: &FormValues, today: NaiveDate) -> bool {
        self.statuses.clear();
        let ctx = self.context(today);
        let mut all_ok = true;
        for field in FieldId::ALL {
            let result = rules::validate(field, values.get(field), &ctx);
            all_ok &= result.is_ok();
            self.annotate(field, result);
        }
        all_ok
    }

    fn context(&self, today: NaiveDate) -> RuleContext {
        RuleContext { today, min_age: self.min_age }
    }

    fn annotate(&mut self, field: FieldId, result: Result<(), FieldError>) {
        match result {
            Ok(()) => {
                self.statuses.insert(field, FieldStatus::Valid);
            }
            Err(err) => {
                log::debug!("{} rejected: {err}", field.name());
                *self.shake_seq.entry(field).or_insert(0) += 1;
                self.statuses.insert(field, FieldStatus::Invalid(err));
            }
        }
    }
}
