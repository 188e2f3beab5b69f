//! Child and partner rows inside the repeating sub-forms.
//!
//! Each visible section posts `<prefix>_name{i}` and `<prefix>_age{i}`. A row
//! without a name is ignored; an age, when present, must be a whole number.

#[cfg(test)]
#[path = "family_test.rs"]
mod family_test;

use crate::state::groups::GroupKind;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FamilyRow {
    pub name: String,
    pub age: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FamilyMember {
    pub name: String,
    pub age: Option<u16>,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FamilyError {
    #[error("العمر في الصف {} يجب أن يكون رقماً صحيحاً", .index + 1)]
    InvalidAge { index: usize },
}

impl FamilyError {
    pub fn index(&self) -> usize {
        match self {
            Self::InvalidAge { index } => *index,
        }
    }
}

/// Posted input name for a row's name field.
pub fn name_input(kind: GroupKind, index: usize) -> String {
    format!("{}_name{index}", kind.prefix())
}

/// Posted input name for a row's age field.
pub fn age_input(kind: GroupKind, index: usize) -> String {
    format!("{}_age{index}", kind.prefix())
}

/// Collect named rows, reporting every row whose age is not a whole number.
pub fn collect_members(rows: &[FamilyRow]) -> Result<Vec<FamilyMember>, Vec<FamilyError>> {
    let mut members = Vec::new();
    let mut errors = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        let age = row.age.trim();
        let parsed = if age.is_empty() {
            None
        } else if let Ok(age) = age.parse::<u16>() {
            Some(age)
        } else {
            errors.push(FamilyError::InvalidAge { index });
            continue;
        };
        let name = row.name.trim();
        if !name.is_empty() {
            members.push(FamilyMember { name: name.to_owned(), age: parsed });
        }
    }
    if errors.is_empty() { Ok(members) } else { Err(errors) }
}
