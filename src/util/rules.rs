//! Field validation rules.
//!
//! DESIGN
//! ======
//! Rules are plain data (`FieldRule`) in one static table keyed by `FieldId`
//! and evaluated by a single generic routine. Evaluation is pure: it takes the
//! raw input value plus a `RuleContext` (today's date, minimum age) and never
//! touches the DOM, so the table is tested without a browser.
//!
//! Precedence inside one field: required, charset, minimum length, maximum
//! length, then the field's custom check. The first failure wins.

#[cfg(test)]
#[path = "rules_test.rs"]
mod rules_test;

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::util::age::{age_on, parse_date_input};
use crate::util::fields::FieldId;

pub const DEFAULT_MIN_AGE: u32 = 18;
pub const PHONE_MIN_DIGITS: usize = 9;
pub const PHONE_MAX_DIGITS: usize = 15;
pub const IMAGE_EXTENSIONS: [&str; 3] = [".png", ".jpeg", ".jpg"];

static ARABIC_TEXT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\p{Arabic} ]+$").expect("arabic text regex"));
static LATIN_TEXT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z ]+$").expect("latin text regex"));
static ARABIC_PLACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{Arabic} ,،\-]+$").expect("arabic place regex"));
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[A-Za-z]{2,4}$").expect("email regex"));

/// A single validation failure, displayed inline under the field.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("هذا الحقل مطلوب")]
    Required,
    #[error("يرجى إدخال أحرف عربية فقط")]
    ArabicOnly,
    #[error("يرجى إدخال أحرف إنجليزية فقط")]
    LatinOnly,
    #[error("يرجى إدخال أحرف عربية أو فاصلة أو شرطة فقط")]
    PlaceCharacters,
    #[error("يجب ألا يقل عن {min} أحرف")]
    TooShort { min: usize },
    #[error("يجب ألا يزيد عن {max} حرفاً")]
    TooLong { max: usize },
    #[error("يرجى إدخال الرقم بدون مفتاح دولي (00 أو +)")]
    InternationalPrefix,
    #[error("يجب أن يتكون الرقم من 9 إلى 15 خانة")]
    PhoneDigits,
    #[error("يرجى إدخال بريد إلكتروني صحيح")]
    Email,
    #[error("يرجى إدخال تاريخ صحيح")]
    Date,
    #[error("يجب ألا يقل العمر عن {min_age} سنة")]
    Underage { min_age: u32 },
    #[error("يجب أن تكون الصورة بصيغة png أو jpeg أو jpg")]
    ImageType,
    #[error("يرجى إدخال رقم صحيح")]
    WholeNumber,
}

/// Allowed character classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Charset {
    /// Arabic script and spaces.
    Arabic,
    /// ASCII letters and spaces.
    Latin,
    /// Arabic script, spaces, commas and hyphens.
    ArabicPlace,
}

impl Charset {
    fn check(self, value: &str) -> Result<(), FieldError> {
        let (re, err) = match self {
            Self::Arabic => (&*ARABIC_TEXT, FieldError::ArabicOnly),
            Self::Latin => (&*LATIN_TEXT, FieldError::LatinOnly),
            Self::ArabicPlace => (&*ARABIC_PLACE, FieldError::PlaceCharacters),
        };
        if re.is_match(value) { Ok(()) } else { Err(err) }
    }
}

/// Field-specific checks that are more than a charset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Check {
    Phone,
    Email,
    Adult,
    ImageFile,
    WholeNumber,
}

/// Inputs to rule evaluation that are not part of the value itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleContext {
    pub today: NaiveDate,
    pub min_age: u32,
}

impl RuleContext {
    pub fn new(today: NaiveDate) -> Self {
        Self { today, min_age: DEFAULT_MIN_AGE }
    }
}

/// Declarative rule set for one field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldRule {
    pub field: FieldId,
    pub required: bool,
    pub charset: Option<Charset>,
    pub min_chars: Option<usize>,
    pub max_chars: Option<usize>,
    pub check: Option<Check>,
}

impl FieldRule {
    const fn required(field: FieldId) -> Self {
        Self { field, required: true, charset: None, min_chars: None, max_chars: None, check: None }
    }

    const fn optional(field: FieldId) -> Self {
        Self { required: false, ..Self::required(field) }
    }

    const fn charset(self, charset: Charset) -> Self {
        Self { charset: Some(charset), ..self }
    }

    const fn min(self, chars: usize) -> Self {
        Self { min_chars: Some(chars), ..self }
    }

    const fn max(self, chars: usize) -> Self {
        Self { max_chars: Some(chars), ..self }
    }

    const fn check(self, check: Check) -> Self {
        Self { check: Some(check), ..self }
    }

    /// Evaluate this rule against a raw input value.
    pub fn evaluate(&self, value: &str, ctx: &RuleContext) -> Result<(), FieldError> {
        let value = value.trim();
        if value.is_empty() {
            return if self.required { Err(FieldError::Required) } else { Ok(()) };
        }
        if let Some(charset) = self.charset {
            charset.check(value)?;
        }
        let chars = value.chars().count();
        if let Some(min) = self.min_chars
            && chars < min
        {
            return Err(FieldError::TooShort { min });
        }
        if let Some(max) = self.max_chars
            && chars > max
        {
            return Err(FieldError::TooLong { max });
        }
        match self.check {
            Some(Check::Phone) => check_phone(value),
            Some(Check::Email) => check_email(value),
            Some(Check::Adult) => check_adult(value, ctx),
            Some(Check::ImageFile) => check_image_file(value),
            Some(Check::WholeNumber) => check_whole_number(value),
            None => Ok(()),
        }
    }
}

/// One entry per `FieldId`, in declaration order.
pub static RULES: [FieldRule; FieldId::ALL.len()] = [
    FieldRule::required(FieldId::NameAr).charset(Charset::Arabic).min(10).max(50),
    FieldRule::required(FieldId::NameEn).charset(Charset::Latin).min(10).max(50),
    FieldRule::required(FieldId::Gender),
    FieldRule::required(FieldId::PlaceOfBirth).charset(Charset::ArabicPlace).max(20),
    FieldRule::required(FieldId::DateOfBirth).check(Check::Adult),
    FieldRule::required(FieldId::CallNumber).check(Check::Phone),
    FieldRule::required(FieldId::WhatsappNumber).check(Check::Phone),
    FieldRule::required(FieldId::Email).max(254).check(Check::Email),
    FieldRule::required(FieldId::JobTitle),
    FieldRule::required(FieldId::PeriodOfResidence),
    FieldRule::required(FieldId::Photograph).check(Check::ImageFile),
    FieldRule::required(FieldId::PassportPhoto).check(Check::ImageFile),
    FieldRule::required(FieldId::ResidencyPhoto).check(Check::ImageFile),
    FieldRule::required(FieldId::FamilyName).charset(Charset::Arabic).max(15),
    FieldRule::required(FieldId::MemberCount).check(Check::WholeNumber),
    FieldRule::required(FieldId::StreetAddress).max(50),
    FieldRule::required(FieldId::District).max(20),
    FieldRule::required(FieldId::City),
    FieldRule::required(FieldId::Province).max(20),
    FieldRule::optional(FieldId::PostalCode).max(10),
    FieldRule::required(FieldId::AcademicQualification),
    FieldRule::optional(FieldId::School).max(50),
    FieldRule::optional(FieldId::Major).max(50),
    FieldRule::optional(FieldId::Semester).check(Check::WholeNumber),
];

/// Rule entry for `field`.
pub fn rule_for(field: FieldId) -> &'static FieldRule {
    &RULES[field as usize]
}

/// Validate one value against its field's rule.
pub fn validate(field: FieldId, value: &str, ctx: &RuleContext) -> Result<(), FieldError> {
    rule_for(field).evaluate(value, ctx)
}

/// Outcome of a validation pass as seen by the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub ok: bool,
    pub message: Option<String>,
}

impl ValidationResult {
    pub fn success() -> Self {
        Self { ok: true, message: None }
    }
}

impl From<Result<(), FieldError>> for ValidationResult {
    fn from(result: Result<(), FieldError>) -> Self {
        match result {
            Ok(()) => Self::success(),
            Err(err) => Self { ok: false, message: Some(err.to_string()) },
        }
    }
}

fn check_phone(value: &str) -> Result<(), FieldError> {
    if value.starts_with("00") || value.starts_with('+') {
        return Err(FieldError::InternationalPrefix);
    }
    let digits = value.len();
    if value.bytes().all(|b| b.is_ascii_digit()) && (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits) {
        Ok(())
    } else {
        Err(FieldError::PhoneDigits)
    }
}

fn check_email(value: &str) -> Result<(), FieldError> {
    if EMAIL.is_match(value) { Ok(()) } else { Err(FieldError::Email) }
}

fn check_adult(value: &str, ctx: &RuleContext) -> Result<(), FieldError> {
    let birth = parse_date_input(value).ok_or(FieldError::Date)?;
    if birth > ctx.today {
        return Err(FieldError::Date);
    }
    if age_on(birth, ctx.today) < ctx.min_age {
        return Err(FieldError::Underage { min_age: ctx.min_age });
    }
    Ok(())
}

fn check_image_file(value: &str) -> Result<(), FieldError> {
    let lower = value.to_ascii_lowercase();
    if IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
        Ok(())
    } else {
        Err(FieldError::ImageType)
    }
}

fn check_whole_number(value: &str) -> Result<(), FieldError> {
    value.parse::<u16>().map(|_| ()).map_err(|_| FieldError::WholeNumber)
}
