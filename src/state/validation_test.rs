use super::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
}

fn valid_values() -> FormValues {
    let mut values = FormValues::default();
    for (field, value) in [
        (FieldId::NameAr, "محمد أحمد علي"),
        (FieldId::NameEn, "Mohammed Ali Ahmed"),
        (FieldId::Gender, "0"),
        (FieldId::PlaceOfBirth, "صنعاء"),
        (FieldId::DateOfBirth, "1995-03-20"),
        (FieldId::CallNumber, "08123456789"),
        (FieldId::WhatsappNumber, "08123456789"),
        (FieldId::Email, "yemeni@indonesia.com"),
        (FieldId::JobTitle, "0"),
        (FieldId::PeriodOfResidence, "2"),
        (FieldId::Photograph, "me.jpg"),
        (FieldId::PassportPhoto, "passport.png"),
        (FieldId::ResidencyPhoto, "kitas.jpeg"),
        (FieldId::FamilyName, "آل سعيد"),
        (FieldId::MemberCount, "3"),
        (FieldId::StreetAddress, "Jl. ABC No.5"),
        (FieldId::District, "Menteng"),
        (FieldId::City, "Jakarta"),
        (FieldId::Province, "DKI Jakarta"),
        (FieldId::AcademicQualification, "2"),
    ] {
        values.set(field, value);
    }
    values
}

// =============================================================
// FieldStatus
// =============================================================

#[test]
fn status_classes_are_mutually_exclusive() {
    assert_eq!(FieldStatus::Untouched.class(), None);
    assert_eq!(FieldStatus::Valid.class(), Some("is-valid"));
    assert_eq!(FieldStatus::Invalid(FieldError::Required).class(), Some("is-invalid"));
    assert_eq!(FieldStatus::Valid.message(), None);
    assert_eq!(FieldStatus::Invalid(FieldError::Required).message().as_deref(), Some("هذا الحقل مطلوب"));
}

#[test]
fn form_values_default_to_empty() {
    let values = FormValues::default();
    assert_eq!(values.get(FieldId::Email), "");
}

// =============================================================
// Blur path
// =============================================================

#[test]
fn validate_field_marks_success() {
    let mut validator = FieldValidator::default();
    let result = validator.validate_field(FieldId::NameAr, "محمد أحمد علي", today());
    assert!(result.ok);
    assert_eq!(validator.status(FieldId::NameAr), FieldStatus::Valid);
    assert_eq!(validator.shake_seq(FieldId::NameAr), 0);
}

#[test]
fn validate_field_marks_error_and_requests_shake() {
    let mut validator = FieldValidator::default();
    let result = validator.validate_field(FieldId::CallNumber, "0012345678", today());
    assert!(!result.ok);
    assert_eq!(result.message, Some(FieldError::InternationalPrefix.to_string()));
    assert_eq!(validator.status(FieldId::CallNumber), FieldStatus::Invalid(FieldError::InternationalPrefix));
    assert_eq!(validator.shake_seq(FieldId::CallNumber), 1);

    validator.validate_field(FieldId::CallNumber, "+62", today());
    assert_eq!(validator.shake_seq(FieldId::CallNumber), 2);
}

#[test]
fn correcting_a_field_clears_its_error() {
    let mut validator = FieldValidator::default();
    validator.validate_field(FieldId::Email, "nope", today());
    assert!(validator.status(FieldId::Email).is_invalid());
    validator.validate_field(FieldId::Email, "a@b.com", today());
    assert_eq!(validator.status(FieldId::Email), FieldStatus::Valid);
}

#[test]
fn one_shot_waives_required_exactly_once() {
    let mut validator = FieldValidator::default();
    assert!(validator.is_first_interaction(FieldId::PassportPhoto));

    let first = validator.validate_field(FieldId::PassportPhoto, "", today());
    assert!(first.ok);
    assert_eq!(validator.status(FieldId::PassportPhoto), FieldStatus::Untouched);
    assert!(!validator.is_first_interaction(FieldId::PassportPhoto));

    let second = validator.validate_field(FieldId::PassportPhoto, "", today());
    assert!(!second.ok);
    assert_eq!(validator.status(FieldId::PassportPhoto), FieldStatus::Invalid(FieldError::Required));
}

#[test]
fn one_shot_is_consumed_even_when_value_present() {
    let mut validator = FieldValidator::default();
    validator.validate_field(FieldId::Photograph, "me.png", today());
    assert!(!validator.is_first_interaction(FieldId::Photograph));
    let result = validator.validate_field(FieldId::Photograph, "", today());
    assert!(!result.ok);
}

#[test]
fn fields_without_one_shot_fail_on_first_blur() {
    let mut validator = FieldValidator::default();
    let result = validator.validate_field(FieldId::NameEn, "  ", today());
    assert!(!result.ok);
    assert_eq!(result.message, Some(FieldError::Required.to_string()));
}

#[test]
fn configured_one_shot_list_replaces_default() {
    let mut validator = FieldValidator::new([FieldId::Email], 18);
    assert!(validator.validate_field(FieldId::Email, "", today()).ok);
    assert!(!validator.validate_field(FieldId::PassportPhoto, "", today()).ok);
}

// =============================================================
// Submit path
// =============================================================

#[test]
fn validate_form_passes_complete_values() {
    let mut validator = FieldValidator::default();
    assert!(validator.validate_form(&valid_values(), today()));
    assert_eq!(validator.first_invalid(), None);
    assert_eq!(validator.status(FieldId::PostalCode), FieldStatus::Valid);
}

#[test]
fn validate_form_ignores_one_shot_waivers() {
    let mut validator = FieldValidator::default();
    let mut values = valid_values();
    values.set(FieldId::ResidencyPhoto, "");
    assert!(!validator.validate_form(&values, today()));
    assert_eq!(validator.status(FieldId::ResidencyPhoto), FieldStatus::Invalid(FieldError::Required));
    assert!(validator.is_first_interaction(FieldId::ResidencyPhoto));
}

#[test]
fn validate_form_clears_previous_annotations() {
    let mut validator = FieldValidator::default();
    validator.validate_field(FieldId::NameAr, "abc", today());
    assert!(validator.status(FieldId::NameAr).is_invalid());

    assert!(validator.validate_form(&valid_values(), today()));
    assert_eq!(validator.status(FieldId::NameAr), FieldStatus::Valid);
}

#[test]
fn validate_form_reports_first_invalid_in_page_order() {
    let mut validator = FieldValidator::default();
    let mut values = valid_values();
    values.set(FieldId::Email, "bad");
    values.set(FieldId::DateOfBirth, "2010-01-01");
    assert!(!validator.validate_form(&values, today()));
    assert_eq!(validator.first_invalid(), Some(FieldId::DateOfBirth));
    assert_eq!(validator.status(FieldId::DateOfBirth), FieldStatus::Invalid(FieldError::Underage { min_age: 18 }));
}

#[test]
fn min_age_is_configurable() {
    let mut validator = FieldValidator::new(DEFAULT_ONE_SHOT_FIELDS, 30);
    let result = validator.validate_field(FieldId::DateOfBirth, "2000-01-01", today());
    assert!(!result.ok);
}
