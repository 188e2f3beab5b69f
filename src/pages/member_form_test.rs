use super::*;
use crate::state::groups::RepeatingGroupState;

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

fn row(name: &str, age: &str) -> FamilyRow {
    FamilyRow { name: name.to_owned(), age: age.to_owned() }
}

fn check(
    values: &FormValues,
    groups: &RepeatingGroups,
    children: &[FamilyRow],
    submission: &SubmissionState,
) -> (SubmitReport, FieldValidator) {
    let mut validator = FieldValidator::default();
    let report = check_submission(&mut validator, values, groups, children, &[], submission, today());
    (report, validator)
}

#[test]
fn complete_form_passes() {
    let (report, validator) = check(&valid_values(), &RepeatingGroups::default(), &[row("سعيد", "7")], &SubmissionState::default());
    assert!(report.is_ok());
    assert_eq!(report.focus_target(&validator), None);
}

#[test]
fn invalid_field_is_the_first_focus_target() {
    let mut values = valid_values();
    values.set(FieldId::Email, "not-an-email");
    let mut submission = SubmissionState::default();
    submission.set_membership(MEMBERSHIP_REQUESTED);

    let (report, validator) = check(&values, &RepeatingGroups::default(), &[row("سعيد", "x")], &submission);
    assert!(!report.is_ok());
    assert_eq!(report.focus_target(&validator).as_deref(), Some("id_email"));
}

#[test]
fn bad_age_in_a_visible_row_blocks_submit() {
    let (report, validator) = check(&valid_values(), &RepeatingGroups::default(), &[row("سعيد", "seven")], &SubmissionState::default());
    assert!(report.fields_ok);
    assert_eq!(report.child_errors, vec![FamilyError::InvalidAge { index: 0 }]);
    assert_eq!(report.focus_target(&validator).as_deref(), Some("child_age0"));
}

#[test]
fn hidden_rows_are_not_checked() {
    let groups = RepeatingGroups {
        children: RepeatingGroupState::new(GroupKind::Child, 0, 10),
        ..RepeatingGroups::default()
    };
    let (report, _) = check(&valid_values(), &groups, &[row("سعيد", "seven")], &SubmissionState::default());
    assert!(report.is_ok());
}

#[test]
fn requested_membership_needs_consent() {
    let mut submission = SubmissionState::default();
    submission.set_membership(MEMBERSHIP_REQUESTED);
    let (report, validator) = check(&valid_values(), &RepeatingGroups::default(), &[], &submission);
    assert_eq!(report.consent, Err(SubmitError::TermsNotAccepted));
    assert_eq!(report.focus_target(&validator).as_deref(), Some(AGREE_ID));

    submission.set_agreed(true);
    let (report, _) = check(&valid_values(), &RepeatingGroups::default(), &[], &submission);
    assert!(report.is_ok());
}

#[test]
fn empty_form_reports_every_required_field() {
    let (report, validator) = check(&FormValues::default(), &RepeatingGroups::default(), &[], &SubmissionState::default());
    assert!(!report.fields_ok);
    assert_eq!(validator.first_invalid(), Some(FieldId::NameAr));
    assert_eq!(validator.status(FieldId::School), crate::state::validation::FieldStatus::Valid);
}

#[test]
fn consent_checkbox_posts_the_value_the_server_accepts() {
    assert_eq!(AGREE_ID, "agree");
    assert_eq!(AGREE_VALUE, "agreed");
}
