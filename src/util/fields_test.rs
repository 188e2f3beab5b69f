use super::*;

#[test]
fn dom_id_uses_server_form_prefix() {
    assert_eq!(FieldId::NameAr.dom_id(), "id_name_ar");
    assert_eq!(FieldId::CallNumber.dom_id(), "id_call_number");
}

#[test]
fn names_are_unique() {
    let mut names = FieldId::ALL.iter().map(|f| f.name()).collect::<Vec<_>>();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), FieldId::ALL.len());
}

#[test]
fn every_field_belongs_to_exactly_one_section() {
    let total: usize = Section::ALL.iter().map(|s| FieldId::in_section(*s).count()).sum();
    assert_eq!(total, FieldId::ALL.len());
}

#[test]
fn select_fields_have_no_html_type() {
    assert_eq!(FieldId::Gender.kind(), InputKind::Select);
    assert_eq!(FieldId::Gender.kind().html_type(), None);
    assert_eq!(FieldId::Photograph.kind().html_type(), Some("file"));
    assert_eq!(FieldId::WhatsappNumber.kind().html_type(), Some("tel"));
}

#[test]
fn static_choices_exist_for_fixed_selects_only() {
    assert_eq!(FieldId::Gender.choices().len(), 2);
    assert_eq!(FieldId::PeriodOfResidence.choices().len(), 7);
    assert!(FieldId::City.choices().is_empty());
    assert!(FieldId::NameAr.choices().is_empty());
}

#[test]
fn field_id_deserializes_from_snake_case() {
    let field: FieldId = serde_json::from_str("\"passport_photo\"").unwrap();
    assert_eq!(field, FieldId::PassportPhoto);
}
