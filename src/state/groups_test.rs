use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn defaults_show_first_section_of_each_group() {
    let groups = RepeatingGroups::default();
    assert_eq!(groups.children.count(), 1);
    assert_eq!(groups.children.max(), 10);
    assert_eq!(groups.partners.count(), 1);
    assert_eq!(groups.partners.max(), 4);
    assert!(groups.children.section_visible(0));
    assert!(!groups.children.section_visible(1));
}

#[test]
fn new_clamps_initial_count() {
    let group = RepeatingGroupState::new(GroupKind::Partner, 9, 4);
    assert_eq!(group.count(), 4);
    assert!(!group.add_visible());
}

#[test]
fn ids_follow_markup_conventions() {
    assert_eq!(GroupKind::Child.section_id(3), "child3");
    assert_eq!(GroupKind::Partner.section_id(0), "partner0");
    assert_eq!(GroupKind::Child.add_button_id(), "add-chd-btn");
    assert_eq!(GroupKind::Partner.remove_button_id(), "remove-prt-btn");
}

// =============================================================
// add / remove
// =============================================================

#[test]
fn adding_children_hides_add_exactly_at_limit() {
    let mut groups = RepeatingGroups::default();
    let mut hidden_at = Vec::new();
    for _ in 0..10 {
        let was_visible = groups.children.add_visible();
        groups.add(GroupKind::Child);
        if was_visible && !groups.children.add_visible() {
            hidden_at.push(groups.children.count());
        }
        assert!(groups.children.count() <= 10);
    }
    assert_eq!(hidden_at, vec![10]);
    assert_eq!(groups.children.count(), 10);
    assert!(groups.children.remove_visible());
}

#[test]
fn add_at_limit_is_noop() {
    let mut group = RepeatingGroupState::new(GroupKind::Partner, 4, 4);
    assert!(!group.add());
    assert_eq!(group.count(), 4);
}

#[test]
fn add_reveals_newly_indexed_section() {
    let mut group = RepeatingGroupState::new(GroupKind::Child, 2, 10);
    assert!(!group.section_visible(2));
    assert!(group.add());
    assert!(group.section_visible(2));
    assert!(!group.section_visible(3));
}

#[test]
fn add_from_zero_reveals_remove() {
    let mut group = RepeatingGroupState::new(GroupKind::Partner, 0, 4);
    assert!(!group.remove_visible());
    group.add();
    assert!(group.remove_visible());
    assert!(group.section_visible(0));
}

#[test]
fn remove_at_zero_is_noop() {
    let mut groups = RepeatingGroups::default();
    groups.remove(GroupKind::Partner);
    assert_eq!(groups.partners.count(), 0);
    assert!(!groups.remove(GroupKind::Partner));
    assert_eq!(groups.partners.count(), 0);
    assert!(!groups.partners.remove_visible());
    assert!(groups.partners.add_visible());
}

#[test]
fn remove_from_limit_reveals_add_and_hides_last_section() {
    let mut group = RepeatingGroupState::new(GroupKind::Partner, 4, 4);
    assert!(group.remove());
    assert!(group.add_visible());
    assert!(!group.section_visible(3));
    assert!(group.section_visible(2));
}

#[test]
fn visible_sections_always_equal_count() {
    let mut group = RepeatingGroupState::new(GroupKind::Child, 1, 10);
    let ops = [true, true, false, true, true, true, false, false, false, false, false, true];
    for add in ops {
        if add {
            group.add();
        } else {
            group.remove();
        }
        let visible = (0..group.max()).filter(|i| group.section_visible(*i)).count();
        assert_eq!(visible, group.count());
    }
}

#[test]
fn groups_are_independent() {
    let mut groups = RepeatingGroups::default();
    groups.add(GroupKind::Child);
    assert_eq!(groups.get(GroupKind::Child).count(), 2);
    assert_eq!(groups.get(GroupKind::Partner).count(), 1);
}
