use access::nav;
use access::{compute_visibility, ExpansionState};
use shared_types::Role;

fn visit(state: &mut ExpansionState, role: Role, location: &str) -> bool {
    let visibility = compute_visibility(nav::roots(), role, location);
    state.sync(&visibility, location)
}

#[test]
fn navigation_opens_containing_section() {
    let mut state = ExpansionState::new();
    assert!(visit(&mut state, Role::Admin, "/clients/all"));
    assert!(state.is_open(nav::CLIENTS));
}

#[test]
fn navigation_never_closes_sections() {
    let mut state = ExpansionState::new();
    visit(&mut state, Role::Admin, "/clients/all");
    visit(&mut state, Role::Admin, "/finance/payments");
    visit(&mut state, Role::Admin, "/");

    let open: Vec<&str> = state.open_sections().collect();
    assert_eq!(open, vec![nav::CLIENTS, nav::FINANCE]);
}

#[test]
fn manual_collapse_survives_rerender_at_same_location() {
    let mut state = ExpansionState::new();
    visit(&mut state, Role::Admin, "/crm/leads");
    assert!(!state.toggle(nav::CRM));

    assert!(!visit(&mut state, Role::Admin, "/crm/leads"));
    assert!(!state.is_open(nav::CRM));
}

#[test]
fn collapsed_section_reopens_on_next_navigation_into_it() {
    let mut state = ExpansionState::new();
    visit(&mut state, Role::Admin, "/crm/leads");
    state.toggle(nav::CRM);

    assert!(visit(&mut state, Role::Admin, "/crm/follow-ups"));
    assert!(state.is_open(nav::CRM));
}

#[test]
fn toggle_opens_sections_without_navigation() {
    let mut state = ExpansionState::new();
    assert!(state.toggle(nav::EMPLOYEES));
    assert!(state.is_open(nav::EMPLOYEES));
}
