use access::nav::{self, NavigationNode};
use access::{required_roles, RequiredRoles};
use pretty_assertions::assert_eq;
use shared_types::Role;

use crate::common::{leaf_paths, walkthrough_tree};

fn one_of(roles: &[Role]) -> RequiredRoles {
    RequiredRoles::OneOf(roles.iter().copied().collect())
}

/// Whether `role` can see the leaf at `path` through every ancestor.
fn leaf_visible(nodes: &[NavigationNode], role: Role, path: &str) -> Option<bool> {
    nodes.iter().find_map(|node| {
        if node.path() == Some(path) {
            return Some(node.is_visible_to(role));
        }
        leaf_visible(node.children(), role, path).map(|inner| inner && node.is_visible_to(role))
    })
}

#[test]
fn walkthrough_policies() {
    let tree = walkthrough_tree();
    assert_eq!(required_roles(&tree, "/"), one_of(&[Role::Admin, Role::Sales]));
    assert_eq!(required_roles(&tree, "/users/all"), one_of(&[Role::Admin]));
    assert_eq!(required_roles(&tree, "/reports"), RequiredRoles::Any);
}

#[test]
fn shipped_tree_policies() {
    let tree = nav::roots();
    assert_eq!(required_roles(tree, "/"), RequiredRoles::Any);
    assert_eq!(required_roles(tree, "/settings"), RequiredRoles::Any);
    assert_eq!(required_roles(tree, "/users"), one_of(&[Role::SuperAdmin, Role::Admin]));
    assert_eq!(required_roles(tree, "/users/roles"), one_of(&[Role::SuperAdmin]));
    assert_eq!(
        required_roles(tree, "/finance/reports/q3"),
        one_of(&[Role::SuperAdmin, Role::Admin, Role::Finance])
    );
}

#[test]
fn hub_pages_inherit_their_section_restriction() {
    let required = required_roles(nav::roots(), "/finance");
    assert!(required.permits(Role::Finance));
    assert!(!required.permits(Role::Sales));
}

#[test]
fn unknown_pages_under_a_hub_keep_the_hub_restriction() {
    let required = required_roles(nav::roots(), "/crm/archive");
    assert!(required.permits(Role::Sales));
    assert!(!required.permits(Role::Employee));
}

#[test]
fn guard_policy_agrees_with_sidebar_visibility() {
    let tree = nav::roots();
    for path in leaf_paths(tree) {
        for role in Role::ALL {
            let visible = leaf_visible(tree, role, &path).unwrap();
            assert_eq!(
                required_roles(tree, &path).permits(role),
                visible,
                "{role} at {path}"
            );
        }
    }
}
