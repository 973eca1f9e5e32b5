use access::nav::{self, NavigationNode};
use access::{compute_visibility, hub_entries, Visibility, VisibleNode};
use pretty_assertions::assert_eq;
use shared_types::Role;

use crate::common::{leaf_paths, walkthrough_tree};

fn all_nodes(visibility: &Visibility) -> Vec<&VisibleNode> {
    fn walk<'a>(nodes: &'a [VisibleNode], out: &mut Vec<&'a VisibleNode>) {
        for node in nodes {
            out.push(node);
            walk(&node.children, out);
        }
    }
    let mut out = Vec::new();
    walk(&visibility.nodes, &mut out);
    out
}

fn find_source<'a>(nodes: &'a [NavigationNode], name: &str) -> Option<&'a NavigationNode> {
    nodes.iter().find_map(|node| {
        if node.name == name {
            Some(node)
        } else {
            find_source(node.children(), name)
        }
    })
}

#[test]
fn sales_sees_dashboard_but_not_users() {
    let tree = walkthrough_tree();
    let visibility = compute_visibility(&tree, Role::Sales, "/");

    assert_eq!(visibility.visible_names(), vec!["Dashboard"]);
    assert_eq!(visibility.active_names(), vec!["Dashboard"]);
    assert_eq!(visibility.active_path, vec!["Dashboard".to_string()]);
}

#[test]
fn sales_on_users_page_sees_only_dashboard() {
    let tree = walkthrough_tree();
    let visibility = compute_visibility(&tree, Role::Sales, "/users/all");

    assert_eq!(visibility.visible_names(), vec!["Dashboard"]);
    assert!(visibility.find("Users").is_none());
    assert!(visibility.find("All").is_none());
    assert!(visibility.active_names().is_empty());
    assert!(visibility.expanded.is_empty());
}

#[test]
fn admin_on_users_page_activates_and_expands_users() {
    let tree = walkthrough_tree();
    let visibility = compute_visibility(&tree, Role::Admin, "/users/all");

    assert_eq!(visibility.visible_names(), vec!["Dashboard", "Users", "All"]);
    assert_eq!(visibility.active_names(), vec!["Users", "All"]);
    let dashboard = visibility.find("Dashboard").unwrap();
    assert!(!dashboard.active);
    let users = visibility.find("Users").unwrap();
    assert!(users.expanded);
    assert!(visibility.expanded.contains("Users"));
}

#[test]
fn root_path_matches_exactly() {
    let tree = walkthrough_tree();
    for location in ["/users/all", "/anything", "/users"] {
        let visibility = compute_visibility(&tree, Role::Admin, location);
        assert!(
            !visibility.find("Dashboard").unwrap().active,
            "Dashboard active at {location}"
        );
    }
    assert!(compute_visibility(&tree, Role::Admin, "/")
        .find("Dashboard")
        .unwrap()
        .active);
}

#[test]
fn sub_locations_activate_their_leaf() {
    let visibility = compute_visibility(nav::roots(), Role::Finance, "/finance/invoices/INV-7");
    assert_eq!(visibility.active_names(), vec![nav::FINANCE, "Invoices"]);
}

#[test]
fn no_visible_node_excludes_the_role() {
    let tree = nav::roots();
    let mut locations = leaf_paths(tree);
    locations.push("/nowhere".to_string());

    for role in Role::ALL {
        for location in &locations {
            let visibility = compute_visibility(tree, role, location);
            for node in all_nodes(&visibility) {
                let source = find_source(tree, &node.name).unwrap();
                assert!(
                    source.is_visible_to(role),
                    "{} leaked to {role} at {location}",
                    node.name
                );
            }
        }
    }
}

#[test]
fn hidden_branch_hides_its_whole_subtree() {
    let visibility = compute_visibility(nav::roots(), Role::Sales, "/users/roles");
    assert!(visibility.find(nav::PLATFORM_USERS).is_none());
    assert!(visibility.find("Roles").is_none());
    assert!(visibility.active_path.is_empty());
}

#[test]
fn computation_is_idempotent() {
    for role in Role::ALL {
        for location in ["/", "/crm/leads", "/users/roles", "/settings", "/x"] {
            assert_eq!(
                compute_visibility(nav::roots(), role, location),
                compute_visibility(nav::roots(), role, location)
            );
        }
    }
}

#[test]
fn active_branches_are_exactly_the_expanded_ones() {
    for role in Role::ALL {
        for location in leaf_paths(nav::roots()) {
            let visibility = compute_visibility(nav::roots(), role, &location);
            for node in all_nodes(&visibility) {
                assert_eq!(node.expanded, node.is_branch && node.active);
                assert_eq!(visibility.expanded.contains(&node.name), node.expanded);
            }
        }
    }
}

#[test]
fn hub_entries_respect_child_restrictions() {
    let names = |role: Role| -> Vec<String> {
        hub_entries(nav::roots(), role, nav::PLATFORM_USERS)
            .into_iter()
            .map(|node| node.name)
            .collect()
    };
    assert_eq!(names(Role::SuperAdmin), vec!["All Users", "Roles"]);
    assert_eq!(names(Role::Admin), vec!["All Users"]);
    assert!(names(Role::Finance).is_empty());
}

#[test]
fn hub_entries_carry_no_activation() {
    let entries = hub_entries(nav::roots(), Role::Admin, nav::FINANCE);
    assert_eq!(entries.len(), 3);
    assert!(entries.iter().all(|entry| !entry.active));
}
