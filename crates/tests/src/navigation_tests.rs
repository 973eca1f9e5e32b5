use access::nav::{self, validate, NavigationNode};
use shared_types::Role;
use std::collections::HashSet;

use crate::common::leaf_paths;

#[test]
fn shipped_tree_leaf_paths_are_unique() {
    let paths = leaf_paths(nav::roots());
    let unique: HashSet<_> = paths.iter().collect();
    assert_eq!(unique.len(), paths.len(), "duplicate leaf path in {paths:?}");
}

#[test]
fn super_admin_sees_every_root() {
    assert!(nav::roots().iter().all(|node| node.is_visible_to(Role::SuperAdmin)));
}

#[test]
fn plain_user_sees_only_unrestricted_roots() {
    let visible: Vec<&str> = nav::roots()
        .iter()
        .filter(|node| node.is_visible_to(Role::User))
        .map(|node| node.name.as_str())
        .collect();
    assert_eq!(visible, vec![nav::DASHBOARD, nav::SETTINGS]);
}

#[test]
fn validation_rejects_reused_branch_names() {
    let tree = vec![
        NavigationNode::branch("Reports", vec![NavigationNode::leaf("A", "/a")]),
        NavigationNode::branch(
            "Finance",
            vec![NavigationNode::branch(
                "Reports",
                vec![NavigationNode::leaf("B", "/b")],
            )],
        ),
    ];
    assert!(validate(&tree).is_err());
}
