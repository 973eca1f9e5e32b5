//! Visibility and activation of the navigation tree for one role and one
//! location.

use crate::nav::{NavIcon, NavigationNode, NodeKind};
use shared_types::Role;
use std::collections::BTreeSet;

/// A navigation entry the current role may see, annotated for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleNode {
    pub name: String,
    pub path: Option<String>,
    /// Hub page of a branch, if it owns one.
    pub prefix: Option<String>,
    pub icon: NavIcon,
    pub active: bool,
    /// Default expansion: true for a branch containing the active entry.
    pub expanded: bool,
    pub is_branch: bool,
    pub children: Vec<VisibleNode>,
}

/// Result of [`compute_visibility`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Visibility {
    pub nodes: Vec<VisibleNode>,
    /// Names from the root down to the first active leaf; empty if none.
    pub active_path: Vec<String>,
    /// Branches that should be open by default.
    pub expanded: BTreeSet<String>,
}

impl Visibility {
    /// Depth-first lookup by name.
    pub fn find(&self, name: &str) -> Option<&VisibleNode> {
        fn walk<'a>(nodes: &'a [VisibleNode], name: &str) -> Option<&'a VisibleNode> {
            nodes.iter().find_map(|node| {
                if node.name == name {
                    Some(node)
                } else {
                    walk(&node.children, name)
                }
            })
        }
        walk(&self.nodes, name)
    }

    /// Every visible name in pre-order.
    pub fn visible_names(&self) -> Vec<&str> {
        fn walk<'a>(nodes: &'a [VisibleNode], out: &mut Vec<&'a str>) {
            for node in nodes {
                out.push(&node.name);
                walk(&node.children, out);
            }
        }
        let mut out = Vec::new();
        walk(&self.nodes, &mut out);
        out
    }

    /// Names of visible entries whose `active` flag is set, in pre-order.
    pub fn active_names(&self) -> Vec<&str> {
        fn walk<'a>(nodes: &'a [VisibleNode], out: &mut Vec<&'a str>) {
            for node in nodes {
                if node.active {
                    out.push(&node.name);
                }
                walk(&node.children, out);
            }
        }
        let mut out = Vec::new();
        walk(&self.nodes, &mut out);
        out
    }
}

/// Whether a leaf at `path` is active for `location`.
///
/// The root path only matches exactly; every other path also matches its
/// sub-locations (`/users` matches `/users/42`, not `/users-archive`).
pub fn is_location_active(path: &str, location: &str) -> bool {
    if location == path {
        return true;
    }
    path != "/"
        && location
            .strip_prefix(path)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Filter `tree` down to what `role` may see and mark what `location`
/// activates. Pure and total: inert nodes are carried but never active.
pub fn compute_visibility(tree: &[NavigationNode], role: Role, location: &str) -> Visibility {
    let mut walk = Walk {
        role,
        location,
        trail: Vec::new(),
        active_path: Vec::new(),
        expanded: BTreeSet::new(),
    };
    let nodes = walk.level(tree);
    Visibility {
        nodes,
        active_path: walk.active_path,
        expanded: walk.expanded,
    }
}

/// Visible children of the branch `hub`, or nothing when the branch itself
/// is hidden from `role`.
pub fn hub_entries(tree: &[NavigationNode], role: Role, hub: &str) -> Vec<VisibleNode> {
    compute_visibility(tree, role, "")
        .find(hub)
        .filter(|node| node.is_branch)
        .map(|node| node.children.clone())
        .unwrap_or_default()
}

struct Walk<'a> {
    role: Role,
    location: &'a str,
    trail: Vec<String>,
    active_path: Vec<String>,
    expanded: BTreeSet<String>,
}

impl Walk<'_> {
    fn level(&mut self, nodes: &[NavigationNode]) -> Vec<VisibleNode> {
        let role = self.role;
        nodes
            .iter()
            .filter(|node| node.is_visible_to(role))
            .map(|node| self.node(node))
            .collect()
    }

    fn node(&mut self, node: &NavigationNode) -> VisibleNode {
        self.trail.push(node.name.clone());
        let (active, children) = match &node.kind {
            NodeKind::Leaf { path } => {
                let active = is_location_active(path, self.location);
                if active && self.active_path.is_empty() {
                    self.active_path = self.trail.clone();
                }
                (active, Vec::new())
            }
            NodeKind::Branch { children, .. } => {
                let children = self.level(children);
                (children.iter().any(|c| c.active), children)
            }
            NodeKind::Inert => (false, Vec::new()),
        };
        self.trail.pop();

        let is_branch = node.is_branch();
        let expanded = is_branch && active;
        if expanded {
            self.expanded.insert(node.name.clone());
        }
        VisibleNode {
            name: node.name.clone(),
            path: node.path().map(str::to_string),
            prefix: node.prefix().map(str::to_string),
            icon: node.icon,
            active,
            expanded,
            is_branch,
            children,
        }
    }
}

/// Open/closed state of sidebar sections across navigations.
///
/// Navigating to a new location opens the sections that contain it and
/// never closes anything; only [`ExpansionState::toggle`] closes a section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpansionState {
    open: BTreeSet<String>,
    synced_location: Option<String>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge the default-expanded set for `location`. Repeated calls for the
    /// same location are no-ops so a manual collapse survives re-renders.
    /// Returns true if anything opened.
    pub fn sync(&mut self, visibility: &Visibility, location: &str) -> bool {
        if self.synced_location.as_deref() == Some(location) {
            return false;
        }
        self.synced_location = Some(location.to_string());
        let before = self.open.len();
        self.open.extend(visibility.expanded.iter().cloned());
        self.open.len() != before
    }

    /// Flip a section; returns whether it is now open.
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.open.remove(name) {
            false
        } else {
            self.open.insert(name.to_string());
            true
        }
    }

    pub fn is_open(&self, name: &str) -> bool {
        self.open.contains(name)
    }

    pub fn open_sections(&self) -> impl Iterator<Item = &str> {
        self.open.iter().map(String::as_str)
    }
}
