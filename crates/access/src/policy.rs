//! Route access policy derived from the navigation tree, so that the route
//! guard and the sidebar can never disagree about who may open a section.

use crate::nav::{NavigationNode, NodeKind};
use crate::visibility::is_location_active;
use shared_types::Role;
use std::collections::BTreeSet;

/// Roles a location requires.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequiredRoles {
    /// Any authenticated identity.
    #[default]
    Any,
    /// The identity's role must be one of these. An empty set admits nobody.
    OneOf(BTreeSet<Role>),
}

impl RequiredRoles {
    /// An explicit allow-list; empty means [`RequiredRoles::Any`].
    pub fn from_roles(roles: &[Role]) -> Self {
        if roles.is_empty() {
            RequiredRoles::Any
        } else {
            RequiredRoles::OneOf(roles.iter().copied().collect())
        }
    }

    pub fn permits(&self, role: Role) -> bool {
        match self {
            RequiredRoles::Any => true,
            RequiredRoles::OneOf(roles) => roles.contains(&role),
        }
    }

    /// Narrow by another node's allow-list (empty lists add no constraint).
    fn restrict(self, allowed: &[Role]) -> Self {
        if allowed.is_empty() {
            return self;
        }
        match self {
            RequiredRoles::Any => RequiredRoles::from_roles(allowed),
            RequiredRoles::OneOf(roles) => {
                RequiredRoles::OneOf(roles.into_iter().filter(|r| allowed.contains(r)).collect())
            }
        }
    }
}

impl From<&[Role]> for RequiredRoles {
    fn from(roles: &[Role]) -> Self {
        RequiredRoles::from_roles(roles)
    }
}

/// Roles needed to open `location`.
///
/// Finds the first node (in authored order, children before a branch's own
/// prefix) that covers the location and intersects the allow-lists of that
/// node and all of its ancestors. Locations outside the tree only require
/// authentication.
pub fn required_roles(tree: &[NavigationNode], location: &str) -> RequiredRoles {
    let mut chain = Vec::new();
    if !find_chain(tree, location, &mut chain) {
        return RequiredRoles::Any;
    }
    chain
        .into_iter()
        .fold(RequiredRoles::Any, |acc, node| acc.restrict(&node.allowed_roles))
}

fn find_chain<'a>(
    nodes: &'a [NavigationNode],
    location: &str,
    chain: &mut Vec<&'a NavigationNode>,
) -> bool {
    for node in nodes {
        chain.push(node);
        let covered = match &node.kind {
            NodeKind::Leaf { path } => is_location_active(path, location),
            NodeKind::Branch { children, prefix } => {
                find_chain(children, location, chain)
                    || prefix
                        .as_deref()
                        .is_some_and(|prefix| is_location_active(prefix, location))
            }
            NodeKind::Inert => false,
        };
        if covered {
            return true;
        }
        chain.pop();
    }
    false
}
