//! Static navigation registry.
//!
//! The tree is authored once ([`roots`]) and never mutated; everything the
//! sidebar, hub pages and route guard need is derived from it.

mod tree;

pub use tree::*;

use shared_types::Role;
use std::collections::HashSet;
use std::fmt;

/// Rendering hint attached to a navigation entry. The visibility engine
/// carries it through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavIcon {
    #[default]
    None,
    Dashboard,
    Clients,
    Employees,
    Users,
    Properties,
    Finance,
    Crm,
    Settings,
    Document,
    Calendar,
    Shield,
    Search,
    Clock,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Navigable entry.
    Leaf { path: String },
    /// Collapsible section. `prefix` is the route prefix the section owns
    /// (its hub page and anything beneath it) for policy derivation; it
    /// never makes the branch itself active.
    Branch {
        children: Vec<NavigationNode>,
        prefix: Option<String>,
    },
    /// Neither link nor section; rendered but never active or expandable.
    Inert,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavigationNode {
    pub name: String,
    pub kind: NodeKind,
    pub icon: NavIcon,
    /// Empty means any authenticated identity may see the node.
    pub allowed_roles: Vec<Role>,
}

impl NavigationNode {
    pub fn leaf(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(name, NodeKind::Leaf { path: path.into() })
    }

    pub fn branch(name: impl Into<String>, children: Vec<NavigationNode>) -> Self {
        Self::new(
            name,
            NodeKind::Branch {
                children,
                prefix: None,
            },
        )
    }

    pub fn inert(name: impl Into<String>) -> Self {
        Self::new(name, NodeKind::Inert)
    }

    fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            icon: NavIcon::None,
            allowed_roles: Vec::new(),
        }
    }

    pub fn icon(mut self, icon: NavIcon) -> Self {
        self.icon = icon;
        self
    }

    pub fn allow(mut self, roles: &[Role]) -> Self {
        self.allowed_roles = roles.to_vec();
        self
    }

    /// Claim a route prefix for a branch. No effect on leaves or inert nodes.
    pub fn under(mut self, route_prefix: impl Into<String>) -> Self {
        if let NodeKind::Branch { prefix, .. } = &mut self.kind {
            *prefix = Some(route_prefix.into());
        }
        self
    }

    pub fn path(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Leaf { path } => Some(path),
            _ => None,
        }
    }

    pub fn prefix(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Branch { prefix, .. } => prefix.as_deref(),
            _ => None,
        }
    }

    pub fn children(&self) -> &[NavigationNode] {
        match &self.kind {
            NodeKind::Branch { children, .. } => children,
            _ => &[],
        }
    }

    pub fn is_branch(&self) -> bool {
        matches!(self.kind, NodeKind::Branch { .. })
    }

    pub fn is_visible_to(&self, role: Role) -> bool {
        role.permitted_by(&self.allowed_roles)
    }
}

/// Structural problems in an authored tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTreeError {
    DuplicateSibling(String),
    /// Expansion state is keyed by name, so branch names must be unique
    /// across the whole tree.
    DuplicateBranch(String),
    RelativePath { name: String, path: String },
}

impl fmt::Display for NavTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavTreeError::DuplicateSibling(name) => {
                write!(f, "duplicate navigation entry `{name}` among siblings")
            }
            NavTreeError::DuplicateBranch(name) => {
                write!(f, "branch name `{name}` is used more than once")
            }
            NavTreeError::RelativePath { name, path } => {
                write!(f, "entry `{name}` has path `{path}` that does not start with `/`")
            }
        }
    }
}

impl std::error::Error for NavTreeError {}

/// Check the authoring rules the engine relies on.
pub fn validate(nodes: &[NavigationNode]) -> Result<(), NavTreeError> {
    let mut branches = HashSet::new();
    validate_level(nodes, &mut branches)
}

fn validate_level<'a>(
    nodes: &'a [NavigationNode],
    branches: &mut HashSet<&'a str>,
) -> Result<(), NavTreeError> {
    let mut siblings = HashSet::new();
    for node in nodes {
        if !siblings.insert(node.name.as_str()) {
            return Err(NavTreeError::DuplicateSibling(node.name.clone()));
        }
        let paths = node.path().into_iter().chain(node.prefix());
        for path in paths {
            if !path.starts_with('/') {
                return Err(NavTreeError::RelativePath {
                    name: node.name.clone(),
                    path: path.to_string(),
                });
            }
        }
        if node.is_branch() {
            if !branches.insert(node.name.as_str()) {
                return Err(NavTreeError::DuplicateBranch(node.name.clone()));
            }
            validate_level(node.children(), branches)?;
        }
    }
    Ok(())
}
