//! Role-based access core for the back-office shell: who is signed in, what
//! they may see in the sidebar, and whether a location may render.

pub mod config;
pub mod guard;
pub mod nav;
pub mod policy;
pub mod provider;
pub mod session;
pub mod visibility;

pub use guard::{evaluate, GuardState, RouteGuardDecision};
pub use nav::{NavIcon, NavigationNode, NodeKind};
pub use policy::{required_roles, RequiredRoles};
pub use provider::{IdentityProvider, Principal, Profile, ProfileError, ProfileStore, ProviderError};
pub use session::{Session, SessionSnapshot};
pub use visibility::{
    compute_visibility, hub_entries, is_location_active, ExpansionState, Visibility, VisibleNode,
};
