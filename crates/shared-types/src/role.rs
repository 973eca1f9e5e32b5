use serde::{Deserialize, Serialize};
use std::fmt;

/// Back-office authorization class.
///
/// Roles form an unordered set: every access decision is a plain membership
/// test against a list of allowed roles (see [`Role::permitted_by`]).
///
/// - `SuperAdmin`: platform owner, sees every section.
/// - `Admin`: office administrator.
/// - `Sales`: clients, CRM and property listings.
/// - `Operations`: employees and property verification.
/// - `Finance`: invoices, payments and reports.
/// - `Employee`: general staff; dashboard and settings only.
/// - `User`: least-privileged fallback for identities whose profile is
///   missing or unreadable.
///
/// `Ord` exists only so roles can key ordered sets; it carries no rank.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Admin,
    Sales,
    Operations,
    Finance,
    Employee,
    #[default]
    User,
}

impl Role {
    pub const ALL: [Role; 7] = [
        Role::SuperAdmin,
        Role::Admin,
        Role::Sales,
        Role::Operations,
        Role::Finance,
        Role::Employee,
        Role::User,
    ];

    /// Parse a profile `role` string. Unknown values resolve to `User`.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "super_admin" | "superadmin" => Role::SuperAdmin,
            "admin" => Role::Admin,
            "sales" => Role::Sales,
            "operations" | "ops" => Role::Operations,
            "finance" => Role::Finance,
            "employee" => Role::Employee,
            _ => Role::User,
        }
    }

    /// Lowercase string for profile document storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::Admin => "admin",
            Role::Sales => "sales",
            Role::Operations => "operations",
            Role::Finance => "finance",
            Role::Employee => "employee",
            Role::User => "user",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super Admin",
            Role::Admin => "Admin",
            Role::Sales => "Sales",
            Role::Operations => "Operations",
            Role::Finance => "Finance",
            Role::Employee => "Employee",
            Role::User => "User",
        }
    }

    /// Membership check shared by the route guard, the sidebar and the hub
    /// pages. An empty `allowed` list admits every role.
    pub fn permitted_by(&self, allowed: &[Role]) -> bool {
        allowed.is_empty() || allowed.contains(self)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
