use super::{NavIcon, NavigationNode};
use shared_types::Role;
use std::sync::OnceLock;

pub const DASHBOARD: &str = "Dashboard";
pub const CLIENTS: &str = "Clients";
pub const EMPLOYEES: &str = "Employees";
pub const PLATFORM_USERS: &str = "Platform Users";
pub const PROPERTIES: &str = "Properties";
pub const FINANCE: &str = "Finance";
pub const CRM: &str = "CRM";
pub const SETTINGS: &str = "Settings";

const MANAGEMENT: &[Role] = &[Role::SuperAdmin, Role::Admin];
const CLIENT_FACING: &[Role] = &[Role::SuperAdmin, Role::Admin, Role::Sales];
const STAFFING: &[Role] = &[Role::SuperAdmin, Role::Admin, Role::Operations];
const PROPERTY_TEAMS: &[Role] = &[Role::SuperAdmin, Role::Admin, Role::Operations, Role::Sales];
const ACCOUNTING: &[Role] = &[Role::SuperAdmin, Role::Admin, Role::Finance];

static ROOTS: OnceLock<Vec<NavigationNode>> = OnceLock::new();

/// The back-office navigation tree, in sidebar order.
pub fn roots() -> &'static [NavigationNode] {
    ROOTS.get_or_init(build)
}

fn build() -> Vec<NavigationNode> {
    vec![
        NavigationNode::leaf(DASHBOARD, "/").icon(NavIcon::Dashboard),
        NavigationNode::branch(
            CLIENTS,
            vec![
                NavigationNode::leaf("All Clients", "/clients/all").icon(NavIcon::Search),
                NavigationNode::leaf("New Client", "/clients/new").icon(NavIcon::Document),
            ],
        )
        .under("/clients")
        .icon(NavIcon::Clients)
        .allow(CLIENT_FACING),
        NavigationNode::branch(
            EMPLOYEES,
            vec![
                NavigationNode::leaf("Directory", "/employees/directory").icon(NavIcon::Search),
                NavigationNode::leaf("Attendance", "/employees/attendance").icon(NavIcon::Clock),
            ],
        )
        .under("/employees")
        .icon(NavIcon::Employees)
        .allow(STAFFING),
        NavigationNode::branch(
            PLATFORM_USERS,
            vec![
                NavigationNode::leaf("All Users", "/users/all").icon(NavIcon::Search),
                NavigationNode::leaf("Roles", "/users/roles")
                    .icon(NavIcon::Shield)
                    .allow(&[Role::SuperAdmin]),
            ],
        )
        .under("/users")
        .icon(NavIcon::Users)
        .allow(MANAGEMENT),
        NavigationNode::branch(
            PROPERTIES,
            vec![
                NavigationNode::leaf("Listings", "/properties/listings").icon(NavIcon::Search),
                NavigationNode::leaf("Verification", "/properties/verification")
                    .icon(NavIcon::Shield)
                    .allow(STAFFING),
            ],
        )
        .under("/properties")
        .icon(NavIcon::Properties)
        .allow(PROPERTY_TEAMS),
        NavigationNode::branch(
            FINANCE,
            vec![
                NavigationNode::leaf("Invoices", "/finance/invoices").icon(NavIcon::Document),
                NavigationNode::leaf("Payments", "/finance/payments").icon(NavIcon::Finance),
                NavigationNode::leaf("Reports", "/finance/reports").icon(NavIcon::Document),
            ],
        )
        .under("/finance")
        .icon(NavIcon::Finance)
        .allow(ACCOUNTING),
        NavigationNode::branch(
            CRM,
            vec![
                NavigationNode::leaf("Leads", "/crm/leads").icon(NavIcon::Search),
                NavigationNode::leaf("Follow-ups", "/crm/follow-ups").icon(NavIcon::Calendar),
            ],
        )
        .under("/crm")
        .icon(NavIcon::Crm)
        .allow(CLIENT_FACING),
        NavigationNode::leaf(SETTINGS, "/settings").icon(NavIcon::Settings),
    ]
}
