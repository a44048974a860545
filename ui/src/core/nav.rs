//! Navigation items and the rules deciding what the bar shows for a path.

use super::config::NavbarConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavItemId {
    Publications,
    Add,
    /// Rendered as the profile trigger rather than a link.
    Profile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: NavItemId,
    pub label: &'static str,
    pub path: &'static str,
}

impl NavItem {
    pub fn key(&self) -> &'static str {
        match self.id {
            NavItemId::Publications => "publications",
            NavItemId::Add => "add",
            NavItemId::Profile => "logout",
        }
    }
}

pub static NAV_ITEMS: [NavItem; 3] = [
    NavItem {
        id: NavItemId::Publications,
        label: "Daftar Publikasi",
        path: "/publications",
    },
    NavItem {
        id: NavItemId::Add,
        label: "Tambah Publikasi",
        path: "/publications/add",
    },
    NavItem {
        id: NavItemId::Profile,
        label: "Logout",
        path: "/logout",
    },
];

/// The bar is not shown on the sign-in and sign-up pages.
pub fn is_hidden_path(path: &str, config: &NavbarConfig) -> bool {
    path == config.login_path || path == config.register_path
}

/// Whether `item` should be highlighted for `path`. The add item also covers its sub-routes.
pub fn is_active(item: &NavItem, path: &str) -> bool {
    if item.id == NavItemId::Profile {
        return false;
    }
    path == item.path || (item.id == NavItemId::Add && path.starts_with(item.path))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkState {
    pub item: &'static NavItem,
    pub active: bool,
}

/// Link items (profile excluded) with their active flag, in display order.
pub fn link_states(path: &str) -> Vec<LinkState> {
    NAV_ITEMS
        .iter()
        .filter(|item| item.id != NavItemId::Profile)
        .map(|item| LinkState {
            item,
            active: is_active(item, path),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavbarPlan {
    /// Render nothing.
    Hidden,
    /// Render only the fault notice.
    Fault,
    /// Render the full bar with these links.
    Bar(Vec<LinkState>),
}

/// Decide what the navbar renders. Hidden routes win over an auth fault.
pub fn plan(path: &str, config: &NavbarConfig, auth_faulted: bool) -> NavbarPlan {
    if is_hidden_path(path, config) {
        NavbarPlan::Hidden
    } else if auth_faulted {
        NavbarPlan::Fault
    } else {
        NavbarPlan::Bar(link_states(path))
    }
}
