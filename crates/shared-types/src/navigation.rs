use serde::{Deserialize, Serialize};

use crate::Capability;

/// Static definition of a sidebar entry.
///
/// Admin entries name the capability that gates them; base entries leave
/// `requires` unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationItem {
    pub id: String,
    pub icon: String,
    pub label: String,
    /// Route the entry links to, compared verbatim against the current location.
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires: Option<Capability>,
}

impl NavigationItem {
    pub fn base(id: &str, icon: &str, label: &str, target: &str) -> Self {
        Self {
            id: id.to_string(),
            icon: icon.to_string(),
            label: label.to_string(),
            target: target.to_string(),
            requires: None,
        }
    }

    pub fn admin(id: &str, icon: &str, label: &str, target: &str, requires: Capability) -> Self {
        Self {
            requires: Some(requires),
            ..Self::base(id, icon, label, target)
        }
    }
}

/// Ordered menu description: base entries first, then gated admin entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationCatalog {
    #[serde(default = "default_base_items")]
    pub base: Vec<NavigationItem>,
    #[serde(default = "default_admin_items")]
    pub admin: Vec<NavigationItem>,
}

impl Default for NavigationCatalog {
    fn default() -> Self {
        Self {
            base: default_base_items(),
            admin: default_admin_items(),
        }
    }
}

fn default_base_items() -> Vec<NavigationItem> {
    vec![
        NavigationItem::base("dashboard", "layout-dashboard", "Dashboard", "/"),
        NavigationItem::base("events", "calendar", "Events", "/events"),
        NavigationItem::base("bookings", "clock", "Court Bookings", "/bookings"),
        NavigationItem::base("profile", "user", "Profile", "/profile"),
    ]
}

fn default_admin_items() -> Vec<NavigationItem> {
    vec![
        NavigationItem::admin(
            "members",
            "users",
            "Members",
            "/admin/members",
            Capability::ManageMembers,
        ),
        NavigationItem::admin(
            "courts",
            "map",
            "Courts",
            "/admin/courts",
            Capability::ManageCourts,
        ),
        NavigationItem::admin(
            "trainings",
            "dumbbell",
            "Trainings",
            "/admin/trainings",
            Capability::CreateTraining,
        ),
        NavigationItem::admin(
            "leagues",
            "trophy",
            "Leagues",
            "/admin/leagues",
            Capability::ManageLeagues,
        ),
        NavigationItem::admin(
            "club",
            "settings",
            "Club Settings",
            "/admin/club",
            Capability::ManageClub,
        ),
    ]
}

/// A navigation entry resolved against the current location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavEntry {
    pub id: String,
    pub icon: String,
    pub label: String,
    pub target: String,
    pub active: bool,
}

impl NavEntry {
    /// Exact string comparison; `/events/12` does not activate `/events`.
    pub fn resolve(item: &NavigationItem, location: &str) -> Self {
        Self {
            id: item.id.clone(),
            icon: item.icon.clone(),
            label: item.label.clone(),
            target: item.target.clone(),
            active: item.target == location,
        }
    }
}

/// Built sidebar: base entries always, admin entries only when granted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NavigationSections {
    pub base: Vec<NavEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub admin: Vec<NavEntry>,
}

/// Render-ready sidebar element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavNode {
    Item(NavEntry),
    Separator,
}

impl NavigationSections {
    pub fn has_admin(&self) -> bool {
        !self.admin.is_empty()
    }

    /// Flatten into a single sequence. The separator appears only when the
    /// admin section is non-empty.
    pub fn nodes(&self) -> Vec<NavNode> {
        let mut nodes: Vec<NavNode> = self.base.iter().cloned().map(NavNode::Item).collect();
        if self.has_admin() {
            nodes.push(NavNode::Separator);
            nodes.extend(self.admin.iter().cloned().map(NavNode::Item));
        }
        nodes
    }

    pub fn active_entry(&self) -> Option<&NavEntry> {
        self.base.iter().chain(self.admin.iter()).find(|e| e.active)
    }
}
