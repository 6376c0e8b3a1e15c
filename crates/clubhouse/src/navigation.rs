use shared_types::{AppConfig, ClubMembership, NavEntry, NavigationCatalog, NavigationSections};

use crate::context::MembershipContext;

/// Builds the role-scoped sidebar from a static catalog.
#[derive(Debug, Clone, Default)]
pub struct NavigationBuilder {
    catalog: NavigationCatalog,
}

impl NavigationBuilder {
    pub fn new(catalog: NavigationCatalog) -> Self {
        Self { catalog }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.navigation.clone())
    }

    pub fn catalog(&self) -> &NavigationCatalog {
        &self.catalog
    }

    /// Base entries are always present. An admin entry is present only when
    /// `membership` holds its required capability; with no membership (or an
    /// ungated admin entry) nothing from the admin catalog is shown.
    pub fn build(&self, membership: Option<&ClubMembership>, location: &str) -> NavigationSections {
        let caps = membership
            .map(ClubMembership::capabilities)
            .unwrap_or_default();

        let base = self
            .catalog
            .base
            .iter()
            .map(|item| NavEntry::resolve(item, location))
            .collect();

        let admin: Vec<NavEntry> = self
            .catalog
            .admin
            .iter()
            .filter(|item| item.requires.is_some_and(|c| caps.has(c)))
            .map(|item| NavEntry::resolve(item, location))
            .collect();

        let sections = NavigationSections { base, admin };

        tracing::debug!(
            location,
            club_id = ?membership.map(ClubMembership::club_id),
            capabilities = ?caps,
            admin_items = sections.admin.len(),
            active = ?sections.active_entry().map(|e| e.id.as_str()),
            "Navigation built"
        );

        sections
    }

    /// Build against the context's current membership.
    pub fn build_for(&self, context: &MembershipContext, location: &str) -> NavigationSections {
        self.build(context.current_membership(), location)
    }
}
