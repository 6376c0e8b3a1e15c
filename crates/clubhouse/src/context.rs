use serde::Serialize;
use shared_types::{Capability, CapabilitySet, Club, ClubId, ClubMembership};
use std::fmt;

/// Derived view of the active club: the selection plus the membership it
/// resolves to. Handed to observers after every change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActiveContext {
    pub selected_club_id: Option<ClubId>,
    pub current_membership: Option<ClubMembership>,
}

impl ActiveContext {
    pub fn capabilities(&self) -> CapabilitySet {
        self.current_membership
            .as_ref()
            .map(ClubMembership::capabilities)
            .unwrap_or_default()
    }
}

/// Handle returned by [`MembershipContext::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&ActiveContext)>;

/// Default club for a membership list: the preferred club, else the first
/// membership, else nothing.
pub fn default_selection(memberships: &[ClubMembership]) -> Option<ClubId> {
    memberships
        .iter()
        .find(|m| m.is_preferred_club)
        .or_else(|| memberships.first())
        .map(ClubMembership::club_id)
}

/// Holds which club is active for one session.
///
/// A `None` selection means "not selected yet" and is filled in by default
/// selection as soon as memberships arrive. A selection that matches no
/// membership is kept as-is; it simply resolves to no current membership.
pub struct MembershipContext {
    memberships: Vec<ClubMembership>,
    selected_club_id: Option<ClubId>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl MembershipContext {
    pub fn new() -> Self {
        Self {
            memberships: Vec::new(),
            selected_club_id: None,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Create a context and run default selection over `memberships`.
    pub fn with_memberships(memberships: Vec<ClubMembership>) -> Self {
        let mut ctx = Self::new();
        ctx.initialize(memberships);
        ctx
    }

    /// Replace the membership list and apply default selection.
    /// Returns the selected club, if any.
    pub fn initialize(&mut self, memberships: Vec<ClubMembership>) -> Option<ClubId> {
        self.memberships = memberships;
        self.selected_club_id = default_selection(&self.memberships);
        tracing::info!(
            club_id = ?self.selected_club_id,
            memberships = self.memberships.len(),
            "Membership context initialized"
        );
        self.notify();
        self.selected_club_id
    }

    /// Make `club_id` the active club, whether or not a membership matches.
    pub fn select_club(&mut self, club_id: ClubId) {
        self.selected_club_id = Some(club_id);
        if self.current_membership().is_none() {
            tracing::info!(%club_id, "Selected club has no matching membership");
        } else {
            tracing::debug!(%club_id, "Club selected");
        }
        self.notify();
    }

    /// Hook for the auth collaborator when the membership list changes,
    /// e.g. after a login that completed after session start.
    ///
    /// Default selection is re-run only while nothing has been selected.
    pub fn on_memberships_changed(&mut self, memberships: Vec<ClubMembership>) {
        self.memberships = memberships;
        if self.selected_club_id.is_none() && !self.memberships.is_empty() {
            self.selected_club_id = default_selection(&self.memberships);
            tracing::info!(
                club_id = ?self.selected_club_id,
                "Memberships arrived, default club selected"
            );
        }
        self.notify();
    }

    pub fn selected_club_id(&self) -> Option<ClubId> {
        self.selected_club_id
    }

    pub fn memberships(&self) -> &[ClubMembership] {
        &self.memberships
    }

    /// Membership matching the selection. Recomputed on every call.
    pub fn current_membership(&self) -> Option<&ClubMembership> {
        let selected = self.selected_club_id?;
        self.memberships.iter().find(|m| m.club_id() == selected)
    }

    pub fn capabilities(&self) -> CapabilitySet {
        self.current_membership()
            .map(ClubMembership::capabilities)
            .unwrap_or_default()
    }

    pub fn has(&self, capability: Capability) -> bool {
        self.capabilities().has(capability)
    }

    pub fn snapshot(&self) -> ActiveContext {
        ActiveContext {
            selected_club_id: self.selected_club_id,
            current_membership: self.current_membership().cloned(),
        }
    }

    /// Clubs for the club switcher, in membership order, flagged when current.
    pub fn club_options(&self) -> Vec<(&Club, bool)> {
        self.memberships
            .iter()
            .map(|m| (&m.club, Some(m.club_id()) == self.selected_club_id))
            .collect()
    }

    /// Register an observer called with the derived state after each change.
    pub fn subscribe(&mut self, observer: impl FnMut(&ActiveContext) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for (_, observer) in self.observers.iter_mut() {
            observer(&snapshot);
        }
    }
}

impl Default for MembershipContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MembershipContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MembershipContext")
            .field("memberships", &self.memberships)
            .field("selected_club_id", &self.selected_club_id)
            .field("observers", &self.observers.len())
            .finish()
    }
}
