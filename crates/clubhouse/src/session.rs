use shared_types::{AppError, User};

use crate::context::MembershipContext;

const UNINITIALIZED: &str =
    "MembershipContext accessed outside an initialized session; call Session::start first";

/// Session-scoped owner of the signed-in user and their active club.
///
/// One `Session` exists per browser session and is passed explicitly to
/// whatever needs it.
#[derive(Debug, Default)]
pub struct Session {
    user: Option<User>,
    context: Option<MembershipContext>,
}

impl Session {
    /// An unstarted session. Its membership context is not yet available.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session. `user` is `None` while auth is still loading or for
    /// anonymous visitors; the context then starts with no memberships.
    pub fn start(user: Option<User>) -> Self {
        let memberships = user
            .as_ref()
            .map(|u| u.memberships.clone())
            .unwrap_or_default();
        Self {
            user,
            context: Some(MembershipContext::with_memberships(memberships)),
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Feed a user that arrived after session start into the context.
    pub fn on_user_loaded(&mut self, user: User) {
        let memberships = user.memberships.clone();
        tracing::debug!(user_id = user.id, memberships = memberships.len(), "User loaded");
        self.user = Some(user);
        match self.context.as_mut() {
            Some(ctx) => ctx.on_memberships_changed(memberships),
            None => self.context = Some(MembershipContext::with_memberships(memberships)),
        }
    }

    pub fn try_membership_context(&self) -> Result<&MembershipContext, AppError> {
        self.context
            .as_ref()
            .ok_or_else(|| AppError::internal(UNINITIALIZED))
    }

    pub fn try_membership_context_mut(&mut self) -> Result<&mut MembershipContext, AppError> {
        self.context
            .as_mut()
            .ok_or_else(|| AppError::internal(UNINITIALIZED))
    }

    /// # Panics
    ///
    /// Panics if the session was never started. That is a wiring bug, not a
    /// data condition.
    pub fn membership_context(&self) -> &MembershipContext {
        match self.context.as_ref() {
            Some(ctx) => ctx,
            None => panic!("{UNINITIALIZED}"),
        }
    }

    /// # Panics
    ///
    /// Panics if the session was never started.
    pub fn membership_context_mut(&mut self) -> &mut MembershipContext {
        match self.context.as_mut() {
            Some(ctx) => ctx,
            None => panic!("{UNINITIALIZED}"),
        }
    }

    /// Drop the user and the active context.
    pub fn end(&mut self) {
        self.user = None;
        self.context = None;
    }
}
