//! Membership-scoped club context and role-aware navigation for the
//! Clubhouse front end.
//!
//! A [`Session`] owns the signed-in user and a [`MembershipContext`] that
//! tracks the active club. [`NavigationBuilder`] and [`filter_rows`] read the
//! active membership's capabilities to decide what the user sees.

pub mod config;
pub mod context;
pub mod navigation;
pub mod rows;
pub mod session;

pub use context::{default_selection, ActiveContext, MembershipContext, SubscriptionId};
pub use navigation::NavigationBuilder;
pub use rows::{filter_rows, row_scope, RowScope, BROAD_CAPABILITIES};
pub use session::Session;
