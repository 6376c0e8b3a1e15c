use serde::Serialize;
use shared_types::{Capability, ClubMembership, OwnedRow};

/// Capabilities that open every row of a league listing.
pub const BROAD_CAPABILITIES: [Capability; 2] = [Capability::ManageLeagues, Capability::ManageClub];

/// Which rows a listing exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowScope {
    /// Every row; the presentation layer decides per row whether it is editable.
    All,
    /// Only rows the user is responsible for.
    OwnedOnly,
}

/// Anything short of a broad grant, including no membership at all,
/// resolves to `OwnedOnly`.
pub fn row_scope(membership: Option<&ClubMembership>) -> RowScope {
    match membership {
        Some(m) if m.capabilities().has_any(&BROAD_CAPABILITIES) => RowScope::All,
        _ => RowScope::OwnedOnly,
    }
}

/// Filter `rows` for `membership`, preserving input order.
pub fn filter_rows<T: OwnedRow>(rows: Vec<T>, membership: Option<&ClubMembership>) -> Vec<T> {
    let scope = row_scope(membership);
    let total = rows.len();
    let visible: Vec<T> = match scope {
        RowScope::All => rows,
        RowScope::OwnedOnly => rows.into_iter().filter(|r| r.is_responsible()).collect(),
    };
    tracing::debug!(?scope, total, visible = visible.len(), "Rows filtered");
    visible
}
