use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ClubId;

/// A row that carries a personal-responsibility flag.
///
/// The flag is supplied by the backend; the core never derives it.
pub trait OwnedRow {
    fn is_responsible(&self) -> bool;
}

/// A league event or fixture as listed in the events table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEvent {
    pub id: Uuid,
    pub club_id: ClubId,
    pub name: String,
    pub starts_at: DateTime<Utc>,
    /// True when the current user organizes this event.
    #[serde(default)]
    pub is_responsible: bool,
}

impl LeagueEvent {
    pub fn new(club_id: impl Into<ClubId>, name: impl Into<String>, starts_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            club_id: club_id.into(),
            name: name.into(),
            starts_at,
            is_responsible: false,
        }
    }

    pub fn owned(mut self) -> Self {
        self.is_responsible = true;
        self
    }
}

impl OwnedRow for LeagueEvent {
    fn is_responsible(&self) -> bool {
        self.is_responsible
    }
}

impl<T: OwnedRow + ?Sized> OwnedRow for &T {
    fn is_responsible(&self) -> bool {
        (**self).is_responsible()
    }
}
