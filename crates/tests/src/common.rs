use chrono::{Duration, TimeZone, Utc};
use shared_types::{Capability, ClubMembership, LeagueEvent, User};

/// Membership for club `id` with the given preferred flag and capabilities.
pub fn membership(id: i64, preferred: bool, caps: &[Capability]) -> ClubMembership {
    let mut m = ClubMembership::new(id, format!("Club {id}"));
    m.is_preferred_club = preferred;
    caps.iter().fold(m, |m, c| m.grant(*c))
}

pub fn plain(id: i64) -> ClubMembership {
    membership(id, false, &[])
}

pub fn test_user(memberships: Vec<ClubMembership>) -> User {
    User {
        id: 1,
        username: "alex".to_string(),
        display_name: "Alex Member".to_string(),
        email: "alex@example.com".to_string(),
        memberships,
    }
}

/// One event per entry of `owned`, a day apart, named `Event 0..n`.
pub fn events(owned: &[bool]) -> Vec<LeagueEvent> {
    let start = Utc.with_ymd_and_hms(2026, 5, 1, 18, 0, 0).unwrap();
    owned
        .iter()
        .enumerate()
        .map(|(i, is_owned)| {
            let mut e = LeagueEvent::new(1, format!("Event {i}"), start + Duration::days(i as i64));
            e.is_responsible = *is_owned;
            e
        })
        .collect()
}

pub fn names(events: &[LeagueEvent]) -> Vec<&str> {
    events.iter().map(|e| e.name.as_str()).collect()
}
