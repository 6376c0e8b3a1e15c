use clubhouse::{filter_rows, row_scope, RowScope};
use pretty_assertions::assert_eq;
use shared_types::Capability;

use crate::common::{events, membership, names, plain};

#[test]
fn manage_leagues_returns_full_set_unmodified() {
    let rows = events(&[false, true, false, false, true]);
    let m = membership(1, false, &[Capability::ManageLeagues]);
    let visible = filter_rows(rows.clone(), Some(&m));
    assert_eq!(visible, rows);
}

#[test]
fn manage_club_returns_full_set() {
    let rows = events(&[false, false, false]);
    let m = membership(1, false, &[Capability::ManageClub]);
    assert_eq!(row_scope(Some(&m)), RowScope::All);
    assert_eq!(filter_rows(rows, Some(&m)).len(), 3);
}

#[test]
fn no_admin_flags_returns_owned_subset_in_order() {
    let rows = events(&[true, false, true, false, true, false]);
    let visible = filter_rows(rows, Some(&plain(1)));
    assert_eq!(names(&visible), vec!["Event 0", "Event 2", "Event 4"]);
}

#[test]
fn unrelated_capabilities_do_not_widen_scope() {
    let m = membership(
        1,
        false,
        &[
            Capability::ManageMembers,
            Capability::ManageCourts,
            Capability::CreateTraining,
        ],
    );
    assert_eq!(row_scope(Some(&m)), RowScope::OwnedOnly);
    let visible = filter_rows(events(&[false, true]), Some(&m));
    assert_eq!(names(&visible), vec!["Event 1"]);
}

#[test]
fn missing_membership_never_leaks_foreign_rows() {
    let visible = filter_rows(events(&[false, false, false]), None);
    assert!(visible.is_empty());
}

#[test]
fn borrowed_rows_keep_input_order() {
    let rows = events(&[true, false, true]);
    let visible = filter_rows(rows.iter().collect::<Vec<_>>(), None);
    let ids: Vec<_> = visible.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![rows[0].id, rows[2].id]);
}
