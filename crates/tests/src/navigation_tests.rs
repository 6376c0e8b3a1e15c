use clubhouse::{MembershipContext, NavigationBuilder};
use pretty_assertions::assert_eq;
use shared_types::{Capability, ClubId, NavNode, NavigationSections};

use crate::common::{membership, plain};

fn separators(nav: &NavigationSections) -> usize {
    nav.nodes()
        .iter()
        .filter(|n| matches!(n, NavNode::Separator))
        .count()
}

#[test]
fn admin_section_present_iff_any_capability_held() {
    let builder = NavigationBuilder::default();

    let none = builder.build(Some(&plain(1)), "/");
    assert!(!none.has_admin());
    assert_eq!(separators(&none), 0);

    for capability in Capability::ALL {
        let nav = builder.build(Some(&membership(1, false, &[capability])), "/");
        assert!(nav.has_admin(), "{capability} should open the admin section");
        assert_eq!(separators(&nav), 1);
    }
}

#[test]
fn no_current_membership_has_no_admin_section() {
    let mut ctx = MembershipContext::with_memberships(vec![membership(
        1,
        true,
        &Capability::ALL,
    )]);
    ctx.select_club(ClubId(2));

    let nav = NavigationBuilder::default().build_for(&ctx, "/");
    assert!(nav.admin.is_empty());
    assert_eq!(nav.nodes().len(), nav.base.len());
}

#[test]
fn all_capabilities_show_full_admin_catalog_after_separator() {
    let builder = NavigationBuilder::default();
    let nav = builder.build(Some(&membership(1, false, &Capability::ALL)), "/admin/leagues");

    let nodes = nav.nodes();
    let base_len = builder.catalog().base.len();
    assert_eq!(nodes.len(), base_len + 1 + builder.catalog().admin.len());
    assert_eq!(nodes[base_len], NavNode::Separator);

    let admin_ids: Vec<&str> = nav.admin.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(admin_ids, vec!["members", "courts", "trainings", "leagues", "club"]);
    assert_eq!(nav.active_entry().map(|e| e.id.as_str()), Some("leagues"));
}

#[test]
fn base_items_always_present_with_exact_active_flag() {
    let nav = NavigationBuilder::default().build(None, "/bookings");
    let active: Vec<(&str, bool)> = nav
        .base
        .iter()
        .map(|e| (e.id.as_str(), e.active))
        .collect();
    assert_eq!(
        active,
        vec![
            ("dashboard", false),
            ("events", false),
            ("bookings", true),
            ("profile", false),
        ]
    );

    let nested = NavigationBuilder::default().build(None, "/bookings/3");
    assert!(nested.active_entry().is_none());
}

#[test]
fn switching_club_rebuilds_navigation() {
    let builder = NavigationBuilder::default();
    let mut ctx = MembershipContext::with_memberships(vec![
        plain(1),
        membership(2, false, &[Capability::ManageMembers]),
    ]);
    assert!(!builder.build_for(&ctx, "/").has_admin());

    ctx.select_club(ClubId(2));
    let nav = builder.build_for(&ctx, "/");
    assert_eq!(nav.admin.len(), 1);
    assert_eq!(nav.admin[0].target, "/admin/members");
}

#[test]
fn sections_serialize_without_empty_admin() {
    let nav = NavigationBuilder::default().build(None, "/");
    let json = serde_json::to_value(&nav).unwrap();
    assert!(json.get("admin").is_none());
    assert_eq!(json["base"][0]["active"], true);
}
