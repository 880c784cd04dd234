use super::*;

fn member(id: &str, role: MemberRole) -> FamilyMember {
    FamilyMember {
        id: id.to_owned(),
        nickname: id.to_owned(),
        role,
        avatar_url: None,
    }
}

fn node<'a>(layout: &'a TreeLayout, id: &str) -> &'a PlacedNode {
    layout.nodes.iter().find(|n| n.id == id).unwrap()
}

#[test]
fn empty_roster_degenerates_to_the_hub() {
    let layout = layout_family("f1", "The Kims", &[]);
    assert_eq!(layout.nodes.len(), 1);
    assert!(layout.nodes[0].is_hub);
    assert!(layout.edges.is_empty());
    assert_eq!(layout.height, 2.0 * MARGIN);
}

#[test]
fn two_parents_two_children_are_centered_on_the_hub() {
    let members = [
        member("p1", MemberRole::Parent),
        member("p2", MemberRole::Parent),
        member("c1", MemberRole::Child),
        member("c2", MemberRole::Child),
    ];
    let layout = layout_family("f1", "The Kims", &members);

    let hub = layout.nodes.iter().find(|n| n.is_hub).unwrap();
    assert_eq!(hub.x, layout.width / 2.0);

    // Symmetric rows around the hub axis.
    assert_eq!(node(&layout, "p1").x + node(&layout, "p2").x, 2.0 * hub.x);
    assert_eq!(node(&layout, "c1").x + node(&layout, "c2").x, 2.0 * hub.x);

    // Parents above the hub, children below.
    assert!(node(&layout, "p1").y < hub.y);
    assert!(node(&layout, "c1").y > hub.y);

    assert_eq!(layout.edges.len(), 4);
}

#[test]
fn parents_only_family_collapses_the_child_row() {
    let members = [member("p1", MemberRole::Parent)];
    let layout = layout_family("f1", "Us", &members);

    assert_eq!(layout.nodes.len(), 2);
    assert_eq!(layout.edges.len(), 1);
    assert_eq!(layout.height, 2.0 * MARGIN + ROW_HEIGHT);
}

#[test]
fn widest_row_sets_the_canvas_width() {
    let members = [
        member("p1", MemberRole::Parent),
        member("c1", MemberRole::Child),
        member("c2", MemberRole::Child),
        member("c3", MemberRole::Child),
    ];
    let layout = layout_family("f1", "The Parks", &members);
    assert_eq!(layout.width, 2.0 * MARGIN + 2.0 * SLOT_WIDTH);

    // Every node stays inside the canvas.
    for n in &layout.nodes {
        assert!(n.x >= MARGIN - f64::EPSILON);
        assert!(n.x <= layout.width - MARGIN + f64::EPSILON);
    }
}
