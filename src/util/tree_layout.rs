//! Family-tree layout: node and edge positions for the tree view.
//!
//! DESIGN
//! ======
//! The tree is three rows at most: parents on top, a family hub node in the
//! middle, children below. Each row is centered on the hub's vertical axis,
//! and edges run parent→hub and hub→child. The function is pure geometry;
//! the family page renders the result as SVG.

#[cfg(test)]
#[path = "tree_layout_test.rs"]
mod tree_layout_test;

use crate::net::types::{FamilyMember, MemberRole};

/// Horizontal distance between node centers in a row.
pub const SLOT_WIDTH: f64 = 120.0;
/// Vertical distance between row centers.
pub const ROW_HEIGHT: f64 = 88.0;
/// Padding around the outermost node centers.
pub const MARGIN: f64 = 48.0;

/// A positioned node; coordinates are the node's center.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedNode {
    /// Member id, or the family id for the hub node.
    pub id: String,
    pub label: String,
    pub x: f64,
    pub y: f64,
    /// True for the hub; the page styles it differently.
    pub is_hub: bool,
}

/// A straight edge between two node centers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeLine {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Complete layout with the canvas size it needs.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeLayout {
    pub nodes: Vec<PlacedNode>,
    pub edges: Vec<EdgeLine>,
    pub width: f64,
    pub height: f64,
}

/// Lay out an arbitrary small family composition around a hub node.
///
/// Rows with no members collapse, so a family of two parents occupies two
/// rows and an empty roster degenerates to the hub alone.
pub fn layout_family(hub_id: &str, hub_label: &str, members: &[FamilyMember]) -> TreeLayout {
    let parents: Vec<&FamilyMember> = members.iter().filter(|m| m.role == MemberRole::Parent).collect();
    let children: Vec<&FamilyMember> = members.iter().filter(|m| m.role == MemberRole::Child).collect();

    let widest_row = parents.len().max(children.len()).max(1);
    let width = 2.0 * MARGIN + SLOT_WIDTH * (widest_row - 1) as f64;
    let center_x = width / 2.0;

    let mut row_count = 1;
    if !parents.is_empty() {
        row_count += 1;
    }
    if !children.is_empty() {
        row_count += 1;
    }
    let height = 2.0 * MARGIN + ROW_HEIGHT * (row_count - 1) as f64;

    let parent_y = MARGIN;
    let hub_y = if parents.is_empty() { MARGIN } else { MARGIN + ROW_HEIGHT };
    let child_y = hub_y + ROW_HEIGHT;

    let mut nodes = Vec::new();
    let mut edges = Vec::new();

    for (i, member) in parents.iter().enumerate() {
        let x = row_x(center_x, parents.len(), i);
        nodes.push(PlacedNode {
            id: member.id.clone(),
            label: member.nickname.clone(),
            x,
            y: parent_y,
            is_hub: false,
        });
        edges.push(EdgeLine { x1: x, y1: parent_y, x2: center_x, y2: hub_y });
    }

    nodes.push(PlacedNode {
        id: hub_id.to_owned(),
        label: hub_label.to_owned(),
        x: center_x,
        y: hub_y,
        is_hub: true,
    });

    for (i, member) in children.iter().enumerate() {
        let x = row_x(center_x, children.len(), i);
        nodes.push(PlacedNode {
            id: member.id.clone(),
            label: member.nickname.clone(),
            x,
            y: child_y,
            is_hub: false,
        });
        edges.push(EdgeLine { x1: center_x, y1: hub_y, x2: x, y2: child_y });
    }

    TreeLayout { nodes, edges, width, height }
}

/// Center x of slot `index` in a row of `count` nodes centered on `center_x`.
fn row_x(center_x: f64, count: usize, index: usize) -> f64 {
    center_x + (index as f64 - (count as f64 - 1.0) / 2.0) * SLOT_WIDTH
}
