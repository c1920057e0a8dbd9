//! Read-only traversal operations over an extracted control tree.

use super::models::ContentControl;

/// Depth-first walk over a control list, yielding each control with its
/// nesting depth (top level = 0), in document order.
pub fn walk(controls: &[ContentControl]) -> Vec<(usize, &ContentControl)> {
    let mut out = Vec::new();
    for control in controls {
        walk_into(control, 0, &mut out);
    }
    out
}

fn walk_into<'a>(
    control: &'a ContentControl,
    depth: usize,
    out: &mut Vec<(usize, &'a ContentControl)>,
) {
    out.push((depth, control));
    for child in &control.children {
        walk_into(child, depth + 1, out);
    }
}

/// Total number of controls across the whole tree, nested included.
pub fn control_count(controls: &[ContentControl]) -> usize {
    controls
        .iter()
        .map(|control| 1 + control_count(&control.children))
        .sum()
}

/// First control (depth-first) whose raw structured-content tag matches.
pub fn find_by_tag<'a>(controls: &'a [ContentControl], tag: &str) -> Option<&'a ContentControl> {
    for control in controls {
        if control.tag == tag {
            return Some(control);
        }
        if let Some(found) = find_by_tag(&control.children, tag) {
            return Some(found);
        }
    }
    None
}
