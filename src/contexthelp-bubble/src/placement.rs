//! Bubble placement resolution.
//!
//! When the snapshot carries a placement, it wins. Otherwise the bubble
//! tries RIGHT, then BELOW, then ABOVE, taking the first side where it
//! fits the viewport. The final area is always clamped into the viewport.

use contexthelp_core::geometry::{Rect, Size};
use contexthelp_core::placement::Placement;

/// Unclamped top-left corner of the bubble for a given side.
///
/// Signed coordinates so positions off the top or left edge are visible
/// to the fit check.
fn candidate(placement: Placement, anchor: Rect, size: Size) -> (i32, i32) {
    match placement {
        Placement::Right => (i32::from(anchor.right()), i32::from(anchor.y)),
        Placement::Left => (
            i32::from(anchor.x) - i32::from(size.width),
            i32::from(anchor.y),
        ),
        Placement::Above => (
            i32::from(anchor.x),
            i32::from(anchor.y) - i32::from(size.height),
        ),
        Placement::Below => (i32::from(anchor.x), i32::from(anchor.bottom())),
    }
}

/// Returns whether a bubble of `size` fits the viewport on the given side
/// of the anchor without clamping.
fn fits(placement: Placement, anchor: Rect, size: Size, viewport: Rect) -> bool {
    let (x, y) = candidate(placement, anchor, size);
    x >= i32::from(viewport.x)
        && y >= i32::from(viewport.y)
        && x + i32::from(size.width) <= i32::from(viewport.right())
        && y + i32::from(size.height) <= i32::from(viewport.bottom())
}

/// Resolves which side of the anchor the bubble should be placed on.
///
/// A registered preference is used as is. Without one, the sides in
/// [`Placement::FALLBACK_ORDER`] are tried in order and the first that
/// fits wins; when none fits, RIGHT is used best-effort (the area is
/// clamped by [`bubble_area`] anyway).
#[must_use]
pub fn resolve_placement(
    preferred: Option<Placement>,
    anchor: Rect,
    size: Size,
    viewport: Rect,
) -> Placement {
    if let Some(placement) = preferred {
        return placement;
    }
    Placement::FALLBACK_ORDER
        .into_iter()
        .find(|&placement| fits(placement, anchor, size, viewport))
        .unwrap_or(Placement::Right)
}

/// Computes the bubble rectangle for a resolved placement, clamped into
/// the viewport.
#[must_use]
pub fn bubble_area(placement: Placement, anchor: Rect, size: Size, viewport: Rect) -> Rect {
    let width = size.width.min(viewport.width);
    let height = size.height.min(viewport.height);
    let (x, y) = candidate(placement, anchor, Size::new(width, height));

    let max_x = i32::from(viewport.right().saturating_sub(width));
    let max_y = i32::from(viewport.bottom().saturating_sub(height));
    let x = x.clamp(i32::from(viewport.x), max_x.max(i32::from(viewport.x)));
    let y = y.clamp(i32::from(viewport.y), max_y.max(i32::from(viewport.y)));

    // Clamping keeps both coordinates within u16 range.
    Rect::new(x as u16, y as u16, width, height)
}
