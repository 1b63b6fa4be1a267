use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in canvas pixels (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    /// Half-open overlap on both axes: rectangles sharing only an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Horizontal-only overlap, used as the broad phase before the per-part test.
    pub fn overlaps_x(&self, left: f64, right: f64) -> bool {
        self.x < right && self.right() > left
    }

    pub fn inset(&self, inset: &Inset) -> Self {
        Self::new(
            self.x + inset.left,
            self.y + inset.top,
            (self.w - inset.left - inset.right).max(0.0),
            (self.h - inset.top - inset.bottom).max(0.0),
        )
    }
}

/// Per-side shrink applied to a visual box to get its hitbox.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Inset {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for Inset {
    fn default() -> Self {
        Self {
            left: 6.0,
            right: 6.0,
            top: 4.0,
            bottom: 4.0,
        }
    }
}

/// True if `hitbox` overlaps any rectangle in `parts`.
pub fn hits_any(hitbox: &Rect, parts: impl IntoIterator<Item = Rect>) -> bool {
    parts.into_iter().any(|p| hitbox.overlaps(&p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn int_rect() -> impl Strategy<Value = Rect> {
        (-200i32..200, -200i32..200, 1i32..80, 1i32..80)
            .prop_map(|(x, y, w, h)| Rect::new(x as f64, y as f64, w as f64, h as f64))
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(a in int_rect(), b in int_rect()) {
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn shared_vertical_edge_is_not_a_hit(a in int_rect(), h in 1i32..80, dy in -40i32..40) {
            // b starts exactly at a's right edge, vertically overlapping
            let b = Rect::new(a.right(), a.y + dy as f64, 10.0, h as f64);
            prop_assert!(!a.overlaps(&b));
            let shifted = b.translate(-1.0, 0.0);
            let vertical = a.y < shifted.bottom() && a.bottom() > shifted.y;
            prop_assert_eq!(a.overlaps(&shifted), vertical);
        }

        #[test]
        fn shared_horizontal_edge_is_not_a_hit(a in int_rect(), w in 1i32..80, dx in -40i32..40) {
            let b = Rect::new(a.x + dx as f64, a.bottom(), w as f64, 10.0);
            prop_assert!(!a.overlaps(&b));
            let shifted = b.translate(0.0, -1.0);
            let horizontal = a.x < shifted.right() && a.right() > shifted.x;
            prop_assert_eq!(a.overlaps(&shifted), horizontal);
        }
    }

    #[test]
    fn inset_shrinks_each_side() {
        let r = Rect::new(50.0, 86.0, 40.0, 44.0).inset(&Inset::default());
        assert_eq!(r, Rect::new(56.0, 90.0, 28.0, 36.0));
    }

    #[test]
    fn inset_never_goes_negative() {
        let r = Rect::new(0.0, 0.0, 4.0, 4.0).inset(&Inset::default());
        assert_eq!((r.w, r.h), (0.0, 0.0));
    }

    #[test]
    fn hits_any_checks_every_part() {
        let hitbox = Rect::new(0.0, 0.0, 10.0, 10.0);
        let parts = [Rect::new(20.0, 0.0, 5.0, 5.0), Rect::new(9.0, 9.0, 5.0, 5.0)];
        assert!(hits_any(&hitbox, parts));
        assert!(!hits_any(&hitbox, [Rect::new(10.0, 0.0, 5.0, 5.0)]));
    }
}
