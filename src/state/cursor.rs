//! Corner-bracket placement for the target cursor.

pub const PADDING: f64 = 3.0;
pub const CORNER_SIZE: f64 = 8.0;
pub const TARGET_CLASS: &str = "cursor-target";

/// Target bounds in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

/// Translations of the four brackets (top-left, top-right, bottom-right,
/// bottom-left) relative to a wrapper positioned at the mouse.
pub fn corner_offsets(target: Bounds, mouse: (f64, f64)) -> [(f64, f64); 4] {
    let (mx, my) = mouse;
    let left = target.left - mx - PADDING;
    let right = target.right - mx + PADDING - CORNER_SIZE;
    let top = target.top - my - PADDING;
    let bottom = target.bottom - my + PADDING - CORNER_SIZE;
    [(left, top), (right, top), (right, bottom), (left, bottom)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brackets_wrap_the_target_with_padding() {
        let target = Bounds { left: 100.0, top: 50.0, right: 200.0, bottom: 80.0 };
        let mouse = (150.0, 60.0);
        let corners = corner_offsets(target, mouse);
        // back in client space, each bracket's outer edge sits PADDING outside
        let [tl, tr, br, bl] = corners.map(|(x, y)| (x + mouse.0, y + mouse.1));
        assert_eq!(tl, (97.0, 47.0));
        assert_eq!(tr.0 + CORNER_SIZE, 203.0);
        assert_eq!(br, (195.0, 75.0));
        assert_eq!(bl.1 + CORNER_SIZE, 83.0);
        assert_eq!(bl.0, tl.0);
    }

    #[test]
    fn offsets_follow_the_mouse() {
        let target = Bounds { left: 0.0, top: 0.0, right: 10.0, bottom: 10.0 };
        let a = corner_offsets(target, (0.0, 0.0));
        let b = corner_offsets(target, (4.0, 2.0));
        for (p, q) in a.iter().zip(b.iter()) {
            assert_eq!((p.0 - q.0, p.1 - q.1), (4.0, 2.0));
        }
    }
}
