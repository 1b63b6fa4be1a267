// Background dot lattice with a gravity well that pulls nearby dots toward a point.

pub const DOT_RADIUS: f64 = 1.0;
pub const GRAVITY_STRENGTH: f64 = 0.8;
pub const GRAVITY_RADIUS: f64 = 300.0;
pub const RETURN_SPEED: f64 = 0.03;
pub const DAMPING: f64 = 0.9;
pub const DEFAULT_DOT_COLOR: &str = "rgba(255, 255, 255, 0.5)";

/// Coarser lattice on narrow viewports.
pub fn spacing_for_width(width: f64) -> f64 {
    if width <= 600.0 { 24.0 } else { 16.0 }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
    pub origin_x: f64,
    pub origin_y: f64,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DotGrid {
    pub dots: Vec<Dot>,
    pub spacing: f64,
    /// Active well center, if any.
    pub well: Option<(f64, f64)>,
}

impl DotGrid {
    #[cfg(test)]
    pub fn new(width: f64, height: f64) -> Self {
        let mut grid = Self::default();
        grid.resize(width, height);
        grid
    }

    /// Rebuilds the lattice at rest for a new viewport. The well is kept.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.spacing = spacing_for_width(width);
        let cols = (width / self.spacing).ceil() as usize + 1;
        let rows = (height / self.spacing).ceil() as usize + 1;
        self.dots.clear();
        self.dots.reserve(cols * rows);
        for i in 0..cols {
            for j in 0..rows {
                let x = i as f64 * self.spacing;
                let y = j as f64 * self.spacing;
                self.dots.push(Dot { origin_x: x, origin_y: y, x, y, vx: 0.0, vy: 0.0 });
            }
        }
    }

    pub fn step(&mut self) {
        let well = self.well;
        for dot in &mut self.dots {
            if let Some((cx, cy)) = well {
                let dx = cx - dot.x;
                let dy = cy - dot.y;
                let distance = (dx * dx + dy * dy).sqrt();
                if distance > 0.0 && distance < GRAVITY_RADIUS {
                    let force = (1.0 - distance / GRAVITY_RADIUS) * GRAVITY_STRENGTH;
                    dot.vx += dx / distance * force;
                    dot.vy += dy / distance * force;
                }
            }
            dot.vx += (dot.origin_x - dot.x) * RETURN_SPEED;
            dot.vy += (dot.origin_y - dot.y) * RETURN_SPEED;
            dot.vx *= DAMPING;
            dot.vy *= DAMPING;
            dot.x += dot.vx;
            dot.y += dot.vy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_depends_on_viewport() {
        assert_eq!(spacing_for_width(600.0), 24.0);
        assert_eq!(spacing_for_width(601.0), 16.0);
    }

    #[test]
    fn lattice_covers_the_viewport() {
        let grid = DotGrid::new(100.0, 50.0);
        // 100/24 -> 5 cols + 1, 50/24 -> 3 rows + 1
        assert_eq!(grid.dots.len(), 6 * 4);
        let last = grid.dots.last().unwrap();
        assert_eq!((last.x, last.y), (120.0, 72.0));
    }

    #[test]
    fn grid_at_rest_stays_put() {
        let mut grid = DotGrid::new(64.0, 64.0);
        let before = grid.dots.clone();
        grid.step();
        assert_eq!(grid.dots, before);
    }

    #[test]
    fn well_pulls_nearby_dots_and_ignores_far_ones() {
        let mut grid = DotGrid::new(1000.0, 48.0);
        grid.well = Some((0.0, 0.0));
        grid.step();
        let near = grid.dots.iter().find(|d| d.origin_x == 48.0 && d.origin_y == 0.0).unwrap();
        assert!(near.x < 48.0);
        let far = grid.dots.iter().find(|d| d.origin_x == 400.0 && d.origin_y == 0.0).unwrap();
        assert_eq!(far.x, 400.0);
        // dot sitting on the center feels no pull
        let center = grid.dots.iter().find(|d| d.origin_x == 0.0 && d.origin_y == 0.0).unwrap();
        assert_eq!((center.x, center.y), (0.0, 0.0));
    }

    #[test]
    fn dots_settle_after_the_well_turns_off() {
        let mut grid = DotGrid::new(320.0, 160.0);
        grid.well = Some((160.0, 80.0));
        for _ in 0..30 {
            grid.step();
        }
        grid.well = None;
        for _ in 0..600 {
            grid.step();
        }
        for d in &grid.dots {
            assert!((d.x - d.origin_x).abs() < 0.01);
            assert!((d.y - d.origin_y).abs() < 0.01);
        }
    }
}
