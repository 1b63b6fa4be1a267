//! Obstacle archetypes and silhouette generation.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::geometry::Rect;
use crate::rng::RandomSource;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Small,
    Medium,
    Large,
    /// Several trunks side by side.
    Cluster,
    /// Hovers above the ground; duck under it or jump over it.
    Overhead,
}

/// Size envelope for one obstacle kind.
#[derive(Clone, Copy, Debug)]
pub struct Archetype {
    pub kind: ObstacleKind,
    pub max_parts: u32,
    pub min_width: f64,
    pub max_width: f64,
    pub min_height: f64,
    pub max_height: f64,
    pub arm_chance: f64,
    /// Gap between the ground line and the lowest edge.
    pub elevation: f64,
}

pub const ARM_WIDTH: f64 = 5.0;

pub const ARCHETYPES: [Archetype; 5] = [
    Archetype { kind: ObstacleKind::Small, max_parts: 1, min_width: 10.0, max_width: 14.0, min_height: 26.0, max_height: 34.0, arm_chance: 0.5, elevation: 0.0 },
    Archetype { kind: ObstacleKind::Medium, max_parts: 2, min_width: 12.0, max_width: 16.0, min_height: 34.0, max_height: 42.0, arm_chance: 0.5, elevation: 0.0 },
    Archetype { kind: ObstacleKind::Large, max_parts: 1, min_width: 18.0, max_width: 24.0, min_height: 44.0, max_height: 50.0, arm_chance: 0.7, elevation: 0.0 },
    Archetype { kind: ObstacleKind::Cluster, max_parts: 3, min_width: 10.0, max_width: 14.0, min_height: 28.0, max_height: 40.0, arm_chance: 0.3, elevation: 0.0 },
    Archetype { kind: ObstacleKind::Overhead, max_parts: 1, min_width: 34.0, max_width: 42.0, min_height: 12.0, max_height: 16.0, arm_chance: 0.0, elevation: 30.0 },
];

pub fn archetype(kind: ObstacleKind) -> &'static Archetype {
    ARCHETYPES
        .iter()
        .find(|a| a.kind == kind)
        .unwrap_or(&ARCHETYPES[0])
}

/// Widest silhouette any archetype can produce.
pub fn max_extent() -> f64 {
    ARCHETYPES
        .iter()
        .map(|a| ARM_WIDTH + a.max_parts as f64 * (a.max_width + ARM_WIDTH))
        .fold(0.0, f64::max)
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    /// Left edge of the silhouette's local frame.
    pub x: f64,
    pub width: f64,
    /// Silhouette in local x / canvas y. Frozen at construction.
    parts: Vec<Rect>,
}

impl Obstacle {
    /// Builds an obstacle from an explicit silhouette (local x, canvas y).
    pub fn from_parts(kind: ObstacleKind, x: f64, parts: Vec<Rect>) -> Self {
        let width = parts.iter().map(Rect::right).fold(0.0, f64::max);
        Self { kind, x, width, parts }
    }

    pub fn generate(kind: ObstacleKind, x: f64, ground_line: f64, rng: &mut impl RandomSource) -> Self {
        let arch = archetype(kind);
        let parts = match kind {
            ObstacleKind::Overhead => overhead_parts(arch, ground_line, rng),
            _ => trunk_parts(arch, ground_line, rng),
        };
        Self::from_parts(kind, x, parts)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Trailing edge has left the screen.
    pub fn is_offscreen(&self) -> bool {
        self.right() < 0.0
    }

    #[cfg(test)]
    pub fn local_parts(&self) -> &[Rect] {
        &self.parts
    }

    /// Silhouette in canvas coordinates.
    pub fn world_parts(&self) -> impl Iterator<Item = Rect> + '_ {
        self.parts.iter().map(move |p| p.translate(self.x, 0.0))
    }
}

fn trunk_parts(arch: &Archetype, ground_line: f64, rng: &mut impl RandomSource) -> Vec<Rect> {
    let count = rng.int_inclusive(1, arch.max_parts);
    let mut parts = Vec::new();
    // room for a left arm on the first trunk
    let mut cursor = ARM_WIDTH;
    for _ in 0..count {
        let w = rng.range(arch.min_width, arch.max_width).round();
        let h = rng.range(arch.min_height, arch.max_height).round();
        let top = ground_line - arch.elevation - h;
        parts.push(Rect::new(cursor, top, w, h));
        if rng.chance(arch.arm_chance) {
            let arm_h = rng.range(8.0, 12.0).round();
            let arm_y = top + rng.range(4.0, h * 0.5).round();
            let arm_x = if rng.chance(0.5) { cursor - ARM_WIDTH } else { cursor + w };
            parts.push(Rect::new(arm_x, arm_y, ARM_WIDTH, arm_h));
        }
        cursor += w + ARM_WIDTH;
    }
    parts
}

fn overhead_parts(arch: &Archetype, ground_line: f64, rng: &mut impl RandomSource) -> Vec<Rect> {
    let w = rng.range(arch.min_width, arch.max_width).round();
    let h = rng.range(arch.min_height, arch.max_height).round();
    let bottom = ground_line - arch.elevation;
    let body = Rect::new(0.0, bottom - h, w, h);
    // wing above the body
    let wing = Rect::new(w * 0.3, body.y - 6.0, w * 0.4, 6.0);
    vec![body, wing]
}

/// Obstacles produced by one spawn timer firing: a leader and, sometimes, a twin.
pub fn spawn_wave(config: &GameConfig, rng: &mut impl RandomSource) -> Vec<Obstacle> {
    let kind = ARCHETYPES[rng.index(ARCHETYPES.len())].kind;
    let leader = Obstacle::generate(kind, config.width, config.ground_line, rng);
    let mut wave = vec![leader];
    if rng.chance(config.twin_chance) {
        let twin_x = config.width + config.twin_offset;
        wave.push(Obstacle::generate(kind, twin_x, config.ground_line, rng));
    }
    wave
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{tests::Scripted, SeededRng};

    #[test]
    fn scripted_draws_give_exact_geometry() {
        // single part (no draw), w=10+0.5*4=12, h=26+0.5*8=30, arm yes (0.1<0.5),
        // arm_h=8+0.5*4=10, arm_y=top+4, arm on the left (0.2<0.5)
        let mut rng = Scripted::new(&[0.5, 0.5, 0.1, 0.5, 0.0, 0.2]);
        let o = Obstacle::generate(ObstacleKind::Small, 600.0, 130.0, &mut rng);
        assert_eq!(
            o.local_parts(),
            &[Rect::new(5.0, 100.0, 12.0, 30.0), Rect::new(0.0, 104.0, 5.0, 10.0)]
        );
        assert_eq!(o.width, 17.0);
        assert_eq!(o.right(), 617.0);
    }

    #[test]
    fn ground_obstacles_rest_on_the_ground() {
        let mut rng = SeededRng::new(99);
        for arch in ARCHETYPES.iter().filter(|a| a.elevation == 0.0) {
            for _ in 0..50 {
                let o = Obstacle::generate(arch.kind, 0.0, 130.0, &mut rng);
                let trunks: Vec<_> = o.local_parts().iter().filter(|p| p.w > ARM_WIDTH).collect();
                assert!(!trunks.is_empty() && trunks.len() as u32 <= arch.max_parts);
                for t in trunks {
                    assert_eq!(t.bottom(), 130.0);
                    assert!(t.h >= arch.min_height && t.h <= arch.max_height);
                }
                assert!(o.local_parts().iter().all(|p| p.x >= 0.0 && p.right() <= o.width));
            }
        }
    }

    #[test]
    fn overhead_leaves_room_underneath() {
        let mut rng = SeededRng::new(3);
        let o = Obstacle::generate(ObstacleKind::Overhead, 0.0, 130.0, &mut rng);
        let lowest = o.local_parts().iter().map(Rect::bottom).fold(f64::MIN, f64::max);
        assert_eq!(lowest, 100.0);
    }

    #[test]
    fn silhouette_is_frozen_while_moving() {
        let mut rng = SeededRng::new(11);
        let mut o = Obstacle::generate(ObstacleKind::Cluster, 600.0, 130.0, &mut rng);
        let before = o.local_parts().to_vec();
        o.x -= 250.0;
        assert_eq!(o.local_parts(), before.as_slice());
        let first = o.world_parts().next().unwrap();
        assert_eq!(first.x, before[0].x + 350.0);
    }

    #[test]
    fn twin_sits_a_fixed_offset_behind() {
        let cfg = GameConfig::default();
        // archetype index 0 (Small), leader draws, then twin roll 0.0 < 0.3
        let mut rng = Scripted::new(&[0.0, 0.0, 0.0, 0.0, 0.9, 0.0, 0.0, 0.0, 0.0, 0.9]);
        let wave = spawn_wave(&cfg, &mut rng);
        assert_eq!(wave.len(), 2);
        assert_eq!(wave[0].x, 600.0);
        assert_eq!(wave[1].x, 700.0);
        assert_eq!(wave[0].kind, wave[1].kind);
    }

    #[test]
    fn silhouettes_fit_the_widest_extent() {
        let mut rng = SeededRng::new(21);
        for arch in ARCHETYPES.iter() {
            for _ in 0..100 {
                assert!(Obstacle::generate(arch.kind, 0.0, 130.0, &mut rng).width <= max_extent());
            }
        }
    }

    #[test]
    fn no_twin_when_roll_fails() {
        let cfg = GameConfig::default();
        let mut rng = Scripted::new(&[0.0, 0.0, 0.0, 0.0, 0.9, 0.95]);
        assert_eq!(spawn_wave(&cfg, &mut rng).len(), 1);
    }
}
