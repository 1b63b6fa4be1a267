//! Canvas drawing for the runner. Reads a `RunnerState`, never mutates it.

use web_sys::CanvasRenderingContext2d;

use crate::geometry::Rect;
use crate::model::{Player, RunnerState, CLOUD_HEIGHT, CLOUD_WIDTH};
use crate::state::Theme;

/// Frames per leg swap while running.
const STRIDE_FRAMES: u64 = 6;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: &'static str,
    pub ink: &'static str,
    pub faint: &'static str,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Palette { background: "#111111", ink: "#e6e6e6", faint: "#4a4a4a" },
            Theme::Light => Palette { background: "#ffffff", ink: "#202124", faint: "#b8b8b8" },
        }
    }
}

/// Sprite for the player: head, body and two legs, all inside the visual box.
pub fn player_parts(player: &Player, frame: u64) -> [Rect; 4] {
    let v = player.visual_box();
    let (x, y, w, h) = (v.x, v.y, v.w, v.h);
    let (head, body) = if player.ducking {
        (
            Rect::new(x + w * 0.6, y, w * 0.4, h * 0.45),
            Rect::new(x, y + h * 0.2, w * 0.8, h * 0.5),
        )
    } else {
        (
            Rect::new(x + w * 0.5, y, w * 0.5, h * 0.35),
            Rect::new(x, y + h * 0.3, w * 0.75, h * 0.45),
        )
    };
    let leg_top = y + h * 0.75;
    let leg_h = h * 0.25;
    let leg_w = w * 0.15;
    let lifted = leg_h * 0.6;
    let (back_h, front_h) = if player.jumping {
        (leg_h, leg_h)
    } else if (frame / STRIDE_FRAMES) % 2 == 0 {
        (leg_h, lifted)
    } else {
        (lifted, leg_h)
    };
    [
        head,
        body,
        Rect::new(x + w * 0.15, leg_top, leg_w, back_h),
        Rect::new(x + w * 0.5, leg_top, leg_w, front_h),
    ]
}

fn fill(ctx: &CanvasRenderingContext2d, r: &Rect) {
    ctx.fill_rect(r.x, r.y, r.w, r.h);
}

pub fn draw_scene(ctx: &CanvasRenderingContext2d, state: &RunnerState, palette: &Palette) {
    let cfg = &state.config;
    ctx.set_fill_style_str(palette.background);
    ctx.fill_rect(0.0, 0.0, cfg.width, cfg.height);

    // clouds
    ctx.set_fill_style_str(palette.faint);
    for c in &state.clouds {
        ctx.fill_rect(c.x, c.y + CLOUD_HEIGHT * 0.4, CLOUD_WIDTH, CLOUD_HEIGHT * 0.6);
        ctx.fill_rect(c.x + CLOUD_WIDTH * 0.25, c.y, CLOUD_WIDTH * 0.5, CLOUD_HEIGHT);
    }

    // ground line plus scrolling dashes
    ctx.set_fill_style_str(palette.ink);
    ctx.fill_rect(0.0, cfg.ground_line, cfg.width, 1.0);
    ctx.set_fill_style_str(palette.faint);
    let dash = cfg.ground_period * 0.5;
    let mut gx = -state.ground_offset;
    while gx < cfg.width {
        ctx.fill_rect(gx, cfg.ground_line + 4.0, dash, 1.0);
        gx += cfg.ground_period;
    }

    ctx.set_fill_style_str(palette.ink);
    for o in &state.obstacles {
        for part in o.world_parts() {
            fill(ctx, &part);
        }
    }
    for part in player_parts(&state.player, state.frame) {
        fill(ctx, &part);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn contains(outer: &Rect, inner: &Rect) -> bool {
        inner.x >= outer.x && inner.y >= outer.y && inner.right() <= outer.right() + 1e-9 && inner.bottom() <= outer.bottom() + 1e-9
    }

    #[test]
    fn sprite_stays_inside_visual_box() {
        let mut p = Player::new(&GameConfig::default());
        for (jumping, ducking) in [(false, false), (true, false), (false, true)] {
            p.jumping = jumping;
            p.ducking = ducking;
            let vb = p.visual_box();
            for frame in [0, 6, 13] {
                assert!(player_parts(&p, frame).iter().all(|r| contains(&vb, r)));
            }
        }
    }

    #[test]
    fn legs_alternate_while_running() {
        let p = Player::new(&GameConfig::default());
        let a = player_parts(&p, 0);
        let b = player_parts(&p, STRIDE_FRAMES);
        assert_eq!(a[2].h, b[3].h);
        assert_eq!(a[3].h, b[2].h);
        assert_ne!(a[2].h, a[3].h);
        assert_eq!(player_parts(&p, 1), a);
    }

    #[test]
    fn airborne_legs_are_extended() {
        let mut p = Player::new(&GameConfig::default());
        p.jumping = true;
        let parts = player_parts(&p, 6);
        assert_eq!(parts[2].h, parts[3].h);
    }

    #[test]
    fn ducking_sprite_is_lower() {
        let mut p = Player::new(&GameConfig::default());
        let standing = player_parts(&p, 0);
        p.ducking = true;
        let ducked = player_parts(&p, 0);
        assert!(ducked[0].y > standing[0].y);
        assert_eq!(ducked[2].bottom(), standing[2].bottom());
    }
}
