//! Runner-game kernel.
//!
//! `RunnerState` owns every entity and is advanced only through
//! `RunnerAction`s: queued input events, one `Tick` per fixed step from the
//! animation loop, and `Spawn` from the wall-clock spawn timer. Nothing in
//! here touches the browser.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::rc::Rc;
use tracing::{debug, info};
use yew::Reducible;

use crate::config::GameConfig;
use crate::geometry::{hits_any, Rect};
use crate::rng::{RandomSource, SeededRng};
use crate::spawn::{spawn_wave, Obstacle};

pub const CLOUD_WIDTH: f64 = 46.0;
pub const CLOUD_HEIGHT: f64 = 14.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the first start trigger.
    Idle,
    Running,
    /// Frozen after a collision; only the start trigger is consumed.
    GameOver,
}

/// Edge-triggered input from the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Starts a session when not running, jumps while running.
    Trigger,
    DuckBegin,
    DuckEnd,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub x: f64,
    /// Top of the standing box. Never greater than `ground_y`.
    pub y: f64,
    pub vy: f64,
    pub width: f64,
    pub height: f64,
    pub duck_height: f64,
    pub jumping: bool,
    pub ducking: bool,
}

impl Player {
    pub fn new(cfg: &GameConfig) -> Self {
        Self {
            x: cfg.player_x,
            y: cfg.ground_y(),
            vy: 0.0,
            width: cfg.player_width,
            height: cfg.player_height,
            duck_height: cfg.duck_height,
            jumping: false,
            ducking: false,
        }
    }

    /// Drawn bounds. Ducking keeps the bottom on the ground and lowers the top.
    pub fn visual_box(&self) -> Rect {
        if self.ducking {
            Rect::new(self.x, self.y + self.height - self.duck_height, self.width, self.duck_height)
        } else {
            Rect::new(self.x, self.y, self.width, self.height)
        }
    }

    pub fn hitbox(&self, cfg: &GameConfig) -> Rect {
        self.visual_box().inset(&cfg.hitbox_inset)
    }

    fn jump(&mut self, velocity: f64) {
        if self.jumping || self.ducking {
            return;
        }
        self.jumping = true;
        self.vy = velocity;
    }

    fn duck(&mut self, on: bool) {
        if on && self.jumping {
            return;
        }
        self.ducking = on;
    }

    fn integrate(&mut self, gravity: f64, ground_y: f64) {
        if !self.jumping {
            return;
        }
        self.y += self.vy;
        self.vy += gravity;
        if self.y >= ground_y {
            self.y = ground_y;
            self.vy = 0.0;
            self.jumping = false;
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cloud {
    pub x: f64,
    pub y: f64,
    pub speed: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RunnerState {
    pub config: GameConfig,
    pub phase: Phase,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub clouds: Vec<Cloud>,
    pub score: u32,
    /// Best score seen by this page, seeded from storage.
    pub high_score: u32,
    /// Signed horizontal speed shared by all obstacles.
    pub speed: f64,
    pub frame: u64,
    pub ground_offset: f64,
    /// Bumped on every start; the spawn timer is rebuilt per session.
    pub session: u32,
    /// Whether the wall-clock spawn timer should be running.
    pub spawn_armed: bool,
    /// Incremented on every state change so views can key effects on it.
    pub version: u64,
    pending: VecDeque<InputEvent>,
    rng: SeededRng,
}

impl RunnerState {
    pub fn new(config: GameConfig, high_score: u32, seed: u64) -> Self {
        Self {
            player: Player::new(&config),
            speed: config.initial_speed,
            config,
            phase: Phase::Idle,
            obstacles: Vec::new(),
            clouds: Vec::new(),
            score: 0,
            high_score,
            frame: 0,
            ground_offset: 0.0,
            session: 0,
            spawn_armed: false,
            version: 0,
            pending: VecDeque::new(),
            rng: SeededRng::new(seed),
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn has_pending_input(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    /// Text for the page overlay, if one should be shown.
    pub fn overlay_message(&self) -> Option<String> {
        match self.phase {
            Phase::Idle => Some("Press Space to start".to_string()),
            Phase::Running => None,
            Phase::GameOver => Some(format!("Game Over! Score: {}", self.score)),
        }
    }

    fn start(&mut self) {
        self.phase = Phase::Running;
        self.player = Player::new(&self.config);
        self.obstacles.clear();
        self.clouds.clear();
        self.score = 0;
        self.speed = self.config.initial_speed;
        self.frame = 0;
        self.ground_offset = 0.0;
        self.session = self.session.wrapping_add(1);
        self.spawn_armed = true;
        info!(session = self.session, high_score = self.high_score, "runner session started");
    }

    fn game_over(&mut self) {
        self.phase = Phase::GameOver;
        self.spawn_armed = false;
        info!(session = self.session, score = self.score, "runner game over");
    }

    fn handle_input(&mut self, event: InputEvent) {
        match (self.phase, event) {
            (Phase::Idle | Phase::GameOver, InputEvent::Trigger) => self.start(),
            (Phase::Running, InputEvent::Trigger) => self.player.jump(self.config.jump_velocity),
            (Phase::Running, InputEvent::DuckBegin) => self.player.duck(true),
            (Phase::Running, InputEvent::DuckEnd) => self.player.duck(false),
            _ => {}
        }
    }

    fn drain_input(&mut self) {
        while let Some(event) = self.pending.pop_front() {
            self.handle_input(event);
        }
    }

    /// One fixed simulation step using the embedded random source.
    pub fn tick(&mut self) {
        let mut rng = std::mem::take(&mut self.rng);
        self.tick_with(&mut rng);
        self.rng = rng;
    }

    pub fn tick_with(&mut self, rng: &mut impl RandomSource) {
        self.drain_input();
        if !self.is_running() {
            return;
        }
        self.frame += 1;

        self.player.integrate(self.config.gravity, self.config.ground_y());

        let speed = self.speed;
        for o in &mut self.obstacles {
            o.x += speed;
        }

        let before = self.obstacles.len();
        self.obstacles.retain(|o| !o.is_offscreen());
        for _ in 0..before - self.obstacles.len() {
            self.clear_obstacle();
        }

        let hitbox = self.player.hitbox(&self.config);
        let hit = self
            .obstacles
            .iter()
            .filter(|o| hitbox.overlaps_x(o.x, o.right()))
            .any(|o| hits_any(&hitbox, o.world_parts()));
        if hit {
            self.game_over();
            return;
        }

        self.update_clouds(rng);
        self.ground_offset = (self.ground_offset - self.speed).rem_euclid(self.config.ground_period);
    }

    fn clear_obstacle(&mut self) {
        self.score += 1;
        if self.score > self.high_score {
            self.high_score = self.score;
            debug!(high_score = self.high_score, "new high score");
        }
        self.speed = (self.speed - self.config.speed_step).max(-self.config.max_speed);
    }

    fn update_clouds(&mut self, rng: &mut impl RandomSource) {
        for c in &mut self.clouds {
            c.x += c.speed;
        }
        self.clouds.retain(|c| c.x + CLOUD_WIDTH >= 0.0);
        if rng.chance(self.config.cloud_chance) {
            let top = self.config.height * 0.1;
            let bottom = (self.config.ground_line - self.config.player_height - CLOUD_HEIGHT).max(top);
            self.clouds.push(Cloud {
                x: self.config.width,
                y: rng.range(top, bottom).round(),
                speed: -rng.range(0.4, 1.0),
            });
        }
    }

    /// Spawn-timer callback using the embedded random source.
    pub fn spawn(&mut self) {
        let mut rng = std::mem::take(&mut self.rng);
        self.spawn_with(&mut rng);
        self.rng = rng;
    }

    pub fn spawn_with(&mut self, rng: &mut impl RandomSource) {
        if !self.is_running() {
            return;
        }
        let wave = spawn_wave(&self.config, rng);
        debug!(count = wave.len(), kind = ?wave[0].kind, "spawned obstacles");
        self.obstacles.extend(wave);
    }
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug)]
pub enum RunnerAction {
    Input(InputEvent),
    /// One fixed step from the animation loop.
    Tick,
    /// Fired by the wall-clock spawn interval.
    Spawn,
}

impl Reducible for RunnerState {
    type Action = RunnerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use RunnerAction::*;
        match action {
            Tick if !self.is_running() && !self.has_pending_input() => return self,
            Spawn if !self.is_running() => return self,
            _ => {}
        }
        let mut new = (*self).clone();
        match action {
            Input(event) => new.push_input(event),
            Tick => new.tick(),
            Spawn => new.spawn(),
        }
        new.version = new.version.wrapping_add(1);
        Rc::new(new)
    }
}
