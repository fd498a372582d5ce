//! Gameplay constants.  All geometry is in field pixels; all durations in ticks.

// ── Field & timing ───────────────────────────────────────────────────────────

pub const FIELD_WIDTH: f32 = 1200.0;
pub const FIELD_HEIGHT: f32 = 800.0;

/// Nominal real-time length of one tick (≈60 FPS).
pub const TICK_MS: u64 = 16;

// ── Player ───────────────────────────────────────────────────────────────────

pub const PLAYER_WIDTH: f32 = 80.0;
pub const PLAYER_HEIGHT: f32 = 140.0;
pub const PLAYER_SPEED: f32 = 10.0;
pub const PLAYER_LIVES: u32 = 3;
pub const FIRE_COOLDOWN: u32 = 10;
pub const INVINCIBLE_TICKS: u32 = 90;

pub const BULLET_WIDTH: f32 = 40.0;
pub const BULLET_HEIGHT: f32 = 70.0;
pub const BULLET_SPEED: f32 = 10.0;

// ── Enemies & hazards ────────────────────────────────────────────────────────

pub const ENEMY_WIDTH: f32 = 85.0;
pub const ENEMY_HEIGHT: f32 = 85.0;
pub const ENEMY_SPEED: f32 = 3.0;

pub const ENEMY_BULLET_WIDTH: f32 = 20.0;
pub const ENEMY_BULLET_HEIGHT: f32 = 50.0;
pub const ENEMY_BULLET_SPEED: f32 = 6.0;

/// Survival: a wave spawns once the counter exceeds this.
pub const WAVE_INTERVAL: u32 = 60;
/// Survival: enemies get a chance to fire once the counter exceeds this.
pub const ENEMY_FIRE_INTERVAL: u32 = 30;

pub const EXPLOSION_FRAMES: u32 = 15;

// ── Boss ─────────────────────────────────────────────────────────────────────

pub const BOSS_WIDTH: f32 = 200.0;
pub const BOSS_HEIGHT: f32 = 200.0;
pub const BOSS_MAX_HEALTH: u32 = 1000;
pub const BOSS_START_Y: f32 = 100.0;
pub const BOSS_SPEED_X: f32 = 3.0;
pub const BOSS_SPEED_Y: f32 = 1.0;
pub const BOSS_PATROL_RANGE: f32 = 300.0;
pub const BOSS_MIN_Y: f32 = 50.0;
pub const BOSS_MAX_Y: f32 = FIELD_HEIGHT / 3.0;
/// Angular frequency of the vertical bob, per elapsed millisecond.
pub const BOSS_BOB_RATE: f32 = 0.005;

pub const BULLET_DAMAGE: u32 = 10;
/// Below this share of max health the boss enters its low phase.
pub const LOW_PHASE_RATIO: f32 = 0.4;

pub const BOSS_KILL_SCORE: u32 = 500;
pub const KILL_SCORE: u32 = 10;

// ── Skills ───────────────────────────────────────────────────────────────────

pub const SHIELD_TICKS: u32 = 240;

pub const LASER_COOLDOWN: u32 = 900;
pub const MISSILE_COOLDOWN: u32 = 500;
pub const SHIELD_COOLDOWN: u32 = 700;
pub const SPIRAL_COOLDOWN: u32 = 800;
pub const MINION_COOLDOWN: u32 = 300;

pub const LASER_COUNT: usize = 3;
pub const LASER_WIDTH: f32 = 160.0;
pub const LASER_TICKS: u32 = 90;

pub const MISSILE_WIDTH: f32 = 30.0;
pub const MISSILE_HEIGHT: f32 = 50.0;
pub const MISSILE_STEER: f32 = 3.0;
pub const MISSILE_FALL: f32 = 5.0;

pub const SPIRAL_MIN: u32 = 12;
pub const SPIRAL_MAX: u32 = 16;
pub const SPIRAL_SIZE: f32 = 20.0;
pub const SPIRAL_SPAWN_RADIUS: f32 = 10.0;
pub const SPIRAL_TURN: f32 = 0.1;
pub const SPIRAL_GROWTH: f32 = 2.0;

pub const MINION_MIN: u32 = 2;
pub const MINION_MAX: u32 = 5;
/// Chance out of 100, per minion per tick, of firing a hazard bullet.
pub const MINION_FIRE_PERCENT: u32 = 2;
