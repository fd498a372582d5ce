//! All game entity types.  Pure data, no logic.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeKind {
    Survival,
    Boss,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncounterStatus {
    Playing,
    Victory,
    Defeat,
}

// ── Pooled actors ─────────────────────────────────────────────────────────────

/// An axis-aligned box with an active flag.  Bullets, enemies, missiles,
/// minions and spiral projectiles are all plain actors; an inactive actor is
/// logically dead and gets purged at the end of the tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Actor {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub active: bool,
}

impl Actor {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Actor { x, y, w, h, active: true }
    }
}

/// A vertical beam with a lifetime instead of motion.
#[derive(Clone, Debug, PartialEq)]
pub struct Laser {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub active: bool,
    /// Remaining ticks before the beam switches off.
    pub timer: u32,
}

/// A brief explosion visual left behind by a kill.
#[derive(Clone, Debug, PartialEq)]
pub struct Explosion {
    pub x: f32,
    pub y: f32,
    /// Ticks since the kill; removed once past `EXPLOSION_FRAMES`.
    pub frame: u32,
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub lives: u32,
    pub score: u32,
    pub invincible: bool,
    pub invincible_timer: u32,
    /// Ticks until the next shot is allowed.
    pub fire_cooldown: u32,
}

/// Keys held during one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Input {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire: bool,
}

// ── Boss ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BossState {
    Normal,
    Shielded,
    Dead,
}

/// Derived from the health ratio every tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BossPhase {
    Full,
    /// Health at or below 40% of max.  Skill cooldowns are doubled.
    Low,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Skill {
    Laser,
    Missile,
    Shield,
    Spiral,
    Minions,
}

impl Skill {
    pub const ALL: [Skill; 5] = [
        Skill::Laser,
        Skill::Missile,
        Skill::Shield,
        Skill::Spiral,
        Skill::Minions,
    ];

    /// Slot in `Boss::cooldowns`.
    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Boss {
    pub x: f32,
    pub y: f32,
    /// Centre of the horizontal patrol.
    pub initial_x: f32,
    /// +1 moving right, -1 moving left.
    pub direction: f32,
    pub health: u32,
    pub state: BossState,
    pub shield_timer: u32,
    /// One countdown per `Skill`, indexed by `Skill::index`.
    pub cooldowns: [u32; 5],
    pub phase: BossPhase,
    pub lasers: Vec<Laser>,
    pub missiles: Vec<Actor>,
    pub spiral: Vec<Actor>,
    pub minions: Vec<Actor>,
}

// ── Modes ─────────────────────────────────────────────────────────────────────

/// Survival-mode bookkeeping: free-falling enemy waves.
#[derive(Clone, Debug, PartialEq)]
pub struct SurvivalWaves {
    pub enemies: Vec<Actor>,
    pub wave_count: u32,
    pub spawn_counter: u32,
    pub shoot_counter: u32,
}

/// What the player is fighting.
#[derive(Clone, Debug, PartialEq)]
pub enum Arena {
    Survival(SurvivalWaves),
    Boss(Boss),
}

impl Arena {
    pub fn kind(&self) -> ModeKind {
        match self {
            Arena::Survival(_) => ModeKind::Survival,
            Arena::Boss(_) => ModeKind::Boss,
        }
    }
}

// ── Master encounter state ────────────────────────────────────────────────────

/// Everything one session simulates.  The encounter owns the top-level pools;
/// the boss (inside `arena`) owns its own.
#[derive(Clone, Debug, PartialEq)]
pub struct EncounterState {
    pub player: Player,
    /// Shots fired by the player.
    pub bullets: Vec<Actor>,
    /// Hazard shots fired by enemies and minions.
    pub enemy_bullets: Vec<Actor>,
    pub explosions: Vec<Explosion>,
    pub arena: Arena,
    pub status: EncounterStatus,
    pub frame: u64,
}
