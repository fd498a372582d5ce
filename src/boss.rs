//! Boss state machine.
//!
//! `advance` is called once per tick by the encounter loop.  It moves the
//! boss, steps its timers, recomputes the phase and may fire at most one
//! skill.  Bullet damage comes in through `take_hit`.

use rand::Rng;
use tracing::{debug, info};

use crate::constants::{
    BOSS_BOB_RATE, BOSS_HEIGHT, BOSS_MAX_HEALTH, BOSS_MAX_Y, BOSS_MIN_Y, BOSS_PATROL_RANGE,
    BOSS_SPEED_X, BOSS_SPEED_Y, BOSS_START_Y, BOSS_WIDTH, BULLET_DAMAGE, FIELD_WIDTH,
    LASER_COOLDOWN, LOW_PHASE_RATIO, MINION_COOLDOWN, MISSILE_COOLDOWN, SHIELD_COOLDOWN,
    SHIELD_TICKS, SPIRAL_COOLDOWN, TICK_MS,
};
use crate::entities::{Boss, BossPhase, BossState, Skill};
use crate::events::{EventSink, SoundKind};
use crate::skills;

// ── Tables ───────────────────────────────────────────────────────────────────

fn base_cooldown(skill: Skill) -> u32 {
    match skill {
        Skill::Laser => LASER_COOLDOWN,
        Skill::Missile => MISSILE_COOLDOWN,
        Skill::Shield => SHIELD_COOLDOWN,
        Skill::Spiral => SPIRAL_COOLDOWN,
        Skill::Minions => MINION_COOLDOWN,
    }
}

/// Cooldown assigned when `skill` fires in `phase`.
///
/// The low phase doubles every cooldown, so a badly hurt boss uses its skills
/// less often, not more.
pub fn cooldown_for(skill: Skill, phase: BossPhase) -> u32 {
    match phase {
        BossPhase::Full => base_cooldown(skill),
        BossPhase::Low => base_cooldown(skill) * 2,
    }
}

/// Roll sub-range owned by each skill, out of 100.
fn roll_range(skill: Skill) -> std::ops::Range<u32> {
    match skill {
        Skill::Laser => 0..20,
        Skill::Missile => 20..40,
        Skill::Shield => 40..60,
        Skill::Spiral => 60..80,
        Skill::Minions => 80..100,
    }
}

// ── Construction ─────────────────────────────────────────────────────────────

/// A fresh boss centred at the top of the field with full health.
pub fn new_boss() -> Boss {
    let x = FIELD_WIDTH / 2.0 - BOSS_WIDTH / 2.0;
    Boss {
        x,
        y: BOSS_START_Y,
        initial_x: x,
        direction: 1.0,
        health: BOSS_MAX_HEALTH,
        state: BossState::Normal,
        shield_timer: 0,
        cooldowns: [0; 5],
        phase: BossPhase::Full,
        lasers: Vec::new(),
        missiles: Vec::new(),
        spiral: Vec::new(),
        minions: Vec::new(),
    }
}

/// The point hazards are emitted from: bottom centre of the body.
pub fn muzzle(boss: &Boss) -> (f32, f32) {
    (boss.x + BOSS_WIDTH / 2.0, boss.y + BOSS_HEIGHT)
}

pub fn is_alive(boss: &Boss) -> bool {
    boss.state != BossState::Dead
}

// ── Per-tick update ──────────────────────────────────────────────────────────

/// Advance the boss body by one tick.  A dead boss is left untouched.
pub fn advance(boss: &mut Boss, tick: u64, rng: &mut impl Rng) {
    if boss.state == BossState::Dead {
        return;
    }

    patrol(boss, tick);
    step_shield(boss);

    for cd in boss.cooldowns.iter_mut() {
        *cd = cd.saturating_sub(1);
    }

    let phase = phase_for(boss.health);
    if phase != boss.phase {
        info!(health = boss.health, ?phase, "boss phase changed");
        boss.phase = phase;
    }

    if boss.health > 0 {
        let roll = rng.gen_range(0..100);
        if let Some(skill) = select_skill(roll, &boss.cooldowns) {
            fire(boss, skill, rng);
        }
    }
}

fn patrol(boss: &mut Boss, tick: u64) {
    boss.x += BOSS_SPEED_X * boss.direction;
    if boss.x > boss.initial_x + BOSS_PATROL_RANGE {
        boss.direction = -1.0;
    } else if boss.x < boss.initial_x - BOSS_PATROL_RANGE {
        boss.direction = 1.0;
    }

    let elapsed_ms = (tick * TICK_MS) as f64;
    let bob = (elapsed_ms * BOSS_BOB_RATE as f64).sin() as f32;
    boss.y += BOSS_SPEED_Y * bob;

    boss.x = boss.x.clamp(0.0, FIELD_WIDTH - BOSS_WIDTH);
    boss.y = boss.y.clamp(BOSS_MIN_Y, BOSS_MAX_Y);
}

fn step_shield(boss: &mut Boss) {
    if boss.state != BossState::Shielded {
        return;
    }
    boss.shield_timer = boss.shield_timer.saturating_sub(1);
    if boss.shield_timer == 0 {
        boss.state = BossState::Normal;
        info!("boss shield down");
    }
}

pub fn phase_for(health: u32) -> BossPhase {
    if health as f32 <= BOSS_MAX_HEALTH as f32 * LOW_PHASE_RATIO {
        BossPhase::Low
    } else {
        BossPhase::Full
    }
}

/// Map a roll in `[0, 100)` to the skill owning that range, provided its
/// cooldown is exactly zero.  A roll landing on a cooling skill selects
/// nothing; there is no fallback to another ready skill.
pub fn select_skill(roll: u32, cooldowns: &[u32; 5]) -> Option<Skill> {
    Skill::ALL
        .into_iter()
        .find(|&skill| roll_range(skill).contains(&roll))
        .filter(|&skill| cooldowns[skill.index()] == 0)
}

/// Execute `skill` now and put it on cooldown.
pub fn fire(boss: &mut Boss, skill: Skill, rng: &mut impl Rng) {
    debug!(?skill, phase = ?boss.phase, "boss skill");
    match skill {
        Skill::Laser => skills::spawn_laser_wall(&mut boss.lasers),
        Skill::Missile => {
            let origin = muzzle(boss);
            skills::spawn_missile(&mut boss.missiles, origin);
        }
        Skill::Shield => {
            boss.state = BossState::Shielded;
            boss.shield_timer = SHIELD_TICKS;
            info!("boss shield up");
        }
        Skill::Spiral => {
            let origin = muzzle(boss);
            skills::spawn_spiral(&mut boss.spiral, origin, rng);
        }
        Skill::Minions => skills::spawn_minions(&mut boss.minions, rng),
    }
    boss.cooldowns[skill.index()] = cooldown_for(skill, boss.phase);
}

// ── Damage ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitOutcome {
    /// The shield soaked the bullet.
    Absorbed,
    Damaged,
    /// This hit took the last of the boss's health.
    Killed,
}

/// Apply one player bullet to a live boss.
///
/// Emits a hit sound on damage, or the explode sound on the killing blow.
/// The explosion itself is left to the caller, which owns the explosion pool.
pub fn take_hit(boss: &mut Boss, sink: &mut impl EventSink) -> HitOutcome {
    if boss.state == BossState::Shielded {
        return HitOutcome::Absorbed;
    }

    boss.health = boss.health.saturating_sub(BULLET_DAMAGE);
    if boss.health > 0 {
        sink.play_sound(SoundKind::Hit);
        return HitOutcome::Damaged;
    }

    boss.state = BossState::Dead;
    info!(x = boss.x, y = boss.y, "boss destroyed");
    sink.play_sound(SoundKind::Explode);
    HitOutcome::Killed
}
