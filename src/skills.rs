//! Boss skill pattern generators and the kinematics of what they spawn.
//!
//! Generators only push new entities into the pool they are handed; the
//! per-tick `advance_*` functions move them and flag the ones that leave the
//! field.  Collisions against the player are resolved later by the encounter
//! loop, after every pool has moved.

use std::f32::consts::TAU;

use rand::Rng;

use crate::boss::muzzle;
use crate::constants::{
    BOSS_HEIGHT, ENEMY_BULLET_HEIGHT, ENEMY_BULLET_WIDTH, ENEMY_HEIGHT, ENEMY_SPEED, ENEMY_WIDTH,
    FIELD_HEIGHT, FIELD_WIDTH, LASER_COUNT, LASER_TICKS, LASER_WIDTH, MINION_FIRE_PERCENT,
    MINION_MAX, MINION_MIN, MISSILE_FALL, MISSILE_HEIGHT, MISSILE_STEER, MISSILE_WIDTH,
    SPIRAL_GROWTH, SPIRAL_MAX, SPIRAL_MIN, SPIRAL_SIZE, SPIRAL_SPAWN_RADIUS, SPIRAL_TURN,
};
use crate::entities::{Actor, Boss, Laser};

/// Top edge of every laser beam: just below the boss's patrol band.
const LASER_TOP: f32 = BOSS_HEIGHT + 100.0;

// ── Generators ───────────────────────────────────────────────────────────────

/// Three fixed vertical beams from below the boss to the bottom of the field.
pub fn spawn_laser_wall(lasers: &mut Vec<Laser>) {
    let spacing = FIELD_WIDTH / (LASER_COUNT + 1) as f32;
    for i in 0..LASER_COUNT {
        lasers.push(Laser {
            x: spacing * (i + 1) as f32 - LASER_WIDTH / 2.0,
            y: LASER_TOP,
            w: LASER_WIDTH,
            h: FIELD_HEIGHT - LASER_TOP,
            active: true,
            timer: LASER_TICKS,
        });
    }
}

/// One homing missile centred under `origin`.
pub fn spawn_missile(missiles: &mut Vec<Actor>, origin: (f32, f32)) {
    let (ox, oy) = origin;
    missiles.push(Actor::new(
        ox - MISSILE_WIDTH / 2.0,
        oy,
        MISSILE_WIDTH,
        MISSILE_HEIGHT,
    ));
}

/// 12–16 projectiles on a small ring around `origin`, evenly spaced in angle
/// so the swarm fans out as it rotates.
pub fn spawn_spiral(spiral: &mut Vec<Actor>, origin: (f32, f32), rng: &mut impl Rng) {
    let count = rng.gen_range(SPIRAL_MIN..=SPIRAL_MAX);
    let (ox, oy) = origin;
    for i in 0..count {
        let angle = TAU * i as f32 / count as f32;
        spiral.push(Actor::new(
            ox + SPIRAL_SPAWN_RADIUS * angle.cos(),
            oy + SPIRAL_SPAWN_RADIUS * angle.sin(),
            SPIRAL_SIZE,
            SPIRAL_SIZE,
        ));
    }
}

/// 2–5 minions just above the top edge at random columns.
pub fn spawn_minions(minions: &mut Vec<Actor>, rng: &mut impl Rng) {
    let count = rng.gen_range(MINION_MIN..=MINION_MAX);
    for _ in 0..count {
        let x = rng.gen_range(0..(FIELD_WIDTH - ENEMY_WIDTH) as i32) as f32;
        minions.push(Actor::new(x, -ENEMY_HEIGHT, ENEMY_WIDTH, ENEMY_HEIGHT));
    }
}

/// A hazard bullet dropped from the bottom centre of `shooter`.
pub fn enemy_shot(shooter: &Actor) -> Actor {
    Actor::new(
        shooter.x + shooter.w / 2.0 - ENEMY_BULLET_WIDTH / 2.0,
        shooter.y + shooter.h,
        ENEMY_BULLET_WIDTH,
        ENEMY_BULLET_HEIGHT,
    )
}

// ── Kinematics ───────────────────────────────────────────────────────────────

pub fn off_field(actor: &Actor) -> bool {
    actor.x < 0.0 || actor.x > FIELD_WIDTH || actor.y < 0.0 || actor.y > FIELD_HEIGHT
}

pub fn advance_lasers(lasers: &mut [Laser]) {
    for laser in lasers.iter_mut().filter(|l| l.active) {
        laser.timer = laser.timer.saturating_sub(1);
        if laser.timer == 0 {
            laser.active = false;
        }
    }
}

/// Steer each missile toward `target_x` (the player's centre column) and
/// drop it by a constant step.
pub fn advance_missiles(missiles: &mut [Actor], target_x: f32) {
    for missile in missiles.iter_mut().filter(|m| m.active) {
        let dx = target_x - (missile.x + missile.w / 2.0);
        missile.x += dx.clamp(-MISSILE_STEER, MISSILE_STEER);
        missile.y += MISSILE_FALL;
        if missile.y > FIELD_HEIGHT {
            missile.active = false;
        }
    }
}

/// Rotate and widen every projectile around `center`.
pub fn advance_spiral(spiral: &mut [Actor], center: (f32, f32)) {
    let (cx, cy) = center;
    for bullet in spiral.iter_mut().filter(|b| b.active) {
        let dx = bullet.x - cx;
        let dy = bullet.y - cy;
        let angle = dy.atan2(dx) + SPIRAL_TURN;
        let radius = dx.hypot(dy) + SPIRAL_GROWTH;

        bullet.x = cx + radius * angle.cos();
        bullet.y = cy + radius * angle.sin();
        if off_field(bullet) {
            bullet.active = false;
        }
    }
}

/// Drop every minion one step.
pub fn drop_minions(minions: &mut [Actor]) {
    for minion in minions.iter_mut().filter(|m| m.active) {
        minion.y += ENEMY_SPEED;
        if minion.y > FIELD_HEIGHT {
            minion.active = false;
        }
    }
}

/// Each live minion fires into `enemy_bullets` with a small chance.
pub fn minions_fire(minions: &[Actor], enemy_bullets: &mut Vec<Actor>, rng: &mut impl Rng) {
    for minion in minions.iter().filter(|m| m.active) {
        if rng.gen_range(0..100) < MINION_FIRE_PERCENT {
            enemy_bullets.push(enemy_shot(minion));
        }
    }
}

/// Move all four of the boss's hazard pools by one tick.
pub fn advance_hazards(
    boss: &mut Boss,
    target_x: f32,
    enemy_bullets: &mut Vec<Actor>,
    rng: &mut impl Rng,
) {
    drift_hazards(boss, target_x);
    minions_fire(&boss.minions, enemy_bullets, rng);
}

/// Move the hazard pools without letting anything fire.  Used once the
/// encounter is over and the field is only draining.
pub fn drift_hazards(boss: &mut Boss, target_x: f32) {
    let center = muzzle(boss);
    advance_lasers(&mut boss.lasers);
    advance_missiles(&mut boss.missiles, target_x);
    advance_spiral(&mut boss.spiral, center);
    drop_minions(&mut boss.minions);
}

/// Drop every inactive hazard the boss owns.
pub fn purge_hazards(boss: &mut Boss) {
    boss.lasers.retain(|l| l.active);
    boss.missiles.retain(|m| m.active);
    boss.spiral.retain(|b| b.active);
    boss.minions.retain(|m| m.active);
}
