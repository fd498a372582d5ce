//! The encounter loop.
//!
//! `tick` takes an immutable reference to the current `EncounterState`, the
//! input snapshot, an RNG handle and an event sink, and returns a brand-new
//! `EncounterState`.  Side effects are limited to the injected RNG and the
//! events pushed into the sink.
//!
//! Within one tick every pool moves before any collision is checked, so
//! collisions always see post-movement positions.

use rand::Rng;
use tracing::{debug, info};

use crate::boss::{self, HitOutcome};
use crate::collision::intersects;
use crate::constants::{
    BOSS_KILL_SCORE, BULLET_HEIGHT, BULLET_SPEED, BULLET_WIDTH, ENEMY_BULLET_SPEED,
    ENEMY_FIRE_INTERVAL, ENEMY_HEIGHT, ENEMY_SPEED, ENEMY_WIDTH, EXPLOSION_FRAMES,
    FIELD_HEIGHT, FIELD_WIDTH, FIRE_COOLDOWN, INVINCIBLE_TICKS, KILL_SCORE, PLAYER_HEIGHT,
    PLAYER_LIVES, PLAYER_SPEED, PLAYER_WIDTH, WAVE_INTERVAL,
};
use crate::entities::{
    Actor, Arena, EncounterState, EncounterStatus, Explosion, Input, ModeKind, Player,
    SurvivalWaves,
};
use crate::events::{EventSink, GameEvent, SoundKind};
use crate::skills;

// ── Constructors ─────────────────────────────────────────────────────────────

/// The player ship, centred just above the bottom edge.
pub fn new_player() -> Player {
    Player {
        x: FIELD_WIDTH / 2.0 - PLAYER_WIDTH / 2.0,
        y: FIELD_HEIGHT - PLAYER_HEIGHT - 10.0,
        speed: PLAYER_SPEED,
        lives: PLAYER_LIVES,
        score: 0,
        invincible: false,
        invincible_timer: 0,
        fire_cooldown: 0,
    }
}

/// Build the initial state of a session in the given mode.
pub fn init_state(mode: ModeKind) -> EncounterState {
    let arena = match mode {
        ModeKind::Survival => Arena::Survival(SurvivalWaves {
            enemies: Vec::new(),
            wave_count: 0,
            spawn_counter: 0,
            shoot_counter: 0,
        }),
        ModeKind::Boss => Arena::Boss(boss::new_boss()),
    };
    EncounterState {
        player: new_player(),
        bullets: Vec::new(),
        enemy_bullets: Vec::new(),
        explosions: Vec::new(),
        arena,
        status: EncounterStatus::Playing,
        frame: 0,
    }
}

// ── Player (pure) ────────────────────────────────────────────────────────────

/// Apply every held direction, clamped to the field.
pub fn move_player(player: &Player, input: &Input) -> Player {
    let mut x = player.x;
    let mut y = player.y;
    if input.left {
        x -= player.speed;
    }
    if input.right {
        x += player.speed;
    }
    if input.up {
        y -= player.speed;
    }
    if input.down {
        y += player.speed;
    }
    Player {
        x: x.clamp(0.0, FIELD_WIDTH - PLAYER_WIDTH),
        y: y.clamp(0.0, FIELD_HEIGHT - PLAYER_HEIGHT),
        ..player.clone()
    }
}

/// The shot a player at this position fires: centred on the ship's nose.
pub fn player_bullet(player: &Player) -> Actor {
    Actor::new(
        player.x + PLAYER_WIDTH / 2.0 - BULLET_WIDTH / 2.0,
        player.y,
        BULLET_WIDTH,
        BULLET_HEIGHT,
    )
}

/// Horizontal centre of the ship; homing missiles aim here.
pub fn player_center_x(player: &Player) -> f32 {
    player.x + PLAYER_WIDTH / 2.0
}

/// Damage the player unless it is invincible.  Returns whether a life was lost.
pub fn strike_player(player: &mut Player, sink: &mut impl EventSink) -> bool {
    if player.invincible {
        return false;
    }
    player.lives = player.lives.saturating_sub(1);
    player.invincible = true;
    player.invincible_timer = INVINCIBLE_TICKS;
    sink.play_sound(SoundKind::Hit);
    debug!(lives = player.lives, "player hit");
    true
}

fn step_invincibility(player: &mut Player) {
    if !player.invincible {
        return;
    }
    player.invincible_timer = player.invincible_timer.saturating_sub(1);
    if player.invincible_timer == 0 {
        player.invincible = false;
    }
}

// ── Pools ────────────────────────────────────────────────────────────────────

/// Age every explosion and drop the ones past their frame budget.
pub fn age_explosions(explosions: &mut Vec<Explosion>) {
    for explosion in explosions.iter_mut() {
        explosion.frame += 1;
    }
    explosions.retain(|e| e.frame <= EXPLOSION_FRAMES);
}

fn explode(explosions: &mut Vec<Explosion>, x: f32, y: f32, sink: &mut impl EventSink) {
    explosions.push(Explosion { x, y, frame: 0 });
    sink.emit(GameEvent::Explosion { x, y });
}

fn award(player: &mut Player, points: u32, sink: &mut impl EventSink) {
    player.score += points;
    sink.emit(GameEvent::ScoreBonus { points });
}

fn advance_bullets(bullets: &mut [Actor]) {
    for bullet in bullets.iter_mut().filter(|b| b.active) {
        bullet.y -= BULLET_SPEED;
        if bullet.y < 0.0 {
            bullet.active = false;
        }
    }
}

/// Enemy bullets and survival enemies both just fall at their own speed.
fn advance_falling(actors: &mut [Actor], speed: f32) {
    for actor in actors.iter_mut().filter(|a| a.active) {
        actor.y += speed;
        if actor.y > FIELD_HEIGHT {
            actor.active = false;
        }
    }
}

// ── Survival waves ───────────────────────────────────────────────────────────

/// Spawn the next wave.  Every 10th wave is a row of five, every 15th (that
/// is not also a 10th) a V of five; all others are a single enemy.
pub fn spawn_wave(waves: &mut SurvivalWaves, rng: &mut impl Rng) {
    waves.wave_count += 1;
    let n = waves.wave_count;

    if n % 10 == 0 {
        for i in 0..5 {
            let x = 100.0 + i as f32 * 90.0;
            waves.enemies.push(Actor::new(x, 0.0, ENEMY_WIDTH, ENEMY_HEIGHT));
        }
    } else if n % 15 == 0 {
        let cx = FIELD_WIDTH / 2.0;
        let slots = [
            (cx - ENEMY_WIDTH / 2.0, 0.0),
            (cx - ENEMY_WIDTH - 20.0, -ENEMY_HEIGHT),
            (cx + 20.0, -ENEMY_HEIGHT),
            (cx - 2.0 * ENEMY_WIDTH - 40.0, -2.0 * ENEMY_HEIGHT),
            (cx + ENEMY_WIDTH + 40.0, -2.0 * ENEMY_HEIGHT),
        ];
        for (x, y) in slots {
            waves.enemies.push(Actor::new(x, y, ENEMY_WIDTH, ENEMY_HEIGHT));
        }
    } else {
        let x = rng.gen_range(0..(FIELD_WIDTH - ENEMY_WIDTH) as i32) as f32;
        waves.enemies.push(Actor::new(x, 0.0, ENEMY_WIDTH, ENEMY_HEIGHT));
    }
    debug!(wave = n, enemies = waves.enemies.len(), "wave spawned");
}

fn step_waves(waves: &mut SurvivalWaves, enemy_bullets: &mut Vec<Actor>, rng: &mut impl Rng) {
    waves.spawn_counter += 1;
    if waves.spawn_counter > WAVE_INTERVAL {
        spawn_wave(waves, rng);
        waves.spawn_counter = 0;
    }

    waves.shoot_counter += 1;
    if waves.shoot_counter > ENEMY_FIRE_INTERVAL {
        for enemy in waves.enemies.iter().filter(|e| e.active) {
            if rng.gen_bool(0.5) {
                enemy_bullets.push(skills::enemy_shot(enemy));
            }
        }
        waves.shoot_counter = 0;
    }
}

// ── Collisions ───────────────────────────────────────────────────────────────

/// Player bullets against a pool of killable targets (minions or enemies).
/// Each bullet takes out at most one target.
fn shoot_down(
    bullets: &mut [Actor],
    targets: &mut [Actor],
    player: &mut Player,
    explosions: &mut Vec<Explosion>,
    sink: &mut impl EventSink,
) {
    for bullet in bullets.iter_mut().filter(|b| b.active) {
        if let Some(target) = targets
            .iter_mut()
            .find(|t| t.active && intersects(&*bullet, &**t))
        {
            bullet.active = false;
            target.active = false;
            explode(explosions, target.x, target.y, sink);
            award(player, KILL_SCORE, sink);
            sink.play_sound(SoundKind::Explode);
        }
    }
}

/// Hazards that vanish on contact with the player, whether or not it was
/// invincible at the time.
fn ram_player(hazards: &mut [Actor], player: &mut Player, sink: &mut impl EventSink) {
    for hazard in hazards.iter_mut().filter(|h| h.active) {
        if intersects(&*hazard, &*player) {
            hazard.active = false;
            strike_player(player, sink);
        }
    }
}

fn resolve_collisions(state: &mut EncounterState, sink: &mut impl EventSink) {
    let EncounterState {
        player,
        bullets,
        enemy_bullets,
        explosions,
        arena,
        ..
    } = state;

    match arena {
        Arena::Boss(boss) => {
            for bullet in bullets.iter_mut().filter(|b| b.active) {
                if boss::is_alive(boss) && intersects(&*bullet, &*boss) {
                    bullet.active = false;
                    if boss::take_hit(boss, sink) == HitOutcome::Killed {
                        explode(explosions, boss.x, boss.y, sink);
                        award(player, BOSS_KILL_SCORE, sink);
                    }
                }
            }
            shoot_down(bullets, &mut boss.minions, player, explosions, sink);

            for laser in boss.lasers.iter().filter(|l| l.active) {
                if intersects(laser, &*player) {
                    strike_player(player, sink);
                }
            }
            ram_player(&mut boss.missiles, player, sink);
            ram_player(&mut boss.spiral, player, sink);
            ram_player(&mut boss.minions, player, sink);
        }
        Arena::Survival(waves) => {
            shoot_down(bullets, &mut waves.enemies, player, explosions, sink);
            ram_player(&mut waves.enemies, player, sink);
        }
    }

    // Enemy bullets pass through an invincible player.
    for shot in enemy_bullets.iter_mut().filter(|b| b.active) {
        if intersects(&*shot, &*player) && strike_player(player, sink) {
            shot.active = false;
        }
    }
}

fn purge(state: &mut EncounterState) {
    state.bullets.retain(|b| b.active);
    state.enemy_bullets.retain(|b| b.active);
    match &mut state.arena {
        Arena::Boss(boss) => skills::purge_hazards(boss),
        Arena::Survival(waves) => waves.enemies.retain(|e| e.active),
    }
}

fn evaluate_outcome(state: &mut EncounterState, sink: &mut impl EventSink) {
    let boss_dead = match &state.arena {
        Arena::Boss(boss) => !boss::is_alive(boss),
        Arena::Survival(_) => false,
    };

    if state.player.lives == 0 {
        state.status = EncounterStatus::Defeat;
        info!(score = state.player.score, frame = state.frame, "defeat");
        sink.play_sound(SoundKind::GameOver);
        sink.emit(GameEvent::Defeat);
    } else if boss_dead {
        state.status = EncounterStatus::Victory;
        info!(score = state.player.score, frame = state.frame, "victory");
        sink.emit(GameEvent::Victory);
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one tick.  All randomness comes through `rng`
/// so callers control determinism.
///
/// Once the encounter has ended, ticks only let the remaining pools drain:
/// no input, no skills, no collisions.
pub fn tick(
    state: &EncounterState,
    input: &Input,
    rng: &mut impl Rng,
    sink: &mut impl EventSink,
) -> EncounterState {
    let mut next = state.clone();
    next.frame += 1;

    // ── 1. Explosions ────────────────────────────────────────────────────────
    age_explosions(&mut next.explosions);

    if next.status != EncounterStatus::Playing {
        drain(&mut next);
        return next;
    }

    // ── 2. Player ────────────────────────────────────────────────────────────
    next.player = move_player(&next.player, input);
    next.player.fire_cooldown = next.player.fire_cooldown.saturating_sub(1);
    if input.fire && next.player.fire_cooldown == 0 {
        next.bullets.push(player_bullet(&next.player));
        next.player.fire_cooldown = FIRE_COOLDOWN;
        sink.play_sound(SoundKind::Shoot);
    }
    step_invincibility(&mut next.player);

    // ── 3. Boss brain / wave spawner ─────────────────────────────────────────
    match &mut next.arena {
        Arena::Boss(boss) => boss::advance(boss, next.frame, rng),
        Arena::Survival(waves) => step_waves(waves, &mut next.enemy_bullets, rng),
    }

    // ── 4. Kinematics ────────────────────────────────────────────────────────
    let target_x = player_center_x(&next.player);
    match &mut next.arena {
        Arena::Boss(boss) => skills::advance_hazards(boss, target_x, &mut next.enemy_bullets, rng),
        Arena::Survival(waves) => advance_falling(&mut waves.enemies, ENEMY_SPEED),
    }
    advance_bullets(&mut next.bullets);
    advance_falling(&mut next.enemy_bullets, ENEMY_BULLET_SPEED);

    // ── 5–7. Collisions, purge, outcome ──────────────────────────────────────
    resolve_collisions(&mut next, sink);
    purge(&mut next);
    evaluate_outcome(&mut next, sink);

    next
}

fn drain(state: &mut EncounterState) {
    let target_x = player_center_x(&state.player);
    match &mut state.arena {
        Arena::Boss(boss) => skills::drift_hazards(boss, target_x),
        Arena::Survival(waves) => advance_falling(&mut waves.enemies, ENEMY_SPEED),
    }
    advance_bullets(&mut state.bullets);
    advance_falling(&mut state.enemy_bullets, ENEMY_BULLET_SPEED);
    purge(state);
}
