use boss_shooter::boss::*;
use boss_shooter::constants::*;
use boss_shooter::entities::*;
use boss_shooter::events::{GameEvent, SoundKind};

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// A boss that will not pick any skill for a long while.
fn quiet_boss() -> Boss {
    Boss {
        cooldowns: [10_000; 5],
        ..new_boss()
    }
}

/// Tick `boss` until `skill` fires, returning how many ticks that took.
fn advance_until_fired(boss: &mut Boss, skill: Skill, rng: &mut StdRng) -> u64 {
    for t in 1..=1_000u64 {
        advance(boss, t, rng);
        if boss.cooldowns[skill.index()] != 0 {
            return t;
        }
    }
    panic!("{skill:?} never fired");
}

// ── Construction ──────────────────────────────────────────────────────────────

#[test]
fn new_boss_is_centred_and_healthy() {
    let b = new_boss();
    assert_eq!((b.x, b.y), (500.0, 100.0));
    assert_eq!(b.initial_x, b.x);
    assert_eq!(b.health, BOSS_MAX_HEALTH);
    assert_eq!(b.state, BossState::Normal);
    assert_eq!(b.phase, BossPhase::Full);
    assert_eq!(b.cooldowns, [0; 5]);
    assert_eq!(muzzle(&b), (600.0, 300.0));
}

// ── Skill selection ───────────────────────────────────────────────────────────

#[test]
fn roll_ranges_map_to_skills() {
    let ready = [0; 5];
    assert_eq!(select_skill(0, &ready), Some(Skill::Laser));
    assert_eq!(select_skill(19, &ready), Some(Skill::Laser));
    assert_eq!(select_skill(20, &ready), Some(Skill::Missile));
    assert_eq!(select_skill(45, &ready), Some(Skill::Shield));
    assert_eq!(select_skill(60, &ready), Some(Skill::Spiral));
    assert_eq!(select_skill(79, &ready), Some(Skill::Spiral));
    assert_eq!(select_skill(99, &ready), Some(Skill::Minions));
}

#[test]
fn roll_on_cooling_skill_selects_nothing() {
    let mut cooldowns = [0; 5];
    cooldowns[Skill::Missile.index()] = 1;
    // Other skills are ready, but the roll belongs to the missile.
    assert_eq!(select_skill(25, &cooldowns), None);
    assert_eq!(select_skill(15, &cooldowns), Some(Skill::Laser));
}

#[test]
fn low_phase_doubles_cooldowns_so_skills_fire_less_often() {
    for skill in Skill::ALL {
        assert_eq!(
            cooldown_for(skill, BossPhase::Low),
            2 * cooldown_for(skill, BossPhase::Full)
        );
    }
    assert_eq!(cooldown_for(Skill::Laser, BossPhase::Full), 900);
    assert_eq!(cooldown_for(Skill::Minions, BossPhase::Low), 600);
}

#[test]
fn phase_threshold_is_forty_percent() {
    assert_eq!(phase_for(1000), BossPhase::Full);
    assert_eq!(phase_for(401), BossPhase::Full);
    assert_eq!(phase_for(400), BossPhase::Low);
    assert_eq!(phase_for(0), BossPhase::Low);
}

// ── fire ──────────────────────────────────────────────────────────────────────

#[test]
fn fire_each_skill() {
    let mut rng = seeded_rng();
    let mut b = new_boss();

    fire(&mut b, Skill::Laser, &mut rng);
    assert_eq!(b.lasers.len(), LASER_COUNT);
    assert_eq!(b.cooldowns[Skill::Laser.index()], LASER_COOLDOWN);

    fire(&mut b, Skill::Missile, &mut rng);
    assert_eq!(b.missiles.len(), 1);
    assert_eq!(b.cooldowns[Skill::Missile.index()], MISSILE_COOLDOWN);

    fire(&mut b, Skill::Shield, &mut rng);
    assert_eq!(b.state, BossState::Shielded);
    assert_eq!(b.shield_timer, SHIELD_TICKS);
    assert_eq!(b.cooldowns[Skill::Shield.index()], SHIELD_COOLDOWN);

    fire(&mut b, Skill::Spiral, &mut rng);
    assert!((12..=16).contains(&b.spiral.len()));
    assert_eq!(b.cooldowns[Skill::Spiral.index()], SPIRAL_COOLDOWN);

    fire(&mut b, Skill::Minions, &mut rng);
    assert!((2..=5).contains(&b.minions.len()));
    assert_eq!(b.cooldowns[Skill::Minions.index()], MINION_COOLDOWN);
}

#[test]
fn cooldown_counts_down_from_the_tick_after_firing() {
    let mut rng = seeded_rng();
    let mut b = quiet_boss();
    b.cooldowns[Skill::Laser.index()] = 0;

    let t = advance_until_fired(&mut b, Skill::Laser, &mut rng);
    assert_eq!(b.cooldowns[Skill::Laser.index()], LASER_COOLDOWN);
    assert_eq!(b.lasers.len(), 3);

    advance(&mut b, t + 1, &mut rng);
    assert_eq!(b.cooldowns[Skill::Laser.index()], LASER_COOLDOWN - 1);
    assert_eq!(b.lasers.len(), 3); // no second wall while cooling
}

#[test]
fn low_phase_skill_gets_doubled_cooldown() {
    let mut rng = seeded_rng();
    let mut b = quiet_boss();
    b.health = 400;
    b.cooldowns[Skill::Laser.index()] = 0;

    advance_until_fired(&mut b, Skill::Laser, &mut rng);
    assert_eq!(b.phase, BossPhase::Low);
    assert_eq!(b.cooldowns[Skill::Laser.index()], 2 * LASER_COOLDOWN);
}

// ── advance ───────────────────────────────────────────────────────────────────

#[test]
fn advance_decrements_every_cooldown() {
    let mut b = new_boss();
    b.cooldowns = [5, 2, 0, 7, 2];
    advance(&mut b, 1, &mut seeded_rng());
    // Only the shield slot was ready this tick, so only it may have refilled.
    assert_eq!(b.cooldowns[0], 4);
    assert_eq!(b.cooldowns[1], 1);
    assert!([0, SHIELD_COOLDOWN].contains(&b.cooldowns[2]));
    assert_eq!(b.cooldowns[3], 6);
    assert_eq!(b.cooldowns[4], 1);
}

#[test]
fn patrol_reverses_at_its_edge() {
    let mut rng = seeded_rng();
    let mut b = quiet_boss();
    b.x = b.initial_x + BOSS_PATROL_RANGE;

    advance(&mut b, 1, &mut rng);
    assert_eq!(b.x, b.initial_x + BOSS_PATROL_RANGE + BOSS_SPEED_X);
    assert_eq!(b.direction, -1.0);

    advance(&mut b, 2, &mut rng);
    assert_eq!(b.x, b.initial_x + BOSS_PATROL_RANGE);
}

#[test]
fn vertical_position_stays_in_band() {
    let mut rng = seeded_rng();
    let mut b = quiet_boss();
    b.y = 10.0;
    advance(&mut b, 1, &mut rng);
    assert_eq!(b.y, BOSS_MIN_Y);

    b.y = 500.0;
    advance(&mut b, 2, &mut rng);
    assert_eq!(b.y, BOSS_MAX_Y);

    for t in 3..2_000 {
        advance(&mut b, t, &mut rng);
        assert!(b.y >= BOSS_MIN_Y && b.y <= BOSS_MAX_Y);
        assert!(b.x >= 0.0 && b.x <= FIELD_WIDTH - BOSS_WIDTH);
    }
}

#[test]
fn shield_drops_when_timer_runs_out() {
    let mut b = quiet_boss();
    b.state = BossState::Shielded;
    b.shield_timer = 2;
    advance(&mut b, 1, &mut seeded_rng());
    assert_eq!(b.state, BossState::Shielded);
    advance(&mut b, 2, &mut seeded_rng());
    assert_eq!(b.state, BossState::Normal);
    assert_eq!(b.shield_timer, 0);
}

#[test]
fn dead_boss_is_frozen() {
    let mut b = new_boss();
    b.state = BossState::Dead;
    b.health = 0;
    b.cooldowns = [3; 5];
    let before = b.clone();
    advance(&mut b, 1, &mut seeded_rng());
    assert_eq!(b, before);
}

#[test]
fn phase_changes_when_health_drops() {
    let mut b = quiet_boss();
    b.health = 390;
    advance(&mut b, 1, &mut seeded_rng());
    assert_eq!(b.phase, BossPhase::Low);
}

// ── take_hit ──────────────────────────────────────────────────────────────────

#[test]
fn shield_absorbs_hits_silently() {
    let mut b = new_boss();
    b.state = BossState::Shielded;
    let mut events: Vec<GameEvent> = Vec::new();
    assert_eq!(take_hit(&mut b, &mut events), HitOutcome::Absorbed);
    assert_eq!(b.health, BOSS_MAX_HEALTH);
    assert!(events.is_empty());
}

#[test]
fn hit_costs_fixed_damage() {
    let mut b = new_boss();
    let mut events: Vec<GameEvent> = Vec::new();
    assert_eq!(take_hit(&mut b, &mut events), HitOutcome::Damaged);
    assert_eq!(b.health, BOSS_MAX_HEALTH - BULLET_DAMAGE);
    assert_eq!(events, vec![GameEvent::Sound(SoundKind::Hit)]);
}

#[test]
fn last_hit_kills() {
    let mut b = new_boss();
    b.health = 5;
    let mut events: Vec<GameEvent> = Vec::new();
    assert_eq!(take_hit(&mut b, &mut events), HitOutcome::Killed);
    assert_eq!(b.health, 0);
    assert_eq!(b.state, BossState::Dead);
    assert!(!is_alive(&b));
    assert_eq!(events, vec![GameEvent::Sound(SoundKind::Explode)]);
}
