use boss_shooter::boss::new_boss;
use boss_shooter::compute::init_state;
use boss_shooter::entities::*;

#[test]
fn entity_clone_and_eq() {
    // Enums derive PartialEq, so equality comparisons must work
    assert_eq!(ModeKind::Boss, ModeKind::Boss);
    assert_ne!(ModeKind::Boss, ModeKind::Survival);
    assert_eq!(BossState::Shielded, BossState::Shielded);
    assert_ne!(BossState::Normal, BossState::Dead);
    assert_ne!(BossPhase::Full, BossPhase::Low);
    assert_ne!(EncounterStatus::Playing, EncounterStatus::Victory);

    let actor = Actor::new(1.0, 2.0, 3.0, 4.0);
    assert!(actor.active);
    assert_eq!(actor.clone(), actor);
}

#[test]
fn skill_slots_follow_declaration_order() {
    let slots: Vec<usize> = Skill::ALL.iter().map(|s| s.index()).collect();
    assert_eq!(slots, vec![0, 1, 2, 3, 4]);
    assert_eq!(Skill::Shield.index(), 2);
}

#[test]
fn arena_reports_its_mode() {
    assert_eq!(init_state(ModeKind::Boss).arena.kind(), ModeKind::Boss);
    assert_eq!(init_state(ModeKind::Survival).arena.kind(), ModeKind::Survival);
}

#[test]
fn input_defaults_to_nothing_held() {
    let input = Input::default();
    assert!(!input.left && !input.right && !input.up && !input.down && !input.fire);
}

#[test]
fn encounter_clone_is_independent() {
    let original = init_state(ModeKind::Boss);
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.x = 99.0;
    cloned.player.score = 999;
    cloned.bullets.push(Actor::new(5.0, 5.0, 1.0, 1.0));
    if let Arena::Boss(boss) = &mut cloned.arena {
        boss.health = 1;
        boss.minions.push(Actor::new(0.0, 0.0, 1.0, 1.0));
    }

    assert_eq!(original.player.x, 560.0);
    assert_eq!(original.player.score, 0);
    assert!(original.bullets.is_empty());
    assert_eq!(original.arena, Arena::Boss(new_boss()));
}
