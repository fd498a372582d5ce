use boss_shooter::boss::new_boss;
use boss_shooter::collision::{intersects, Rect};
use boss_shooter::compute::new_player;
use boss_shooter::constants::*;
use boss_shooter::entities::*;

fn square(x: f32, y: f32, side: f32) -> Actor {
    Actor::new(x, y, side, side)
}

#[test]
fn overlapping_boxes_intersect() {
    assert!(intersects(&square(0.0, 0.0, 10.0), &square(5.0, 5.0, 10.0)));
    assert!(intersects(&square(5.0, 5.0, 10.0), &square(0.0, 0.0, 10.0)));
}

#[test]
fn contained_box_intersects() {
    assert!(intersects(&square(0.0, 0.0, 100.0), &square(40.0, 40.0, 5.0)));
}

#[test]
fn touching_edges_do_not_intersect() {
    assert!(!intersects(&square(0.0, 0.0, 10.0), &square(10.0, 0.0, 10.0)));
    assert!(!intersects(&square(0.0, 0.0, 10.0), &square(0.0, 10.0, 10.0)));
}

#[test]
fn overlap_on_one_axis_only_is_a_miss() {
    assert!(!intersects(&square(0.0, 0.0, 10.0), &square(5.0, 50.0, 10.0)));
    assert!(!intersects(&square(0.0, 0.0, 10.0), &square(50.0, 5.0, 10.0)));
}

#[test]
fn player_and_boss_use_their_body_sizes() {
    let player = new_player();
    assert_eq!(player.bounds(), (560.0, 650.0, PLAYER_WIDTH, PLAYER_HEIGHT));

    let boss = new_boss();
    assert_eq!(boss.bounds(), (500.0, 100.0, BOSS_WIDTH, BOSS_HEIGHT));

    // A bullet grazing the boss's bottom edge from below.
    let grazing = Actor::new(520.0, 100.0 + BOSS_HEIGHT, BULLET_WIDTH, BULLET_HEIGHT);
    assert!(!intersects(&grazing, &boss));
    let inside = Actor::new(520.0, 100.0 + BOSS_HEIGHT - 1.0, BULLET_WIDTH, BULLET_HEIGHT);
    assert!(intersects(&inside, &boss));
}

#[test]
fn laser_covers_player() {
    let laser = Laser {
        x: 540.0,
        y: 300.0,
        w: LASER_WIDTH,
        h: 500.0,
        active: true,
        timer: LASER_TICKS,
    };
    assert!(intersects(&laser, &new_player()));
}
