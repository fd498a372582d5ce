//! The one intersection test every subsystem goes through.

use crate::constants::{BOSS_HEIGHT, BOSS_WIDTH, PLAYER_HEIGHT, PLAYER_WIDTH};
use crate::entities::{Actor, Boss, Laser, Player};

/// Anything with an axis-aligned bounding box.
pub trait Rect {
    /// `(x, y, w, h)` with `(x, y)` the top-left corner.
    fn bounds(&self) -> (f32, f32, f32, f32);
}

impl Rect for Actor {
    fn bounds(&self) -> (f32, f32, f32, f32) {
        (self.x, self.y, self.w, self.h)
    }
}

impl Rect for Laser {
    fn bounds(&self) -> (f32, f32, f32, f32) {
        (self.x, self.y, self.w, self.h)
    }
}

impl Rect for Player {
    fn bounds(&self) -> (f32, f32, f32, f32) {
        (self.x, self.y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }
}

impl Rect for Boss {
    fn bounds(&self) -> (f32, f32, f32, f32) {
        (self.x, self.y, BOSS_WIDTH, BOSS_HEIGHT)
    }
}

/// True when both axis projections overlap.  Touching edges do not count.
pub fn intersects(a: &impl Rect, b: &impl Rect) -> bool {
    let (ax, ay, aw, ah) = a.bounds();
    let (bx, by, bw, bh) = b.bounds();
    ax < bx + bw && ax + aw > bx && ay < by + bh && ay + ah > by
}
