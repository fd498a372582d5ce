//! Fire-and-forget notifications from the simulation to the presentation layer.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundKind {
    Shoot,
    Hit,
    Explode,
    GameOver,
}

#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    Sound(SoundKind),
    /// A kill at this position; the encounter also keeps its own explosion pool.
    Explosion { x: f32, y: f32 },
    ScoreBonus { points: u32 },
    Victory,
    Defeat,
}

/// Receives events as the tick produces them.  Never blocks the simulation.
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);

    fn play_sound(&mut self, kind: SoundKind) {
        self.emit(GameEvent::Sound(kind));
    }
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

/// Discards everything.
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: GameEvent) {}
}
