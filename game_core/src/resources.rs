use glam::Vec2;

use crate::Side;

/// Match score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u8,
    pub computer: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player += 1,
            Side::Computer => self.computer += 1,
        }
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Player => self.player,
            Side::Computer => self.computer,
        }
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.player >= win_score {
            Some(Side::Player)
        } else if self.computer >= win_score {
            Some(Side::Computer)
        } else {
            None
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Launch,
    Escape,
    Other,
}

/// Discrete input event sampled at the start of a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    PointerMove { x: f32, y: f32 },
    PointerTrigger,
}

/// Arrow keys currently held down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    /// Unit direction per axis; opposite keys held together cancel out
    pub fn direction(&self) -> Vec2 {
        fn axis(negative: bool, positive: bool) -> f32 {
            match (negative, positive) {
                (true, false) => -1.0,
                (false, true) => 1.0,
                _ => 0.0,
            }
        }
        Vec2::new(axis(self.left, self.right), axis(self.up, self.down))
    }
}

/// Player input accumulated from events
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerInput {
    /// Latest pointer position, consumed when applied to the paddle
    pub pointer: Option<Vec2>,
    pub held: HeldKeys,
    /// Launch requested this tick
    pub trigger: bool,
    /// Quit requested this tick
    pub quit: bool,
}

impl PlayerInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_dir(&self) -> Vec2 {
        self.held.direction()
    }

    /// Reset the per-tick flags; held keys persist across ticks
    pub fn begin_tick(&mut self) {
        self.pointer = None;
        self.trigger = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        score.increment(Side::Player);
        score.increment(Side::Player);
        score.increment(Side::Computer);
        assert_eq!(score.get(Side::Player), 2);
        assert_eq!(score.get(Side::Computer), 1);
    }

    #[test]
    fn test_score_has_winner() {
        let mut score = Score::new();
        for _ in 0..2 {
            score.increment(Side::Computer);
        }
        assert_eq!(score.has_winner(3), None, "No winner below threshold");
        score.increment(Side::Computer);
        assert_eq!(score.has_winner(3), Some(Side::Computer));
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let held = HeldKeys {
            left: true,
            right: true,
            down: true,
            ..HeldKeys::default()
        };
        assert_eq!(held.direction(), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_begin_tick_keeps_held_keys() {
        let mut input = PlayerInput::new();
        input.held.right = true;
        input.pointer = Some(Vec2::new(5.0, 5.0));
        input.trigger = true;

        input.begin_tick();

        assert_eq!(input.key_dir(), Vec2::new(1.0, 0.0));
        assert!(input.pointer.is_none());
        assert!(!input.trigger);
    }
}
