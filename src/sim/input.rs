//! Input snapshot consumed by one tick
//!
//! Platforms poll their devices once per frame and hand the simulation a
//! `TickInput`. Edge fields are true only on the frame the key or button
//! went down; level fields stay true while held.

use glam::Vec2;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Quit key just pressed (Q)
    pub quit: bool,
    /// Confirm/pause key just pressed (Enter)
    pub confirm: bool,
    /// Direction keys held
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Pointer position in screen space
    pub pointer: Vec2,
    /// Primary button just pressed
    pub clicked: bool,
}

impl TickInput {
    /// Horizontal axis in {-1, 0, 1}. Left wins when both are held.
    pub fn axis_x(&self) -> f32 {
        if self.left {
            -1.0
        } else if self.right {
            1.0
        } else {
            0.0
        }
    }

    /// Vertical axis in {-1, 0, 1}. Down wins when both are held.
    pub fn axis_y(&self) -> f32 {
        if self.down {
            1.0
        } else if self.up {
            -1.0
        } else {
            0.0
        }
    }
}

/// Polled input device
pub trait InputSource {
    /// Snapshot the device state for the next tick
    fn poll(&mut self) -> TickInput;
}

/// Replays a fixed list of snapshots, then idles
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: Vec<TickInput>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(frames: Vec<TickInput>) -> Self {
        Self { frames, cursor: 0 }
    }

    /// Append `count` copies of `input`
    pub fn hold(mut self, input: TickInput, count: usize) -> Self {
        self.frames.extend(std::iter::repeat_n(input, count));
        self
    }

    pub fn then(mut self, input: TickInput) -> Self {
        self.frames.push(input);
        self
    }

    pub fn remaining(&self) -> usize {
        self.frames.len() - self.cursor
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> TickInput {
        let input = self.frames.get(self.cursor).cloned().unwrap_or_default();
        self.cursor = (self.cursor + 1).min(self.frames.len());
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_wins_over_right() {
        let input = TickInput {
            left: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(input.axis_x(), -1.0);
    }

    #[test]
    fn test_scripted_input_replays_then_idles() {
        let right = TickInput {
            right: true,
            ..Default::default()
        };
        let mut script = ScriptedInput::default().hold(right.clone(), 2).then(TickInput {
            quit: true,
            ..Default::default()
        });
        assert_eq!(script.poll(), right);
        assert_eq!(script.poll(), right);
        assert!(script.poll().quit);
        assert_eq!(script.remaining(), 0);
        assert_eq!(script.poll(), TickInput::default());
    }
}
