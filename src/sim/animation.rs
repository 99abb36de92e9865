//! Sprite animation state machines
//!
//! Two closed variants share the `update`/`frame` surface:
//! - `SingleAnimation`: steps through a frame range on a countdown
//! - `ComposeAnimation`: a cyclic playlist of single animations, each held
//!   for a number of ticks
//!
//! `update` advances exactly one tick. `frame` is side-effect free.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{Error, Result};

/// Handle to a single animation that several composite steps may point at.
///
/// Advancing the animation through any step advances it for all of them.
pub type SharedAnimation = Rc<RefCell<SingleAnimation>>;

/// Frame range animation over a sprite sheet
#[derive(Debug, Clone, PartialEq)]
pub struct SingleAnimation {
    /// First frame index of the loop
    pub first: usize,
    /// Last frame index allowed (inclusive)
    pub last: usize,
    /// Frame indices advanced per change
    pub step: usize,
    /// Ticks to wait between frame changes
    pub speed: f32,
    frame_counter: f32,
    frame: usize,
}

impl SingleAnimation {
    /// Fails when `first > last`, which leaves no frame to show
    pub fn new(first: usize, last: usize, step: usize, speed: f32) -> Result<Self> {
        if first > last {
            return Err(Error::InvalidFrameRange { first, last });
        }
        Ok(Self {
            first,
            last,
            step,
            speed,
            frame_counter: speed,
            frame: first,
        })
    }

    /// Wrap into a handle that can be reused across composite steps
    pub fn into_shared(self) -> SharedAnimation {
        Rc::new(RefCell::new(self))
    }

    pub fn update(&mut self) {
        self.frame_counter -= 1.0;
        if self.frame_counter < 0.0 {
            self.frame_counter = self.speed;
            // Hard wrap: any remainder of `step` past `last` is dropped
            self.frame = self
                .frame
                .checked_add(self.step)
                .filter(|frame| *frame <= self.last)
                .unwrap_or(self.first);
        }
    }

    #[inline]
    pub fn frame(&self) -> usize {
        self.frame
    }
}

/// One entry of a composite playlist
#[derive(Debug)]
pub struct AnimationStep {
    pub animation: SharedAnimation,
    /// Ticks to hold this step before moving on (held for `delay + 1` ticks)
    pub delay: u32,
}

impl AnimationStep {
    /// Step owning its own animation state
    pub fn new(animation: SingleAnimation, delay: u32) -> Self {
        Self {
            animation: animation.into_shared(),
            delay,
        }
    }

    /// Step aliasing an animation already used elsewhere
    pub fn shared(animation: &SharedAnimation, delay: u32) -> Self {
        Self {
            animation: Rc::clone(animation),
            delay,
        }
    }
}

/// Cyclic playlist of single animations
#[derive(Debug)]
pub struct ComposeAnimation {
    steps: Vec<AnimationStep>,
    current: usize,
    counter: u32,
}

impl ComposeAnimation {
    pub fn new(steps: Vec<AnimationStep>) -> Result<Self> {
        if steps.is_empty() {
            return Err(Error::EmptyAnimation);
        }
        Ok(Self {
            steps,
            current: 0,
            counter: 0,
        })
    }

    pub fn update(&mut self) {
        self.counter = self.counter.saturating_add(1);
        if self.counter > self.steps[self.current].delay {
            self.counter = 0;
            self.current = (self.current + 1) % self.steps.len();
        }
        // The entered step advances on the same tick it becomes active
        self.steps[self.current].animation.borrow_mut().update();
    }

    pub fn frame(&self) -> usize {
        self.steps[self.current].animation.borrow().frame()
    }

    /// Index of the active step
    pub fn current_step(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Deep copy. Steps that alias one animation in `self` alias one fresh
/// animation in the copy, and nothing is shared with `self`.
impl Clone for ComposeAnimation {
    fn clone(&self) -> Self {
        let mut copies: Vec<(&SharedAnimation, SharedAnimation)> = Vec::new();
        let steps = self
            .steps
            .iter()
            .map(|step| {
                let animation = match copies
                    .iter()
                    .find(|(original, _)| Rc::ptr_eq(original, &step.animation))
                {
                    Some((_, copy)) => Rc::clone(copy),
                    None => {
                        let copy = step.animation.borrow().clone().into_shared();
                        copies.push((&step.animation, Rc::clone(&copy)));
                        copy
                    }
                };
                AnimationStep {
                    animation,
                    delay: step.delay,
                }
            })
            .collect();
        Self {
            steps,
            current: self.current,
            counter: self.counter,
        }
    }
}

/// Any animation an entity can play
#[derive(Debug, Clone)]
pub enum Animation {
    Single(SingleAnimation),
    Compose(ComposeAnimation),
}

impl Animation {
    pub fn update(&mut self) {
        match self {
            Animation::Single(a) => a.update(),
            Animation::Compose(c) => c.update(),
        }
    }

    pub fn frame(&self) -> usize {
        match self {
            Animation::Single(a) => a.frame(),
            Animation::Compose(c) => c.frame(),
        }
    }
}

impl From<SingleAnimation> for Animation {
    fn from(a: SingleAnimation) -> Self {
        Animation::Single(a)
    }
}

impl From<ComposeAnimation> for Animation {
    fn from(c: ComposeAnimation) -> Self {
        Animation::Compose(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_changes_frame_every_speed_plus_one() {
        let mut anim = SingleAnimation::new(0, 42, 14, 7.0).unwrap();
        for _ in 0..7 {
            anim.update();
            assert_eq!(anim.frame(), 0);
        }
        anim.update();
        assert_eq!(anim.frame(), 14);

        for _ in 0..7 {
            anim.update();
        }
        assert_eq!(anim.frame(), 14);
        anim.update();
        assert_eq!(anim.frame(), 28);
    }

    #[test]
    fn test_single_wraps_to_first_not_first_plus_step() {
        // 1 -> 15 -> 29 -> 43 -> wrap
        let mut anim = SingleAnimation::new(1, 43, 14, 0.0).unwrap();
        let frames: Vec<usize> = (0..5)
            .map(|_| {
                anim.update();
                anim.frame()
            })
            .collect();
        assert_eq!(frames, vec![15, 29, 43, 1, 15]);
    }

    #[test]
    fn test_single_truncates_partial_step() {
        // 0 -> 4 -> 8 would overshoot 9 on the next step and wraps to 0
        let mut anim = SingleAnimation::new(0, 9, 4, 0.0).unwrap();
        anim.update();
        anim.update();
        assert_eq!(anim.frame(), 8);
        anim.update();
        assert_eq!(anim.frame(), 0);
    }

    #[test]
    fn test_single_step_larger_than_range() {
        let mut anim = SingleAnimation::new(3, 5, 10, 0.0).unwrap();
        for _ in 0..20 {
            anim.update();
            assert_eq!(anim.frame(), 3);
        }
    }

    #[test]
    fn test_single_huge_step_wraps_without_overflow() {
        let mut anim = SingleAnimation::new(1, 5, usize::MAX, 0.0).unwrap();
        for _ in 0..3 {
            anim.update();
            assert_eq!(anim.frame(), 1);
        }
    }

    #[test]
    fn test_single_rejects_inverted_range() {
        assert!(matches!(
            SingleAnimation::new(5, 4, 1, 0.0),
            Err(Error::InvalidFrameRange { first: 5, last: 4 })
        ));
        let mut one = SingleAnimation::new(4, 4, 1, 0.0).unwrap();
        one.update();
        assert_eq!(one.frame(), 4);
    }

    #[test]
    fn test_compose_max_delay_holds_step() {
        let mut compose = ComposeAnimation::new(vec![
            AnimationStep::new(SingleAnimation::new(0, 10, 1, 0.0).unwrap(), u32::MAX),
            AnimationStep::new(SingleAnimation::new(20, 30, 1, 0.0).unwrap(), 0),
        ])
        .unwrap();
        compose.counter = u32::MAX - 1;
        for _ in 0..3 {
            compose.update();
            assert_eq!(compose.current_step(), 0);
        }
    }

    #[test]
    fn test_compose_clone_is_independent() {
        let base = SingleAnimation::new(0, 100, 1, 0.0).unwrap().into_shared();
        let original = ComposeAnimation::new(vec![
            AnimationStep::shared(&base, 0),
            AnimationStep::new(SingleAnimation::new(50, 60, 1, 0.0).unwrap(), 0),
            AnimationStep::shared(&base, 0),
        ])
        .unwrap();
        let mut copy = original.clone();
        for _ in 0..3 {
            copy.update();
        }
        assert_eq!(base.borrow().frame(), 0);
        assert_eq!(original.frame(), 0);
        assert_eq!(original.current_step(), 0);

        // Aliasing survives inside the copy: steps 0 and 2 still advance together
        assert!(Rc::ptr_eq(&copy.steps[0].animation, &copy.steps[2].animation));
        assert!(!Rc::ptr_eq(&copy.steps[0].animation, &copy.steps[1].animation));
        assert!(!Rc::ptr_eq(&copy.steps[0].animation, &base));
        assert_eq!(copy.current_step(), 0);
        assert_eq!(copy.frame(), 2);
    }

    #[test]
    fn test_frame_is_idempotent() {
        let mut anim = SingleAnimation::new(0, 42, 14, 0.0).unwrap();
        anim.update();
        assert_eq!(anim.frame(), anim.frame());
    }

    #[test]
    fn test_compose_single_step_degenerates_to_inner() {
        let mut compose =
            ComposeAnimation::new(vec![AnimationStep::new(SingleAnimation::new(0, 42, 14, 2.0).unwrap(), 5)])
                .unwrap();
        let mut plain = SingleAnimation::new(0, 42, 14, 2.0).unwrap();
        for _ in 0..50 {
            compose.update();
            plain.update();
            assert_eq!(compose.current_step(), 0);
            assert_eq!(compose.frame(), plain.frame());
        }
    }

    #[test]
    fn test_compose_zero_delay_switches_every_tick() {
        let mut compose = ComposeAnimation::new(vec![
            AnimationStep::new(SingleAnimation::new(0, 10, 1, 100.0).unwrap(), 0),
            AnimationStep::new(SingleAnimation::new(20, 30, 1, 100.0).unwrap(), 0),
            AnimationStep::new(SingleAnimation::new(40, 50, 1, 100.0).unwrap(), 0),
        ])
        .unwrap();
        let mut seen = Vec::new();
        for _ in 0..6 {
            compose.update();
            seen.push(compose.current_step());
        }
        assert_eq!(seen, vec![1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn test_compose_cycle_length() {
        let delays = [3u32, 0, 5];
        let mut compose = ComposeAnimation::new(
            delays
                .iter()
                .map(|&d| AnimationStep::new(SingleAnimation::new(0, 10, 1, 1.0).unwrap(), d))
                .collect(),
        )
        .unwrap();
        let cycle: u32 = delays.iter().map(|d| d + 1).sum();
        for tick in 1..cycle {
            compose.update();
            if tick > delays[0] {
                assert_ne!(compose.current_step(), 0, "back at step 0 early, tick {tick}");
            }
        }
        compose.update();
        assert_eq!(compose.current_step(), 0);
    }

    #[test]
    fn test_compose_entered_step_gets_bonus_advance() {
        let mut compose = ComposeAnimation::new(vec![
            AnimationStep::new(SingleAnimation::new(0, 10, 1, 100.0).unwrap(), 0),
            AnimationStep::new(SingleAnimation::new(20, 30, 1, 0.0).unwrap(), 10),
        ])
        .unwrap();
        compose.update();
        // Switched into step 1 and advanced it in the same tick
        assert_eq!(compose.current_step(), 1);
        assert_eq!(compose.frame(), 21);
    }

    #[test]
    fn test_shared_steps_advance_together() {
        let base = SingleAnimation::new(0, 100, 1, 0.0).unwrap().into_shared();
        let mut compose = ComposeAnimation::new(vec![
            AnimationStep::shared(&base, 1),
            AnimationStep::new(SingleAnimation::new(50, 60, 1, 0.0).unwrap(), 0),
            AnimationStep::shared(&base, 1),
        ])
        .unwrap();
        compose.update();
        assert_eq!(base.borrow().frame(), 1);
        compose.update();
        assert_eq!(compose.current_step(), 1);
        assert_eq!(compose.frame(), 51);
        // Back on the base phase, continuing where step 0 left it
        compose.update();
        assert_eq!(compose.current_step(), 2);
        assert_eq!(compose.frame(), 2);
        compose.update();
        assert_eq!(base.borrow().frame(), 3);
    }

    #[test]
    fn test_compose_rejects_empty() {
        assert!(matches!(
            ComposeAnimation::new(Vec::new()),
            Err(Error::EmptyAnimation)
        ));
    }

    #[test]
    fn test_animation_enum_delegates() {
        let mut anim: Animation = SingleAnimation::new(6, 104, 14, 0.0).unwrap().into();
        anim.update();
        assert_eq!(anim.frame(), 20);
    }
}
