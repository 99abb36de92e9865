//! Starting roster for the spawn map

use std::collections::HashMap;

use glam::Vec2;

use super::animation::{Animation, AnimationStep, ComposeAnimation, SingleAnimation};
use super::collision::Rect;
use super::combat::{BasicCombat, EnemyCombat};
use super::entity::{Enemy, Player, PlayerState, Potion, Sprite};
use crate::error::Result;

/// Enemy cooldown between hits, in ticks
pub const ENEMY_COOLDOWN: u32 = 30;

/// Idle cycle: a base pose between four short fidgets, the last one held longer
pub fn rest_animation() -> Result<ComposeAnimation> {
    let base = SingleAnimation::new(0, 42, 14, 7.0)?.into_shared();
    ComposeAnimation::new(vec![
        AnimationStep::shared(&base, 300),
        AnimationStep::new(SingleAnimation::new(1, 43, 14, 7.0)?, 300),
        AnimationStep::shared(&base, 300),
        AnimationStep::new(SingleAnimation::new(2, 44, 14, 7.0)?, 300),
        AnimationStep::shared(&base, 300),
        AnimationStep::new(SingleAnimation::new(3, 45, 14, 7.0)?, 300),
        AnimationStep::shared(&base, 300),
        AnimationStep::new(SingleAnimation::new(4, 46, 14, 7.0)?, 800),
    ])
}

pub fn player() -> Result<Player> {
    let mut animations = HashMap::new();
    animations.insert(PlayerState::Rest, Animation::from(rest_animation()?));
    let left = SingleAnimation::new(6, 104, 14, 5.0)?;
    let right = SingleAnimation::new(7, 105, 14, 5.0)?;
    animations.insert(PlayerState::Left, left.into());
    animations.insert(PlayerState::Right, right.into());

    Ok(Player {
        sprite: Sprite::new(Vec2::new(16.0, 112.0)),
        combat: BasicCombat::new(3, 1).into(),
        animations,
    })
}

pub fn enemies() -> Vec<Enemy> {
    [(47.0, 29.0, true), (90.0, 20.0, false), (30.0, 30.0, true)]
        .into_iter()
        .map(|(x, y, follows_player)| Enemy {
            sprite: Sprite::new(Vec2::new(x, y)),
            follows_player,
            combat: EnemyCombat::new(3, 1, ENEMY_COOLDOWN).into(),
        })
        .collect()
}

pub fn potions() -> Vec<Potion> {
    vec![Potion {
        sprite: Sprite::new(Vec2::new(47.0, 29.0)),
        heal_amount: 1,
    }]
}

pub fn colliders() -> Vec<Rect> {
    vec![Rect::new(20, 20, 36, 36)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_cycle_returns_to_start() {
        let mut rest = rest_animation().unwrap();
        let cycle = 7 * 301 + 801;
        for _ in 0..cycle {
            rest.update();
        }
        assert_eq!(rest.current_step(), 0);
    }

    #[test]
    fn test_default_roster() {
        let player = player().unwrap();
        assert_eq!(player.combat.health(), 3);
        assert_eq!(player.animations.len(), 3);
        let enemies = enemies();
        assert_eq!(enemies.len(), 3);
        assert!(!enemies[1].follows_player);
        assert_eq!(potions()[0].heal_amount, 1);
    }
}
