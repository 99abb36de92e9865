//! Per-tick game simulation
//!
//! Order within a tick:
//! 1. player velocity from input, move X then Y with collision
//! 2. advance the player's animation
//! 3. enemies chase and move
//! 4. combat pass over the roster, dead enemies marked
//! 5. marked enemies removed in one filter
//! 6. camera follows the player and is clamped to the world

use glam::Vec2;

use super::collision::move_and_resolve;
use super::events::GameEvent;
use super::input::TickInput;
use super::state::GameState;
use crate::consts::TILE_SIZE;
use crate::settings::Settings;

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput, settings: &Settings) {
    state.events.clear();
    state.time_ticks += 1;

    move_player(state, input, settings);

    if let Some(anim) = state.player.active_animation_mut() {
        anim.update();
    }

    move_enemies(state, settings);

    state.player.combat.update();
    resolve_combat(state, input, settings);

    if settings.potion_pickup {
        collect_potions(state);
    }

    let viewport = settings.viewport();
    state.camera.follow_target(state.player.sprite.center(), viewport);
    state.camera.constrain(state.world_size, viewport);

    for event in &state.events {
        event.log();
    }
}

fn move_player(state: &mut GameState, input: &TickInput, settings: &Settings) {
    let sprite = &mut state.player.sprite;
    sprite.vel = Vec2::ZERO;
    sprite.vel.x = input.axis_x() * settings.player_speed;
    if settings.vertical_movement {
        sprite.vel.y = input.axis_y() * settings.player_speed;
    }
    move_and_resolve(sprite, &state.colliders);
}

fn move_enemies(state: &mut GameState, settings: &Settings) {
    let target = state.player.sprite.pos;
    for enemy in &mut state.enemies {
        enemy.sprite.vel = Vec2::ZERO;
        enemy.chase(target, settings.enemy_speed);
        move_and_resolve(&mut enemy.sprite, &state.colliders);
    }
}

/// Enemy attacks on the player, then click attacks on enemies
///
/// Enemies killed this tick are only marked while iterating and removed
/// afterwards, so every live enemy is visited exactly once.
fn resolve_combat(state: &mut GameState, input: &TickInput, settings: &Settings) {
    // Camera offset is still the one the player saw when clicking
    let pointer = state.camera.screen_to_world(input.pointer);
    let player_box = state.player.sprite.bounds();
    let in_range =
        pointer.distance(state.player.sprite.center()) < TILE_SIZE as f32 * settings.attack_range_tiles;

    let mut dead = Vec::new();
    for (index, enemy) in state.enemies.iter_mut().enumerate() {
        enemy.combat.update();
        let enemy_box = enemy.sprite.bounds();

        if enemy_box.overlaps(&player_box) && enemy.combat.attack() {
            state.player.combat.damage(enemy.combat.attack_power());
            let health = state.player.combat.health();
            state.events.push(GameEvent::PlayerDamaged { health });
            if state.player.combat.is_dead() {
                state.events.push(GameEvent::PlayerDied);
            }
        }

        if input.clicked
            && enemy_box.contains_strict(pointer.as_ivec2())
            && in_range
            && state.player.combat.attack()
        {
            enemy.combat.damage(state.player.combat.attack_power());
            state.events.push(GameEvent::EnemyDamaged {
                index,
                health: enemy.combat.health(),
            });
            if enemy.combat.is_dead() {
                dead.push(index);
                state.events.push(GameEvent::EnemyEliminated { index });
            }
        }
    }

    if !dead.is_empty() {
        let mut index = 0;
        state.enemies.retain(|_| {
            let keep = !dead.contains(&index);
            index += 1;
            keep
        });
    }
}

/// Heal from every touched potion, then drop the used ones
fn collect_potions(state: &mut GameState) {
    let mut used = Vec::new();
    for (index, potion) in state.potions.iter().enumerate() {
        if potion.touches(&state.player) {
            state.player.combat.heal(potion.heal_amount);
            state.events.push(GameEvent::PotionCollected {
                health: state.player.combat.health(),
            });
            used.push(index);
        }
    }

    if !used.is_empty() {
        let mut index = 0;
        state.potions.retain(|_| {
            let keep = !used.contains(&index);
            index += 1;
            keep
        });
    }
}
