//! Combat components
//!
//! Health and attack state for the player and enemies. Health may go
//! negative; death is `health() <= 0` checked right after `damage`.

use serde::{Deserialize, Serialize};

/// Player combat state. Attacks are gated by input, not by a timer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicCombat {
    health: i32,
    max_health: i32,
    attack_power: i32,
}

impl BasicCombat {
    pub fn new(health: i32, attack_power: i32) -> Self {
        Self {
            health,
            max_health: health,
            attack_power,
        }
    }

    /// No internal timer to advance
    pub fn update(&mut self) {}

    /// Always ready. The caller decides when the player strikes.
    pub fn attack(&mut self) -> bool {
        true
    }

    pub fn damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    /// Restore health, never above the starting value
    pub fn heal(&mut self, amount: i32) {
        self.health = (self.health + amount).min(self.max_health);
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn attack_power(&self) -> i32 {
        self.attack_power
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }
}

/// Enemy combat state with an attack cooldown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyCombat {
    basic: BasicCombat,
    /// Ticks that must accumulate before an attack lands
    cooldown: u32,
    counter: u32,
}

impl EnemyCombat {
    pub fn new(health: i32, attack_power: i32, cooldown: u32) -> Self {
        Self {
            basic: BasicCombat::new(health, attack_power),
            cooldown,
            counter: 0,
        }
    }

    pub fn update(&mut self) {
        self.counter = self.counter.saturating_add(1);
    }

    /// True once the cooldown has elapsed. A true answer consumes it, so a
    /// second query in the same tick returns false.
    pub fn attack(&mut self) -> bool {
        if self.counter >= self.cooldown {
            self.counter = 0;
            return true;
        }
        false
    }

    pub fn damage(&mut self, amount: i32) {
        self.basic.damage(amount);
    }

    pub fn heal(&mut self, amount: i32) {
        self.basic.heal(amount);
    }

    pub fn health(&self) -> i32 {
        self.basic.health()
    }

    pub fn max_health(&self) -> i32 {
        self.basic.max_health()
    }

    pub fn attack_power(&self) -> i32 {
        self.basic.attack_power()
    }

    pub fn is_dead(&self) -> bool {
        self.basic.is_dead()
    }

    pub fn cooldown(&self) -> u32 {
        self.cooldown
    }

    /// Ticks accumulated toward the next attack
    pub fn counter(&self) -> u32 {
        self.counter
    }
}

/// Either combat policy behind one surface. Player and enemies both hold
/// one of these; the variant picks how `attack` is gated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Combat {
    Basic(BasicCombat),
    Enemy(EnemyCombat),
}

impl From<BasicCombat> for Combat {
    fn from(c: BasicCombat) -> Self {
        Combat::Basic(c)
    }
}

impl From<EnemyCombat> for Combat {
    fn from(c: EnemyCombat) -> Self {
        Combat::Enemy(c)
    }
}

impl Combat {
    pub fn update(&mut self) {
        match self {
            Combat::Basic(c) => c.update(),
            Combat::Enemy(c) => c.update(),
        }
    }

    pub fn attack(&mut self) -> bool {
        match self {
            Combat::Basic(c) => c.attack(),
            Combat::Enemy(c) => c.attack(),
        }
    }

    pub fn damage(&mut self, amount: i32) {
        match self {
            Combat::Basic(c) => c.damage(amount),
            Combat::Enemy(c) => c.damage(amount),
        }
    }

    pub fn health(&self) -> i32 {
        match self {
            Combat::Basic(c) => c.health(),
            Combat::Enemy(c) => c.health(),
        }
    }

    pub fn heal(&mut self, amount: i32) {
        match self {
            Combat::Basic(c) => c.heal(amount),
            Combat::Enemy(c) => c.heal(amount),
        }
    }

    pub fn max_health(&self) -> i32 {
        match self {
            Combat::Basic(c) => c.max_health(),
            Combat::Enemy(c) => c.max_health(),
        }
    }

    pub fn attack_power(&self) -> i32 {
        match self {
            Combat::Basic(c) => c.attack_power(),
            Combat::Enemy(c) => c.attack_power(),
        }
    }

    pub fn is_dead(&self) -> bool {
        match self {
            Combat::Basic(c) => c.is_dead(),
            Combat::Enemy(c) => c.is_dead(),
        }
    }

    /// Cooldown progress, for the timer-gated variant only
    pub fn cooldown_counter(&self) -> Option<u32> {
        match self {
            Combat::Basic(_) => None,
            Combat::Enemy(c) => Some(c.counter()),
        }
    }
}
