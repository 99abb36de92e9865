//! Events narrated by the game tick
//!
//! Deaths are reported here and logged; they never abort a tick.

/// Something noteworthy that happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// An enemy landed a hit on the player
    PlayerDamaged { health: i32 },
    /// Player health reached zero or below
    PlayerDied,
    /// The player struck the enemy at this roster index
    EnemyDamaged { index: usize, health: i32 },
    /// Enemy at this roster index died and will be removed after the pass
    EnemyEliminated { index: usize },
    /// The player picked up a potion
    PotionCollected { health: i32 },
}

impl GameEvent {
    /// Emit the event through the log facade
    pub fn log(&self) {
        match self {
            GameEvent::PlayerDamaged { health } => {
                log::info!("Player damaged. Health: {}", health)
            }
            GameEvent::PlayerDied => log::info!("Player has died"),
            GameEvent::EnemyDamaged { index, health } => {
                log::info!("Damaged enemy {} (health {})", index, health)
            }
            GameEvent::EnemyEliminated { index } => {
                log::info!("Enemy {} has been eliminated", index)
            }
            GameEvent::PotionCollected { health } => {
                log::info!("Picked up potion. Health: {}", health)
            }
        }
    }
}
