// Tactic trait for per-tick team behaviour

use crate::config::GameConfig;
use crate::game::{GameState, PlayerAction};

/// Trait for tick-level team strategies
///
/// A tactic is a pure function of the snapshot it is given: no state is kept
/// between ticks, so calling it twice with the same input yields the same
/// actions.
pub trait Tactic: Send + Sync {
    /// Decide what every controlled player does this tick
    ///
    /// # Arguments
    /// * `game` - Snapshot supplied by the engine
    /// * `conf` - Field geometry and controlled-player count
    ///
    /// # Returns
    /// Exactly `conf.num_players` actions, in player-index order
    fn on_tick(&self, game: &GameState, conf: &GameConfig) -> Vec<PlayerAction>;

    /// Tactic name for logging/display
    fn name(&self) -> &str;
}
