// Strategy selection - the callbacks the engine drives

use super::{create_tactic, goalee_formation, StrategyKind};
use crate::config::{self, GameConfig};
use crate::game::{Formation, GameState, PlayerAction, Score, Team};
use std::sync::Arc;
use tracing::info;

/// Called on every field reset, returns the formation to line up in
pub type ResetFn = Box<dyn Fn(&Score) -> Formation + Send + Sync>;

/// Called every simulation step, returns one action per controlled player
pub type TickFn = Box<dyn Fn(&GameState) -> Vec<PlayerAction> + Send + Sync>;

/// Pair of callbacks handed to the engine
pub struct Strategy {
    name: String,
    reset: ResetFn,
    tick: TickFn,
}

impl Strategy {
    pub fn new(name: impl Into<String>, reset: ResetFn, tick: TickFn) -> Self {
        Self {
            name: name.into(),
            reset,
            tick,
        }
    }

    /// Goalee formation on reset, `kind` on every tick.
    ///
    /// Geometry is read from the global config at call time.
    pub fn from_kind(kind: StrategyKind) -> Self {
        let tactic = create_tactic(kind);
        Self::new(
            tactic.name().to_string(),
            Box::new(|score: &Score| goalee_formation(score, config::get_config())),
            Box::new(move |game: &GameState| tactic.on_tick(game, config::get_config())),
        )
    }

    /// Same as `from_kind`, but bound to an explicit config instead of the
    /// global one
    pub fn with_config(kind: StrategyKind, conf: Arc<GameConfig>) -> Self {
        let tactic = create_tactic(kind);
        let reset_conf = Arc::clone(&conf);
        Self::new(
            tactic.name().to_string(),
            Box::new(move |score: &Score| goalee_formation(score, &reset_conf)),
            Box::new(move |game: &GameState| tactic.on_tick(game, &conf)),
        )
    }

    pub fn on_reset(&self, score: &Score) -> Formation {
        (self.reset)(score)
    }

    pub fn on_tick(&self, game: &GameState) -> Vec<PlayerAction> {
        (self.tick)(game)
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Debug for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Strategy").field("name", &self.name).finish()
    }
}

/// Tell the engine which strategy to play for `team`.
///
/// Team A (left) chases the ball, team B (right) plays the role-based
/// tactic, unless the `[strategy]` config table says otherwise. Both reset
/// into the goalee formation. The engine mirrors the world for the right
/// side, so either tactic can play either side.
pub fn get_strategy(team: Team) -> Strategy {
    info!("Hello! I am {}", team.label());

    let conf = config::get_config();
    let kind = match team {
        Team::Ours => conf.strategy.ours,
        Team::Theirs => conf.strategy.theirs,
    };
    Strategy::from_kind(kind)
}
