// AI module: team tactics, reset formation and strategy selection

mod ball_chase;
mod do_nothing;
mod formation;
mod selector;
mod smart_team;
mod tactic;

use serde::{Deserialize, Serialize};

pub use ball_chase::BallChase;
pub use do_nothing::DoNothing;
pub use formation::goalee_formation;
pub use selector::{get_strategy, ResetFn, Strategy, TickFn};
pub use smart_team::{goalie_target, SmartTeam};
pub use tactic::Tactic;

/// Tick tactic selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Baseline - nobody moves
    DoNothing,
    /// Everybody chases the ball and shoots
    BallChase,
    /// Goalkeeper, defender, midfielder and attacker roles
    SmartTeam,
}

impl StrategyKind {
    /// Get display name for strategy kind
    pub fn display_name(&self) -> &str {
        match self {
            StrategyKind::DoNothing => "do_nothing",
            StrategyKind::BallChase => "ball_chase",
            StrategyKind::SmartTeam => "smart_team",
        }
    }

    /// Get description for strategy kind
    pub fn description(&self) -> &str {
        match self {
            StrategyKind::DoNothing => "Placeholder - every player stands still",
            StrategyKind::BallChase => "Naive - everyone runs at the ball and shoots on goal",
            StrategyKind::SmartTeam => "Role based - keeper, defender, midfielder, attacker",
        }
    }

    /// Get all available strategy kinds
    pub fn all() -> Vec<StrategyKind> {
        vec![
            StrategyKind::DoNothing,
            StrategyKind::BallChase,
            StrategyKind::SmartTeam,
        ]
    }
}

/// Create a tactic instance from a strategy kind
pub fn create_tactic(kind: StrategyKind) -> Box<dyn Tactic> {
    match kind {
        StrategyKind::DoNothing => Box::new(DoNothing),
        StrategyKind::BallChase => Box::new(BallChase),
        StrategyKind::SmartTeam => Box::new(SmartTeam),
    }
}
