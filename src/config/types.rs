// Ballbot configuration types
// Static geometry the engine plays on, plus which tactic each side runs

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::ai::StrategyKind;
use crate::game::Vec2;

/// Roles the smart team tactic assigns by player index
pub const ROLE_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GameConfig {
    #[serde(default = "default_num_players")]
    pub num_players: usize,
    #[serde(default)]
    pub field: FieldConfig,
    #[serde(default)]
    pub goal: GoalConfig,
    #[serde(default)]
    pub player: PlayerConfig,
    #[serde(default)]
    pub strategy: StrategyConfig,
}

fn default_num_players() -> usize {
    4
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            num_players: default_num_players(),
            field: FieldConfig::default(),
            goal: GoalConfig::default(),
            player: PlayerConfig::default(),
            strategy: StrategyConfig::default(),
        }
    }
}

impl GameConfig {
    /// Reject geometry the strategies cannot play on.
    ///
    /// The smart team tactic indexes its four roles directly, so fewer
    /// controlled players than `ROLE_COUNT` is refused here rather than at
    /// tick time.
    pub fn validate(&self) -> Result<()> {
        if self.num_players < ROLE_COUNT {
            bail!(
                "num_players must be at least {}, got {}",
                ROLE_COUNT,
                self.num_players
            );
        }
        let field_ok = |v: f32| v.is_finite() && v > 0.0;
        if !(field_ok(self.field.width) && field_ok(self.field.height)) {
            bail!(
                "field dimensions must be positive, got {}x{}",
                self.field.width,
                self.field.height
            );
        }
        let size_ok = |v: f32| v.is_finite() && v >= 0.0;
        if !(size_ok(self.goal.thickness) && size_ok(self.goal.normal_height)) {
            bail!(
                "goal dimensions must be finite and not negative, got thickness {} normal_height {}",
                self.goal.thickness,
                self.goal.normal_height
            );
        }
        if !size_ok(self.player.pickup_radius) {
            bail!(
                "pickup_radius must be finite and not negative, got {}",
                self.player.pickup_radius
            );
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FieldConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl FieldConfig {
    /// Far corner of the field; the origin is the top left
    pub fn bottom_right(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.bottom_right() * 0.5
    }

    /// Centre of the goal we defend (left edge)
    pub fn goal_self(&self) -> Vec2 {
        Vec2::new(0.0, self.height / 2.0)
    }

    /// Centre of the goal we attack (right edge)
    pub fn goal_other(&self) -> Vec2 {
        Vec2::new(self.width, self.height / 2.0)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GoalConfig {
    // Depth of the goal box, measured into the field
    pub thickness: f32,

    // Vertical extent of the goal mouth
    pub normal_height: f32,
}

impl Default for GoalConfig {
    fn default() -> Self {
        Self {
            thickness: 20.0,
            normal_height: 200.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerConfig {
    // Distance within which a player can take the ball
    pub pickup_radius: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            pickup_radius: 30.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StrategyConfig {
    // Tactic run when we are team A (left)
    pub ours: StrategyKind,

    // Tactic run when we are team B (right)
    pub theirs: StrategyKind,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            ours: StrategyKind::BallChase,
            theirs: StrategyKind::SmartTeam,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_too_few_players_rejected() {
        let config = GameConfig {
            num_players: 3,
            ..GameConfig::default()
        };

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("num_players"));
    }

    #[test]
    fn test_degenerate_field_rejected() {
        let mut config = GameConfig::default();
        config.field.height = 0.0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_finite_geometry_rejected() {
        let mut config = GameConfig::default();
        config.goal.normal_height = f32::NAN;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.goal.thickness = f32::INFINITY;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.player.pickup_radius = f32::NAN;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.field.width = f32::INFINITY;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_goal_positions() {
        let field = FieldConfig {
            width: 100.0,
            height: 50.0,
        };

        assert_eq!(field.goal_self(), Vec2::new(0.0, 25.0));
        assert_eq!(field.goal_other(), Vec2::new(100.0, 25.0));
        assert_eq!(field.center(), Vec2::new(50.0, 25.0));
    }
}
