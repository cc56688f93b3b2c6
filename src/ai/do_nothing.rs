// Do-nothing tactic - baseline placeholder

use super::Tactic;
use crate::config::GameConfig;
use crate::game::{GameState, PlayerAction};

/// Every player stands still and keeps the ball
pub struct DoNothing;

impl Tactic for DoNothing {
    fn on_tick(&self, _game: &GameState, conf: &GameConfig) -> Vec<PlayerAction> {
        vec![PlayerAction::default(); conf.num_players]
    }

    fn name(&self) -> &str {
        "do_nothing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{BallState, Vec2};

    #[test]
    fn test_one_idle_action_per_player() {
        let conf = GameConfig {
            num_players: 5,
            ..GameConfig::default()
        };
        let game = GameState {
            allies: vec![],
            opponents: vec![],
            ball: BallState::new(Vec2::new(1.0, 1.0)),
            ball_owner: None,
        };

        let actions = DoNothing.on_tick(&game, &conf);

        assert_eq!(actions.len(), 5);
        assert!(actions
            .iter()
            .all(|a| a.dir == Vec2::ZERO && a.pass.is_none()));
    }
}
