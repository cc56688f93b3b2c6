// Ball chase tactic - everybody runs at the ball and shoots on goal

use super::Tactic;
use crate::config::GameConfig;
use crate::game::{GameState, PlayerAction};

/// Very simple tactic: chase the ball, shoot at the opponent goal
///
/// Movement is the raw offset to the ball, not a unit vector, so the engine's
/// speed clamp decides how fast each player closes in.
///
/// # Panics
/// If the snapshot holds fewer than `conf.num_players` allies.
pub struct BallChase;

impl Tactic for BallChase {
    fn on_tick(&self, game: &GameState, conf: &GameConfig) -> Vec<PlayerAction> {
        let goal = conf.field.goal_other();

        game.allies[..conf.num_players]
            .iter()
            .map(|me| {
                PlayerAction::new(game.ball.pos - me.pos, Some((goal - me.pos).normalize()))
            })
            .collect()
    }

    fn name(&self) -> &str {
        "ball_chase"
    }
}
