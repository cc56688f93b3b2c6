// Smart team tactic - fixed roles by player index

use super::Tactic;
use crate::config::GameConfig;
use crate::game::{GameState, PlayerAction, PlayerState, Team, Vec2};
use tracing::trace;

const GOALKEEPER: usize = 0;
const DEFENDER: usize = 1;
const MIDFIELDER: usize = 2;
const ATTACKER: usize = 3;

/// Midfielder passes when the ball is within this many pickup radii
const PASS_RANGE_FACTOR: f32 = 1.5;

/// Role-based team play
///
/// - Player 0 (goalkeeper): shadows the ball's y along the goal line
/// - Player 1 (defender): attacks the ball in our half, otherwise holds at 30%
/// - Player 2 (midfielder): supports possession and feeds the attacker
/// - Player 3 (attacker): shoots when holding the ball, otherwise pushes up
///
/// Players beyond the fourth stand still.
///
/// # Panics
/// If the snapshot holds fewer than four allies. The config loader refuses
/// `num_players` below [`ROLE_COUNT`](crate::config::ROLE_COUNT), so this
/// only happens when the engine and config disagree.
pub struct SmartTeam;

impl Tactic for SmartTeam {
    fn on_tick(&self, game: &GameState, conf: &GameConfig) -> Vec<PlayerAction> {
        let (allies, _) = game.teams();

        let mut actions = Vec::with_capacity(conf.num_players);
        actions.push(goalkeeper(&allies[GOALKEEPER], game, conf));
        actions.push(defender(&allies[DEFENDER], game, conf));
        actions.push(midfielder(&allies[MIDFIELDER], &allies[ATTACKER], game, conf));
        actions.push(attacker(&allies[ATTACKER], game, conf));
        actions.resize(conf.num_players.max(actions.len()), PlayerAction::default());
        actions
    }

    fn name(&self) -> &str {
        "smart_team"
    }
}

/// Point on our goal line level with the ball, kept inside the goal mouth.
///
/// Unlike `f32::clamp`, max-then-min never panics on bad geometry; a NaN
/// bound is ignored.
pub fn goalie_target(ball: Vec2, conf: &GameConfig) -> Vec2 {
    let field = &conf.field;
    let goal_line = field.goal_self().x + conf.goal.thickness / 2.0;
    let mid = field.height * 0.5;
    let half_mouth = conf.goal.normal_height * 0.5;

    Vec2::new(goal_line, ball.y.max(mid - half_mouth).min(mid + half_mouth))
}

fn goalkeeper(me: &PlayerState, game: &GameState, conf: &GameConfig) -> PlayerAction {
    let target = goalie_target(game.ball.pos, conf);
    PlayerAction::moving((target - me.pos).normalize())
}

fn defender(me: &PlayerState, game: &GameState, conf: &GameConfig) -> PlayerAction {
    let field = &conf.field;
    let target = if game.ball.pos.x < field.width * 0.5 {
        game.ball.pos
    } else {
        Vec2::new(field.width * 0.3, field.height * 0.5)
    };
    PlayerAction::moving((target - me.pos).normalize())
}

fn midfielder(
    me: &PlayerState,
    attacker: &PlayerState,
    game: &GameState,
    conf: &GameConfig,
) -> PlayerAction {
    if game.owner_team() != Some(Team::Ours) {
        return PlayerAction::moving((conf.field.center() - me.pos).normalize());
    }

    if me.pos.dist(game.ball.pos) < conf.player.pickup_radius * PASS_RANGE_FACTOR {
        trace!(player = me.id, to = attacker.id, "midfielder passing to attacker");
        PlayerAction::kick((attacker.pos - me.pos).normalize())
    } else {
        PlayerAction::moving((game.ball.pos - me.pos).normalize())
    }
}

fn attacker(me: &PlayerState, game: &GameState, conf: &GameConfig) -> PlayerAction {
    let field = &conf.field;

    if game.ball_owner == Some(me.id) {
        trace!(player = me.id, "attacker shooting on goal");
        return PlayerAction::kick((field.goal_other() - me.pos).normalize());
    }

    // Chase the ball once it is in the opponent's half, otherwise wait at 70%
    let target = if game.ball.pos.x > field.width * 0.5 {
        game.ball.pos
    } else {
        Vec2::new(field.width * 0.7, game.ball.pos.y)
    };
    PlayerAction::moving((target - me.pos).normalize())
}
