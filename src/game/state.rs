use serde::{Deserialize, Serialize};

use super::vec2::Vec2;

/// Engine-assigned player identifier
pub type PlayerId = u32;

/// Number of reset targets the engine expects from a formation
pub const FORMATION_SIZE: usize = 4;

/// Reset targets, one per controlled player, in player-index order
pub type Formation = [Vec2; FORMATION_SIZE];

/// Which side of the pitch a team plays on.
///
/// The engine mirrors the world for the right-hand team, so every strategy
/// sees itself attacking from left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    /// Team A, on the left
    Ours,
    /// Team B, on the right
    Theirs,
}

impl Team {
    pub fn label(&self) -> &'static str {
        match self {
            Team::Ours => "team A (on the left)",
            Team::Theirs => "team B (on the right)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub id: PlayerId,
    pub pos: Vec2,
    #[serde(default)]
    pub vel: Vec2,
}

impl PlayerState {
    pub fn new(id: PlayerId, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            vel: Vec2::ZERO,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallState {
    pub pos: Vec2,
    #[serde(default)]
    pub vel: Vec2,
}

impl BallState {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
        }
    }
}

/// Snapshot of the world handed to a strategy every tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Controlled players, in engine player-index order
    pub allies: Vec<PlayerState>,
    pub opponents: Vec<PlayerState>,
    pub ball: BallState,
    /// `None` while the ball is loose
    #[serde(default)]
    pub ball_owner: Option<PlayerId>,
}

impl GameState {
    pub fn teams(&self) -> (&[PlayerState], &[PlayerState]) {
        (&self.allies, &self.opponents)
    }

    /// Team membership of a player id, or `None` if the id is on neither team
    pub fn team_of(&self, id: PlayerId) -> Option<Team> {
        if self.allies.iter().any(|p| p.id == id) {
            Some(Team::Ours)
        } else if self.opponents.iter().any(|p| p.id == id) {
            Some(Team::Theirs)
        } else {
            None
        }
    }

    /// Team currently holding the ball; a loose ball belongs to nobody
    pub fn owner_team(&self) -> Option<Team> {
        self.ball_owner.and_then(|id| self.team_of(id))
    }
}

/// Goal counts at the time of a field reset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub ours: u32,
    pub theirs: u32,
}

impl Score {
    pub fn new(ours: u32, theirs: u32) -> Self {
        Self { ours, theirs }
    }
}

/// What one player does this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerAction {
    /// Movement direction
    pub dir: Vec2,
    /// Pass or shot direction; `None` keeps the ball
    pub pass: Option<Vec2>,
}

impl PlayerAction {
    pub fn new(dir: Vec2, pass: Option<Vec2>) -> Self {
        Self { dir, pass }
    }

    /// Move without passing
    pub fn moving(dir: Vec2) -> Self {
        Self { dir, pass: None }
    }

    /// Stand still and release the ball along `dir`
    pub fn kick(dir: Vec2) -> Self {
        Self {
            dir: Vec2::ZERO,
            pass: Some(dir),
        }
    }
}
