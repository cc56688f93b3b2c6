pub mod state;
pub mod vec2;

pub use state::{
    BallState, Formation, GameState, PlayerAction, PlayerId, PlayerState, Score, Team,
    FORMATION_SIZE,
};
pub use vec2::Vec2;
