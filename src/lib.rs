//! Ballbot - team strategy for a simulated two-team ball game
//!
//! The engine asks [`get_strategy`] for a side once, then calls the returned
//! [`Strategy`]'s tick callback every simulation step and its reset callback
//! whenever the ball is re-centred. Everything here is a pure function of the
//! snapshot the engine hands over plus the static [`config::GameConfig`].

pub mod ai;
pub mod config;
pub mod game;

pub use ai::{get_strategy, Strategy, StrategyKind};
pub use game::{GameState, PlayerAction, Score, Team, Vec2};
