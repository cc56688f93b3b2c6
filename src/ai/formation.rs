// Reset formation - where players line up when the ball is re-centred

use crate::config::GameConfig;
use crate::game::{Formation, Score, Vec2};

/// Goalkeeper deep in our half, three players staggered up to the 40% line.
///
/// Called by the engine after a goal, after the ball sits idle for too long,
/// and right before the endgame. Positions are fractions of the field so they
/// scale with its size. The score does not change the shape.
pub fn goalee_formation(_score: &Score, conf: &GameConfig) -> Formation {
    let field = conf.field.bottom_right();

    [
        Vec2::new(field.x * 0.1, field.y * 0.5),
        Vec2::new(field.x * 0.4, field.y * 0.4),
        Vec2::new(field.x * 0.4, field.y * 0.5),
        Vec2::new(field.x * 0.4, field.y * 0.6),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldConfig;
    use approx::assert_relative_eq;

    fn conf(width: f32, height: f32) -> GameConfig {
        GameConfig {
            field: FieldConfig { width, height },
            ..GameConfig::default()
        }
    }

    #[test]
    fn test_goalkeeper_is_deepest() {
        let formation = goalee_formation(&Score::default(), &conf(100.0, 50.0));

        assert_eq!(formation[0], Vec2::new(10.0, 25.0));
        assert!(formation[1..].iter().all(|p| p.x > formation[0].x));
    }

    #[test]
    fn test_scales_with_field() {
        let small = goalee_formation(&Score::default(), &conf(100.0, 50.0));
        let wide = goalee_formation(&Score::default(), &conf(200.0, 50.0));

        for (s, w) in small.iter().zip(wide.iter()) {
            assert_relative_eq!(w.x, s.x * 2.0, epsilon = 1e-4);
            assert_relative_eq!(w.y, s.y, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_score_does_not_matter() {
        let conf = conf(100.0, 50.0);

        assert_eq!(
            goalee_formation(&Score::new(0, 0), &conf),
            goalee_formation(&Score::new(3, 7), &conf)
        );
    }
}
