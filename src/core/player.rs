//! Players and score tracking.

use serde::{Deserialize, Serialize};

/// A participant in a game, identified by an opaque string id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Unique identifier used to find and remove the player.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Sets claimed so far.
    pub score: u32,
}

impl Player {
    /// Create a player with a zero score.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            score: 0,
        }
    }

    /// Add one point.
    pub fn increment_score(&mut self) {
        self.score += 1;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_has_zero_score() {
        let player = Player::new("p1", "Ada");
        assert_eq!(player.id, "p1");
        assert_eq!(player.name, "Ada");
        assert_eq!(player.score, 0);
    }

    #[test]
    fn test_increment_score() {
        let mut player = Player::new("p1", "Ada");
        player.increment_score();
        player.increment_score();
        assert_eq!(player.score, 2);
        assert_eq!(format!("{}", player), "Ada (2)");
    }

    #[test]
    fn test_player_serialization() {
        let mut player = Player::new("p2", "Grace");
        player.increment_score();
        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
