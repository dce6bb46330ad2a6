//! Player identification.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 1-255 players.
//!
//! ## Player
//!
//! A player id paired with a display name. Immutable once created;
//! the engine never changes player identities during a game.

use serde::{Deserialize, Serialize};

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use snakes_ladders::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A player: stable id plus display name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
}

impl Player {
    /// Create a new player.
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// The player's stable id.
    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// The player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build a roster from display names, assigning sequential ids.
    ///
    /// ```
    /// use snakes_ladders::core::{Player, PlayerId};
    ///
    /// let roster = Player::roster(["Ada", "Grace"]);
    /// assert_eq!(roster[0].id(), PlayerId::new(0));
    /// assert_eq!(roster[1].name(), "Grace");
    /// ```
    pub fn roster<I, S>(names: I) -> Vec<Player>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names
            .into_iter()
            .enumerate()
            .map(|(i, name)| {
                assert!(i < 255, "At most 255 players supported");
                Player::new(PlayerId::new(i as u8), name)
            })
            .collect()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p0), "Player 0");
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all(3).collect();
        assert_eq!(players.len(), 3);
        assert_eq!(players[0], PlayerId::new(0));
        assert_eq!(players[2], PlayerId::new(2));
    }

    #[test]
    fn test_player_display() {
        let player = Player::new(PlayerId::new(1), "Grace");
        assert_eq!(format!("{}", player), "Grace");
        assert_eq!(player.name(), "Grace");
        assert_eq!(player.id(), PlayerId::new(1));
    }

    #[test]
    fn test_roster_sequential_ids() {
        let roster = Player::roster(["Ada", "Grace", "Edsger"]);
        assert_eq!(roster.len(), 3);
        for (i, player) in roster.iter().enumerate() {
            assert_eq!(player.id(), PlayerId::new(i as u8));
        }
        assert_eq!(roster[2].name(), "Edsger");
    }

    #[test]
    fn test_player_serialization() {
        let player = Player::new(PlayerId::new(0), "Ada");
        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
