//! Game engine: turn orchestration and completion detection.
//!
//! The engine owns all mutable game state (token positions via the
//! board, the turn queue, the turn history) and exposes read-only
//! snapshots to drivers. A turn is atomic: roll, move, redirect,
//! win-check, and rotation all complete before `take_turn` returns.
//!
//! ## Setup
//!
//! [`GameBuilder`] is the setup phase. It collects board geometry and
//! player names, validates everything in `build`, and hands back an
//! engine that is already in progress. There is no partially-configured
//! engine value.
//!
//! ## Example
//!
//! ```
//! use snakes_ladders::engine::GameBuilder;
//!
//! let mut game = GameBuilder::new()
//!     .snake(97, 78)
//!     .ladder(1, 38)
//!     .player("Ada")
//!     .player("Grace")
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! while !game.is_completed() {
//!     let record = game.take_turn().unwrap();
//!     println!("{}", record);
//! }
//! ```

use std::collections::VecDeque;

use im::Vector;
use serde::{Deserialize, Serialize};

use super::record::TurnRecord;
use crate::board::{Board, Ladder, RedirectChain, Snake, DEFAULT_BOARD_SIZE};
use crate::core::{Die, Player, PlayerId, SixSidedDie};
use crate::error::GameError;

/// Where the game is in its lifecycle.
///
/// The setup phase is represented by [`GameBuilder`]; an engine value
/// always starts in `InProgress`. The transition to `Completed` is
/// one-way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Turns can be taken.
    InProgress,
    /// The completion threshold was crossed; no further turns.
    Completed,
}

/// When the game counts as completed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompletionRule {
    /// Completed as soon as any player wins: remaining players drop
    /// below the starting count. The classic rule.
    #[default]
    FirstWin,
    /// Play on until fewer than two players remain; winners accumulate
    /// in finish order.
    LastPlayer,
}

/// The game-state engine.
///
/// Generic over the die so tests can inject a scripted roll sequence;
/// defaults to the seeded [`SixSidedDie`].
#[derive(Clone, Debug)]
pub struct GameEngine<D: Die = SixSidedDie> {
    board: Board,
    /// All players ever registered, indexed by `PlayerId`. Winning
    /// removes a player from the queue, never from the roster.
    players: Vec<Player>,
    queue: VecDeque<PlayerId>,
    winners: Vec<PlayerId>,
    initial_count: usize,
    rule: CompletionRule,
    phase: GamePhase,
    die: D,
    history: Vector<TurnRecord>,
}

impl<D: Die> GameEngine<D> {
    /// Take one turn for the player at the front of the queue.
    ///
    /// 1. Roll the die.
    /// 2. Overshoot rule: a roll past the final square leaves the token
    ///    in place (exact landing only).
    /// 3. Otherwise follow snakes and ladders to the resting square.
    /// 4. A token resting exactly on the final square wins; the player
    ///    leaves the queue and their token leaves the board, permanently.
    /// 5. Otherwise the player rotates to the back of the queue.
    /// 6. Completion is re-evaluated against the [`CompletionRule`].
    ///
    /// ## Errors
    ///
    /// [`GameError::GameAlreadyCompleted`] if the game is over; state
    /// is unchanged.
    pub fn take_turn(&mut self) -> Result<TurnRecord, GameError> {
        if self.phase == GamePhase::Completed {
            return Err(GameError::GameAlreadyCompleted);
        }
        let player = match self.queue.front() {
            Some(&p) => p,
            None => return Err(GameError::GameAlreadyCompleted),
        };

        let roll = self.die.roll();
        let from = self.board.token_position(player)?;
        // Widen before adding: near u16::MAX-sized boards must not wrap.
        let raw_target = u32::from(from) + u32::from(roll);

        let (to, redirects) = if raw_target > u32::from(self.board.size()) {
            (from, RedirectChain::new())
        } else {
            let (resting, chain) = self.board.resolve_redirect(raw_target as u16)?;
            self.board.set_token(player, resting);
            (resting, chain)
        };

        let won = to == self.board.size();
        if won {
            self.queue.pop_front();
            self.board.remove_token(player);
            self.winners.push(player);
        } else {
            self.queue.rotate_left(1);
        }
        self.update_completion();

        let record = TurnRecord {
            player,
            roll,
            from,
            to,
            redirects,
            won,
        };
        self.history.push_back(record.clone());
        Ok(record)
    }

    /// The player whose turn it is.
    ///
    /// ## Errors
    ///
    /// [`GameError::GameAlreadyCompleted`] once the game is over; there
    /// is no current player then.
    pub fn current_player(&self) -> Result<&Player, GameError> {
        if self.phase == GamePhase::Completed {
            return Err(GameError::GameAlreadyCompleted);
        }
        self.queue
            .front()
            .map(|p| &self.players[p.index()])
            .ok_or(GameError::GameAlreadyCompleted)
    }

    /// Current token position for a player.
    ///
    /// ## Errors
    ///
    /// [`GameError::UnknownPlayer`] if the id was never registered or
    /// the player already won (their token left the board).
    pub fn token_position(&self, player: PlayerId) -> Result<u16, GameError> {
        self.board.token_position(player)
    }

    /// Whether the completion threshold has been crossed.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.phase == GamePhase::Completed
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The completion rule this game was built with.
    #[must_use]
    pub fn completion_rule(&self) -> CompletionRule {
        self.rule
    }

    /// Players still in the rotation, in turn order.
    #[must_use]
    pub fn remaining_players(&self) -> Vec<&Player> {
        self.queue.iter().map(|p| &self.players[p.index()]).collect()
    }

    /// Players who have won, in finish order.
    #[must_use]
    pub fn winners(&self) -> Vec<&Player> {
        self.winners.iter().map(|p| &self.players[p.index()]).collect()
    }

    /// Look up a player by id.
    ///
    /// Winners stay in the roster; only their token and queue slot are
    /// gone.
    pub fn player(&self, id: PlayerId) -> Result<&Player, GameError> {
        self.players
            .get(id.index())
            .ok_or(GameError::UnknownPlayer(id))
    }

    /// The board (geometry and token positions).
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Snapshot of every turn taken so far, oldest first.
    ///
    /// O(1) thanks to the persistent vector; drivers can hold the
    /// snapshot across later turns without copying.
    #[must_use]
    pub fn history(&self) -> Vector<TurnRecord> {
        self.history.clone()
    }

    /// Players below this count means the game is over.
    fn still_playing_threshold(&self) -> usize {
        match self.rule {
            CompletionRule::FirstWin => self.initial_count,
            CompletionRule::LastPlayer => 2,
        }
    }

    fn update_completion(&mut self) {
        if self.queue.len() < self.still_playing_threshold() {
            self.phase = GamePhase::Completed;
        }
    }
}

/// Builder for a [`GameEngine`]. This is the game's setup phase.
///
/// Defaults: board size 100, no snakes or ladders, [`CompletionRule::FirstWin`],
/// die seeded from OS entropy.
#[derive(Clone, Debug)]
pub struct GameBuilder {
    board_size: u16,
    snakes: Vec<Snake>,
    ladders: Vec<Ladder>,
    names: Vec<String>,
    rule: CompletionRule,
    seed: Option<u64>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            snakes: Vec::new(),
            ladders: Vec::new(),
            names: Vec::new(),
            rule: CompletionRule::default(),
            seed: None,
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of squares (default 100).
    #[must_use]
    pub fn board_size(mut self, size: u16) -> Self {
        self.board_size = size;
        self
    }

    /// Add a snake from `start` down to `end`.
    #[must_use]
    pub fn snake(mut self, start: u16, end: u16) -> Self {
        self.snakes.push(Snake::new(start, end));
        self
    }

    /// Add a ladder from `start` up to `end`.
    #[must_use]
    pub fn ladder(mut self, start: u16, end: u16) -> Self {
        self.ladders.push(Ladder::new(start, end));
        self
    }

    /// Add a player by display name. Ids are assigned in insertion
    /// order, starting at 0.
    #[must_use]
    pub fn player(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// Add several players at once.
    #[must_use]
    pub fn players<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Set the completion rule (default: [`CompletionRule::FirstWin`]).
    #[must_use]
    pub fn completion_rule(mut self, rule: CompletionRule) -> Self {
        self.rule = rule;
        self
    }

    /// Seed the die for a replayable game. Without a seed the die is
    /// seeded from OS entropy.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build with the standard six-sided die.
    ///
    /// ## Errors
    ///
    /// Any board validation error from [`Board::new`], or
    /// [`GameError::NoPlayers`] if no player was added.
    pub fn build(self) -> Result<GameEngine<SixSidedDie>, GameError> {
        let die = match self.seed {
            Some(seed) => SixSidedDie::new(seed),
            None => SixSidedDie::from_entropy(),
        };
        self.build_with_die(die)
    }

    /// Build with a caller-supplied die. Used by tests to script rolls.
    pub fn build_with_die<D: Die>(self, die: D) -> Result<GameEngine<D>, GameError> {
        let mut board = Board::new(self.board_size, self.snakes, self.ladders)?;

        if self.names.is_empty() {
            return Err(GameError::NoPlayers);
        }
        let players = Player::roster(self.names);
        board.register_players(players.iter().map(Player::id));

        let queue: VecDeque<PlayerId> = players.iter().map(Player::id).collect();
        let initial_count = players.len();

        let mut engine = GameEngine {
            board,
            players,
            queue,
            winners: Vec::new(),
            initial_count,
            rule: self.rule,
            phase: GamePhase::InProgress,
            die,
            history: Vector::new(),
        };
        // A single-player game under LastPlayer is over before it starts.
        engine.update_completion();
        Ok(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedDie;

    fn two_player_game(rolls: &[u8]) -> GameEngine<ScriptedDie> {
        GameBuilder::new()
            .snake(97, 78)
            .ladder(1, 38)
            .player("Ada")
            .player("Grace")
            .build_with_die(ScriptedDie::new(rolls.iter().copied()))
            .unwrap()
    }

    #[test]
    fn test_build_requires_players() {
        let err = GameBuilder::new().build().unwrap_err();
        assert_eq!(err, GameError::NoPlayers);
    }

    #[test]
    fn test_build_validates_board() {
        let err = GameBuilder::new()
            .board_size(0)
            .player("Ada")
            .build()
            .unwrap_err();
        assert_eq!(err, GameError::InvalidBoardSize);

        assert!(GameBuilder::new()
            .snake(10, 90)
            .player("Ada")
            .build()
            .is_err());
    }

    #[test]
    fn test_initial_state() {
        let game = two_player_game(&[]);
        assert!(!game.is_completed());
        assert_eq!(game.phase(), GamePhase::InProgress);
        assert_eq!(game.current_player().unwrap().name(), "Ada");
        assert_eq!(game.remaining_players().len(), 2);
        for player in PlayerId::all(2) {
            assert_eq!(game.token_position(player).unwrap(), 0);
        }
    }

    #[test]
    fn test_entry_roll_onto_ladder() {
        // From off-board, a roll of 1 lands on square 1, the ladder
        // foot, and climbs to 38.
        let mut game = two_player_game(&[1]);
        let record = game.take_turn().unwrap();

        assert_eq!(record.player, PlayerId::new(0));
        assert_eq!(record.roll, 1);
        assert_eq!(record.from, 0);
        assert_eq!(record.to, 38);
        assert_eq!(record.redirects.as_slice(), &[1]);
        assert!(!record.won);
        assert_eq!(game.token_position(PlayerId::new(0)).unwrap(), 38);
    }

    #[test]
    fn test_turn_rotation() {
        let mut game = two_player_game(&[2, 3, 4]);

        assert_eq!(game.current_player().unwrap().name(), "Ada");
        game.take_turn().unwrap();
        assert_eq!(game.current_player().unwrap().name(), "Grace");
        game.take_turn().unwrap();
        assert_eq!(game.current_player().unwrap().name(), "Ada");

        let record = game.take_turn().unwrap();
        // Ada rolled 2 then 4.
        assert_eq!(record.from, 2);
        assert_eq!(record.to, 6);
    }

    #[test]
    fn test_overshoot_leaves_token_in_place() {
        let mut game = GameBuilder::new()
            .board_size(10)
            .player("Ada")
            .build_with_die(ScriptedDie::new([6, 5, 6]))
            .unwrap();

        game.take_turn().unwrap(); // 0 -> 6
        assert_eq!(game.token_position(PlayerId::new(0)).unwrap(), 6);

        // 6 + 5 = 11 > 10: no move.
        let record = game.take_turn().unwrap();
        assert_eq!(record.from, 6);
        assert_eq!(record.to, 6);
        assert!(record.redirects.is_empty());
        assert!(!record.won);

        // 6 + 6 = 12 > 10: still no move.
        let record = game.take_turn().unwrap();
        assert_eq!(record.to, 6);
    }

    #[test]
    fn test_exact_landing_wins() {
        let mut game = GameBuilder::new()
            .board_size(10)
            .player("Ada")
            .player("Grace")
            .build_with_die(ScriptedDie::new([6, 1, 4]))
            .unwrap();

        game.take_turn().unwrap(); // Ada: 0 -> 6
        game.take_turn().unwrap(); // Grace: 0 -> 1
        let record = game.take_turn().unwrap(); // Ada: 6 + 4 = 10

        assert!(record.won);
        assert_eq!(record.to, 10);
        assert!(game.is_completed());
        assert_eq!(game.winners().len(), 1);
        assert_eq!(game.winners()[0].name(), "Ada");

        // The winner's token left the board.
        assert_eq!(
            game.token_position(PlayerId::new(0)).unwrap_err(),
            GameError::UnknownPlayer(PlayerId::new(0))
        );
        // But their identity is still known.
        assert_eq!(game.player(PlayerId::new(0)).unwrap().name(), "Ada");
    }

    #[test]
    fn test_win_through_ladder() {
        let mut game = GameBuilder::new()
            .board_size(10)
            .ladder(4, 10)
            .player("Ada")
            .build_with_die(ScriptedDie::new([4]))
            .unwrap();

        let record = game.take_turn().unwrap();
        assert_eq!(record.to, 10);
        assert_eq!(record.redirects.as_slice(), &[4]);
        assert!(record.won);
    }

    #[test]
    fn test_snake_on_final_square_denies_win() {
        let mut game = GameBuilder::new()
            .board_size(10)
            .snake(10, 2)
            .player("Ada")
            .build_with_die(ScriptedDie::new([6, 4]))
            .unwrap();

        game.take_turn().unwrap(); // 0 -> 6
        let record = game.take_turn().unwrap(); // 6 + 4 = 10, snake to 2
        assert_eq!(record.to, 2);
        assert!(!record.won);
        assert!(!game.is_completed());
    }

    #[test]
    fn test_first_win_rule_ends_three_player_game() {
        let mut game = GameBuilder::new()
            .board_size(6)
            .players(["Ada", "Grace", "Edsger"])
            .build_with_die(ScriptedDie::new([6, 1, 1]))
            .unwrap();

        let record = game.take_turn().unwrap();
        assert!(record.won);
        // One win completes the game even with two players left.
        assert!(game.is_completed());
        assert_eq!(game.remaining_players().len(), 2);
        assert_eq!(
            game.take_turn().unwrap_err(),
            GameError::GameAlreadyCompleted
        );
        assert_eq!(
            game.current_player().unwrap_err(),
            GameError::GameAlreadyCompleted
        );
    }

    #[test]
    fn test_last_player_rule_plays_on() {
        let mut game = GameBuilder::new()
            .board_size(6)
            .players(["Ada", "Grace", "Edsger"])
            .completion_rule(CompletionRule::LastPlayer)
            .build_with_die(ScriptedDie::new([6, 1, 1, 5]))
            .unwrap();

        assert!(game.take_turn().unwrap().won); // Ada: 0 + 6 = 6, wins
        assert!(!game.is_completed());
        assert_eq!(game.remaining_players().len(), 2);

        game.take_turn().unwrap(); // Grace: 0 -> 1
        game.take_turn().unwrap(); // Edsger: 0 -> 1
        let record = game.take_turn().unwrap(); // Grace: 1 + 5 = 6, wins
        assert!(record.won);

        assert!(game.is_completed());
        assert_eq!(game.winners().len(), 2);
        assert_eq!(game.winners()[0].name(), "Ada");
        assert_eq!(game.remaining_players().len(), 1);
    }

    #[test]
    fn test_single_player_last_player_rule_completes_at_build() {
        let game = GameBuilder::new()
            .player("Ada")
            .completion_rule(CompletionRule::LastPlayer)
            .seed(0)
            .build()
            .unwrap();
        assert!(game.is_completed());
    }

    #[test]
    fn test_single_player_first_win_rule() {
        let mut game = GameBuilder::new()
            .board_size(6)
            .player("Ada")
            .build_with_die(ScriptedDie::new([6]))
            .unwrap();

        assert!(!game.is_completed());
        assert!(game.take_turn().unwrap().won);
        assert!(game.is_completed());
        assert!(game.remaining_players().is_empty());
    }

    #[test]
    fn test_history_records_every_turn() {
        let mut game = two_player_game(&[2, 3, 4, 1]);
        for _ in 0..3 {
            game.take_turn().unwrap();
        }

        let history = game.history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].roll, 2);
        assert_eq!(history[1].roll, 3);
        assert_eq!(history[2].roll, 4);

        // Snapshots are independent of later turns.
        let snapshot = game.history();
        game.take_turn().unwrap();
        assert_eq!(snapshot.len(), 3);
        assert_eq!(game.history().len(), 4);
    }

    #[test]
    fn test_seeded_games_are_replayable() {
        let run = |seed: u64| -> Vec<u8> {
            let mut game = GameBuilder::new()
                .snake(97, 78)
                .ladder(1, 38)
                .players(["Ada", "Grace"])
                .seed(seed)
                .build()
                .unwrap();
            let mut rolls = Vec::new();
            for _ in 0..50 {
                if game.is_completed() {
                    break;
                }
                rolls.push(game.take_turn().unwrap().roll);
            }
            rolls
        };

        assert_eq!(run(42), run(42));
    }
}
