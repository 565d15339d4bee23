//! Two-player game state
//!
//! Tracks the remaining words, both players' scores and whose turn it is.
//! Scoring itself is delegated to [`evaluate_guess`].

use super::direction::Direction;
use super::grid::{Grid, GridError};
use super::puzzle::Puzzle;
use super::scoring::evaluate_guess;
use std::fmt;
use tracing::{debug, info};

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The player who moves after this one
    #[inline]
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    const fn slot(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => f.pad("player one"),
            Self::Two => f.pad("player two"),
        }
    }
}

/// Result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    PlayerOneWins,
    PlayerTwoWins,
    Tie,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlayerOneWins => f.pad("player one wins"),
            Self::PlayerTwoWins => f.pad("player two wins"),
            Self::Tie => f.pad("tie game"),
        }
    }
}

/// Player one if it's player one's turn, otherwise player two
#[inline]
#[must_use]
pub const fn current_player(player_one_turn: bool) -> Player {
    if player_one_turn {
        Player::One
    } else {
        Player::Two
    }
}

/// Decide the game from the two final scores
///
/// # Examples
/// ```
/// use wheres_that_word::core::{Outcome, winner};
///
/// assert_eq!(winner(25, 20), Outcome::PlayerOneWins);
/// assert_eq!(winner(20, 25), Outcome::PlayerTwoWins);
/// assert_eq!(winner(25, 25), Outcome::Tie);
/// ```
#[must_use]
pub fn winner(score_one: u32, score_two: u32) -> Outcome {
    match score_one.cmp(&score_two) {
        std::cmp::Ordering::Greater => Outcome::PlayerOneWins,
        std::cmp::Ordering::Less => Outcome::PlayerTwoWins,
        std::cmp::Ordering::Equal => Outcome::Tie,
    }
}

/// Error type for turns that can't be played
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnError {
    /// The word isn't in the remaining word list
    NotRemaining(String),
    /// The row or column index doesn't exist
    Grid(GridError),
    /// Every word has been found
    GameOver,
}

impl fmt::Display for TurnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotRemaining(word) => write!(f, "'{word}' is not one of the remaining words"),
            Self::Grid(err) => write!(f, "{err}"),
            Self::GameOver => write!(f, "The game is over"),
        }
    }
}

impl std::error::Error for TurnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GridError> for TurnError {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}

/// What happened on one turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    pub player: Player,
    pub word: String,
    pub direction: Direction,
    pub index: usize,
    /// Points earned; 0 for an incorrect guess
    pub points: u32,
    /// The player's total after this turn
    pub total: u32,
}

impl TurnReport {
    #[inline]
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        self.points > 0
    }
}

/// A game in progress
#[derive(Debug, Clone)]
pub struct Game {
    grid: Grid,
    remaining: Vec<String>,
    scores: [u32; 2],
    turn: Player,
}

impl Game {
    /// Start a game on `grid` with `words` left to find; player one moves first
    #[must_use]
    pub fn new(grid: Grid, words: Vec<String>) -> Self {
        Self {
            grid,
            remaining: words,
            scores: [0, 0],
            turn: Player::One,
        }
    }

    /// Start a game from a loaded puzzle
    #[must_use]
    pub fn from_puzzle(puzzle: &Puzzle) -> Self {
        Self::new(puzzle.grid().clone(), puzzle.words().to_vec())
    }

    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Words not yet found, in puzzle order
    #[inline]
    #[must_use]
    pub fn remaining_words(&self) -> &[String] {
        &self.remaining
    }

    /// Whether `word` is still to be found
    #[must_use]
    pub fn is_remaining(&self, word: &str) -> bool {
        self.remaining.iter().any(|w| w == word)
    }

    #[inline]
    #[must_use]
    pub const fn current_player(&self) -> Player {
        self.turn
    }

    #[inline]
    #[must_use]
    pub const fn score(&self, player: Player) -> u32 {
        self.scores[player.slot()]
    }

    /// The game ends once every word has been found
    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.remaining.is_empty()
    }

    /// The result, once the game is over
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.is_over()
            .then(|| winner(self.score(Player::One), self.score(Player::Two)))
    }

    /// Number of valid line indices for a direction: rows for forward/backward,
    /// columns for up/down
    #[must_use]
    pub fn bound_for(&self, direction: Direction) -> usize {
        self.grid.line_count(direction.axis())
    }

    /// Play the current player's guess and pass the turn
    ///
    /// A correct guess removes the word and adds its points to the current
    /// player's score. The turn passes whether or not the guess was correct.
    ///
    /// # Errors
    /// Returns `TurnError` without changing any state if:
    /// - The game is already over
    /// - `word` is not one of the remaining words
    /// - `index` is past the edge of the grid for this direction
    ///
    /// # Examples
    /// ```
    /// use wheres_that_word::core::{Direction, Game, Grid, Player};
    ///
    /// let grid = Grid::new(["abcd", "efgh", "ijkl"]).unwrap();
    /// let mut game = Game::new(grid, vec!["aei".to_string(), "fgh".to_string()]);
    ///
    /// let report = game.take_turn("aei", Direction::Down, 0).unwrap();
    /// assert_eq!(report.points, 16);
    /// assert_eq!(game.current_player(), Player::Two);
    /// assert_eq!(game.remaining_words(), ["fgh"]);
    /// ```
    pub fn take_turn(
        &mut self,
        word: &str,
        direction: Direction,
        index: usize,
    ) -> Result<TurnReport, TurnError> {
        if self.is_over() {
            return Err(TurnError::GameOver);
        }

        let position = self
            .remaining
            .iter()
            .position(|w| w == word)
            .ok_or_else(|| TurnError::NotRemaining(word.to_string()))?;

        let points = evaluate_guess(&self.grid, direction, word, index, self.remaining.len())?;

        let player = self.turn;
        if points > 0 {
            self.remaining.remove(position);
            self.scores[player.slot()] += points;
        }
        self.turn = player.other();

        let report = TurnReport {
            player,
            word: word.to_string(),
            direction,
            index,
            points,
            total: self.score(player),
        };

        debug!(
            %player,
            word,
            %direction,
            index,
            points,
            remaining = self.remaining.len(),
            "Turn played"
        );

        if let Some(outcome) = self.outcome() {
            info!(
                %outcome,
                player_one = self.score(Player::One),
                player_two = self.score(Player::Two),
                "Game over"
            );
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_game(words: &[&str]) -> Game {
        let grid = Grid::new(["abcd", "efgh", "ijkl"]).unwrap();
        Game::new(grid, words.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn current_player_by_flag() {
        assert_eq!(current_player(true), Player::One);
        assert_eq!(current_player(false), Player::Two);
    }

    #[test]
    fn player_names() {
        assert_eq!(Player::One.to_string(), "player one");
        assert_eq!(Player::Two.to_string(), "player two");
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other(), Player::One);
    }

    #[test]
    fn winner_all_cases() {
        assert_eq!(winner(25, 20), Outcome::PlayerOneWins);
        assert_eq!(winner(1, 0), Outcome::PlayerOneWins);
        assert_eq!(winner(20, 25), Outcome::PlayerTwoWins);
        assert_eq!(winner(0, 1), Outcome::PlayerTwoWins);
        assert_eq!(winner(25, 25), Outcome::Tie);
        assert_eq!(winner(0, 0), Outcome::Tie);
    }

    #[test]
    fn outcome_names() {
        assert_eq!(Outcome::PlayerOneWins.to_string(), "player one wins");
        assert_eq!(Outcome::PlayerTwoWins.to_string(), "player two wins");
        assert_eq!(Outcome::Tie.to_string(), "tie game");
    }

    #[test]
    fn new_game_state() {
        let game = sample_game(&["aei", "fgh"]);
        assert_eq!(game.current_player(), Player::One);
        assert_eq!(game.score(Player::One), 0);
        assert_eq!(game.score(Player::Two), 0);
        assert!(!game.is_over());
        assert_eq!(game.outcome(), None);
        assert!(game.is_remaining("aei"));
        assert!(!game.is_remaining("xyz"));
    }

    #[test]
    fn bounds_follow_direction_axis() {
        let game = sample_game(&["aei"]);
        assert_eq!(game.bound_for(Direction::Forward), 3);
        assert_eq!(game.bound_for(Direction::Backward), 3);
        assert_eq!(game.bound_for(Direction::Up), 4);
        assert_eq!(game.bound_for(Direction::Down), 4);
    }

    #[test]
    fn correct_guess_scores_and_removes_word() {
        let mut game = sample_game(&["aei", "fgh", "dhl", "kji", "ab"]);

        let report = game.take_turn("aei", Direction::Down, 0).unwrap();
        assert!(report.is_correct());
        assert_eq!(report.player, Player::One);
        assert_eq!(report.points, 10);
        assert_eq!(report.total, 10);
        assert_eq!(game.score(Player::One), 10);
        assert_eq!(game.remaining_words(), ["fgh", "dhl", "kji", "ab"]);
        assert_eq!(game.current_player(), Player::Two);
    }

    #[test]
    fn incorrect_guess_keeps_word_and_passes_turn() {
        let mut game = sample_game(&["aei", "fgh"]);

        let report = game.take_turn("aei", Direction::Up, 0).unwrap();
        assert!(!report.is_correct());
        assert_eq!(report.points, 0);
        assert_eq!(report.total, 0);
        assert_eq!(game.remaining_words(), ["aei", "fgh"]);
        assert_eq!(game.current_player(), Player::Two);
    }

    #[test]
    fn word_not_remaining_is_rejected() {
        let mut game = sample_game(&["aei"]);
        assert_eq!(
            game.take_turn("efgh", Direction::Forward, 1),
            Err(TurnError::NotRemaining("efgh".to_string()))
        );
        assert_eq!(game.current_player(), Player::One);
    }

    #[test]
    fn bad_index_leaves_state_unchanged() {
        let mut game = sample_game(&["aei"]);
        let err = game.take_turn("aei", Direction::Down, 9).unwrap_err();
        assert!(matches!(err, TurnError::Grid(GridError::OutOfRange { .. })));
        assert_eq!(game.current_player(), Player::One);
        assert_eq!(game.remaining_words(), ["aei"]);
    }

    #[test]
    fn duplicate_words_removed_one_at_a_time() {
        let mut game = sample_game(&["fgh", "aei", "fgh"]);

        game.take_turn("fgh", Direction::Forward, 1).unwrap();
        assert_eq!(game.remaining_words(), ["aei", "fgh"]);

        game.take_turn("fgh", Direction::Forward, 1).unwrap();
        assert_eq!(game.remaining_words(), ["aei"]);
    }

    #[test]
    fn full_game_to_a_winner() {
        let mut game = sample_game(&["aei", "fgh", "lkji"]);

        // n=3: middle tier
        let first = game.take_turn("aei", Direction::Down, 0).unwrap();
        assert_eq!(first.points, 16);

        // Player two misses
        let miss = game.take_turn("fgh", Direction::Forward, 0).unwrap();
        assert_eq!(miss.points, 0);

        // n=2: middle tier, backward
        let third = game.take_turn("lkji", Direction::Backward, 2).unwrap();
        assert_eq!(third.points, 24);
        assert_eq!(third.total, 40);

        // n=1: last word bonus for player two
        let last = game.take_turn("fgh", Direction::Forward, 1).unwrap();
        assert_eq!(last.player, Player::Two);
        assert_eq!(last.points, 21);

        assert!(game.is_over());
        assert_eq!(game.outcome(), Some(Outcome::PlayerOneWins));
        assert_eq!(
            game.take_turn("aei", Direction::Down, 0),
            Err(TurnError::GameOver)
        );
    }

    #[test]
    fn turn_error_messages() {
        assert_eq!(
            TurnError::NotRemaining("cat".to_string()).to_string(),
            "'cat' is not one of the remaining words"
        );
        let grid_err: TurnError = GridError::Empty.into();
        assert_eq!(grid_err.to_string(), GridError::Empty.to_string());
    }
}
