//! The hangman state machine
//!
//! A [`Game`] is an immutable value: the transition [`Game::guess`] takes
//! `&self` and hands back a fresh `Game` plus the side effects the caller
//! should run. Nothing here touches the network or the terminal, which keeps
//! the whole rule set testable in isolation.

use super::word::SecretWord;
use std::collections::BTreeSet;

/// Default number of misses allowed before the game is lost
///
/// Six, one per drawable part of the hangman figure.
pub const DEFAULT_LIVES: u8 = 6;

/// Whether a game is still being played, and if not, how it ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Won,
    Lost,
}

/// A side effect requested by a state transition
///
/// The transition itself never performs effects; it describes them and a
/// runner executes them afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Emitted exactly once per game, on the transition that ends it.
    /// Carries the revealed secret word so the shell can display it, look
    /// up its definition, and persist it.
    GameOver { word: String, result: GameResult },
}

/// Full state of one hangman game
///
/// Created whole at game start, replaced whole at restart. Cloning is cheap
/// (two small letter sets and a short string), so transitions copy rather
/// than mutate in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    word: SecretWord,
    correct: BTreeSet<char>,
    wrong: BTreeSet<char>,
    lives: u8,
    budget: u8,
    status: GameStatus,
}

impl Game {
    /// Start a game with the default miss budget
    #[must_use]
    pub fn new(word: SecretWord) -> Self {
        Self::with_lives(word, DEFAULT_LIVES)
    }

    /// Start a game with an explicit miss budget
    ///
    /// A budget of zero would be unplayable, so it is bumped to one.
    #[must_use]
    pub fn with_lives(word: SecretWord, lives: u8) -> Self {
        let lives = lives.max(1);
        Self {
            word,
            correct: BTreeSet::new(),
            wrong: BTreeSet::new(),
            lives,
            budget: lives,
            status: GameStatus::InProgress,
        }
    }

    /// The secret word
    #[inline]
    #[must_use]
    pub fn word(&self) -> &SecretWord {
        &self.word
    }

    /// Letters guessed so far that are in the word
    #[inline]
    #[must_use]
    pub fn correct(&self) -> &BTreeSet<char> {
        &self.correct
    }

    /// Letters guessed so far that are not in the word
    #[inline]
    #[must_use]
    pub fn wrong(&self) -> &BTreeSet<char> {
        &self.wrong
    }

    /// Misses still allowed
    #[inline]
    #[must_use]
    pub fn lives(&self) -> u8 {
        self.lives
    }

    /// The miss budget this game started with
    #[inline]
    #[must_use]
    pub fn budget(&self) -> u8 {
        self.budget
    }

    /// Current status
    #[inline]
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the game is won or lost
    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Has this letter been guessed already, rightly or wrongly?
    #[must_use]
    pub fn already_guessed(&self, letter: char) -> bool {
        self.correct.contains(&letter) || self.wrong.contains(&letter)
    }

    /// The word as currently revealed: guessed letters shown, the rest masked
    ///
    /// Pure projection over the correct guess set, recomputed every call.
    #[must_use]
    pub fn revealed(&self) -> String {
        self.word.masked(&self.correct)
    }

    /// Apply one letter guess and return the next state plus requested effects
    ///
    /// The caller is expected to hand in a single lowercase ASCII letter;
    /// input normalization is the shell's job. Rules:
    ///
    /// - after the game has ended, any guess is a no-op
    /// - a letter already in either guess set is a no-op (a repeated wrong
    ///   guess is not penalized twice)
    /// - a hit joins the correct set; if every distinct letter of the word
    ///   is now guessed, the game is won
    /// - a miss joins the wrong set and costs exactly one life; at zero
    ///   lives the game is lost
    ///
    /// The `GameOver` effect appears exactly once per game, on the winning
    /// or losing transition.
    #[must_use]
    pub fn guess(&self, letter: char) -> (Self, Vec<Effect>) {
        if self.is_over() || self.already_guessed(letter) {
            return (self.clone(), Vec::new());
        }

        let mut next = self.clone();

        if self.word.contains(letter) {
            next.correct.insert(letter);
            let all_guessed = self
                .word
                .distinct_letters()
                .iter()
                .all(|c| next.correct.contains(c));
            if all_guessed {
                next.status = GameStatus::Won;
            }
        } else {
            next.wrong.insert(letter);
            next.lives -= 1;
            if next.lives == 0 {
                next.status = GameStatus::Lost;
            }
        }

        let effects = match next.status {
            GameStatus::Won => vec![Effect::GameOver {
                word: next.word.text().to_string(),
                result: GameResult::Won,
            }],
            GameStatus::Lost => vec![Effect::GameOver {
                word: next.word.text().to_string(),
                result: GameResult::Lost,
            }],
            GameStatus::InProgress => Vec::new(),
        };

        (next, effects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(word: &str, lives: u8) -> Game {
        Game::with_lives(SecretWord::new(word).unwrap(), lives)
    }

    #[test]
    fn new_game_starts_clean() {
        let g = game("candle", 6);
        assert_eq!(g.status(), GameStatus::InProgress);
        assert_eq!(g.lives(), 6);
        assert_eq!(g.budget(), 6);
        assert!(g.correct().is_empty());
        assert!(g.wrong().is_empty());
        assert_eq!(g.revealed(), "______");
    }

    #[test]
    fn zero_budget_bumped_to_one() {
        let g = game("candle", 0);
        assert_eq!(g.lives(), 1);
        assert_eq!(g.budget(), 1);
    }

    #[test]
    fn hit_reveals_without_costing_a_life() {
        let g = game("candle", 6);
        let (g, effects) = g.guess('a');
        assert!(effects.is_empty());
        assert_eq!(g.lives(), 6);
        assert!(g.correct().contains(&'a'));
        assert_eq!(g.revealed(), "_a____");
    }

    #[test]
    fn miss_costs_exactly_one_life() {
        let g = game("candle", 6);
        let (g, effects) = g.guess('z');
        assert!(effects.is_empty());
        assert_eq!(g.lives(), 5);
        assert!(g.wrong().contains(&'z'));
        assert!(g.correct().is_empty());
    }

    #[test]
    fn win_scenario_cat_budget_six() {
        // Spell out "cat": three hits, all six lives intact, game won
        let g = game("cat", 6);

        let (g, _) = g.guess('c');
        assert_eq!(g.correct().iter().collect::<Vec<_>>(), vec![&'c']);
        assert_eq!(g.status(), GameStatus::InProgress);

        let (g, _) = g.guess('a');
        assert!(g.correct().contains(&'a'));
        assert_eq!(g.status(), GameStatus::InProgress);

        let (g, effects) = g.guess('t');
        assert_eq!(g.status(), GameStatus::Won);
        assert_eq!(g.lives(), 6);
        assert_eq!(
            effects,
            vec![Effect::GameOver {
                word: "cat".to_string(),
                result: GameResult::Won,
            }]
        );
    }

    #[test]
    fn loss_scenario_dog_budget_two() {
        let g = game("dog", 2);

        let (g, effects) = g.guess('x');
        assert!(effects.is_empty());
        assert_eq!(g.lives(), 1);

        // Repeated wrong guess must not double-decrement
        let (g2, effects) = g.guess('x');
        assert!(effects.is_empty());
        assert_eq!(g2, g);
        assert_eq!(g2.lives(), 1);

        let (g3, effects) = g2.guess('z');
        assert_eq!(g3.status(), GameStatus::Lost);
        assert_eq!(g3.lives(), 0);
        assert_eq!(g3.wrong().len(), 2);
        assert_eq!(
            effects,
            vec![Effect::GameOver {
                word: "dog".to_string(),
                result: GameResult::Lost,
            }]
        );
    }

    #[test]
    fn repeated_correct_guess_is_idempotent() {
        let g = game("candle", 6);
        let (g1, _) = g.guess('a');
        let (g2, effects) = g1.guess('a');
        assert!(effects.is_empty());
        assert_eq!(g1, g2);
    }

    #[test]
    fn guesses_after_win_are_ignored() {
        let g = game("cat", 6);
        let (g, _) = g.guess('c');
        let (g, _) = g.guess('a');
        let (won, _) = g.guess('t');
        assert_eq!(won.status(), GameStatus::Won);

        let (after, effects) = won.guess('z');
        assert!(effects.is_empty());
        assert_eq!(after, won);
        assert_eq!(after.lives(), won.lives());
    }

    #[test]
    fn guesses_after_loss_are_ignored() {
        let g = game("dog", 1);
        let (lost, _) = g.guess('x');
        assert_eq!(lost.status(), GameStatus::Lost);

        let (after, effects) = lost.guess('d');
        assert!(effects.is_empty());
        assert_eq!(after, lost);
        assert!(after.correct().is_empty());
    }

    #[test]
    fn lives_never_negative_and_track_distinct_misses() {
        let mut g = game("candle", 3);
        for letter in ['x', 'y', 'x', 'z', 'w', 'q'] {
            let (next, _) = g.guess(letter);
            g = next;
            assert!(u32::from(g.lives()) + g.wrong().len() as u32 == 3);
        }
        assert_eq!(g.lives(), 0);
        assert_eq!(g.status(), GameStatus::Lost);
        // 'w' and 'q' came after the loss and were ignored
        assert_eq!(g.wrong().len(), 3);
    }

    #[test]
    fn win_requires_every_distinct_letter() {
        // "llama" has distinct letters {l, a, m}
        let g = game("llama", 6);
        let (g, _) = g.guess('l');
        let (g, _) = g.guess('a');
        assert_eq!(g.status(), GameStatus::InProgress);
        assert_eq!(g.revealed(), "lla_a");

        let (g, effects) = g.guess('m');
        assert_eq!(g.status(), GameStatus::Won);
        assert_eq!(effects.len(), 1);
    }

    #[test]
    fn wrong_guesses_do_not_help_win() {
        let g = game("cat", 6);
        let (g, _) = g.guess('c');
        let (g, _) = g.guess('a');
        let (g, _) = g.guess('z');
        assert_eq!(g.status(), GameStatus::InProgress);
        let (g, _) = g.guess('t');
        assert_eq!(g.status(), GameStatus::Won);
    }

    #[test]
    fn game_over_effect_fires_exactly_once() {
        let g = game("cat", 6);
        let (g, e1) = g.guess('c');
        let (g, e2) = g.guess('a');
        let (g, e3) = g.guess('t');
        let (_, e4) = g.guess('b');
        let total = e1.len() + e2.len() + e3.len() + e4.len();
        assert_eq!(total, 1);
    }

    #[test]
    fn no_letter_in_both_sets() {
        let mut g = game("candle", 6);
        for letter in ['c', 'z', 'a', 'z', 'c', 'q'] {
            let (next, _) = g.guess(letter);
            g = next;
            assert!(g.correct().intersection(g.wrong()).next().is_none());
        }
    }

    #[test]
    fn transition_leaves_original_untouched() {
        let g = game("candle", 6);
        let (next, _) = g.guess('z');
        assert_eq!(g.lives(), 6);
        assert!(g.wrong().is_empty());
        assert_eq!(next.lives(), 5);
        assert_ne!(g, next);
    }
}
