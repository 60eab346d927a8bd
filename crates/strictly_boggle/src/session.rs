//! One player's game: a board, the words found on it, and the score.

use crate::path::{self, MIN_PATH_LEN, PathError};
use crate::{Board, Coordinate, Dictionary, scoring};
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use derive_more::Display;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Why a word attempt was turned down.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Rejection {
    /// The traced cells do not form a legal path.
    #[display("Invalid path - {}", _0)]
    InvalidPath(PathError),

    /// The extracted word is shorter than the minimum.
    #[display("Word must be at least {} letters", MIN_PATH_LEN)]
    WordTooShort,

    /// The word is not in the dictionary.
    #[display("Not a valid English word")]
    NotAWord,

    /// The word was already scored in this session.
    #[display("Word already found")]
    AlreadyFound,
}

impl Rejection {
    /// Stable snake_case identifier for clients.
    pub fn code(&self) -> &'static str {
        match self {
            Rejection::InvalidPath(e) => e.code(),
            Rejection::WordTooShort => "word_too_short",
            Rejection::NotAWord => "not_a_word",
            Rejection::AlreadyFound => "already_found",
        }
    }
}

/// A scored word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    /// The word, lowercase.
    pub word: String,
    /// Points this word earned.
    pub points: u32,
    /// Session score after this word.
    pub score: u32,
    /// Every word found so far, in the order found.
    pub found_words: Vec<String>,
}

/// A turned-down attempt. Session state is unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejected {
    /// The first rule the attempt broke.
    pub rejection: Rejection,
    /// Letters read off the board along the path, possibly empty.
    pub attempted_word: String,
}

/// Result of [`GameSession::attempt_word`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// The word was new, real and legally traced.
    Accepted(Accepted),
    /// The word was refused.
    Rejected(Rejected),
}

impl AttemptOutcome {
    /// Returns true if the word was scored.
    pub fn is_accepted(&self) -> bool {
        matches!(self, AttemptOutcome::Accepted(_))
    }

    /// Returns the rejection reason, if any.
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            AttemptOutcome::Accepted(_) => None,
            AttemptOutcome::Rejected(r) => Some(&r.rejection),
        }
    }
}

/// Read-only view of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    /// The board, as rows of letters.
    pub board: Board,
    /// Current score.
    pub score: u32,
    /// Words found so far, in the order found.
    pub found_words: Vec<String>,
    /// When the session started.
    pub created_at: DateTime<Utc>,
}

/// A single game in progress.
#[derive(Debug, Clone, Getters)]
pub struct GameSession {
    /// The board, fixed for the life of the session.
    board: Board,
    /// Word list shared by every session.
    #[getter(skip)]
    dictionary: Arc<Dictionary>,
    /// Words found so far, in the order found.
    found_words: Vec<String>,
    /// Sum of points over `found_words`.
    score: u32,
    /// When the session started.
    created_at: DateTime<Utc>,
}

impl GameSession {
    /// Starts a session on `board`.
    #[instrument(skip(board, dictionary), fields(board = %board))]
    pub fn new(board: Board, dictionary: Arc<Dictionary>) -> Self {
        info!("Creating new game session");
        Self {
            board,
            dictionary,
            found_words: Vec::new(),
            score: 0,
            created_at: Utc::now(),
        }
    }

    /// Tries to score the word traced by `path`.
    ///
    /// Geometry is checked before the dictionary, and the dictionary before
    /// the found-word list, so the reason reported is always the first of
    /// those that fails.
    #[instrument(skip(self, path), fields(len = path.len()))]
    pub fn attempt_word(&mut self, path: &[Coordinate]) -> AttemptOutcome {
        let word = path::word_from_path(&self.board, path);

        let rejection = if let Err(e) = path::validate(path, self.board.size()) {
            Some(Rejection::InvalidPath(e))
        } else if word.chars().count() < MIN_PATH_LEN {
            Some(Rejection::WordTooShort)
        } else if !self.dictionary.contains(&word) {
            Some(Rejection::NotAWord)
        } else if self.found_words.contains(&word) {
            Some(Rejection::AlreadyFound)
        } else {
            None
        };

        if let Some(rejection) = rejection {
            debug!(word = %word, reason = %rejection, "Word rejected");
            return AttemptOutcome::Rejected(Rejected {
                rejection,
                attempted_word: word,
            });
        }

        let points = scoring::points_for(word.chars().count());
        self.found_words.push(word.clone());
        self.score += points;

        info!(word = %word, points, score = self.score, "Word accepted");
        AttemptOutcome::Accepted(Accepted {
            word,
            points,
            score: self.score,
            found_words: self.found_words.clone(),
        })
    }

    /// Copies out the current board, score and found words.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            board: self.board.clone(),
            score: self.score,
            found_words: self.found_words.clone(),
            created_at: self.created_at,
        }
    }
}
