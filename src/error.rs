use std::path::PathBuf;

use thiserror::Error;

use crate::game::Phase;
use crate::model::{Difficulty, Topic};

#[derive(Error, Debug)]
pub enum QuestionBankError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported question file format: {0}")]
    UnsupportedFormat(PathBuf),
    #[error("question {position} (id {id}) has invalid answer index {index} for {options} options")]
    InvalidAnswerIndex {
        position: usize,
        id: u32,
        index: usize,
        options: usize,
    },
    #[error("question {position} (id {id}) needs at least 2 options, found {found}")]
    TooFewOptions { position: usize, id: u32, found: usize },
    #[error("question {position} (id {id}) is missing its {field}")]
    EmptyField {
        position: usize,
        id: u32,
        field: &'static str,
    },
    #[error("duplicate question id {0}")]
    DuplicateId(u32),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("no questions available")]
    NoQuestions,
    #[error(
        "not enough {} {} questions for round {round}: need {needed}, found {available}",
        .difficulty.label(),
        .topic.label()
    )]
    InsufficientPool {
        round: usize,
        difficulty: Difficulty,
        topic: Topic,
        needed: usize,
        available: usize,
    },
    #[error("action not allowed while {actual:?}")]
    WrongPhase { actual: Phase },
    #[error("there is no active question")]
    NoActiveQuestion,
    #[error("the current question was already answered")]
    AlreadyAnswered,
    #[error("answer the current question first")]
    NotAnswered,
    #[error("option {selected} does not exist ({options} options)")]
    OptionOutOfRange { selected: usize, options: usize },
    #[error("please enter your name")]
    EmptyName,
    #[error("no heal power-ups left")]
    NoHealAvailable,
    #[error("player is eliminated")]
    Eliminated,
}

#[derive(Error, Debug)]
pub enum LeaderboardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}
