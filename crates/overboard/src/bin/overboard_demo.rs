//! Walks a three-user board through a question's lifecycle.
//!
//! Settings come from `ReputationSettings` (CLI flags or `OVERBOARD_*`
//! variables). Each step is logged through `tracing`; the final board
//! summary is written to stdout as JSON.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use overboard::{Board, BoardError, ReputationSettings};
use thiserror::Error;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

/// Failures surfaced by the demo.
#[derive(Debug, Error)]
enum DemoError {
    /// Settings could not be loaded.
    #[error("failed to load settings: {0}")]
    Settings(String),
    /// A board operation failed unexpectedly.
    #[error(transparent)]
    Board(#[from] BoardError),
    /// The summary could not be serialised.
    #[error("failed to serialise board summary: {0}")]
    Summary(#[from] serde_json::Error),
    /// Writing to stdout failed.
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "demo failed");
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), DemoError> {
    let settings = ReputationSettings::load_from_iter(env::args_os())
        .map_err(|err| DemoError::Settings(err.to_string()))?;
    let mut board = Board::with_policy(settings.board_name(), settings.policy());
    walk_through(&mut board)?;

    let summary = serde_json::to_string_pretty(&board.summary())?;
    writeln!(io::stdout().lock(), "{summary}")?;
    Ok(())
}

fn walk_through(board: &mut Board) -> Result<(), BoardError> {
    let questioner = board.create_user("questioner")?;
    let answerer = board.create_user("answerer")?;
    let other = board.create_user("otherUser")?;

    let question = board
        .member(&questioner)?
        .ask_question("How should I test reputation rules?")?;
    let answer = board
        .member(&answerer)?
        .answer_question(question, "Drive them through scenarios.")?;

    board.member(&other)?.up_vote(question)?;
    board.member(&questioner)?.up_vote(answer)?;
    board.member(&questioner)?.accept_answer(answer)?;

    // Rule violations are expected here; log them and carry on.
    if let Err(err) = board.member(&answerer)?.up_vote(answer) {
        info!(error = %err, "self vote refused");
    }
    if let Err(err) = board.member(&answerer)?.accept_answer(answer) {
        info!(error = %err, "acceptance by non-owner refused");
    }

    for user in board.users() {
        info!(user = %user.name(), reputation = user.reputation(), "final reputation");
    }
    Ok(())
}
