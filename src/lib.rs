pub mod check_cmd;
pub mod checker;
pub mod core;
pub mod env_cmd;
pub mod storage;
pub mod sweep;
pub mod sweep_cmd;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

pub type BenchResult<T> = Result<T, BenchError>;
