// shared/src/lib.rs

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid player id: {0}")]
    InvalidPlayerId(String),
    #[error("missing server hostname")]
    MissingServer,
    #[error("store read failed: {0}")]
    StoreRead(String),
    #[error("store write failed: {0}")]
    StoreWrite(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl Error {
    /// True for errors raised before any store or upstream interaction
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::InvalidPlayerId(_) | Error::MissingServer)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TtlMs(pub u64);

impl TtlMs {
    pub const fn from_hours(hours: u64) -> Self {
        TtlMs(hours * 60 * 60 * 1000)
    }

    pub const fn from_days(days: u64) -> Self {
        Self::from_hours(days * 24)
    }
}

pub mod config;
