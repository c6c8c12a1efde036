use thiserror::Error;

/// Returned when a search finds no matching element.
///
/// Carries no payload: every `NotFound` compares equal to every other.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[error("element not found in slice")]
pub struct NotFound;

pub type Result<T> = core::result::Result<T, NotFound>;
