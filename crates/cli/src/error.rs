use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("{failed} of {total} region lookups failed")]
    LookupsFailed { failed: usize, total: usize },

    #[error("{count} provider(s) out of date")]
    OutOfDate { count: usize },
}
