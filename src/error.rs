use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("index {index} is out of range for a list of {len} names")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
