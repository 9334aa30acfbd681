//! Error types for operator and Hamiltonian construction.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FockError {
    #[error("a Fock space needs at least one fermionic mode")]
    NoModes,

    #[error("Fock space dimension 2^{0} does not fit in usize")]
    TooManyModes(usize),

    #[error("a wire needs at least one site")]
    EmptyWire,

    #[error("{op}: incompatible shapes {lhs:?} and {rhs:?}")]
    ShapeMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    #[error("{what} must be square, got shape {shape:?}")]
    NotSquare {
        what: &'static str,
        shape: (usize, usize),
    },

    #[error("index {index:?} out of bounds for shape {shape:?}")]
    IndexOutOfBounds {
        index: (usize, usize),
        shape: (usize, usize),
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type FockResult<T> = std::result::Result<T, FockError>;
