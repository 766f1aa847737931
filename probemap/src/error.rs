use thiserror::Error;

/// Errors that can occur when working with probing hash tables
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProbeMapError {
    /// Checked access (`at`/`at_mut`) on a key that is not present
    #[error("Key not found")]
    KeyNotFound,

    /// Max load factor outside the valid `(0, 1]` range
    #[error("Invalid max load factor {0}, must be in (0, 1]")]
    InvalidLoadFactor(f64),

    /// No Empty or Deleted slot within a full probe cycle
    #[error("No free slot within a probe cycle over {capacity} slots")]
    CapacityExhausted { capacity: usize },
}

pub type Result<T> = std::result::Result<T, ProbeMapError>;
