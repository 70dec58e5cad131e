//! Error types for imhost.
//!
//! The input path is deliberately infallible: unmappable input becomes a
//! sentinel value, and work arriving after teardown is dropped silently.
//! What remains here are the two conditions a caller can act on.

use thiserror::Error;

/// Errors surfaced by imhost configuration and bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// Wheel sensitivity must be a finite, non-zero number.
    #[error("invalid mouse wheel sensitivity {0}: expected a finite value > 0")]
    InvalidWheelSensitivity(f32),

    /// Every slot of the held-key table is occupied.
    #[error("held-key table full ({capacity} keys already tracked)")]
    HeldKeyTableFull {
        /// Fixed table capacity.
        capacity: usize,
    },
}

/// Convenience result type for imhost operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_sensitivity_display() {
        let msg = Error::InvalidWheelSensitivity(0.0).to_string();
        assert!(msg.contains("wheel sensitivity 0"), "got: {msg}");
    }

    #[test]
    fn held_key_table_full_display() {
        let err = Error::HeldKeyTableFull { capacity: 256 };
        assert_eq!(
            err.to_string(),
            "held-key table full (256 keys already tracked)"
        );
    }
}
