//! Error types for surd_ast crate.

use thiserror::Error;

/// Errors that can occur when accepting an encoding from outside the builders.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AstError {
    /// A raw slot sequence violates the pre-order/offset layout
    #[error("malformed encoding at slot {index}: {reason}")]
    MalformedEncoding { index: usize, reason: String },
}

/// Helper macro for encoding checks in surd_ast.
/// Returns `Err(AstError::MalformedEncoding)` at `$index` if the condition fails.
#[macro_export]
macro_rules! ensure_encoding {
    ($cond:expr, $index:expr, $msg:literal $(, $args:expr)* $(,)?) => {
        if !$cond {
            return Err($crate::error::AstError::MalformedEncoding {
                index: $index,
                reason: format!($msg $(, $args)*),
            });
        }
    };
}

