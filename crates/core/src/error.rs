//! Error types for the shadegen core.

use thiserror::Error;

/// Errors produced by color parsing.
///
/// These never cross the generator boundary: the soft-failure entry points
/// (`validate`, `normalize`, `generate_shades`) translate them into
/// `false`/`None`/empty results for the caller.
#[derive(Debug, Error)]
pub enum ColorError {
    /// The input string was empty or whitespace-only.
    #[error("empty color string")]
    EmptyInput,

    /// A color string could not be parsed under any supported syntax.
    #[error("invalid color: {0}")]
    InvalidColor(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_displays_readable_message() {
        let err = ColorError::EmptyInput;
        let msg = format!("{err}");
        assert!(
            msg.contains("empty"),
            "expected message mentioning empty input, got: {msg}"
        );
    }

    #[test]
    fn invalid_color_includes_offending_input() {
        let err = ColorError::InvalidColor("#zzz".into());
        let msg = format!("{err}");
        assert!(msg.contains("#zzz"), "missing input in: {msg}");
    }

    #[test]
    fn color_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ColorError>();
    }

    #[test]
    fn color_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<ColorError>();
    }
}
