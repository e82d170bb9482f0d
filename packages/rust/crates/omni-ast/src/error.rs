//! Error types for grammar and fragment parsing.
//!
//! Follows ODF-REP: Library crates use `thiserror` for explicit error enums.

use thiserror::Error;

/// Error types for parse operations.
///
/// Positions use a 1-based line and a 0-based byte column.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The TSX grammar could not be loaded into the parser.
    #[error("Failed to load grammar: {0}")]
    Language(String),

    /// The parser returned no tree at all.
    #[error("Parser produced no syntax tree")]
    Aborted,

    /// Source contains a token the grammar cannot place.
    #[error("Unexpected token ({line}:{column})")]
    UnexpectedToken {
        /// Line of the offending token (1-based).
        line: usize,
        /// Column of the offending token (0-based).
        column: usize,
    },

    /// Source ends or breaks off where a specific token was required.
    #[error("Unexpected token, expected \"{expected}\" ({line}:{column})")]
    Missing {
        /// The token kind the grammar expected.
        expected: String,
        /// Line where the token was expected (1-based).
        line: usize,
        /// Column where the token was expected (0-based).
        column: usize,
    },

    /// A snippet broke out of the shell it was wrapped in.
    #[error("{0} must not close its enclosing shell")]
    EscapedShell(&'static str),
}

impl ParseError {
    /// Move the reported position up by `lines`, clamped at line 1.
    ///
    /// Used to report fragment errors in the snippet's own coordinates
    /// instead of the wrapper's.
    #[must_use]
    pub fn shift_lines(self, lines: usize) -> Self {
        match self {
            Self::UnexpectedToken { line, column } => Self::UnexpectedToken {
                line: line.saturating_sub(lines).max(1),
                column,
            },
            Self::Missing {
                expected,
                line,
                column,
            } => Self::Missing {
                expected,
                line: line.saturating_sub(lines).max(1),
                column,
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_positions() {
        let err = ParseError::UnexpectedToken { line: 3, column: 7 };
        assert_eq!(err.to_string(), "Unexpected token (3:7)");

        let err = ParseError::Missing {
            expected: "}".to_string(),
            line: 1,
            column: 0,
        };
        assert_eq!(err.to_string(), "Unexpected token, expected \"}\" (1:0)");
    }

    #[test]
    fn test_shift_lines_clamps() {
        let err = ParseError::UnexpectedToken { line: 2, column: 4 }.shift_lines(5);
        assert_eq!(err, ParseError::UnexpectedToken { line: 1, column: 4 });
    }
}
