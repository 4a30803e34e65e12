//! Error handling for the shape sorter

use std::io;
use thiserror::Error;

/// Custom error type for shape sorting operations
#[derive(Error, Debug)]
pub enum ShapeSortError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Permission denied: {file}")]
    PermissionDenied { file: String },

    #[error("No such file or directory: {file}")]
    FileNotFound { file: String },

    #[error("Invalid shape count on line {line}: {value}")]
    InvalidCount { line: usize, value: String },

    #[error("Malformed shape on line {line}: expected `<ShapeType> <height> <value>`, got `{content}`")]
    MalformedLine { line: usize, content: String },

    #[error("Unknown shape type on line {line}: {token}")]
    UnknownShapeType { line: usize, token: String },

    #[error("Unknown shape type: {token}")]
    UnknownShapeKind { token: String },

    #[error("Invalid number on line {line}: {value}")]
    InvalidNumber { line: usize, value: String },

    #[error("Unexpected end of file: expected {expected} shapes, found {found}")]
    UnexpectedEof { expected: usize, found: usize },

    #[error("No shapes loaded from file '{file}'")]
    NoShapes { file: String },

    #[error("Missing required option: {option}")]
    MissingOption { option: String },

    #[error("Invalid comparison type '{value}'. Use 'H' (Height), 'A' (Base Area), or 'V' (Volume)")]
    UnknownMetric { value: String },

    #[error("Invalid sorting method '{value}'. Use 'B' (Bubble), 'I' (Insertion), 'S' (Selection), 'M' (Merge), 'Q' (Quick), or 'H' (Heap)")]
    UnknownAlgorithm { value: String },

    #[error("Invalid sample interval: {value}")]
    InvalidSampleInterval { value: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ShapeSortError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ShapeSortError::PermissionDenied { .. }
            | ShapeSortError::FileNotFound { .. }
            | ShapeSortError::Io(_) => crate::IO_FAILURE,

            _ => crate::EXIT_FAILURE,
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(file: &str) -> Self {
        ShapeSortError::PermissionDenied {
            file: file.to_string(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(file: &str) -> Self {
        ShapeSortError::FileNotFound {
            file: file.to_string(),
        }
    }

    /// Create an invalid count error
    pub fn invalid_count(line: usize, value: &str) -> Self {
        ShapeSortError::InvalidCount {
            line,
            value: value.to_string(),
        }
    }

    /// Create a malformed line error
    pub fn malformed_line(line: usize, content: &str) -> Self {
        ShapeSortError::MalformedLine {
            line,
            content: content.to_string(),
        }
    }

    /// Create an unknown shape type error for a file line
    pub fn unknown_shape_type(line: usize, token: &str) -> Self {
        ShapeSortError::UnknownShapeType {
            line,
            token: token.to_string(),
        }
    }

    /// Create an unknown shape kind error, for a token outside any file
    pub fn unknown_shape_kind(token: &str) -> Self {
        ShapeSortError::UnknownShapeKind {
            token: token.to_string(),
        }
    }

    /// Create an invalid number error
    pub fn invalid_number(line: usize, value: &str) -> Self {
        ShapeSortError::InvalidNumber {
            line,
            value: value.to_string(),
        }
    }

    /// Create a no shapes error
    pub fn no_shapes(file: &str) -> Self {
        ShapeSortError::NoShapes {
            file: file.to_string(),
        }
    }

    /// Create a missing option error, e.g. for an absent `-t`
    pub fn missing_option(option: &str) -> Self {
        ShapeSortError::MissingOption {
            option: option.to_string(),
        }
    }

    /// Create an unknown metric error
    pub fn unknown_metric(value: &str) -> Self {
        ShapeSortError::UnknownMetric {
            value: value.to_string(),
        }
    }

    /// Create an unknown algorithm error
    pub fn unknown_algorithm(value: &str) -> Self {
        ShapeSortError::UnknownAlgorithm {
            value: value.to_string(),
        }
    }

    /// Create an invalid sample interval error
    pub fn invalid_sample_interval(value: &str) -> Self {
        ShapeSortError::InvalidSampleInterval {
            value: value.to_string(),
        }
    }

    /// Create an internal error
    pub fn internal(message: &str) -> Self {
        ShapeSortError::Internal {
            message: message.to_string(),
        }
    }

    /// True for errors raised while resolving options, before any file is read
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            ShapeSortError::MissingOption { .. }
                | ShapeSortError::UnknownMetric { .. }
                | ShapeSortError::UnknownAlgorithm { .. }
                | ShapeSortError::InvalidSampleInterval { .. }
        )
    }
}

/// Result type for shape sorting operations
pub type ShapeSortResult<T> = Result<T, ShapeSortError>;

/// Context trait for attaching a file name to I/O failures
pub trait ShapeSortContext<T> {
    fn with_file_context(self, filename: &str) -> ShapeSortResult<T>;
}

impl<T> ShapeSortContext<T> for ShapeSortResult<T> {
    fn with_file_context(self, filename: &str) -> ShapeSortResult<T> {
        self.map_err(|err| match err {
            ShapeSortError::Io(io_err) => io_error_with_file(io_err, filename),
            other => other,
        })
    }
}

impl<T> ShapeSortContext<T> for Result<T, io::Error> {
    fn with_file_context(self, filename: &str) -> ShapeSortResult<T> {
        self.map_err(|io_err| io_error_with_file(io_err, filename))
    }
}

fn io_error_with_file(io_err: io::Error, filename: &str) -> ShapeSortError {
    match io_err.kind() {
        io::ErrorKind::PermissionDenied => ShapeSortError::permission_denied(filename),
        io::ErrorKind::NotFound => ShapeSortError::file_not_found(filename),
        _ => ShapeSortError::Io(io::Error::new(
            io_err.kind(),
            format!("{}: {}", filename, io_err),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            ShapeSortError::file_not_found("x.txt").exit_code(),
            crate::IO_FAILURE
        );
        assert_eq!(
            ShapeSortError::unknown_metric("Z").exit_code(),
            crate::EXIT_FAILURE
        );
    }

    #[test]
    fn test_file_context_maps_not_found() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "gone"));
        match result.with_file_context("shapes.txt") {
            Err(ShapeSortError::FileNotFound { file }) => assert_eq!(file, "shapes.txt"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_file_context_keeps_parse_errors() {
        let result: ShapeSortResult<()> = Err(ShapeSortError::invalid_number(3, "abc"));
        assert!(matches!(
            result.with_file_context("shapes.txt"),
            Err(ShapeSortError::InvalidNumber { line: 3, .. })
        ));
    }

    #[test]
    fn test_configuration_errors() {
        assert!(ShapeSortError::missing_option("-t").is_configuration_error());
        assert!(!ShapeSortError::no_shapes("a.txt").is_configuration_error());
    }
}
