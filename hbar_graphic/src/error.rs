// Copyright 2025 the Hbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong between a config file and a presented graphic.
#[derive(Error, Debug)]
pub enum GraphicError {
    /// The data file could not be opened or read.
    #[error("Failed to read data file: {path}")]
    DataLoad {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The data is not well-formed CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required header is absent.
    #[error("Missing required column: {column}")]
    MissingColumn {
        /// Configured column name.
        column: String,
    },

    /// A cell is not a percent number, or interval bounds are out of order.
    #[error("Invalid value {value:?} in column {column} at row {row}")]
    DataFormat {
        /// 1-based data row (the header is row 0).
        row: usize,
        /// Column the value came from.
        column: String,
        /// Raw cell contents.
        value: String,
    },

    /// The config file could not be read.
    #[error("Failed to read config file: {path}")]
    ConfigRead {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`GraphicConfig`](crate::GraphicConfig).
    #[error("TOML parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Writing output or host messages failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for fallible graphic operations.
pub type Result<T> = std::result::Result<T, GraphicError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = GraphicError::MissingColumn {
            column: "pct".into(),
        };
        assert_eq!(err.to_string(), "Missing required column: pct");

        let err = GraphicError::DataFormat {
            row: 3,
            column: "pct".into(),
            value: "n/a".into(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value \"n/a\" in column pct at row 3"
        );
    }

    #[test]
    fn io_errors_keep_their_source() {
        use std::error::Error as _;

        let err = GraphicError::DataLoad {
            path: PathBuf::from("data.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "Failed to read data file: data.csv");
        assert!(err.source().is_some());
    }
}
