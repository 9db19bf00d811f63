// Copyright 2025 the Hbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Graphic configuration, loaded from TOML.

use std::path::{Path, PathBuf};
use std::time::Duration;

use hbar_charts::Chart;
use serde::Deserialize;

use crate::error::{GraphicError, Result};

/// Which chart a graphic draws.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Diverging horizontal bars.
    #[default]
    Bar,
    /// Confidence-interval whiskers with a reference row.
    Interval,
}

impl Variant {
    /// The chart for this variant with default settings.
    pub fn chart(self) -> Chart {
        match self {
            Self::Bar => Chart::bar(),
            Self::Interval => Chart::interval(),
        }
    }

    /// Whether rows need lower/upper bound columns.
    pub fn needs_bounds(self) -> bool {
        matches!(self, Self::Interval)
    }
}

/// Settings for one embedded graphic.
///
/// Every key is optional in the file; missing keys take the defaults below.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphicConfig {
    /// CSS selector of the container element (`#graphic`).
    pub container: String,
    /// CSV file to load, relative to the config file when not absolute.
    pub data_path: Option<PathBuf>,
    /// Chart variant.
    pub variant: Variant,
    /// Widths at or below this are laid out in mobile mode.
    pub mobile_breakpoint: u32,
    /// Width used when the container reports none.
    pub default_width: u32,
    /// Minimum spacing between resize-triggered renders, in milliseconds.
    pub throttle_ms: u64,
    /// Header of the row label column.
    pub label_column: String,
    /// Header of the value column.
    pub value_column: String,
    /// Header of the lower-bound column (interval variant).
    pub lower_column: String,
    /// Header of the upper-bound column (interval variant).
    pub upper_column: String,
    /// Child id sent with host height messages.
    pub pym_id: String,
}

impl Default for GraphicConfig {
    fn default() -> Self {
        Self {
            container: "#graphic".into(),
            data_path: None,
            variant: Variant::Bar,
            mobile_breakpoint: 600,
            default_width: 940,
            throttle_ms: 250,
            label_column: "state".into(),
            value_column: "pct".into(),
            lower_column: "pct_lower".into(),
            upper_column: "pct_upper".into(),
            pym_id: "graphic".into(),
        }
    }
}

impl GraphicConfig {
    /// Parses a config from TOML text.
    ///
    /// # Errors
    /// Returns [`GraphicError::ConfigParse`] for malformed TOML or unknown keys.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Reads and parses a config file.
    ///
    /// A relative `data_path` is resolved against the file's directory.
    ///
    /// # Errors
    /// Returns [`GraphicError::ConfigRead`] if the file cannot be read, or
    /// [`GraphicError::ConfigParse`] if it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| GraphicError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&content)?;
        if let (Some(data), Some(dir)) = (&config.data_path, path.parent())
            && data.is_relative()
        {
            config.data_path = Some(dir.join(data));
        }
        Ok(config)
    }

    /// The resize throttle interval.
    pub fn throttle_interval(&self) -> Duration {
        Duration::from_millis(self.throttle_ms)
    }

    /// Container id without the leading `#`, for the outer `<div>`.
    pub fn container_id(&self) -> &str {
        self.container.strip_prefix('#').unwrap_or(&self.container)
    }
}
