// Copyright 2025 the Hbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use hbar_graphic::Variant;

/// Render a CSV dataset into an embeddable HTML + SVG graphic.
#[derive(Parser, Debug)]
#[command(name = "hbar", version, about)]
pub(crate) struct Cli {
    /// Graphic config file (TOML). Defaults apply when omitted.
    #[arg(short, long)]
    pub(crate) config: Option<PathBuf>,

    /// CSV data file; overrides `data_path` from the config.
    #[arg(short, long)]
    pub(crate) data: Option<PathBuf>,

    /// Chart variant; overrides `variant` from the config.
    #[arg(long, value_enum)]
    pub(crate) variant: Option<VariantArg>,

    /// Container width for the initial render [default: config `default_width`].
    #[arg(short, long)]
    pub(crate) width: Option<f64>,

    /// Replay container resizes, spaced 100 ms apart, through the resize throttle.
    #[arg(long, num_args = 1.., value_name = "WIDTH")]
    pub(crate) resize: Vec<f64>,

    /// Write the HTML fragment here instead of stdout.
    #[arg(short, long)]
    pub(crate) out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum VariantArg {
    /// Diverging horizontal bars.
    Bar,
    /// Confidence intervals with a reference row.
    Interval,
}

impl From<VariantArg> for Variant {
    fn from(value: VariantArg) -> Self {
        match value {
            VariantArg::Bar => Self::Bar,
            VariantArg::Interval => Self::Interval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn resize_takes_several_widths() {
        let cli = Cli::try_parse_from([
            "hbar",
            "--data",
            "data.csv",
            "--variant",
            "interval",
            "--resize",
            "800",
            "480",
        ])
        .unwrap();
        assert_eq!(cli.data, Some(PathBuf::from("data.csv")));
        assert_eq!(cli.variant.map(Variant::from), Some(Variant::Interval));
        assert_eq!(cli.resize, [800.0, 480.0]);
        assert_eq!(cli.width, None);
    }
}
