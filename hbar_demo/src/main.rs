// Copyright 2025 the Hbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command-line renderer for Hbar graphics.

mod cli;

use std::io::Write;
use std::path::Path;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use hbar_core::{Surface, TextMeasurer};
use hbar_graphic::{Graphic, GraphicConfig, HostNotifier, PymNotifier, SvgSurface};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

/// Spacing between replayed resize events.
const RESIZE_STEP: Duration = Duration::from_millis(100);

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn demo_measurer() -> Box<dyn TextMeasurer> {
    #[cfg(feature = "parley")]
    {
        Box::new(hbar_text_parley::ParleyTextMeasurer::new())
    }

    #[cfg(not(feature = "parley"))]
    {
        Box::new(hbar_core::HeuristicTextMeasurer)
    }
}

/// Loads the data file into `graphic`, logging why when it cannot.
fn load_data<S: Surface, N: HostNotifier>(
    graphic: &mut Graphic<S, N>,
    data_path: Option<&Path>,
) -> bool {
    let Some(path) = data_path else {
        error!("no data file given (use --data or `data_path` in the config)");
        return false;
    };
    if let Err(e) = graphic.load_path(path) {
        error!(path = %path.display(), "{e}");
        return false;
    }
    true
}

/// Renders the graphic; returns `Ok(false)` when only the fallback could be shown.
fn run(cli: &Cli) -> hbar_graphic::Result<bool> {
    let mut config = match &cli.config {
        Some(path) => GraphicConfig::load(path)?,
        None => GraphicConfig::default(),
    };
    if let Some(data) = &cli.data {
        config.data_path = Some(data.clone());
    }
    if let Some(variant) = cli.variant {
        config.variant = variant.into();
    }
    let width = cli.width.unwrap_or(f64::from(config.default_width));
    let data_path = config.data_path.clone();

    let surface = SvgSurface::with_measurer(config.container_id(), demo_measurer());
    let host = PymNotifier::new(config.pym_id.clone(), std::io::stdout());
    let mut graphic = Graphic::new(config, surface, host);

    let loaded = load_data(&mut graphic, data_path.as_deref());

    let t0 = Instant::now();
    graphic.render(width)?;
    for (step, resize) in (1..).zip(&cli.resize) {
        graphic.on_resize_at(*resize, t0 + RESIZE_STEP * step)?;
    }
    if let Some(due) = graphic.next_deadline() {
        graphic.poll_at(due)?;
    }

    let html = graphic.surface().to_html();
    match &cli.out {
        Some(path) => {
            std::fs::write(path, &html)?;
            info!(path = %path.display(), width = graphic.last_width(), "wrote graphic");
        }
        None => std::io::stdout().write_all(html.as_bytes())?,
    }
    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;

    use hbar_graphic::NoHost;

    fn graphic() -> Graphic<SvgSurface, NoHost> {
        Graphic::new(GraphicConfig::default(), SvgSurface::new("graphic"), NoHost)
    }

    #[test]
    fn unreadable_data_file_reports_failure() {
        let path = std::env::temp_dir().join("hbar-demo-missing").join("absent.csv");
        let mut g = graphic();
        assert!(!load_data(&mut g, Some(path.as_path())));
        assert!(g.dataset().is_none());

        g.render(940.0).unwrap();
        assert!(g.surface().is_fallback());
    }

    #[test]
    fn missing_data_path_reports_failure() {
        let mut g = graphic();
        assert!(!load_data(&mut g, None));
    }
}
