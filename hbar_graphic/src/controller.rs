// Copyright 2025 the Hbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The graphic controller: data, rendering, resize and host notification in one place.

use std::io::Read;
use std::path::Path;
use std::time::Instant;

use hbar_charts::{Chart, Dataset, RenderContext, render};
use hbar_core::Surface;
use tracing::{debug, info, trace, warn};

use crate::config::GraphicConfig;
use crate::data::{load_dataset, load_dataset_path};
use crate::error::Result;
use crate::host::{HostNotifier, NoHost};
use crate::throttle::Throttle;

/// Message shown when no data could be loaded.
pub const FALLBACK_MESSAGE: &str = "Data unavailable";

/// Owns one embedded graphic.
///
/// The controller caches the loaded [`Dataset`] and re-renders it on demand. Every render
/// is a full redraw into the surface followed by a height notification to the host.
/// Without a dataset (nothing loaded yet, or the last load failed) renders show the
/// fallback message instead of a chart.
#[derive(Debug)]
pub struct Graphic<S, N = NoHost> {
    config: GraphicConfig,
    chart: Chart,
    surface: S,
    host: N,
    data: Option<Dataset>,
    throttle: Throttle<f64>,
    last_width: Option<f64>,
}

impl<S: Surface, N: HostNotifier> Graphic<S, N> {
    /// Creates a controller with the chart for `config.variant`.
    pub fn new(config: GraphicConfig, surface: S, host: N) -> Self {
        let chart = config.variant.chart();
        let throttle = Throttle::new(config.throttle_interval());
        Self {
            config,
            chart,
            surface,
            host,
            data: None,
            throttle,
            last_width: None,
        }
    }

    /// Replaces the chart settings (the data is kept).
    #[must_use]
    pub fn with_chart(mut self, chart: impl Into<Chart>) -> Self {
        self.chart = chart.into();
        self
    }

    /// Loads and caches CSV data.
    ///
    /// On failure the cached dataset is dropped, so the next render shows the fallback.
    ///
    /// # Errors
    /// Returns any error from [`load_dataset`].
    pub fn load<R: Read>(&mut self, reader: R) -> Result<()> {
        let loaded = load_dataset(reader, &self.config);
        self.store(loaded)
    }

    /// Loads and caches CSV data from a file.
    ///
    /// # Errors
    /// Returns any error from [`load_dataset_path`].
    pub fn load_path(&mut self, path: &Path) -> Result<()> {
        let loaded = load_dataset_path(path, &self.config);
        self.store(loaded)
    }

    /// Caches an already validated dataset.
    pub fn set_dataset(&mut self, data: Dataset) {
        self.data = Some(data);
    }

    fn store(&mut self, loaded: Result<Dataset>) -> Result<()> {
        match loaded {
            Ok(data) => {
                info!(rows = data.len(), variant = ?self.config.variant, "data loaded");
                self.data = Some(data);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "data load failed, showing fallback");
                self.data = None;
                Err(e)
            }
        }
    }

    /// Renders at `width` and notifies the host of the new height.
    ///
    /// A width that is zero, negative or not finite uses the configured default width.
    ///
    /// # Errors
    /// Returns an error if the host notification fails.
    pub fn render(&mut self, width: f64) -> Result<()> {
        let width = if width.is_finite() && width > 0.0 {
            width
        } else {
            f64::from(self.config.default_width)
        };
        let ctx = RenderContext::for_width(width, f64::from(self.config.mobile_breakpoint));
        self.last_width = Some(width);

        match &self.data {
            Some(data) => {
                debug!(
                    width,
                    mobile = ctx.mobile,
                    rows = data.len(),
                    "rendering chart"
                );
                render(&mut self.surface, &self.chart, &ctx, data);
            }
            None => {
                debug!(width, "rendering fallback");
                self.surface.clear();
                self.surface.present_fallback(FALLBACK_MESSAGE);
            }
        }
        self.host.notify_height(self.surface.rendered_height())
    }

    /// Handles a container resize at time `now`.
    ///
    /// Returns `true` if a render happened. Resizes arriving within the throttle interval
    /// of the previous render are held; only the latest is kept for [`Graphic::poll_at`].
    ///
    /// # Errors
    /// Returns an error if the host notification fails.
    pub fn on_resize_at(&mut self, width: f64, now: Instant) -> Result<bool> {
        match self.throttle.call_at(width, now) {
            Some(width) => {
                self.render(width)?;
                Ok(true)
            }
            None => {
                trace!(width, "resize throttled");
                Ok(false)
            }
        }
    }

    /// Renders a held resize once the throttle interval has elapsed.
    ///
    /// Returns `true` if a render happened.
    ///
    /// # Errors
    /// Returns an error if the host notification fails.
    pub fn poll_at(&mut self, now: Instant) -> Result<bool> {
        match self.throttle.poll_at(now) {
            Some(width) => {
                self.render(width)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// When a held resize becomes due, if there is one.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.throttle.deadline()
    }

    /// Width of the most recent render.
    pub fn last_width(&self) -> Option<f64> {
        self.last_width
    }

    /// The cached dataset.
    pub fn dataset(&self) -> Option<&Dataset> {
        self.data.as_ref()
    }

    /// The configuration this graphic was built with.
    pub fn config(&self) -> &GraphicConfig {
        &self.config
    }

    /// The render target.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The host notifier.
    pub fn host(&self) -> &N {
        &self.host
    }

    /// Consumes the controller, returning the surface and host.
    pub fn into_parts(self) -> (S, N) {
        (self.surface, self.host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    use crate::error::GraphicError;
    use crate::host::PymNotifier;
    use crate::svg::SvgSurface;

    const CSV: &str = "state,pct\nAlabama,-5%\nAlaska,10%\n";

    fn graphic() -> Graphic<SvgSurface, PymNotifier<Vec<u8>>> {
        let config = GraphicConfig::default();
        let host = PymNotifier::new(config.pym_id.clone(), Vec::new());
        Graphic::new(config, SvgSurface::new("graphic"), host)
    }

    fn messages(graphic: Graphic<SvgSurface, PymNotifier<Vec<u8>>>) -> Vec<String> {
        let (_, host) = graphic.into_parts();
        String::from_utf8(host.into_inner())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn render_notifies_the_host_of_the_chart_height() {
        let mut g = graphic();
        g.load(CSV.as_bytes()).unwrap();
        g.render(940.0).unwrap();
        // 10 top + 2 * (30 + 5) rows + 30 bottom.
        assert_eq!(g.surface().rendered_height(), 110.0);
        assert_eq!(messages(g), ["pymxPYMxgraphicxPYMxheightxPYMx110"]);
    }

    #[test]
    fn unusable_width_falls_back_to_default() {
        let mut g = graphic();
        g.load(CSV.as_bytes()).unwrap();
        g.render(0.0).unwrap();
        assert_eq!(g.last_width(), Some(940.0));
        g.render(f64::NAN).unwrap();
        assert_eq!(g.last_width(), Some(940.0));
    }

    #[test]
    fn failed_load_renders_the_fallback() {
        let mut g = graphic();
        g.load(CSV.as_bytes()).unwrap();
        let err = g.load("state,pct\nAlabama,lots\n".as_bytes()).unwrap_err();
        assert!(matches!(err, GraphicError::DataFormat { row: 1, .. }));
        assert!(g.dataset().is_none());

        g.render(940.0).unwrap();
        assert!(g.surface().is_fallback());
        assert!(g.surface().to_html().contains(FALLBACK_MESSAGE));
    }

    #[test]
    fn resizes_are_throttled_to_the_latest_width() {
        let mut g = graphic();
        g.load(CSV.as_bytes()).unwrap();
        let t0 = Instant::now();
        let ms = Duration::from_millis(1);

        assert!(g.on_resize_at(940.0, t0).unwrap());
        assert!(!g.on_resize_at(700.0, t0 + 50 * ms).unwrap());
        assert!(!g.on_resize_at(500.0, t0 + 100 * ms).unwrap());
        assert_eq!(g.next_deadline(), Some(t0 + 250 * ms));
        assert!(!g.poll_at(t0 + 200 * ms).unwrap());
        assert_eq!(g.last_width(), Some(940.0));

        assert!(g.poll_at(t0 + 250 * ms).unwrap());
        assert_eq!(g.last_width(), Some(500.0));
        assert_eq!(messages(g).len(), 2);
    }

    #[test]
    fn mobile_width_narrows_the_label_column() {
        let mut g = graphic();
        g.load(CSV.as_bytes()).unwrap();
        g.render(940.0).unwrap();
        let desktop = g.surface().frame().unwrap().origin.x;
        g.render(480.0).unwrap();
        let mobile = g.surface().frame().unwrap().origin.x;
        assert_eq!(desktop, 256.0);
        assert!(mobile < desktop);
    }
}
