// Copyright 2025 the Hbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Embeddable chart graphics: CSV in, HTML + SVG out.
//!
//! This crate is the `std` side of Hbar:
//! - [`GraphicConfig`] is read from TOML and names the data file, variant and columns.
//! - [`load_dataset`] turns CSV into a validated [`hbar_charts::Dataset`].
//! - [`SvgSurface`] is a [`hbar_core::Surface`] that serializes frames as HTML.
//! - [`Graphic`] ties it together: it renders on demand, throttles resizes with
//!   [`Throttle`], and reports its height through a [`HostNotifier`].
//!
//! ```
//! use hbar_graphic::{Graphic, GraphicConfig, NoHost, SvgSurface};
//!
//! let mut graphic = Graphic::new(GraphicConfig::default(), SvgSurface::new("graphic"), NoHost);
//! graphic.load("state,pct\nAlabama,-5%\nAlaska,10%\n".as_bytes())?;
//! graphic.render(940.0)?;
//! assert!(graphic.surface().to_html().contains(r#"class="bar-1 alaska""#));
//! # Ok::<(), hbar_graphic::GraphicError>(())
//! ```

mod config;
mod controller;
mod data;
mod error;
mod host;
mod svg;
mod throttle;

pub use config::{GraphicConfig, Variant};
pub use controller::{FALLBACK_MESSAGE, Graphic};
pub use data::{load_dataset, load_dataset_path};
pub use error::{GraphicError, Result};
pub use host::{HostNotifier, NoHost, PymNotifier};
pub use svg::{FALLBACK_HEIGHT, SvgSurface};
pub use throttle::Throttle;
