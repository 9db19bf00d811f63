// Copyright 2025 the Hbar Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Telling the embedding page how tall the graphic is.

use std::io::Write;

use crate::error::Result;

/// Receives the graphic's height after every render.
pub trait HostNotifier {
    /// Reports the rendered content height in CSS pixels.
    ///
    /// # Errors
    /// Returns an error if the message cannot be delivered.
    fn notify_height(&mut self, height: f64) -> Result<()>;
}

/// Writes pym.js child messages, one per line.
///
/// Messages have the form `pymxPYMx{id}xPYMxheightxPYMx{height}`, with the height
/// rounded up to whole pixels.
#[derive(Debug)]
pub struct PymNotifier<W: Write> {
    id: String,
    out: W,
}

impl<W: Write> PymNotifier<W> {
    /// Creates a notifier for child `id` writing to `out`.
    pub fn new(id: impl Into<String>, out: W) -> Self {
        Self { id: id.into(), out }
    }

    /// Consumes the notifier and returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Formats the height message for child `id`.
    pub fn message(id: &str, height: f64) -> String {
        let height = if height.is_finite() {
            height.max(0.0).ceil()
        } else {
            0.0
        };
        format!("pymxPYMx{id}xPYMxheightxPYMx{height}")
    }
}

impl<W: Write> HostNotifier for PymNotifier<W> {
    fn notify_height(&mut self, height: f64) -> Result<()> {
        writeln!(self.out, "{}", Self::message(&self.id, height))?;
        self.out.flush()?;
        Ok(())
    }
}

/// Discards height notifications (for graphics that are not embedded).
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHost;

impl HostNotifier for NoHost {
    fn notify_height(&mut self, _height: f64) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pym_messages_round_heights_up() {
        let mut host = PymNotifier::new("graphic", Vec::new());
        host.notify_height(110.0).unwrap();
        host.notify_height(204.2).unwrap();
        host.notify_height(f64::NAN).unwrap();
        let out = String::from_utf8(host.into_inner()).unwrap();
        assert_eq!(
            out,
            "pymxPYMxgraphicxPYMxheightxPYMx110\n\
             pymxPYMxgraphicxPYMxheightxPYMx205\n\
             pymxPYMxgraphicxPYMxheightxPYMx0\n"
        );
    }
}
