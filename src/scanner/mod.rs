// ABOUTME: Barcode scanning capability and confirmation of detections
// ABOUTME: Defines BarcodeSource streams and drives them through the ScanConfirmer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Barcode scanning
//!
//! A camera decoder emits a detection for every frame in which it recognizes
//! a code. Single frames are noisy, so a code is only accepted after the
//! [`ScanConfirmer`] has seen it repeatedly with enough confidence.

mod confirmation;

use async_stream::stream;
use async_trait::async_trait;
use futures_util::stream::{self, BoxStream};
use futures_util::StreamExt;
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::warn;

pub use confirmation::{ScanConfirmer, ScannerConfig};

use crate::errors::AppResult;
use crate::models::Barcode;

/// One decoder read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanDetection {
    /// Decoded code text
    pub code: String,
    /// Decoder confidence (0.0..=1.0)
    pub confidence: f64,
}

impl ScanDetection {
    /// Create a detection
    #[must_use]
    pub fn new(code: impl Into<String>, confidence: f64) -> Self {
        Self {
            code: code.into(),
            confidence,
        }
    }
}

/// Stream of decoder reads
pub type DetectionStream<'a> = BoxStream<'a, ScanDetection>;

/// Capability producing barcode detections (camera decoder, replay, pipe)
#[async_trait]
pub trait BarcodeSource: Send {
    /// Start producing detections
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying device cannot be opened.
    async fn detections(&mut self) -> AppResult<DetectionStream<'_>>;
}

/// Drive `detections` until a barcode is confirmed
///
/// Returns `None` if the stream ends first.
pub async fn confirm_from_stream(
    mut detections: DetectionStream<'_>,
    confirmer: &mut ScanConfirmer,
) -> Option<Barcode> {
    while let Some(detection) = detections.next().await {
        if let Some(barcode) = confirmer.observe(&detection) {
            return Some(barcode);
        }
    }
    None
}

/// Replays a fixed sequence of detections
#[derive(Debug, Clone, Default)]
pub struct ReplaySource {
    detections: Vec<ScanDetection>,
}

impl ReplaySource {
    /// Create a source replaying `detections` in order
    #[must_use]
    pub const fn new(detections: Vec<ScanDetection>) -> Self {
        Self { detections }
    }
}

#[async_trait]
impl BarcodeSource for ReplaySource {
    async fn detections(&mut self) -> AppResult<DetectionStream<'_>> {
        Ok(stream::iter(self.detections.clone()).boxed())
    }
}

/// Reads detections from text lines of the form `<code> [confidence]`
///
/// Suited to piping an external decoder into the CLI. A missing confidence
/// counts as a certain read; blank lines are skipped.
pub struct LineSource<R> {
    reader: R,
}

impl<R> LineSource<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    /// Wrap a buffered reader
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }
}

/// Parse one `<code> [confidence]` line
#[must_use]
pub fn parse_detection_line(line: &str) -> Option<ScanDetection> {
    let mut parts = line.split_whitespace();
    let code = parts.next()?;
    let confidence = match parts.next() {
        Some(raw) => raw.parse::<f64>().ok()?,
        None => 1.0,
    };
    Some(ScanDetection::new(code, confidence))
}

#[async_trait]
impl<R> BarcodeSource for LineSource<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn detections(&mut self) -> AppResult<DetectionStream<'_>> {
        let reader = &mut self.reader;
        let lines = stream! {
            let mut lines = reader.lines();
            loop {
                match lines.next_line().await {
                    Ok(Some(line)) if line.trim().is_empty() => {}
                    Ok(Some(line)) => match parse_detection_line(&line) {
                        Some(detection) => yield detection,
                        None => warn!(line = %line, "Skipping malformed detection line"),
                    },
                    Ok(None) => break,
                    Err(e) => {
                        warn!(error = %e, "Detection input failed");
                        break;
                    }
                }
            }
        };
        Ok(lines.boxed())
    }
}
