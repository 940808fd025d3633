// ABOUTME: Configuration module root for the tracker
// ABOUTME: Environment-only configuration; no configuration files are read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment variable parsing into `TrackerConfig`
pub mod environment;

pub use environment::TrackerConfig;
