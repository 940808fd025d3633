// ABOUTME: Re-exports the unified error types from healthy-bytes-core
// ABOUTME: Keeps crate::errors paths stable for the tracker modules and binaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Every fallible operation in the tracker returns [`AppResult`]. Lookup
//! failures carry an [`ErrorCode`] in the 5000 range and report
//! [`AppError::is_retryable`]; a product that simply does not exist is not an
//! error at all (`Ok(None)` from the lookup).

pub use healthy_bytes_core::errors::{AppError, AppResult, ErrorCode, ErrorContext};
