// ABOUTME: Unified error handling with standard error codes for the nutrition tracker
// ABOUTME: Defines AppError, ErrorCode, and conversions from serialization and IO failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! One error type for every boundary of the tracker: barcode input, product
//! lookup, ledger persistence, and configuration.
//!
//! Nutrient resolution never fails. Malformed or missing nutrition data
//! degrades to zero instead of producing an error, and a product that does
//! not exist is `Ok(None)` from the lookup rather than an error.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// A barcode or argument was rejected
    InvalidInput = 3000,
    /// A document did not have the expected shape
    InvalidFormat = 3002,

    // Resources (4000-4999)
    /// No such food item (or file)
    ResourceNotFound = 4000,

    // External services (5000-5999)
    /// The product service answered with something unusable
    ExternalServiceError = 5000,
    /// The product service could not be reached or failed server-side
    ExternalServiceUnavailable = 5001,
    /// The product service throttled the request
    ExternalRateLimited = 5003,

    // Configuration (6000-6999)
    /// An environment variable holds an unusable value
    ConfigInvalid = 6002,

    // Internal (9000-9999)
    /// Unexpected failure inside the tracker
    InternalError = 9000,
    /// The ledger file could not be read or written
    StorageError = 9002,
    /// JSON could not be encoded or decoded
    SerializationError = 9003,
}

impl ErrorCode {
    /// Short description shown before the message
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "Invalid input",
            Self::InvalidFormat => "Invalid data format",
            Self::ResourceNotFound => "Not found",
            Self::ExternalServiceError => "Product service error",
            Self::ExternalServiceUnavailable => "Product service unavailable",
            Self::ExternalRateLimited => "Product service rate limited",
            Self::ConfigInvalid => "Invalid configuration",
            Self::InternalError => "Internal error",
            Self::StorageError => "Storage failure",
            Self::SerializationError => "Serialization failure",
        }
    }

    /// Transient lookup failures; the same barcode may succeed on retry
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ExternalServiceError
                | Self::ExternalServiceUnavailable
                | Self::ExternalRateLimited
        )
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Barcode, item id, or file path the error concerns
    pub resource_id: Option<String>,
    /// Structured extras such as an HTTP status
    pub details: Value,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            resource_id: None,
            details: Value::Object(Map::new()),
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Underlying error, if any
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create an error with an empty context
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    fn from_service(code: ErrorCode, service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(code, format!("{}: {}", service.into(), message.into()))
    }

    /// Attach the barcode, item id, or path involved
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.context.resource_id = Some(resource_id.into());
        self
    }

    /// Attach structured details
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.context.details = details;
        self
    }

    /// Chain the underlying error
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// See [`ErrorCode::is_retryable`]
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        self.code.is_retryable()
    }

    /// `<resource> not found`
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Rejected barcode or argument
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Document of the wrong shape
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message)
    }

    /// Unexpected internal failure
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Unusable configuration value
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Ledger read or write failure
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    /// JSON encode or decode failure
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Unusable response from `service`
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::from_service(ErrorCode::ExternalServiceError, service, message)
    }

    /// `service` unreachable or failing server-side
    pub fn external_unavailable(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::from_service(ErrorCode::ExternalServiceUnavailable, service, message)
    }

    /// `service` throttled the request
    pub fn external_rate_limited(service: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExternalRateLimited,
            format!("{} rate limit exceeded", service.into()),
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::storage(error.to_string()).with_source(error)
    }
}
