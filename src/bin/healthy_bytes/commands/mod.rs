// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for healthy-bytes
// ABOUTME: Provides food list management and offline resolution commands

pub mod items;
pub mod resolve;
