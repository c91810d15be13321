// ABOUTME: Configuration module for the Capsule server
// ABOUTME: Environment-based settings for deployment and runtime behavior
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Capsule Wardrobe Intelligence

//! Configuration management
//!
//! Configuration is environment-only: every setting has a sensible default
//! and can be overridden through environment variables. No configuration
//! files are read.

/// Environment-based server configuration
pub mod environment;

pub use environment::{DatabaseUrl, Environment, LogLevel, ServerConfig};
