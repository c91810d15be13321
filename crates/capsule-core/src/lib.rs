// ABOUTME: Core types and constants for the Capsule wardrobe intelligence platform
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Capsule Wardrobe Intelligence

#![deny(unsafe_code)]

//! # Capsule Core
//!
//! Foundation crate providing shared types and constants for the Capsule
//! wardrobe intelligence platform. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and domain-specific errors
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Core data models (`Garment`, `Outfit`, `StyleProfile`, etc.)

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants and configuration values organized by domain
pub mod constants;

/// Core data models (`Garment`, `Outfit`, `Color`, `StyleProfile`, etc.)
pub mod models;
