// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! - `conversion`: mandatory fields, defaults and listing failures
//! - `retry_attempts`: attempt counting and backoff growth under a paused clock

mod conversion;
mod retry_attempts;
