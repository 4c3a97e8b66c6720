// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Entry Point
//!
//! This test suite uses proptest to verify properties of wire conversion
//! and of the retry executor that must hold for all inputs.

mod fixtures;
mod property;
