//! # rca-core
//!
//! Core types, ID formatting, and error types for the RCA assistant.
//!
//! This crate provides the foundational types shared across all `rca` crates:
//! - Chat transcript structs (turns and their attached result cards)
//! - Static catalog entities (incidents, service cards, latency samples)
//! - Category, severity, and status enums
//! - ID prefix constants and formatting helpers
//! - Cross-cutting error types
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;
