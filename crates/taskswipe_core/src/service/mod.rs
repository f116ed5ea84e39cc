//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate model, gesture and storage pieces into shell-level APIs.
//! - Keep UI layers decoupled from storage details.

pub mod board;
