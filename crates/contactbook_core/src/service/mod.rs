//! Use-case services.
//!
//! # Responsibility
//! - Orchestrate parsing, command execution and persistence.
//! - Keep the shell decoupled from storage and model details.

pub mod logic_service;
