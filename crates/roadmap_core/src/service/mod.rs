//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store, selection and drag state into UI-level operations.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod board_service;
