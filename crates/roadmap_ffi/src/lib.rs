//! Flutter bridge for the roadmap board core.

pub mod api;
