//! Organism simulation engine.
//!
//! This crate implements the organism data model and the iteration step that
//! advances the whole population one tick at a time.

pub mod organism;
pub mod iterate;

pub use iterate::{iterate, iterate_with_config, random_position};
pub use organism::{Attributes, Organism, State, StateKind, Update};
