//! # csstags-core
//!
//! Core types and error types for csstags.
//!
//! This crate provides the foundational types shared across all csstags crates:
//! - Tag kinds (`class`, `selector`, `id`) with their static metadata table
//! - The emitted tag record
//! - Cross-cutting error types

pub mod errors;
pub mod kinds;
pub mod tag;

pub use errors::CoreError;
pub use kinds::{KINDS, KindDefinition, TagKind};
pub use tag::Tag;
