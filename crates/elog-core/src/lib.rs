//! # elog-core
//!
//! Core types and pure logic for the elog client.
//!
//! This crate has no I/O. It provides:
//! - Entity structs for entries, entry forms, attachments and logbooks, in both
//!   their raw wire shape and their normalized shape
//! - Shift labelling around a configurable historical cutoff
//! - Entry normalization (UTC designator correction, shift derivation,
//!   recursion into follow-ups, history and the followed-up entry)
//! - Query-parameter construction for entry listing
//! - Timestamp helpers used on the write path

pub mod entities;
pub mod enums;
pub mod errors;
pub mod normalize;
pub mod query;
pub mod shift;
pub mod timestamp;

pub use errors::CoreError;
