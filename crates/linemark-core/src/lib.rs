//! Linemark Core
//!
//! This crate provides the core types and error definitions
//! for the linemark markup renderer.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`Block`], [`InlineSpan`], [`HeadingLevel`] - The block data model
//! - [`ClassifierState`] - The classifier state enum
//! - [`LinemarkError`] - Error types

pub mod enums;
pub mod error;
pub mod types;

pub use enums::ClassifierState;
pub use error::{LinemarkError, Result};
pub use types::{Block, HeadingLevel, InlineSpan};
