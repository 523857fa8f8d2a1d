//! # duskswitch-domain
//!
//! Pure domain model for the duskswitch theme toggler.
//!
//! ## Responsibilities
//! - Define the **Theme** preference (`dark` / `light`) and how it is
//!   encoded in, and decoded from, the persisted store
//! - Define the error conventions shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or browser crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod theme;
