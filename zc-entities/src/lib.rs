#![deny(missing_debug_implementations)]

//! # zc-entities
//!
//! Reusable, agnostic domain entities for Zip Crusher.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod color;
pub mod geo;
pub mod group;
pub mod layer;
pub mod zip;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
