//! siftflow_core — generic filter→map→consume pipeline primitives
//!
//! This crate provides the core building blocks for driving an in-memory
//! sequence through caller-supplied behavior: a selector decides which
//! elements proceed, a transform derives a value from each accepted element,
//! and a sink consumes the results, one element at a time and in source order.
//!
//! Basic usage:
//!
//! ```
//! use siftflow_core::pipeline::process_elements;
//! use siftflow_core::roster::{sample_roster, Gender, Person};
//!
//! process_elements(
//!     sample_roster(),
//!     |p: &Person| p.gender == Gender::Male && p.age >= 18 && p.age <= 25,
//!     |p: Person| p.email,
//!     |email: String| println!("{email}"),
//! )
//! .unwrap();
//! ```

pub mod capabilities;
pub mod config;
pub mod builder;
pub mod pipeline;
pub mod roster;

pub mod logging;
