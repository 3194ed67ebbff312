//! Core types for planview AHU plan-view diagrams.
//!
//! This crate contains everything the layout engine in the `planview` crate
//! builds on, without any layout policy of its own:
//!
//! - [`geometry`] - points, sizes, and axis-aligned rectangles
//! - [`color`] - a thin wrapper over the `color` crate
//! - [`draw`] - the drawable primitive model ([`draw::Primitive`],
//!   [`draw::Scene`], [`draw::RenderTarget`]) and z-order layers
//! - [`model`] - the AHU domain model ([`model::ModuleDimension`],
//!   [`model::UnitConfig`]) deserialized from unit configuration documents
//! - [`dimension`] - defensive parsing of free-form dimension strings

pub mod color;
pub mod dimension;
pub mod draw;
pub mod geometry;
pub mod model;
