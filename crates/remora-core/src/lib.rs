#![forbid(unsafe_code)]

//! Connector geometry kernel (headless).
//!
//! Design goals:
//! - pure, deterministic geometry: every operation is a function of its inputs
//! - "no intersection" is data (`Option`), never a panic or an error
//! - IEEE-754 division semantics are part of the contract: vertical/horizontal
//!   alignment degrades through signed infinity, center-on-center through NaN

pub mod connector;
pub mod geom;

pub use connector::{ConnectorGeometry, boundary_intersection, connector_geometry};
pub use geom::{Bounds, Node, Point};
