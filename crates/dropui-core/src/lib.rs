#![forbid(unsafe_code)]

//! Core: geometry, text measurement, and the draw-surface boundary.
//!
//! # Role in dropui
//! `dropui-core` is the foundation layer. It owns the integer geometry types
//! used for layout and hit-testing, the [`FontMetrics`] boundary through which
//! the host's font engine is consulted, and the [`DrawSurface`] boundary
//! through which the widget issues its draw calls.
//!
//! # How it fits in the system
//! The widget crate (`dropui-widgets`) computes layout in terms of
//! [`Rect`]/[`Size`], measures labels through a host-supplied [`FontMetrics`],
//! and renders by issuing calls on a host-supplied [`DrawSurface`]. This crate
//! depends on neither the widget nor any host toolkit, so hosts can implement
//! both boundaries against their own rendering stack.

pub mod geometry;
pub mod metrics;
pub mod surface;

pub use geometry::{Rect, Size};
pub use metrics::{CellMetrics, FontMetrics, MonospaceMetrics};
pub use surface::{DrawSurface, IndicatorIcon, RowFill};
