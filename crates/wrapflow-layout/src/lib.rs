#![forbid(unsafe_code)]

//! Flow (wrap) layout.
//!
//! Children are laid out left to right and wrap onto a new line whenever the
//! next child would overflow the available width.
//!
//! - [`FlowLayout`] - the engine: [`measure`](FlowLayout::measure) partitions
//!   children into lines, [`arrange`](FlowLayout::arrange) places them
//! - [`MeasureSpec`] - per-axis constraint (exact, at-most, unspecified)
//! - [`LayoutParams`] - per-child requested dimensions and margins
//! - [`FlowContainer`] - host-driven measure/layout pass over a [`FlowHost`]
//!
//! # Two-phase layout
//!
//! Measurement and arrangement are separate calls. The lines produced by a
//! measure are returned by value and are the only input to arrange, so the
//! positions always agree with the size that was reported:
//!
//! ```
//! use wrapflow_layout::{ChildBox, FlowLayout, MeasureSpec};
//!
//! let flow = FlowLayout::new(MeasureSpec::at_most(120), MeasureSpec::unspecified());
//! let measured = flow.measure((0..5).map(|_| ChildBox::new(50, 10).margin(2)));
//! assert_eq!(measured.lines.len(), 3);
//!
//! for placement in FlowLayout::arrange(&measured.lines) {
//!     assert_eq!(placement.rect.width, 50);
//! }
//! ```

pub mod container;
pub mod flow;
pub mod spec;

pub use container::{FlowContainer, FlowHost, LayoutError};
pub use flow::{ChildBox, FlowLayout, FlowLines, FlowMeasurement, Line, LineItem, Placement};
pub use spec::{Dimension, LayoutParams, MeasureMode, MeasureSpec};
pub use wrapflow_core::geometry::{Rect, Sides, Size};
