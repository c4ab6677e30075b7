//! Measurement constraints and per-child layout parameters.
//!
//! A [`MeasureSpec`] is the constraint a parent hands down on one axis. A
//! child's [`LayoutParams`] say how it wants to be sized on each axis and
//! which margins surround it; [`MeasureSpec::for_child`] combines the two.

use wrapflow_core::geometry::Sides;

/// How a [`MeasureSpec`] constrains its axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MeasureMode {
    /// The axis must be exactly `size`.
    Exact,
    /// The axis may use up to `size`.
    AtMost,
    /// No constraint. A non-zero `size` is still used as the wrap budget.
    #[default]
    Unspecified,
}

/// A one-axis size constraint: mode plus value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MeasureSpec {
    pub mode: MeasureMode,
    pub size: u32,
}

impl MeasureSpec {
    /// Unconstrained axis.
    pub const UNSPECIFIED: Self = Self {
        mode: MeasureMode::Unspecified,
        size: 0,
    };

    /// The axis is exactly `size`.
    #[inline]
    pub const fn exact(size: u32) -> Self {
        Self {
            mode: MeasureMode::Exact,
            size,
        }
    }

    /// The axis may use up to `size`.
    #[inline]
    pub const fn at_most(size: u32) -> Self {
        Self {
            mode: MeasureMode::AtMost,
            size,
        }
    }

    /// No constraint on the axis.
    #[inline]
    pub const fn unspecified() -> Self {
        Self::UNSPECIFIED
    }

    /// Whether the axis is fixed at `size`.
    #[inline]
    pub const fn is_exact(self) -> bool {
        matches!(self.mode, MeasureMode::Exact)
    }

    /// Budget used when deciding whether a child still fits on the current
    /// line. This is `size` in every mode; only an [`MeasureMode::Unspecified`]
    /// spec carrying no size is unbounded.
    #[inline]
    pub const fn wrap_limit(self) -> u32 {
        match self.mode {
            MeasureMode::Unspecified if self.size == 0 => u32::MAX,
            _ => self.size,
        }
    }

    /// Size the axis reports given the extent of its content.
    ///
    /// `AtMost` is not clamped: an overflowing child makes the container
    /// report its true content extent.
    #[inline]
    pub const fn resolve(self, content: u32) -> u32 {
        if self.is_exact() { self.size } else { content }
    }

    /// Derive the spec a child is measured against from the parent's spec and
    /// the child's requested dimension on the same axis.
    ///
    /// | parent \ child | `Fixed(n)`  | `MatchParent` | `WrapContent` |
    /// |----------------|-------------|---------------|---------------|
    /// | `Exact(s)`     | `Exact(n)`  | `Exact(s)`    | `AtMost(s)`   |
    /// | `AtMost(s)`    | `Exact(n)`  | `AtMost(s)`   | `AtMost(s)`   |
    /// | `Unspecified`  | `Exact(n)`  | `Unspecified` | `Unspecified` |
    pub const fn for_child(parent: MeasureSpec, dimension: Dimension) -> MeasureSpec {
        match (parent.mode, dimension) {
            (_, Dimension::Fixed(n)) => Self::exact(n),
            (MeasureMode::Exact, Dimension::MatchParent) => Self::exact(parent.size),
            (MeasureMode::Exact | MeasureMode::AtMost, _) => Self::at_most(parent.size),
            (MeasureMode::Unspecified, _) => Self::UNSPECIFIED,
        }
    }
}

/// A child's requested size on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dimension {
    /// As large as the content needs.
    #[default]
    WrapContent,
    /// As large as the parent allows.
    MatchParent,
    /// A fixed size.
    Fixed(u32),
}

/// Per-child layout parameters: requested dimensions and margins.
///
/// Every child in a flow container carries one. Children added without
/// explicit parameters get [`LayoutParams::default`]: wrap content on both
/// axes with zero margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LayoutParams {
    pub width: Dimension,
    pub height: Dimension,
    pub margin: Sides,
}

impl LayoutParams {
    /// Wrap-content params with the given margin.
    pub fn with_margin(margin: impl Into<Sides>) -> Self {
        Self {
            margin: margin.into(),
            ..Self::default()
        }
    }

    /// Set the requested width.
    pub fn width(mut self, width: Dimension) -> Self {
        self.width = width;
        self
    }

    /// Set the requested height.
    pub fn height(mut self, height: Dimension) -> Self {
        self.height = height;
        self
    }

    /// Set the margin.
    pub fn margin(mut self, margin: impl Into<Sides>) -> Self {
        self.margin = margin.into();
        self
    }
}
