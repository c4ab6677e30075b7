//! Host-driven flow container.
//!
//! A UI framework measures and places children at different points of its
//! layout pass. [`FlowContainer`] bridges the two: [`FlowContainer::measure`]
//! asks the host to measure each child, partitions them into lines and keeps
//! those lines; [`FlowContainer::layout`] consumes them and asks the host to
//! place every child. The host plugs in through [`FlowHost`].

use std::fmt;

use wrapflow_core::geometry::{Rect, Size};
use wrapflow_core::{debug, warn};

use crate::flow::{ChildBox, FlowLayout, FlowLines};
use crate::spec::{LayoutParams, MeasureSpec};

/// The framework side of a flow container.
pub trait FlowHost {
    /// Host handle for one child element.
    type Child;

    /// Measure `child` against the given specs and return its size, excluding
    /// margins.
    fn measure_child(
        &mut self,
        child: &Self::Child,
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> Size;

    /// Move `child` to `rect` (container-local, excluding margins).
    fn place_child(&mut self, child: &Self::Child, rect: Rect);
}

/// Errors reported by [`FlowContainer::layout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// No measurement is pending: `measure` was never called, its lines were
    /// already consumed by a previous `layout`, or the child list changed
    /// since.
    NotMeasured,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotMeasured => write!(f, "flow container laid out without a pending measure"),
        }
    }
}

impl std::error::Error for LayoutError {}

/// An ordered list of host children, each with its [`LayoutParams`].
#[derive(Debug, Clone)]
pub struct FlowContainer<C> {
    children: Vec<(C, LayoutParams)>,
    pending: Option<FlowLines>,
    measured: Size,
}

impl<C> Default for FlowContainer<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> FlowContainer<C> {
    /// Create an empty container.
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            pending: None,
            measured: Size::ZERO,
        }
    }

    /// Append a child with default params (wrap content, zero margins).
    pub fn push(&mut self, child: C) {
        self.push_with(child, LayoutParams::default());
    }

    /// Append a child with explicit params.
    pub fn push_with(&mut self, child: C, params: LayoutParams) {
        self.children.push((child, params));
        self.pending = None;
    }

    /// Remove all children.
    pub fn clear(&mut self) {
        self.children.clear();
        self.pending = None;
        self.measured = Size::ZERO;
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Children in insertion order.
    pub fn children(&self) -> impl Iterator<Item = &C> + '_ {
        self.children.iter().map(|(child, _)| child)
    }

    /// Params of the child at `index`.
    pub fn params(&self, index: usize) -> Option<&LayoutParams> {
        self.children.get(index).map(|(_, params)| params)
    }

    /// Mutable params of the child at `index`. Invalidates any pending
    /// measurement.
    pub fn params_mut(&mut self, index: usize) -> Option<&mut LayoutParams> {
        self.pending = None;
        self.children.get_mut(index).map(|(_, params)| params)
    }

    /// Size computed by the latest [`measure`](Self::measure).
    pub fn measured_size(&self) -> Size {
        self.measured
    }

    /// Whether a measurement is waiting to be laid out.
    pub fn is_measured(&self) -> bool {
        self.pending.is_some()
    }

    /// Measure every child through `host`, partition them into lines and
    /// return the container size.
    ///
    /// Any lines left over from an earlier measure are dropped.
    pub fn measure<H>(&mut self, host: &mut H, width: MeasureSpec, height: MeasureSpec) -> Size
    where
        H: FlowHost<Child = C>,
    {
        self.pending = None;

        let boxes: Vec<ChildBox> = self
            .children
            .iter()
            .map(|(child, params)| {
                let size = host.measure_child(
                    child,
                    MeasureSpec::for_child(width, params.width),
                    MeasureSpec::for_child(height, params.height),
                );
                ChildBox {
                    width: size.width,
                    height: size.height,
                    margin: params.margin,
                }
            })
            .collect();

        let measured = FlowLayout::new(width, height).measure(boxes);
        self.measured = measured.size;
        self.pending = Some(measured.lines);
        self.measured
    }

    /// Place every child through `host` using the lines from the latest
    /// [`measure`](Self::measure). The lines are consumed.
    pub fn layout<H>(&mut self, host: &mut H) -> Result<(), LayoutError>
    where
        H: FlowHost<Child = C>,
    {
        let Some(lines) = self.pending.take() else {
            warn!(children = self.children.len(), "layout without pending measure");
            return Err(LayoutError::NotMeasured);
        };
        debug_assert_eq!(lines.child_count(), self.children.len());

        debug!(lines = lines.len(), "placing flow children");
        FlowLayout::arrange_with(&lines, |index, rect| {
            if let Some((child, _)) = self.children.get(index) {
                host.place_child(child, rect);
            }
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{Dimension, MeasureMode};
    use std::collections::HashMap;
    use wrapflow_core::geometry::Sides;

    /// Children are fixed-size labels; placements are recorded by name.
    #[derive(Default)]
    struct Recorder {
        specs: Vec<(MeasureSpec, MeasureSpec)>,
        placed: HashMap<&'static str, Rect>,
        order: Vec<&'static str>,
    }

    struct Label {
        name: &'static str,
        size: Size,
    }

    fn label(name: &'static str, width: u32, height: u32) -> Label {
        Label {
            name,
            size: Size::new(width, height),
        }
    }

    impl FlowHost for Recorder {
        type Child = Label;

        fn measure_child(
            &mut self,
            child: &Label,
            width: MeasureSpec,
            height: MeasureSpec,
        ) -> Size {
            self.specs.push((width, height));
            let w = match width.mode {
                MeasureMode::Exact => width.size,
                MeasureMode::AtMost => child.size.width.min(width.size),
                MeasureMode::Unspecified => child.size.width,
            };
            let h = match height.mode {
                MeasureMode::Exact => height.size,
                MeasureMode::AtMost => child.size.height.min(height.size),
                MeasureMode::Unspecified => child.size.height,
            };
            Size::new(w, h)
        }

        fn place_child(&mut self, child: &Label, rect: Rect) {
            self.placed.insert(child.name, rect);
            self.order.push(child.name);
        }
    }

    #[test]
    fn measure_then_layout_places_children() {
        let mut container = FlowContainer::new();
        container.push(label("a", 100, 50));
        container.push(label("b", 100, 50));
        container.push(label("c", 150, 50));

        let mut host = Recorder::default();
        let size = container.measure(
            &mut host,
            MeasureSpec::at_most(300),
            MeasureSpec::unspecified(),
        );
        assert_eq!(size, Size::new(200, 100));
        assert_eq!(container.measured_size(), size);

        container.layout(&mut host).unwrap();
        assert_eq!(host.order, vec!["a", "b", "c"]);
        assert_eq!(host.placed["a"], Rect::new(0, 0, 100, 50));
        assert_eq!(host.placed["b"], Rect::new(100, 0, 100, 50));
        assert_eq!(host.placed["c"], Rect::new(0, 50, 150, 50));
    }

    #[test]
    fn default_params_have_zero_margin() {
        let mut container = FlowContainer::new();
        container.push(label("a", 1, 1));
        assert_eq!(container.params(0), Some(&LayoutParams::default()));
        assert_eq!(container.params(0).map(|p| p.margin), Some(Sides::ZERO));
        assert!(container.params(1).is_none());
    }

    #[test]
    fn children_measured_against_derived_specs() {
        let mut container = FlowContainer::new();
        container.push(label("wrap", 10, 10));
        container.push_with(
            label("fixed", 10, 10),
            LayoutParams::default()
                .width(Dimension::Fixed(25))
                .height(Dimension::MatchParent),
        );

        let mut host = Recorder::default();
        container.measure(&mut host, MeasureSpec::exact(300), MeasureSpec::at_most(80));
        assert_eq!(
            host.specs,
            vec![
                (MeasureSpec::at_most(300), MeasureSpec::at_most(80)),
                (MeasureSpec::exact(25), MeasureSpec::at_most(80)),
            ]
        );
    }

    #[test]
    fn margins_from_params_shift_placement() {
        let mut container = FlowContainer::new();
        container.push_with(
            label("a", 40, 10),
            LayoutParams::with_margin(Sides::new(1, 2, 3, 4)),
        );
        container.push(label("b", 40, 10));

        let mut host = Recorder::default();
        let size = container.measure(
            &mut host,
            MeasureSpec::at_most(100),
            MeasureSpec::unspecified(),
        );
        assert_eq!(size, Size::new(86, 14));

        container.layout(&mut host).unwrap();
        assert_eq!(host.placed["a"], Rect::new(4, 1, 40, 10));
        assert_eq!(host.placed["b"], Rect::new(46, 0, 40, 10));
    }

    #[test]
    fn layout_without_measure_is_an_error() {
        let mut container: FlowContainer<Label> = FlowContainer::new();
        let mut host = Recorder::default();
        assert_eq!(container.layout(&mut host), Err(LayoutError::NotMeasured));
    }

    #[test]
    fn layout_consumes_pending_lines() {
        let mut container = FlowContainer::new();
        container.push(label("a", 5, 5));
        let mut host = Recorder::default();

        container.measure(&mut host, MeasureSpec::at_most(10), MeasureSpec::unspecified());
        assert!(container.is_measured());
        assert!(container.layout(&mut host).is_ok());
        assert!(!container.is_measured());
        assert_eq!(container.layout(&mut host), Err(LayoutError::NotMeasured));
    }

    #[test]
    fn mutation_invalidates_pending_measure() {
        let mut container = FlowContainer::new();
        container.push(label("a", 5, 5));
        let mut host = Recorder::default();

        container.measure(&mut host, MeasureSpec::at_most(10), MeasureSpec::unspecified());
        container.push(label("b", 5, 5));
        assert_eq!(container.layout(&mut host), Err(LayoutError::NotMeasured));

        container.measure(&mut host, MeasureSpec::at_most(10), MeasureSpec::unspecified());
        if let Some(params) = container.params_mut(0) {
            params.margin = Sides::all(1);
        }
        assert_eq!(container.layout(&mut host), Err(LayoutError::NotMeasured));
    }

    #[test]
    fn remeasure_replaces_previous_lines() {
        let mut container = FlowContainer::new();
        for name in ["a", "b", "c", "d"] {
            container.push(label(name, 100, 10));
        }
        let mut host = Recorder::default();

        container.measure(&mut host, MeasureSpec::at_most(150), MeasureSpec::unspecified());
        let size = container.measure(
            &mut host,
            MeasureSpec::at_most(1000),
            MeasureSpec::unspecified(),
        );
        assert_eq!(size, Size::new(400, 10));

        container.layout(&mut host).unwrap();
        assert_eq!(host.placed["d"], Rect::new(300, 0, 100, 10));
    }

    #[test]
    fn empty_container_measures_zero() {
        let mut container: FlowContainer<Label> = FlowContainer::default();
        let mut host = Recorder::default();
        let size = container.measure(&mut host, MeasureSpec::at_most(10), MeasureSpec::at_most(10));
        assert_eq!(size, Size::ZERO);
        container.layout(&mut host).unwrap();
        assert!(host.order.is_empty());

        let size = container.measure(&mut host, MeasureSpec::exact(10), MeasureSpec::exact(7));
        assert_eq!(size, Size::new(10, 7));
    }

    #[test]
    fn clear_resets_state() {
        let mut container = FlowContainer::new();
        container.push(label("a", 5, 5));
        let mut host = Recorder::default();
        container.measure(&mut host, MeasureSpec::at_most(10), MeasureSpec::unspecified());

        container.clear();
        assert!(container.is_empty());
        assert_eq!(container.measured_size(), Size::ZERO);
        assert!(!container.is_measured());
    }

    #[test]
    fn error_display() {
        assert_eq!(
            LayoutError::NotMeasured.to_string(),
            "flow container laid out without a pending measure"
        );
    }
}
