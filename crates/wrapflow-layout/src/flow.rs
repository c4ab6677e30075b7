//! Greedy flow layout: line partitioning and child placement.
//!
//! [`FlowLayout::measure`] walks the children in order and breaks to a new
//! line whenever the next child's outer width would push the current line past
//! the width budget. The resulting [`FlowLines`] are handed back to the caller
//! and consumed by [`FlowLayout::arrange`], which turns them into rectangles
//! without re-partitioning.
//!
//! # Invariants
//!
//! - Every child lands in exactly one line; line order and in-line order
//!   follow input order.
//! - A line only exceeds the budget when it holds a single child.
//! - Each line's height is the tallest outer height among its children.

use wrapflow_core::geometry::{Rect, Sides, Size};
use wrapflow_core::{debug, debug_span, trace};

use crate::spec::MeasureSpec;

/// A measured child as seen by the flow engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ChildBox {
    /// Measured width, excluding margins.
    pub width: u32,
    /// Measured height, excluding margins.
    pub height: u32,
    pub margin: Sides,
}

impl ChildBox {
    /// A child of the given measured size with zero margins.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            margin: Sides::ZERO,
        }
    }

    /// Set the margin.
    #[must_use]
    pub fn margin(mut self, margin: impl Into<Sides>) -> Self {
        self.margin = margin.into();
        self
    }

    /// Measured size, excluding margins.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Size including margins.
    #[inline]
    pub const fn outer_size(&self) -> Size {
        self.size().expand(self.margin)
    }

    #[inline]
    pub const fn outer_width(&self) -> u32 {
        self.width.saturating_add(self.margin.horizontal_sum())
    }

    #[inline]
    pub const fn outer_height(&self) -> u32 {
        self.height.saturating_add(self.margin.vertical_sum())
    }
}

/// A child placed on a line, tagged with its input position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineItem {
    pub index: usize,
    pub child: ChildBox,
}

/// One row of children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    items: Vec<LineItem>,
    width: u32,
    height: u32,
}

impl Line {
    fn push(&mut self, index: usize, child: ChildBox) {
        self.width = self.width.saturating_add(child.outer_width());
        self.height = self.height.max(child.outer_height());
        self.items.push(LineItem { index, child });
    }

    /// Children on this line, in input order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Input indices of the children on this line.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.items.iter().map(|item| item.index)
    }

    /// Sum of outer widths.
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Tallest outer height, as recorded when the line was closed.
    pub const fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The line grouping produced by one [`FlowLayout::measure`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowLines {
    lines: Vec<Line>,
}

impl FlowLines {
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of children across all lines.
    pub fn child_count(&self) -> usize {
        self.lines.iter().map(Line::len).sum()
    }

    /// Widest line by the tallest stack of lines.
    pub fn content_size(&self) -> Size {
        self.lines.iter().fold(Size::ZERO, |acc, line| Size {
            width: acc.width.max(line.width),
            height: acc.height.saturating_add(line.height),
        })
    }
}

impl<'a> IntoIterator for &'a FlowLines {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

/// Result of [`FlowLayout::measure`]: the container size and the lines to
/// arrange.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlowMeasurement {
    /// Resolved container size. Exact axes report their spec value.
    pub size: Size,
    pub lines: FlowLines,
}

impl FlowMeasurement {
    /// Arrange the measured lines. See [`FlowLayout::arrange`].
    pub fn arrange(&self) -> Vec<Placement> {
        FlowLayout::arrange(&self.lines)
    }
}

/// Final position of one child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Position of the child in the measured input.
    pub index: usize,
    /// Container-local rectangle, excluding margins.
    pub rect: Rect,
}

/// A flow (wrap) layout container.
///
/// # Example
///
/// ```
/// use wrapflow_layout::{ChildBox, FlowLayout, MeasureSpec};
///
/// let flow = FlowLayout::new(MeasureSpec::at_most(300), MeasureSpec::unspecified());
/// let measured = flow.measure([
///     ChildBox::new(100, 50),
///     ChildBox::new(100, 50),
///     ChildBox::new(150, 50),
/// ]);
/// assert_eq!((measured.size.width, measured.size.height), (200, 100));
///
/// let placed = measured.arrange();
/// assert_eq!(placed[2].rect.left(), 0);
/// assert_eq!(placed[2].rect.top(), 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlowLayout {
    width: MeasureSpec,
    height: MeasureSpec,
}

impl FlowLayout {
    /// Create a flow layout constrained by the given width and height specs.
    pub const fn new(width: MeasureSpec, height: MeasureSpec) -> Self {
        Self { width, height }
    }

    /// Set the width spec.
    #[must_use]
    pub fn width(mut self, width: MeasureSpec) -> Self {
        self.width = width;
        self
    }

    /// Set the height spec.
    #[must_use]
    pub fn height(mut self, height: MeasureSpec) -> Self {
        self.height = height;
        self
    }

    pub const fn width_spec(&self) -> MeasureSpec {
        self.width
    }

    pub const fn height_spec(&self) -> MeasureSpec {
        self.height
    }

    /// Partition `children` into lines and compute the container size.
    ///
    /// The width spec's [`wrap_limit`](MeasureSpec::wrap_limit) is the line
    /// budget in every mode, including when both axes are exact: the size is
    /// then taken from the specs but the lines are still built for
    /// [`arrange`](Self::arrange).
    pub fn measure<I>(&self, children: I) -> FlowMeasurement
    where
        I: IntoIterator<Item = ChildBox>,
    {
        let children: Vec<ChildBox> = children.into_iter().collect();
        let limit = self.width.wrap_limit();
        let span = debug_span!(
            "flow_measure",
            children = children.len(),
            wrap_limit = limit
        );
        let _guard = span.enter();

        let mut lines = Vec::new();
        let mut current = Line::default();

        for (index, child) in children.into_iter().enumerate() {
            // An empty line always accepts the child, however wide.
            if !current.is_empty() && current.width.saturating_add(child.outer_width()) > limit {
                close_line(&mut lines, std::mem::take(&mut current));
            }
            current.push(index, child);
        }
        if !current.is_empty() {
            close_line(&mut lines, current);
        }

        let lines = FlowLines { lines };
        let content = lines.content_size();
        let size = Size::new(
            self.width.resolve(content.width),
            self.height.resolve(content.height),
        );
        debug!(
            lines = lines.len(),
            width = size.width,
            height = size.height,
            "flow measured"
        );

        FlowMeasurement { size, lines }
    }

    /// Place every child of `lines`, in line order.
    pub fn arrange(lines: &FlowLines) -> Vec<Placement> {
        let mut placements = Vec::with_capacity(lines.child_count());
        Self::arrange_with(lines, |index, rect| {
            placements.push(Placement { index, rect });
        });
        placements
    }

    /// Like [`arrange`](Self::arrange) but hands each child's rectangle to
    /// `place` instead of collecting them.
    ///
    /// Lines are stacked by their recorded heights; a line with no children
    /// places nothing but still advances the cursor.
    pub fn arrange_with<F>(lines: &FlowLines, mut place: F)
    where
        F: FnMut(usize, Rect),
    {
        let span = debug_span!("flow_arrange", lines = lines.len());
        let _guard = span.enter();

        let mut top = 0u32;
        for line in lines {
            let mut left = 0u32;
            for item in line.items() {
                let child = item.child;
                debug_assert!(
                    child.outer_height() <= line.height,
                    "child {} is taller than its line ({} > {})",
                    item.index,
                    child.outer_height(),
                    line.height
                );
                let rect = Rect::new(
                    left.saturating_add(child.margin.left),
                    top.saturating_add(child.margin.top),
                    child.width,
                    child.height,
                );
                place(item.index, rect);
                left = left.saturating_add(child.outer_width());
            }
            top = top.saturating_add(line.height);
        }
    }
}

fn close_line(lines: &mut Vec<Line>, line: Line) {
    trace!(
        index = lines.len(),
        items = line.len(),
        width = line.width,
        height = line.height,
        "line closed"
    );
    lines.push(line);
}
