//! Draggable divider between the document pane and the chat pane.
//!
//! [`SplitPane`] is a two-state controller (`Idle`, `Dragging`). A left click on
//! the divider starts a drag; each drag event moves the divider to the pointer,
//! projected on the active axis; button up or the terminal losing focus ends it.
//!
//! The axis is derived, never stored by callers: terminals narrower than
//! [`STACK_BREAKPOINT_COLS`] stack the panes (document on top), wider ones put
//! them side by side (document on the left). It is recomputed on every resize
//! and on every drag move.
//!
//! While dragging, terminal-wide side effects (the pointer shape) are held by a
//! [`DragCapture`] guard. Dropping the guard restores them, so every way out of
//! `Dragging` (button up, focus lost, the controller itself dropped) releases
//! them.

use std::io::Write;

use ratatui::layout::Rect;

use crate::utils::rect_contains;

/// Below this many columns the panes are stacked.
pub const STACK_BREAKPOINT_COLS: u16 = 100;

pub const MIN_RATIO: f32 = 20.0;
pub const MAX_RATIO: f32 = 80.0;
pub const DEFAULT_RATIO: f32 = 50.0;

/// Ratio change per Alt+←/→.
pub const NUDGE_STEP: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitAxis {
    /// Side by side, divider is a column.
    Horizontal,
    /// Stacked, divider is a row.
    Vertical,
}

impl SplitAxis {
    pub fn for_width(viewport_cols: u16) -> Self {
        if viewport_cols < STACK_BREAKPOINT_COLS {
            SplitAxis::Vertical
        } else {
            SplitAxis::Horizontal
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging,
}

/// Terminal-wide state overridden for the duration of a drag.
pub trait DragEffects {
    fn acquire(&mut self, axis: SplitAxis);
    fn release(&mut self);
}

/// Holds the drag side effects; releasing happens in `Drop`.
pub struct DragCapture<E: DragEffects> {
    effects: E,
}

impl<E: DragEffects> DragCapture<E> {
    pub fn acquire(mut effects: E, axis: SplitAxis) -> Self {
        effects.acquire(axis);
        Self { effects }
    }
}

impl<E: DragEffects> Drop for DragCapture<E> {
    fn drop(&mut self) {
        self.effects.release();
    }
}

/// Switches the mouse pointer to a resize shape (OSC 22) while dragging.
/// Terminals without pointer-shape support ignore the sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalDragEffects;

impl TerminalDragEffects {
    fn set_pointer_shape(shape: &str) {
        let mut out = std::io::stdout();
        let result = write!(out, "\x1b]22;{}\x1b\\", shape).and_then(|_| out.flush());
        if let Err(e) = result {
            tracing::debug!(error = %e, shape, "could not set pointer shape");
        }
    }
}

impl DragEffects for TerminalDragEffects {
    fn acquire(&mut self, axis: SplitAxis) {
        Self::set_pointer_shape(match axis {
            SplitAxis::Horizontal => "col-resize",
            SplitAxis::Vertical => "row-resize",
        });
    }

    fn release(&mut self) {
        Self::set_pointer_shape("default");
    }
}

/// Rects produced by one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitRegions {
    pub document: Rect,
    pub divider: Rect,
    pub chat: Rect,
    pub axis: SplitAxis,
}

pub struct SplitPane<E: DragEffects + Clone = TerminalDragEffects> {
    ratio: f32,
    axis: SplitAxis,
    /// Last container handed to [`SplitPane::layout`]; drags project onto it.
    container: Rect,
    effects: E,
    capture: Option<DragCapture<E>>,
}

impl Default for SplitPane<TerminalDragEffects> {
    fn default() -> Self {
        Self::new(TerminalDragEffects)
    }
}

impl<E: DragEffects + Clone> std::fmt::Debug for SplitPane<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SplitPane")
            .field("ratio", &self.ratio)
            .field("axis", &self.axis)
            .field("container", &self.container)
            .field("state", &self.state())
            .finish()
    }
}

impl<E: DragEffects + Clone> SplitPane<E> {
    pub fn new(effects: E) -> Self {
        Self {
            ratio: DEFAULT_RATIO,
            axis: SplitAxis::Horizontal,
            container: Rect::default(),
            effects,
            capture: None,
        }
    }

    /// Share of the container given to the document pane, in percent.
    pub fn ratio(&self) -> f32 {
        self.ratio
    }

    pub fn axis(&self) -> SplitAxis {
        self.axis
    }

    pub fn state(&self) -> DragState {
        if self.capture.is_some() {
            DragState::Dragging
        } else {
            DragState::Idle
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.capture.is_some()
    }

    /// Sets the ratio, clamped to `[MIN_RATIO, MAX_RATIO]`. NaN is ignored.
    pub fn set_ratio(&mut self, ratio: f32) {
        if ratio.is_nan() {
            return;
        }
        self.ratio = ratio.clamp(MIN_RATIO, MAX_RATIO);
    }

    pub fn nudge(&mut self, delta: f32) {
        self.set_ratio(self.ratio + delta);
    }

    /// Terminal resized: re-derive the axis from the new width.
    pub fn on_resize(&mut self, viewport_cols: u16) {
        self.axis = SplitAxis::for_width(viewport_cols);
    }

    /// Splits `container` for this frame and remembers it for drag projection.
    pub fn layout(&mut self, container: Rect, viewport_cols: u16) -> SplitRegions {
        self.container = container;
        self.axis = SplitAxis::for_width(viewport_cols);
        self.regions()
    }

    /// Regions for the last container at the current ratio and axis. The
    /// divider is one cell thick; a container too small to split gives
    /// everything to the chat pane.
    pub fn regions(&self) -> SplitRegions {
        let area = self.container;
        let axis = self.axis;
        let span = match axis {
            SplitAxis::Horizontal => area.width,
            SplitAxis::Vertical => area.height,
        };
        if span < 3 {
            return SplitRegions {
                document: Rect { width: 0, height: 0, ..area },
                divider: Rect { width: 0, height: 0, ..area },
                chat: area,
                axis,
            };
        }
        let first = ((span as f32) * self.ratio / 100.0).round() as u16;
        let first = first.clamp(1, span - 2);
        let rest = span - first - 1;
        match axis {
            SplitAxis::Horizontal => SplitRegions {
                document: Rect { width: first, ..area },
                divider: Rect { x: area.x + first, width: 1, ..area },
                chat: Rect { x: area.x + first + 1, width: rest, ..area },
                axis,
            },
            SplitAxis::Vertical => SplitRegions {
                document: Rect { height: first, ..area },
                divider: Rect { y: area.y + first, height: 1, ..area },
                chat: Rect { y: area.y + first + 1, height: rest, ..area },
                axis,
            },
        }
    }

    /// Left button pressed. Starts a drag when the press lands on the divider;
    /// returns true if it did.
    pub fn on_mouse_down(&mut self, column: u16, row: u16) -> bool {
        if !rect_contains(self.regions().divider, column, row) {
            return false;
        }
        // A fresh press while a capture is still held replaces it; the old
        // guard releases before the new one acquires.
        self.capture = None;
        self.capture = Some(DragCapture::acquire(self.effects.clone(), self.axis));
        tracing::trace!(ratio = self.ratio, axis = ?self.axis, "divider drag started");
        true
    }

    /// Pointer moved with the button held. Returns true if the ratio changed.
    pub fn on_mouse_drag(&mut self, column: u16, row: u16, viewport_cols: u16) -> bool {
        if self.capture.is_none() {
            return false;
        }
        self.axis = SplitAxis::for_width(viewport_cols);
        let Some(ratio) = project(self.container, self.axis, column, row) else {
            return false;
        };
        let before = self.ratio;
        self.set_ratio(ratio);
        self.ratio != before
    }

    /// Button released. Returns true if a drag ended.
    pub fn on_mouse_up(&mut self) -> bool {
        self.end_drag()
    }

    /// The terminal lost focus: the pointer left the tracked surface.
    pub fn on_focus_lost(&mut self) -> bool {
        self.end_drag()
    }

    fn end_drag(&mut self) -> bool {
        let was_dragging = self.capture.take().is_some();
        if was_dragging {
            tracing::trace!(ratio = self.ratio, "divider drag ended");
        }
        was_dragging
    }
}

/// Pointer position as a percentage of `container` along `axis`. Positions
/// outside the container give values below 0 or above 100; the caller clamps.
/// None for a zero-sized container.
fn project(container: Rect, axis: SplitAxis, column: u16, row: u16) -> Option<f32> {
    let (pos, start, len) = match axis {
        SplitAxis::Horizontal => (column, container.x, container.width),
        SplitAxis::Vertical => (row, container.y, container.height),
    };
    if len == 0 {
        return None;
    }
    Some((pos as f32 - start as f32) * 100.0 / len as f32)
}
