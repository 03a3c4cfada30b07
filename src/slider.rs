//! Per-item gallery state: slider position, modal, zoom and pan.
//!
//! Every gallery-bearing item on a page gets its own [`SliderState`], created
//! lazily the first time the item is touched and dropped with the page. The
//! table is keyed by item id and owned by exactly one page session.
//!
//! ## Navigation
//!
//! Inline and modal navigation wrap in both directions:
//!
//! ```text
//! next = (current + 1) mod len
//! prev = (current - 1 + len) mod len
//! ```
//!
//! ## Zoom and Pan (image galleries)
//!
//! Zoom moves in steps of [`ZOOM_STEP`] and silently clamps to
//! [`MIN_ZOOM`]..=[`MAX_ZOOM`]. Panning is only possible above 1.0×. A drag
//! stores `anchor = pointer - pan` at its start and sets `pan = pointer -
//! anchor` while moving, so successive drags continue from where the last one
//! left off. Opening, closing or stepping the modal resets zoom and pan.

use std::collections::HashMap;
use std::ops::Sub;

pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 3.0;
pub const ZOOM_STEP: f64 = 0.25;
pub const DEFAULT_ZOOM: f64 = 1.0;

/// A pointer position or pan offset in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SliderState {
    /// Slide shown inline, in `0..len`.
    pub current_index: usize,
    pub is_modal_open: bool,
    /// Slide shown in the fullscreen modal.
    pub modal_index: usize,
    pub zoom_level: f64,
    pub pan_offset: Point,
    /// Set between drag start and drag end while zoomed in.
    pub drag_anchor: Option<Point>,
    /// Inline video playback. The modal has its own player and never touches this.
    pub playing: bool,
}

impl Default for SliderState {
    fn default() -> Self {
        Self {
            current_index: 0,
            is_modal_open: false,
            modal_index: 0,
            zoom_level: DEFAULT_ZOOM,
            pan_offset: Point::ORIGIN,
            drag_anchor: None,
            playing: true,
        }
    }
}

impl SliderState {
    pub fn can_zoom_in(&self) -> bool {
        self.zoom_level < MAX_ZOOM
    }

    pub fn can_zoom_out(&self) -> bool {
        self.zoom_level > MIN_ZOOM
    }

    pub fn can_pan(&self) -> bool {
        self.zoom_level > DEFAULT_ZOOM
    }

    /// Zoom as a whole percentage for the modal indicator.
    pub fn zoom_percent(&self) -> u32 {
        (self.zoom_level * 100.0).round() as u32
    }

    fn reset_view(&mut self) {
        self.zoom_level = DEFAULT_ZOOM;
        self.pan_offset = Point::ORIGIN;
        self.drag_anchor = None;
    }
}

/// Partial update merged into a [`SliderState`]; `None` fields are left alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SliderUpdate {
    pub current_index: Option<usize>,
    pub is_modal_open: Option<bool>,
    pub modal_index: Option<usize>,
    pub zoom_level: Option<f64>,
    pub pan_offset: Option<Point>,
    pub playing: Option<bool>,
}

fn wrap_next(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + 1) % len }
}

fn wrap_prev(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current % len + len - 1) % len }
}

fn clamp_zoom(level: f64) -> f64 {
    level.clamp(MIN_ZOOM, MAX_ZOOM)
}

/// Slider states of one page, keyed by item id.
#[derive(Debug, Clone, Default)]
pub struct SliderStates {
    states: HashMap<String, SliderState>,
}

impl SliderStates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored state for `item_id`, or the default if it was never touched.
    pub fn get(&self, item_id: &str) -> SliderState {
        self.states.get(item_id).cloned().unwrap_or_default()
    }

    /// Stored state for `item_id`, creating the default entry on first use.
    pub fn entry(&mut self, item_id: &str) -> &mut SliderState {
        self.states.entry(item_id.to_string()).or_default()
    }

    /// Whether the item has been interacted with on this page.
    pub fn contains(&self, item_id: &str) -> bool {
        self.states.contains_key(item_id)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Merge the set fields of `update` into the item's state.
    pub fn update(&mut self, item_id: &str, update: SliderUpdate) {
        let state = self.entry(item_id);
        if let Some(index) = update.current_index {
            state.current_index = index;
        }
        if let Some(open) = update.is_modal_open {
            state.is_modal_open = open;
        }
        if let Some(index) = update.modal_index {
            state.modal_index = index;
        }
        if let Some(zoom) = update.zoom_level {
            state.zoom_level = clamp_zoom(zoom);
        }
        if let Some(offset) = update.pan_offset {
            state.pan_offset = offset;
        }
        if let Some(playing) = update.playing {
            state.playing = playing;
        }
    }

    pub fn next(&mut self, item_id: &str, len: usize) {
        let state = self.entry(item_id);
        state.current_index = wrap_next(state.current_index, len);
    }

    pub fn prev(&mut self, item_id: &str, len: usize) {
        let state = self.entry(item_id);
        state.current_index = wrap_prev(state.current_index, len);
    }

    /// Jump straight to a slide (dot navigation). Out-of-range indices are ignored.
    pub fn select(&mut self, item_id: &str, index: usize, len: usize) {
        if index < len {
            self.entry(item_id).current_index = index;
        }
    }

    /// Open the modal on `index`, always starting from 1.0× with no pan.
    pub fn open_modal(&mut self, item_id: &str, index: usize, len: usize) {
        let state = self.entry(item_id);
        state.is_modal_open = true;
        state.modal_index = index.min(len.saturating_sub(1));
        state.reset_view();
    }

    pub fn close_modal(&mut self, item_id: &str) {
        let state = self.entry(item_id);
        state.is_modal_open = false;
        state.reset_view();
    }

    pub fn modal_next(&mut self, item_id: &str, len: usize) {
        let state = self.entry(item_id);
        state.modal_index = wrap_next(state.modal_index, len);
        state.reset_view();
    }

    pub fn modal_prev(&mut self, item_id: &str, len: usize) {
        let state = self.entry(item_id);
        state.modal_index = wrap_prev(state.modal_index, len);
        state.reset_view();
    }

    pub fn zoom_in(&mut self, item_id: &str) {
        let state = self.entry(item_id);
        state.zoom_level = clamp_zoom(state.zoom_level + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self, item_id: &str) {
        let state = self.entry(item_id);
        state.zoom_level = clamp_zoom(state.zoom_level - ZOOM_STEP);
    }

    pub fn reset_zoom(&mut self, item_id: &str) {
        self.entry(item_id).reset_view();
    }

    /// Capture the drag anchor. Ignored unless zoomed in.
    pub fn drag_start(&mut self, item_id: &str, pointer: Point) {
        let state = self.entry(item_id);
        if state.can_pan() {
            state.drag_anchor = Some(pointer - state.pan_offset);
        }
    }

    /// Move the image with the pointer. Ignored unless a drag is active and
    /// the image is still zoomed in.
    pub fn drag_move(&mut self, item_id: &str, pointer: Point) {
        let state = self.entry(item_id);
        if let Some(anchor) = state.drag_anchor
            && state.can_pan()
        {
            state.pan_offset = pointer - anchor;
        }
    }

    pub fn drag_end(&mut self, item_id: &str) {
        self.entry(item_id).drag_anchor = None;
    }

    pub fn toggle_playback(&mut self, item_id: &str) {
        let state = self.entry(item_id);
        state.playing = !state.playing;
    }
}
