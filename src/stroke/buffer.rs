//! Stroke buffer - the accumulated drawing as flat line segments
//!
//! A stroke is a maximal run of connected segments; a break shows up as the
//! next segment starting somewhere other than the previous one's end point.
//! The buffer is owned by the composer and only ever read by the renderer.

/// One drawn line segment in screen pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: (f32, f32),
    pub end: (f32, f32),
    pub width: f32,
}

/// Floats per segment in the flat wire form: x0, y0, x1, y1, width
pub const SEGMENT_STRIDE: usize = 5;

pub struct StrokeBuffer {
    segments: Vec<Segment>,
}

impl StrokeBuffer {
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Wipe the whole drawing
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Flatten for the JS renderer: [`SEGMENT_STRIDE`] floats per segment,
    /// oldest first
    pub fn as_flat(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.segments.len() * SEGMENT_STRIDE);
        for segment in &self.segments {
            result.push(segment.start.0);
            result.push(segment.start.1);
            result.push(segment.end.0);
            result.push(segment.end.1);
            result.push(segment.width);
        }
        result
    }
}

impl Default for StrokeBuffer {
    fn default() -> Self {
        Self::new()
    }
}
