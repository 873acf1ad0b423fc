//! Scrolling terrain strip
//!
//! A fixed ring of pre-built sections laid end to end along +Y. As the
//! scroll offset grows, every slot slides toward -Y and the section shown in
//! each slot rotates through the ring, so the strip never runs out.

use stereojet_math::{transform, Matrix};

use crate::frame::ModelId;

/// Y offset of the first slot relative to the world origin
const STRIP_Y_OFFSET: f32 = 0.8;
/// Height of the strip below the flight box
const STRIP_Z_OFFSET: f32 = -0.5;

/// One visible slot of the strip for a given scroll offset
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionSlot {
    /// Index into the strip's sections
    pub section: usize,
    /// Displacement along Y, in `(-L, (n-1)·L]`
    pub offset: f32,
}

#[derive(Clone, Debug)]
pub struct TerrainStrip {
    sections: Vec<ModelId>,
    section_length: f32,
    scroll_offset: f32,
}

impl TerrainStrip {
    pub fn new(sections: Vec<ModelId>, section_length: f32) -> Self {
        Self {
            sections,
            section_length,
            scroll_offset: 0.0,
        }
    }

    pub fn sections(&self) -> &[ModelId] {
        &self.sections
    }

    pub fn section_length(&self) -> f32 {
        self.section_length
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Scroll forward by `distance`
    ///
    /// The offset wraps after one full turn of the ring, which leaves the
    /// slot layout unchanged and keeps small steps from rounding away.
    pub fn advance(&mut self, distance: f32) {
        self.scroll_offset += distance;
        let period = self.sections.len() as f32 * self.section_length;
        if period > 0.0 {
            self.scroll_offset = self.scroll_offset.rem_euclid(period);
        }
    }

    pub fn reset(&mut self) {
        self.scroll_offset = 0.0;
    }

    /// Slot layout at the current scroll offset
    pub fn slots(&self) -> Vec<SectionSlot> {
        let n = self.sections.len();
        if n == 0 {
            return Vec::new();
        }

        let length = self.section_length;
        let base_offset = self.scroll_offset.rem_euclid(length);
        let passed = (self.scroll_offset / length).floor() as i64;

        (0..n)
            .map(|i| SectionSlot {
                section: (i as i64 + passed).rem_euclid(n as i64) as usize,
                offset: i as f32 * length - base_offset,
            })
            .collect()
    }

    /// Model matrix placing a section at `slot`
    pub fn slot_transform(slot: &SectionSlot) -> Matrix {
        transform(Some([0.0, slot.offset + STRIP_Y_OFFSET, STRIP_Z_OFFSET]), None, None)
    }
}
