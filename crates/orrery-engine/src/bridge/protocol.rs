/// Frame buffer layout shared with the JavaScript renderer.
/// Must stay in sync with the web side's `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Bodies: body_count × 8 floats]
/// ```
///
/// Static data (starfield, orbit paths, rings, lights) never changes after
/// startup and is exposed through separate buffers read once at init.

use crate::renderer::instance::BodyInstance;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_BODY_COUNT: usize = 2;
pub const HEADER_EYE_X: usize = 3;
pub const HEADER_EYE_Y: usize = 4;
pub const HEADER_EYE_Z: usize = 5;
pub const HEADER_TARGET_X: usize = 6;
pub const HEADER_TARGET_Y: usize = 7;
pub const HEADER_TARGET_Z: usize = 8;
pub const HEADER_FOV_Y: usize = 9;
pub const HEADER_ASPECT: usize = 10;
pub const HEADER_NEAR: usize = 11;
pub const HEADER_FAR: usize = 12;
pub const HEADER_VIEWPORT_WIDTH: usize = 13;
pub const HEADER_VIEWPORT_HEIGHT: usize = 14;
/// Selected body index, or -1.
pub const HEADER_SELECTED: usize = 15;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per body instance: x, y, z, rotation, radius, r, g, b.
pub const BODY_INSTANCE_FLOATS: usize = BodyInstance::FLOATS;

/// Floats per starfield point / orbit path point: x, y, z.
pub const POINT_FLOATS: usize = 3;

/// Value of `HEADER_SELECTED` when nothing is selected.
pub const NO_SELECTION: f32 = -1.0;

/// Buffer layout for a fixed body count.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub body_count: usize,
    /// Size of body data section in floats.
    pub body_data_floats: usize,
    /// Offset (in floats) where body data begins.
    pub body_data_offset: usize,
    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    pub fn new(body_count: usize) -> Self {
        let body_data_floats = body_count * BODY_INSTANCE_FLOATS;
        let body_data_offset = HEADER_FLOATS;
        let buffer_total_floats = body_data_offset + body_data_floats;
        Self {
            body_count,
            body_data_floats,
            body_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nine_bodies_layout() {
        let layout = ProtocolLayout::new(9);
        assert_eq!(layout.body_data_offset, 16);
        assert_eq!(layout.body_data_floats, 72);
        assert_eq!(layout.buffer_total_floats, 88);
        assert_eq!(layout.buffer_total_bytes, 352);
    }

    #[test]
    fn header_indices_fit_header() {
        assert!(HEADER_SELECTED < HEADER_FLOATS);
        assert_eq!(HEADER_SELECTED, HEADER_FLOATS - 1);
    }
}
