//! Cube face identification and enumeration.

use std::fmt;

/// One face of the output cube map.
///
/// Discriminants give the fixed processing order: Back, Left, Front, Right,
/// Top, Bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CubeFace {
    /// -X, the face behind the viewer.
    Back = 0,
    /// -Y
    Left = 1,
    /// +X, the horizontal center of the panorama.
    Front = 2,
    /// +Y
    Right = 3,
    /// +Z
    Top = 4,
    /// -Z
    Bottom = 5,
}

impl CubeFace {
    /// Returns all six cube faces in order.
    pub const fn all() -> [CubeFace; 6] {
        [
            CubeFace::Back,
            CubeFace::Left,
            CubeFace::Front,
            CubeFace::Right,
            CubeFace::Top,
            CubeFace::Bottom,
        ]
    }

    /// Returns the face index (0-5).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Creates a face from an index (0-5).
    pub const fn from_index(index: usize) -> Option<CubeFace> {
        match index {
            0 => Some(CubeFace::Back),
            1 => Some(CubeFace::Left),
            2 => Some(CubeFace::Front),
            3 => Some(CubeFace::Right),
            4 => Some(CubeFace::Top),
            5 => Some(CubeFace::Bottom),
            _ => None,
        }
    }

    /// Returns the display name used as the output file stem (e.g. "Front").
    pub const fn display_name(self) -> &'static str {
        match self {
            CubeFace::Back => "Back",
            CubeFace::Left => "Left",
            CubeFace::Front => "Front",
            CubeFace::Right => "Right",
            CubeFace::Top => "Top",
            CubeFace::Bottom => "Bottom",
        }
    }

    /// Top-left corner of this face in the horizontal-cross unwrapping, in pixels.
    ///
    /// The cross is `4 * edge` wide and `3 * edge` tall: the four side faces
    /// sit on the middle row, Top and Bottom above and below Front.
    pub const fn origin(self, edge: u32) -> (u32, u32) {
        match self {
            CubeFace::Back => (0, edge),
            CubeFace::Left => (edge, edge),
            CubeFace::Front => (2 * edge, edge),
            CubeFace::Right => (3 * edge, edge),
            CubeFace::Top => (2 * edge, 0),
            CubeFace::Bottom => (2 * edge, 2 * edge),
        }
    }
}

impl fmt::Display for CubeFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
