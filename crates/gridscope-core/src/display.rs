//! Display modes for the grid families.
//!
//! Every family shares the same meaning for its first two mode indices:
//! index 0 hides the object, index 1 is the default raw-value rendering.
//! That alignment is load-bearing (the display-state store records raw mode
//! indices, and defaults apply across families), so it is pinned here with
//! const assertions instead of being left as a numeric convention.

/// Mode index shared by all families: the object is hidden.
pub const OFF_INDEX: usize = 0;

/// Mode index shared by all families: default raw-value rendering.
pub const STANDARD_INDEX: usize = 1;

/// Common behavior of a per-family display-mode enum.
pub trait DisplayMode: Copy + Eq + std::fmt::Debug {
    /// Number of modes in this family.
    const COUNT: usize;

    /// Converts a raw mode index to a mode, wrapping out-of-range indices.
    fn from_index(index: usize) -> Self;

    /// Raw index of this mode.
    fn index(self) -> usize;

    /// Short human-readable mode name for summary text.
    fn label(self) -> &'static str;

    /// Whether this mode renders nothing.
    fn is_off(self) -> bool {
        self.index() == OFF_INDEX
    }

    /// Cycles to the adjacent mode, wrapping at both ends.
    fn cycled(self, step: i64) -> Self {
        let count = Self::COUNT as i64;
        let next = (self.index() as i64 + step).rem_euclid(count);
        Self::from_index(next as usize)
    }
}

/// Display modes for scalar grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum ScalarDisplayMode {
    /// Render nothing.
    Off = 0,
    /// Raw values through the diverging color ramp.
    Standard = 1,
    /// Signed-distance (level set) coloring.
    Levelset = 2,
    /// Volumetric shading: magnitude to brightness.
    ShadeVol = 3,
    /// Surface shading: only zero-crossing cells.
    ShadeSurf = 4,
}

impl DisplayMode for ScalarDisplayMode {
    const COUNT: usize = 5;

    fn from_index(index: usize) -> Self {
        match index % Self::COUNT {
            1 => Self::Standard,
            2 => Self::Levelset,
            3 => Self::ShadeVol,
            4 => Self::ShadeSurf,
            _ => Self::Off,
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    fn label(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Standard => "std",
            Self::Levelset => "levelset",
            Self::ShadeVol => "shade-vol",
            Self::ShadeSurf => "shade-surf",
        }
    }
}

/// Display modes for vector grids.
///
/// `Standard` draws centered samples; `Staggered` samples each component at
/// its face center (MAC layout).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum VectorDisplayMode {
    /// Render nothing.
    Off = 0,
    /// Cell-centered line segments.
    Standard = 1,
    /// Face-centered per-component segments.
    Staggered = 2,
    /// Values interpreted as texture coordinates, shown as cell colors.
    TexCoord = 3,
}

impl DisplayMode for VectorDisplayMode {
    const COUNT: usize = 4;

    fn from_index(index: usize) -> Self {
        match index % Self::COUNT {
            1 => Self::Standard,
            2 => Self::Staggered,
            3 => Self::TexCoord,
            _ => Self::Off,
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    fn label(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Standard => "centered",
            Self::Staggered => "staggered",
            Self::TexCoord => "uv",
        }
    }
}

/// Display modes for flag grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum FlagDisplayMode {
    /// Render nothing.
    Off = 0,
    /// Cells colored by their flag bits.
    Standard = 1,
}

impl DisplayMode for FlagDisplayMode {
    const COUNT: usize = 2;

    fn from_index(index: usize) -> Self {
        match index % Self::COUNT {
            1 => Self::Standard,
            _ => Self::Off,
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    fn label(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Standard => "std",
        }
    }
}

// Off/Standard indices are a cross-family contract.
const _: () = {
    assert!(ScalarDisplayMode::Off as usize == OFF_INDEX);
    assert!(ScalarDisplayMode::Standard as usize == STANDARD_INDEX);
    assert!(VectorDisplayMode::Off as usize == OFF_INDEX);
    assert!(VectorDisplayMode::Standard as usize == STANDARD_INDEX);
    assert!(FlagDisplayMode::Off as usize == OFF_INDEX);
    assert!(FlagDisplayMode::Standard as usize == STANDARD_INDEX);
};

/// Multiplicative factor for the large scale-step events.
pub const SCALE_STEP_LARGE: f32 = 2.0;

/// Multiplicative factor for the small scale-step events.
pub const SCALE_STEP_SMALL: f32 = 1.1;
