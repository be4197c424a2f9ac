//! Logical input events delivered to a painter.
//!
//! UI-layer code binds key presses to these events and feeds them through
//! [`PainterEvent::from_raw`] or directly as enum values. The set is a fixed
//! contract; ids not in the set map to [`PainterEvent::Ignored`], which every
//! handler treats as a no-op so newer UI layers stay compatible with older
//! cores.

/// Direction of a cycling operation (object selection, mode cycling).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Cycle forward.
    Forward,
    /// Cycle backward.
    Backward,
}

impl Direction {
    /// Signed step for index arithmetic.
    #[must_use]
    pub fn step(self) -> i64 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// A logical event a painter can receive.
///
/// Events that take a value (absolute plane/dimension selection) read it from
/// the `param` argument of the handler, matching the original two-argument
/// event protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PainterEvent {
    /// Select the next object of the painter's family.
    NextObject,
    /// Select the previous object of the painter's family.
    PrevObject,
    /// Cycle the current object's display mode forward.
    NextDisplayMode,
    /// Cycle the current object's display mode backward.
    PrevDisplayMode,
    /// Multiply the current (object, mode) scale by the large step factor.
    ScaleUp,
    /// Divide the current (object, mode) scale by the large step factor.
    ScaleDown,
    /// Multiply the current (object, mode) scale by the small step factor.
    ScaleUpSmall,
    /// Divide the current (object, mode) scale by the small step factor.
    ScaleDownSmall,
    /// Move the visible plane one slice towards the upper bound.
    NextPlane,
    /// Move the visible plane one slice towards zero.
    PrevPlane,
    /// Set the visible plane to `param`, clamped into `[0, max]`.
    SetPlane,
    /// Cycle the slicing dimension (x -> y -> z -> x).
    NextDim,
    /// Set the slicing dimension to `param`, clamped into `[0, 2]`.
    SetDim,
    /// Toggle the family-wide hide flag.
    ToggleVisibility,
    /// Unrecognized event id; handlers must treat this as a no-op.
    Ignored,
}

impl PainterEvent {
    /// Maps a raw integer event id to an event.
    ///
    /// Unknown ids map to [`PainterEvent::Ignored`] rather than failing, so
    /// event sources built against a newer contract degrade gracefully.
    #[must_use]
    pub fn from_raw(id: i32) -> Self {
        match id {
            1 => Self::NextObject,
            2 => Self::PrevObject,
            3 => Self::NextDisplayMode,
            4 => Self::PrevDisplayMode,
            5 => Self::ScaleUp,
            6 => Self::ScaleDown,
            7 => Self::ScaleUpSmall,
            8 => Self::ScaleDownSmall,
            9 => Self::NextPlane,
            10 => Self::PrevPlane,
            11 => Self::SetPlane,
            12 => Self::NextDim,
            13 => Self::SetDim,
            14 => Self::ToggleVisibility,
            _ => Self::Ignored,
        }
    }

    /// Returns true for the object-cycling events.
    #[must_use]
    pub fn is_navigation(self) -> bool {
        matches!(self, Self::NextObject | Self::PrevObject)
    }
}
