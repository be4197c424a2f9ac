//! Grid implementations for gridscope.
//!
//! Concrete [`InspectableGrid`](gridscope_core::InspectableGrid) types for
//! the three element families (scalar, vector, flag) and one stateless
//! [`GridRenderer`] per family that turns a slice of the grid into flat
//! geometry under the current display mode.

#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

pub mod flag;
pub mod renderer;
pub mod scalar;
pub mod vector;

pub use flag::{FlagGrid, FlagRenderer};
pub use renderer::GridRenderer;
pub use scalar::{ScalarGrid, ScalarRenderer};
pub use vector::{VectorGrid, VectorRenderer};

#[cfg(test)]
mod tests {
    use super::*;
    use glam::UVec3;
    use gridscope_core::display::{SCALE_STEP_LARGE, SCALE_STEP_SMALL, STANDARD_INDEX};
    use gridscope_core::plane::PlaneState;
    use gridscope_core::registry::GridRegistry;
    use gridscope_core::store::DisplayStateStore;
    use gridscope_core::PainterEvent;
    use proptest::prelude::*;

    fn scalar_setup() -> (GridRegistry, gridscope_core::GridHandle) {
        let mut reg = GridRegistry::new();
        let h = reg
            .register(Box::new(ScalarGrid::constant("rho", UVec3::splat(4), 0.5)))
            .unwrap();
        (reg, h)
    }

    #[test]
    fn mode_cycling_wraps_within_the_family() {
        let (_reg, h) = scalar_setup();
        let mut store = DisplayStateStore::new();
        let mut plane = PlaneState::default();
        let r = ScalarRenderer::default();

        assert_eq!(store.mode(h), STANDARD_INDEX);
        for _ in 0..r.mode_count() {
            assert!(r.handle_key_event(PainterEvent::NextDisplayMode, 0, h, &mut store, &mut plane));
        }
        assert_eq!(store.mode(h), STANDARD_INDEX);

        // Stepping back from standard lands on off.
        r.handle_key_event(PainterEvent::PrevDisplayMode, 0, h, &mut store, &mut plane);
        assert_eq!(store.mode(h), gridscope_core::OFF_INDEX);
    }

    #[test]
    fn unrecognized_events_are_untouched_no_ops() {
        let (_reg, h) = scalar_setup();
        let mut store = DisplayStateStore::new();
        let mut plane = PlaneState::default();
        let r = ScalarRenderer::default();
        assert!(!r.handle_key_event(PainterEvent::Ignored, 0, h, &mut store, &mut plane));
        assert!(!r.handle_key_event(PainterEvent::NextObject, 0, h, &mut store, &mut plane));
        assert_eq!(store.mode(h), STANDARD_INDEX);
    }

    #[test]
    fn scale_steps_are_multiplicative() {
        let (_reg, h) = scalar_setup();
        let mut store = DisplayStateStore::new();
        let mut plane = PlaneState::default();
        let r = ScalarRenderer::default();

        r.handle_key_event(PainterEvent::ScaleUp, 0, h, &mut store, &mut plane);
        let mode = store.mode(h);
        assert!((store.scale(h, mode) - SCALE_STEP_LARGE).abs() < 1e-6);
        r.handle_key_event(PainterEvent::ScaleUpSmall, 0, h, &mut store, &mut plane);
        assert!((store.scale(h, mode) - SCALE_STEP_LARGE * SCALE_STEP_SMALL).abs() < 1e-5);
    }

    proptest! {
        #[test]
        fn scale_up_then_down_is_symmetric(ups in 0usize..20, small in proptest::bool::ANY) {
            let (_reg, h) = scalar_setup();
            let mut store = DisplayStateStore::new();
            let mut plane = PlaneState::default();
            let r = ScalarRenderer::default();
            let (up, down) = if small {
                (PainterEvent::ScaleUpSmall, PainterEvent::ScaleDownSmall)
            } else {
                (PainterEvent::ScaleUp, PainterEvent::ScaleDown)
            };

            for _ in 0..ups {
                r.handle_key_event(up, 0, h, &mut store, &mut plane);
            }
            for _ in 0..ups {
                r.handle_key_event(down, 0, h, &mut store, &mut plane);
            }
            let mode = store.mode(h);
            prop_assert!((store.scale(h, mode) - 1.0).abs() < 1e-3);
        }
    }
}
