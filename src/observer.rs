//! Tick observer trait for monitoring jiggle-bone simulation.

use crate::float::Float;
use crate::jiggle::{DebugRays, JiggleState};

/// Trait for observing jiggle ticks.
///
/// Implement this trait to inspect the simulation (e.g., for debug drawing
/// or recording). All methods have default no-op implementations.
pub trait TickObserver<F: Float> {
    /// Called after velocity and position have been integrated.
    fn on_integrate(&mut self, _state: &JiggleState<F>) {}

    /// Called when a tick is fully complete, with its diagnostic rays.
    fn on_tick_complete(&mut self, _rays: &DebugRays<F>) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpTickObserver;

impl<F: Float> TickObserver<F> for NoOpTickObserver {}
