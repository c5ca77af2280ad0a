//! Session state owning the pipeline's mutable pieces.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::acquire::SourceSlot;
use crate::core::mode::ModeSelector;
use crate::dispatch::ControlRegistry;
use crate::render::DisplaySurface;
use crate::utils::{StudioError, StudioResult};

/// Explicit owner of the armed mode, the current source image, the parameter
/// controls, the display surface, and the in-flight guard.
///
/// Everything the pipeline mutates lives here; there are no ambient globals.
/// All work is event-driven on one logical thread, so the only cross-event
/// coordination needed is the in-flight flag.
#[derive(Debug, Default)]
pub struct Session {
    modes: ModeSelector,
    source: SourceSlot,
    controls: ControlRegistry,
    display: DisplaySurface,
    in_flight: Arc<AtomicBool>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modes(&self) -> &ModeSelector {
        &self.modes
    }

    pub fn modes_mut(&mut self) -> &mut ModeSelector {
        &mut self.modes
    }

    pub fn source(&self) -> &SourceSlot {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut SourceSlot {
        &mut self.source
    }

    pub fn controls(&self) -> &ControlRegistry {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut ControlRegistry {
        &mut self.controls
    }

    pub fn display(&self) -> &DisplaySurface {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut DisplaySurface {
        &mut self.display
    }

    /// Marks a dispatch as in flight.
    ///
    /// At most one dispatch may be in flight; overlapping triggers are
    /// rejected with [`StudioError::Busy`] until the returned guard drops.
    pub fn begin_dispatch(&self) -> StudioResult<DispatchGuard> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(StudioError::Busy);
        }
        Ok(DispatchGuard {
            flag: Arc::clone(&self.in_flight),
        })
    }

    pub fn dispatch_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

/// Clears the in-flight flag when the dispatch cycle ends, whether it
/// succeeded or failed.
#[derive(Debug)]
pub struct DispatchGuard {
    flag: Arc<AtomicBool>,
}

impl Drop for DispatchGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
