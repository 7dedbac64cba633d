//! Per-session UI state: selection, time scale and the fly-to slot.
//!
//! Everything the user can change from the overlay lives in one explicit
//! [`SessionState`] resource. The animator reads the speed multiplier, the
//! camera consumes fly-to requests, and the info card reads the selection.

use bevy::prelude::*;

use crate::registry::{BodyRegistry, CelestialBody};
use crate::types::{DEFAULT_SPEED, SPEED_MAX, SPEED_MIN};

/// One-shot request to frame a body.
///
/// Requests live in a single slot. A newer request overwrites an older one
/// that was never consumed; the sequence number lets the camera tell a new
/// request apart from one it already handled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlyToRequest {
    pub target: String,
    pub sequence: u64,
}

#[derive(Resource, Clone, Debug)]
pub struct SessionState {
    selected_body: Option<String>,
    speed_multiplier: f32,
    fly_to: Option<FlyToRequest>,
    next_sequence: u64,
    /// Multiplier to restore when unpausing.
    paused_from: Option<f32>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            selected_body: None,
            speed_multiplier: DEFAULT_SPEED,
            fly_to: None,
            next_sequence: 0,
            paused_from: None,
        }
    }
}

impl SessionState {
    /// Select a body by key. Does not move the camera.
    pub fn select(&mut self, key: impl Into<String>) {
        self.selected_body = Some(key.into());
    }

    pub fn clear_selection(&mut self) {
        self.selected_body = None;
    }

    pub fn selected_body(&self) -> Option<&str> {
        self.selected_body.as_deref()
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.selected_body.as_deref() == Some(key)
    }

    /// Registry entry for the current selection.
    ///
    /// Returns `None` when nothing is selected or the key is not in the
    /// registry; the info card simply stays hidden in both cases.
    pub fn selected_info<'a>(&self, registry: &'a BodyRegistry) -> Option<&'a CelestialBody> {
        self.selected_body.as_deref().and_then(|key| registry.get(key))
    }

    /// Ask the camera to frame the selected body.
    ///
    /// No-op without a selection. Returns the stored request otherwise.
    pub fn request_fly_to(&mut self) -> Option<&FlyToRequest> {
        let target = self.selected_body.clone()?;
        self.next_sequence += 1;
        self.fly_to = Some(FlyToRequest {
            target,
            sequence: self.next_sequence,
        });
        self.fly_to.as_ref()
    }

    /// Pending request, if any, without consuming it.
    pub fn fly_to_request(&self) -> Option<&FlyToRequest> {
        self.fly_to.as_ref()
    }

    /// Consume the pending request.
    pub fn take_fly_to(&mut self) -> Option<FlyToRequest> {
        self.fly_to.take()
    }

    pub fn speed_multiplier(&self) -> f32 {
        self.speed_multiplier
    }

    /// Set the multiplier, clamped to the slider range. NaN is ignored.
    pub fn set_speed_multiplier(&mut self, speed: f32) {
        if speed.is_nan() {
            return;
        }
        self.speed_multiplier = speed.clamp(SPEED_MIN, SPEED_MAX);
        if self.speed_multiplier > 0.0 {
            self.paused_from = None;
        }
    }

    pub fn nudge_speed(&mut self, delta: f32) {
        self.set_speed_multiplier(self.speed_multiplier + delta);
    }

    pub fn is_paused(&self) -> bool {
        self.speed_multiplier == 0.0
    }

    /// Freeze time, or restore the multiplier that was active before.
    pub fn toggle_pause(&mut self) {
        if self.is_paused() {
            let resume = self.paused_from.take().unwrap_or(DEFAULT_SPEED);
            self.set_speed_multiplier(resume);
        } else {
            self.paused_from = Some(self.speed_multiplier);
            self.speed_multiplier = 0.0;
        }
    }
}
