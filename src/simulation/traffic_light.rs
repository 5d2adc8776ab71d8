//! Traffic lights for the two crossing axes
//!
//! The lights only change as a pair, so the horizontal and vertical
//! directions can never both be green.

use super::types::Axis;

/// State of a single light
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightState {
    Green,
    Red,
}

impl LightState {
    pub fn is_green(self) -> bool {
        self == LightState::Green
    }

    fn flipped(self) -> LightState {
        match self {
            LightState::Green => LightState::Red,
            LightState::Red => LightState::Green,
        }
    }
}

/// A light governing one axis
#[derive(Debug, Clone)]
pub struct TrafficLight {
    pub axis: Axis,
    state: LightState,
}

impl TrafficLight {
    fn new(axis: Axis, state: LightState) -> Self {
        Self { axis, state }
    }

    pub fn state(&self) -> LightState {
        self.state
    }

    fn flip(&mut self) {
        self.state = self.state.flipped();
    }
}

/// The horizontal and vertical lights, toggled together
#[derive(Debug, Clone)]
pub struct LightPair {
    horizontal: TrafficLight,
    vertical: TrafficLight,
}

impl Default for LightPair {
    fn default() -> Self {
        Self::new()
    }
}

impl LightPair {
    /// Horizontal starts green, vertical red
    pub fn new() -> Self {
        Self {
            horizontal: TrafficLight::new(Axis::Horizontal, LightState::Green),
            vertical: TrafficLight::new(Axis::Vertical, LightState::Red),
        }
    }

    pub fn light(&self, axis: Axis) -> &TrafficLight {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }

    pub fn state(&self, axis: Axis) -> LightState {
        self.light(axis).state()
    }

    /// Flip both lights at once
    pub fn toggle(&mut self) {
        self.horizontal.flip();
        self.vertical.flip();
        debug_assert!(
            !(self.horizontal.state.is_green() && self.vertical.state.is_green()),
            "both lights green"
        );
    }

    /// The axis currently allowed through, if any
    pub fn green_axis(&self) -> Option<Axis> {
        Axis::ALL.into_iter().find(|axis| self.state(*axis).is_green())
    }
}
