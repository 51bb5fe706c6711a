// Copyright 2026 the Penumbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Penumbra Elevation: elevation levels and derived drop-shadow metrics.
//!
//! Elevation is a scalar proxy for a shadow's visual depth: the higher the
//! elevation, the more spread out the shadow. This crate models the numbers
//! only. It knows nothing about layers, views, or drawing; a renderer takes
//! a [`ShadowMetrics`] and produces the actual shadow however it likes.
//!
//! ## Levels
//!
//! Interactive "card" surfaces use a binary elevation signal: a resting
//! level while idle and a higher pressed level while a pointer holds them.
//! [`RESTING_CARD_ELEVATION`] and [`PRESSED_CARD_ELEVATION`] are the
//! conventional pair; `penumbra_drag` uses them as its defaults.
//!
//! ## Metrics
//!
//! A Material-style shadow is two stacked shadows:
//!
//! - the **key** shadow, cast by the directional key light: sharper, more
//!   offset, more opaque;
//! - the **ambient** shadow, cast by ambient light: softer and fainter.
//!
//! [`ShadowMetrics::with_elevation`] derives both from a single elevation
//! value. Radii and vertical offsets grow linearly with elevation;
//! opacities are fixed. Elevations at or below zero produce
//! [`ShadowMetrics::NONE`] (negative values act as if zero were specified).
//!
//! ```
//! use penumbra_elevation::{PRESSED_CARD_ELEVATION, ShadowMetrics};
//!
//! let pressed = ShadowMetrics::with_elevation(PRESSED_CARD_ELEVATION);
//! assert!(pressed.key_radius > 0.0);
//! assert!(pressed.key_opacity > pressed.ambient_opacity);
//!
//! // Sitting on the surface casts no shadow at all.
//! assert_eq!(ShadowMetrics::with_elevation(0.0), ShadowMetrics::NONE);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::Vec2;

/// Elevation of an interactive card surface at rest.
pub const RESTING_CARD_ELEVATION: f64 = 2.0;

/// Elevation of an interactive card surface while pressed.
///
/// The jump from [`RESTING_CARD_ELEVATION`] to this value is the visual
/// "lift" feedback a surface gives when the user grabs it.
pub const PRESSED_CARD_ELEVATION: f64 = 8.0;

/// Opacity of the key (directional) shadow layer.
const KEY_SHADOW_OPACITY: f32 = 0.26;

/// Opacity of the ambient shadow layer.
const AMBIENT_SHADOW_OPACITY: f32 = 0.08;

/// Metrics of a two-layer drop shadow for a given elevation.
///
/// Pure data: a renderer maps the key and ambient entries onto whatever
/// shadow primitives its platform offers (blur radius, offset, opacity).
/// Offsets are in the same units as elevation, positive `y` pointing down.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShadowMetrics {
    /// Blur radius of the key shadow.
    pub key_radius: f64,
    /// Offset of the key shadow from the surface.
    pub key_offset: Vec2,
    /// Opacity of the key shadow.
    pub key_opacity: f32,
    /// Blur radius of the ambient shadow.
    pub ambient_radius: f64,
    /// Offset of the ambient shadow from the surface.
    pub ambient_offset: Vec2,
    /// Opacity of the ambient shadow.
    pub ambient_opacity: f32,
}

impl ShadowMetrics {
    /// The empty shadow: what an elevation of zero (or less) casts.
    pub const NONE: Self = Self {
        key_radius: 0.0,
        key_offset: Vec2::ZERO,
        key_opacity: 0.0,
        ambient_radius: 0.0,
        ambient_offset: Vec2::ZERO,
        ambient_opacity: 0.0,
    };

    /// Derive shadow metrics for an elevation.
    ///
    /// Elevations at or below zero yield [`Self::NONE`]; negative values
    /// act as if zero were specified. For positive elevations the radii and
    /// vertical offsets scale linearly, keeping the key shadow tighter and
    /// more displaced than the ambient one.
    pub fn with_elevation(elevation: f64) -> Self {
        if elevation <= 0.0 {
            return Self::NONE;
        }
        Self {
            key_radius: 0.889544 * elevation - 0.003701,
            key_offset: Vec2::new(0.0, 1.226118 * elevation - 0.233930),
            key_opacity: KEY_SHADOW_OPACITY,
            ambient_radius: 0.666920 * elevation - 0.001648,
            ambient_offset: Vec2::new(0.0, 0.366893 * elevation - 0.290788),
            ambient_opacity: AMBIENT_SHADOW_OPACITY,
        }
    }
}

impl Default for ShadowMetrics {
    fn default() -> Self {
        Self::NONE
    }
}
