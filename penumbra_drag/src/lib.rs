// Copyright 2026 the Penumbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Penumbra Drag: press-and-drag interaction state for elevated surfaces.
//!
//! ## Overview
//!
//! This crate translates a continuous pointer-gesture stream — begin →
//! change* → end — into mutations of one draggable, shadow-casting surface:
//!
//! - On **begin** the surface lifts to its pressed elevation and the
//!   controller records the *grab offset*, the vector from the surface's
//!   center to the initial touch point.
//! - On every **change** the surface's center follows the pointer minus
//!   that offset, so the grabbed point stays fixed under the pointer
//!   instead of the surface snapping its center to the touch location.
//! - On **end** the surface settles back to its resting elevation; the
//!   position keeps its last dragged value.
//!
//! The controller does not perform hit testing or gesture recognition.
//! The host resolves which surface was pressed and feeds this controller
//! the phase/location stream as its sole subscriber.
//!
//! ## Usage
//!
//! ```
//! use kurbo::Point;
//! use penumbra_drag::{DragController, DragSurface, DragUpdate, GesturePhase};
//!
//! struct Card {
//!     center: Point,
//!     elevation: f64,
//! }
//!
//! impl DragSurface for Card {
//!     fn center(&self) -> Point {
//!         self.center
//!     }
//!     fn set_center(&mut self, center: Point) {
//!         self.center = center;
//!     }
//!     fn set_elevation(&mut self, elevation: f64) {
//!         self.elevation = elevation;
//!     }
//! }
//!
//! let mut card = Card { center: Point::new(100.0, 100.0), elevation: 0.0 };
//! let mut drag = DragController::new();
//! drag.rest(&mut card);
//! assert_eq!(card.elevation, penumbra_elevation::RESTING_CARD_ELEVATION);
//!
//! // Press 10px right of the center: the card lifts but does not move.
//! drag.handle(&mut card, GesturePhase::Begin, Point::new(110.0, 100.0));
//! assert_eq!(card.elevation, penumbra_elevation::PRESSED_CARD_ELEVATION);
//! assert_eq!(card.center, Point::new(100.0, 100.0));
//!
//! // Dragging keeps the grabbed point under the pointer.
//! let update = drag.handle(&mut card, GesturePhase::Change, Point::new(150.0, 120.0));
//! assert_eq!(update, DragUpdate::Moved(Point::new(140.0, 120.0)));
//!
//! // Release: the card settles where it was dropped.
//! drag.handle(&mut card, GesturePhase::End, Point::new(150.0, 120.0));
//! assert_eq!(card.elevation, penumbra_elevation::RESTING_CARD_ELEVATION);
//! assert_eq!(card.center, Point::new(140.0, 120.0));
//! ```
//!
//! ## Event ordering
//!
//! The host contract is strict ordering: exactly one begin, zero or more
//! changes, exactly one end per interaction, delivered serially on one
//! thread. Events that violate it — a change or end with no drag in flight,
//! a begin while one is — are treated as spurious delivery, reported as
//! [`DragUpdate::Ignored`], and leave the surface untouched. Duplicate end
//! events are therefore harmless.
//!
//! ## Cancellation
//!
//! Platforms interrupt gestures (incoming call, window loss) without a
//! normal release. [`DragController::cancel`] ends the drag with a
//! caller-chosen [`CancelPolicy`]: keep the last dragged position
//! (`Commit`) or restore the pre-drag one (`Rollback`). Either way the
//! resting elevation is reinstated, so the elevation invariant — pressed
//! exactly while a drag is active — holds across interruptions. A host
//! that wants commit semantics can equivalently map its cancel signal to a
//! plain end event.
//!
//! This crate is `no_std` and allocation-free.

#![no_std]

use kurbo::{Point, Vec2};

use penumbra_elevation::{PRESSED_CARD_ELEVATION, RESTING_CARD_ELEVATION};

/// Mutable view of a draggable, shadow-casting surface.
///
/// Positions are centers, in the same coordinate space the gesture stream
/// reports locations in. Setting the elevation is expected to re-render the
/// surface's shadow; how is entirely the implementer's business (see
/// `penumbra_elevation` for the metrics a renderer typically wants).
pub trait DragSurface {
    /// Current center of the surface.
    fn center(&self) -> Point;

    /// Move the surface so that its center is at `center`.
    fn set_center(&mut self, center: Point);

    /// Set the surface's shadow elevation.
    fn set_elevation(&mut self, elevation: f64);
}

/// Lifecycle phase of a continuous pointer gesture.
///
/// A well-formed interaction is `Begin`, then any number of `Change`s, then
/// `End`. Gesture cancellation is not a phase here; hosts map it to `End`
/// or call [`DragController::cancel`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    /// The pointer touched down on the surface.
    Begin,
    /// The pointer moved while still down.
    Change,
    /// The pointer was released.
    End,
}

/// What to do with the surface position when a drag is canceled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CancelPolicy {
    /// Keep the last dragged position, as a normal end would.
    Commit,
    /// Restore the position the surface had when the drag began.
    Rollback,
}

/// Outcome of feeding one gesture event to the controller.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DragUpdate {
    /// A drag began; the surface lifted to its pressed elevation.
    Started,
    /// The surface moved; carries the new center.
    Moved(Point),
    /// The drag ended; the surface settled to its resting elevation.
    Finished,
    /// The event did not match the controller's state and was dropped.
    Ignored,
}

/// State of the drag currently in flight.
#[derive(Copy, Clone, Debug, PartialEq)]
struct ActiveDrag {
    /// Vector from the surface's center to the initial touch point.
    grab_offset: Vec2,
    /// Surface center when the drag began, kept for rollback cancellation.
    start_center: Point,
}

/// Two-state press-and-drag controller for one elevated surface.
///
/// States are Idle and Dragging; the drag state is an explicit
/// [`Option`], so "no active drag" is unrepresentable as a stale offset
/// rather than signaled by a zero sentinel.
///
/// The controller owns the interaction state only. The surface itself is
/// borrowed per call, which keeps the controller trivially reusable across
/// hosts and lets tests drive it against a plain struct.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragController {
    resting_elevation: f64,
    pressed_elevation: f64,
    active: Option<ActiveDrag>,
}

impl DragController {
    /// Create a controller with the conventional card elevations
    /// ([`RESTING_CARD_ELEVATION`] / [`PRESSED_CARD_ELEVATION`]).
    pub fn new() -> Self {
        Self::with_elevations(RESTING_CARD_ELEVATION, PRESSED_CARD_ELEVATION)
    }

    /// Create a controller with a custom resting/pressed elevation pair.
    ///
    /// `resting` must be below `pressed`; the lift on press is the whole
    /// point of the feedback.
    pub fn with_elevations(resting: f64, pressed: f64) -> Self {
        debug_assert!(
            resting < pressed,
            "resting elevation must be below pressed elevation"
        );
        Self {
            resting_elevation: resting,
            pressed_elevation: pressed,
            active: None,
        }
    }

    /// The elevation applied outside an active drag.
    pub fn resting_elevation(&self) -> f64 {
        self.resting_elevation
    }

    /// The elevation applied while a drag is active.
    pub fn pressed_elevation(&self) -> f64 {
        self.pressed_elevation
    }

    /// Whether a drag is currently in flight.
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// The grab offset of the drag in flight, if any.
    ///
    /// This is the fixed vector from the surface's center at press time to
    /// the initial touch point; it exists only while a drag is active.
    pub fn grab_offset(&self) -> Option<Vec2> {
        self.active.map(|drag| drag.grab_offset)
    }

    /// Apply the resting elevation to an idle surface.
    ///
    /// Call once when wiring the controller to a surface, so the surface
    /// starts out satisfying the at-rest elevation invariant. No-op while a
    /// drag is active.
    pub fn rest(&self, surface: &mut impl DragSurface) {
        if self.active.is_none() {
            surface.set_elevation(self.resting_elevation);
        }
    }

    /// Feed one gesture event to the controller.
    ///
    /// This is the single entry point the host wires its gesture stream to:
    ///
    /// - `Begin` lifts the surface to the pressed elevation and records the
    ///   grab offset `location - surface.center()`.
    /// - `Change` moves the surface's center to `location - grab_offset`.
    /// - `End` settles the surface to the resting elevation and drops the
    ///   drag state; the position stays where the drag left it.
    ///
    /// Events that do not match the current state (a `Change` or `End`
    /// while idle, a `Begin` while dragging) leave the surface untouched
    /// and return [`DragUpdate::Ignored`].
    pub fn handle(
        &mut self,
        surface: &mut impl DragSurface,
        phase: GesturePhase,
        location: Point,
    ) -> DragUpdate {
        match phase {
            GesturePhase::Begin => {
                if self.active.is_some() {
                    return DragUpdate::Ignored;
                }
                let center = surface.center();
                self.active = Some(ActiveDrag {
                    grab_offset: location - center,
                    start_center: center,
                });
                surface.set_elevation(self.pressed_elevation);
                DragUpdate::Started
            }
            GesturePhase::Change => {
                let Some(drag) = self.active else {
                    return DragUpdate::Ignored;
                };
                let center = location - drag.grab_offset;
                surface.set_center(center);
                DragUpdate::Moved(center)
            }
            GesturePhase::End => {
                if self.active.take().is_none() {
                    return DragUpdate::Ignored;
                }
                surface.set_elevation(self.resting_elevation);
                DragUpdate::Finished
            }
        }
    }

    /// End the drag in flight because the gesture was interrupted.
    ///
    /// The resting elevation is reinstated either way; `policy` decides
    /// whether the surface keeps its last dragged position or snaps back to
    /// where the drag began. Returns `true` if a drag was actually
    /// canceled, `false` if the controller was already idle.
    pub fn cancel(&mut self, surface: &mut impl DragSurface, policy: CancelPolicy) -> bool {
        let Some(drag) = self.active.take() else {
            return false;
        };
        if policy == CancelPolicy::Rollback {
            surface.set_center(drag.start_center);
        }
        surface.set_elevation(self.resting_elevation);
        true
    }
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Plain surface double: records whatever the controller sets.
    struct Card {
        center: Point,
        elevation: f64,
    }

    impl Card {
        fn at(x: f64, y: f64) -> Self {
            Self {
                center: Point::new(x, y),
                elevation: RESTING_CARD_ELEVATION,
            }
        }
    }

    impl DragSurface for Card {
        fn center(&self) -> Point {
            self.center
        }
        fn set_center(&mut self, center: Point) {
            self.center = center;
        }
        fn set_elevation(&mut self, elevation: f64) {
            self.elevation = elevation;
        }
    }

    #[test]
    fn begin_lifts_and_records_grab_offset() {
        let mut card = Card::at(100.0, 100.0);
        let mut drag = DragController::new();

        let update = drag.handle(&mut card, GesturePhase::Begin, Point::new(110.0, 100.0));

        assert_eq!(update, DragUpdate::Started);
        assert_eq!(card.elevation, PRESSED_CARD_ELEVATION);
        assert_eq!(drag.grab_offset(), Some(Vec2::new(10.0, 0.0)));
        // Press alone must not move the surface.
        assert_eq!(card.center, Point::new(100.0, 100.0));
    }

    #[test]
    fn change_preserves_the_grab_point() {
        let mut card = Card::at(100.0, 100.0);
        let mut drag = DragController::new();
        drag.handle(&mut card, GesturePhase::Begin, Point::new(110.0, 100.0));

        // Wherever the pointer goes, center - pointer stays C0 - P0.
        for (px, py) in [(150.0, 120.0), (160.0, 130.0), (90.0, 40.0)] {
            let pointer = Point::new(px, py);
            drag.handle(&mut card, GesturePhase::Change, pointer);
            assert_eq!(card.center - pointer, Vec2::new(-10.0, 0.0));
        }
    }

    #[test]
    fn movable_shadowed_card_scenario() {
        let mut card = Card::at(100.0, 100.0);
        let mut drag = DragController::new();
        assert_eq!(card.elevation, 2.0);

        drag.handle(&mut card, GesturePhase::Begin, Point::new(110.0, 100.0));
        assert_eq!(card.elevation, 8.0);
        assert_eq!(drag.grab_offset(), Some(Vec2::new(10.0, 0.0)));

        let update = drag.handle(&mut card, GesturePhase::Change, Point::new(150.0, 120.0));
        assert_eq!(update, DragUpdate::Moved(Point::new(140.0, 120.0)));
        assert_eq!(card.center, Point::new(140.0, 120.0));

        drag.handle(&mut card, GesturePhase::Change, Point::new(160.0, 130.0));
        assert_eq!(card.center, Point::new(150.0, 130.0));

        let update = drag.handle(&mut card, GesturePhase::End, Point::new(160.0, 130.0));
        assert_eq!(update, DragUpdate::Finished);
        assert_eq!(card.elevation, 2.0);
        assert_eq!(card.center, Point::new(150.0, 130.0));
    }

    #[test]
    fn end_settles_elevation_and_keeps_position() {
        let mut card = Card::at(0.0, 0.0);
        let mut drag = DragController::new();
        drag.handle(&mut card, GesturePhase::Begin, Point::new(5.0, 5.0));
        drag.handle(&mut card, GesturePhase::Change, Point::new(205.0, 105.0));
        drag.handle(&mut card, GesturePhase::End, Point::new(205.0, 105.0));

        assert_eq!(card.elevation, RESTING_CARD_ELEVATION);
        assert_eq!(card.center, Point::new(200.0, 100.0));
        assert!(!drag.is_dragging());
        assert_eq!(drag.grab_offset(), None);
    }

    #[test]
    fn change_without_begin_is_ignored() {
        let mut card = Card::at(100.0, 100.0);
        let mut drag = DragController::new();

        let update = drag.handle(&mut card, GesturePhase::Change, Point::new(500.0, 500.0));

        assert_eq!(update, DragUpdate::Ignored);
        assert_eq!(card.center, Point::new(100.0, 100.0));
        assert_eq!(card.elevation, RESTING_CARD_ELEVATION);
    }

    #[test]
    fn duplicate_end_is_idempotent() {
        let mut card = Card::at(100.0, 100.0);
        let mut drag = DragController::new();
        drag.handle(&mut card, GesturePhase::Begin, Point::new(100.0, 100.0));
        drag.handle(&mut card, GesturePhase::Change, Point::new(130.0, 100.0));

        let first = drag.handle(&mut card, GesturePhase::End, Point::new(130.0, 100.0));
        assert_eq!(first, DragUpdate::Finished);
        let after_first = (card.center, card.elevation);

        // Spurious duplicate delivery from the gesture layer.
        let second = drag.handle(&mut card, GesturePhase::End, Point::new(130.0, 100.0));
        assert_eq!(second, DragUpdate::Ignored);
        assert_eq!((card.center, card.elevation), after_first);
    }

    #[test]
    fn begin_while_dragging_is_ignored() {
        let mut card = Card::at(100.0, 100.0);
        let mut drag = DragController::new();
        drag.handle(&mut card, GesturePhase::Begin, Point::new(110.0, 100.0));

        let update = drag.handle(&mut card, GesturePhase::Begin, Point::new(300.0, 300.0));

        assert_eq!(update, DragUpdate::Ignored);
        // The original grab offset survives.
        assert_eq!(drag.grab_offset(), Some(Vec2::new(10.0, 0.0)));
    }

    #[test]
    fn next_begin_recomputes_grab_offset_from_current_center() {
        let mut card = Card::at(100.0, 100.0);
        let mut drag = DragController::new();

        drag.handle(&mut card, GesturePhase::Begin, Point::new(110.0, 100.0));
        drag.handle(&mut card, GesturePhase::Change, Point::new(160.0, 130.0));
        drag.handle(&mut card, GesturePhase::End, Point::new(160.0, 130.0));
        assert_eq!(card.center, Point::new(150.0, 130.0));

        // A fresh press measures against the moved center, not the old one.
        drag.handle(&mut card, GesturePhase::Begin, Point::new(151.0, 132.0));
        assert_eq!(drag.grab_offset(), Some(Vec2::new(1.0, 2.0)));
    }

    #[test]
    fn cancel_commit_keeps_dragged_position() {
        let mut card = Card::at(100.0, 100.0);
        let mut drag = DragController::new();
        drag.handle(&mut card, GesturePhase::Begin, Point::new(110.0, 100.0));
        drag.handle(&mut card, GesturePhase::Change, Point::new(150.0, 120.0));

        let canceled = drag.cancel(&mut card, CancelPolicy::Commit);

        assert!(canceled);
        assert_eq!(card.center, Point::new(140.0, 120.0));
        assert_eq!(card.elevation, RESTING_CARD_ELEVATION);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn cancel_rollback_restores_start_center() {
        let mut card = Card::at(100.0, 100.0);
        let mut drag = DragController::new();
        drag.handle(&mut card, GesturePhase::Begin, Point::new(110.0, 100.0));
        drag.handle(&mut card, GesturePhase::Change, Point::new(150.0, 120.0));

        let canceled = drag.cancel(&mut card, CancelPolicy::Rollback);

        assert!(canceled);
        assert_eq!(card.center, Point::new(100.0, 100.0));
        assert_eq!(card.elevation, RESTING_CARD_ELEVATION);
    }

    #[test]
    fn cancel_while_idle_does_nothing() {
        let mut card = Card::at(100.0, 100.0);
        card.elevation = RESTING_CARD_ELEVATION;
        let mut drag = DragController::new();

        assert!(!drag.cancel(&mut card, CancelPolicy::Rollback));
        assert_eq!(card.center, Point::new(100.0, 100.0));
        assert_eq!(card.elevation, RESTING_CARD_ELEVATION);
    }

    #[test]
    fn rest_applies_resting_elevation_when_idle() {
        let mut card = Card::at(100.0, 100.0);
        card.elevation = 0.0;
        let drag = DragController::new();

        drag.rest(&mut card);

        assert_eq!(card.elevation, RESTING_CARD_ELEVATION);
    }

    #[test]
    fn rest_is_a_no_op_mid_drag() {
        let mut card = Card::at(100.0, 100.0);
        let mut drag = DragController::new();
        drag.handle(&mut card, GesturePhase::Begin, Point::new(110.0, 100.0));

        drag.rest(&mut card);

        // Mid-drag the surface must stay lifted.
        assert_eq!(card.elevation, PRESSED_CARD_ELEVATION);
    }

    #[test]
    fn custom_elevation_pair_is_honored() {
        let mut card = Card::at(0.0, 0.0);
        let mut drag = DragController::with_elevations(1.0, 12.0);

        drag.handle(&mut card, GesturePhase::Begin, Point::new(0.0, 0.0));
        assert_eq!(card.elevation, 12.0);
        drag.handle(&mut card, GesturePhase::End, Point::new(0.0, 0.0));
        assert_eq!(card.elevation, 1.0);
    }

    #[test]
    fn zero_grab_offset_is_distinct_from_idle() {
        let mut card = Card::at(100.0, 100.0);
        let mut drag = DragController::new();

        // Press dead center: the offset is a legitimate zero vector,
        // not the idle state.
        drag.handle(&mut card, GesturePhase::Begin, Point::new(100.0, 100.0));
        assert!(drag.is_dragging());
        assert_eq!(drag.grab_offset(), Some(Vec2::ZERO));

        drag.handle(&mut card, GesturePhase::Change, Point::new(120.0, 80.0));
        assert_eq!(card.center, Point::new(120.0, 80.0));
    }
}
