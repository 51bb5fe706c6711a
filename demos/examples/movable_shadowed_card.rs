// Copyright 2026 the Penumbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A movable, shadowed card driven by a simulated gesture stream.
//!
//! This example shows how to combine:
//! - `penumbra_drag` for the press-and-drag interaction state,
//! - `penumbra_elevation` for the shadow metrics a renderer would draw.
//!
//! The "renderer" here just prints the card's center and its derived shadow
//! after every event; a real host would re-render instead.
//!
//! Run:
//! - `cargo run -p penumbra_demos --example movable_shadowed_card`

use kurbo::Point;
use penumbra_drag::{CancelPolicy, DragController, DragSurface, GesturePhase};
use penumbra_elevation::ShadowMetrics;

/// Minimal host-side surface: a center plus whatever elevation the
/// controller last applied.
struct Card {
    center: Point,
    elevation: f64,
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

fn render(label: &str, card: &Card) {
    let shadow = ShadowMetrics::with_elevation(card.elevation);
    println!(
        "{label:<28} center=({:.0}, {:.0})  elevation={:.1}  key shadow: radius={:.2} dy={:.2}",
        card.center.x, card.center.y, card.elevation, shadow.key_radius, shadow.key_offset.y,
    );
}

fn main() {
    let mut card = Card {
        center: Point::new(100.0, 100.0),
        elevation: 0.0,
    };
    let mut drag = DragController::new();

    // Installing the controller puts the card at its resting elevation.
    drag.rest(&mut card);
    render("installed", &card);

    // One full press-drag-release interaction: press slightly off-center,
    // drag around, release. The grabbed point stays under the pointer.
    let stream = [
        (GesturePhase::Begin, Point::new(110.0, 100.0)),
        (GesturePhase::Change, Point::new(150.0, 120.0)),
        (GesturePhase::Change, Point::new(160.0, 130.0)),
        (GesturePhase::End, Point::new(160.0, 130.0)),
    ];
    for (phase, location) in stream {
        let update = drag.handle(&mut card, phase, location);
        render(&format!("{phase:?} -> {update:?}"), &card);
    }

    // An interrupted drag: the host decides whether the card stays put or
    // snaps back. Rollback restores the pre-drag center.
    drag.handle(&mut card, GesturePhase::Begin, Point::new(150.0, 130.0));
    drag.handle(&mut card, GesturePhase::Change, Point::new(300.0, 300.0));
    render("mid-drag before cancel", &card);
    drag.cancel(&mut card, CancelPolicy::Rollback);
    render("canceled (rollback)", &card);
}
