//! Pointer sources.
//!
//! The frame loop polls a [`PointerSource`] once per tick for the pointer's
//! global position. `None` means there was no reading this tick; nothing is
//! spawned and the tracked position stays where it was.
//!
//! # Sources
//!
//! | Source | Use |
//! |--------|-----|
//! | [`FixedPointer`] | A pointer that never moves, or a hand-driven one in tests |
//! | [`ScriptedPointer`] | Walks a polyline at a fixed speed, for headless runs |
//! | any `FnMut() -> Option<IVec2>` | Adapters over a real cursor |
//!
//! ```ignore
//! let mut pointer = ScriptedPointer::circle(Vec2::new(400.0, 300.0), 120.0, 48)
//!     .with_speed(12.0)
//!     .looping(true);
//!
//! sim.run_frame(&mut pointer, &mut clock);
//! ```

use glam::{IVec2, Vec2};
use std::f32::consts::TAU;

/// Something that can report the pointer's global position.
pub trait PointerSource {
    /// Current position, or `None` if unavailable this tick.
    fn position(&mut self) -> Option<IVec2>;
}

impl<F> PointerSource for F
where
    F: FnMut() -> Option<IVec2>,
{
    fn position(&mut self) -> Option<IVec2> {
        self()
    }
}

/// A pointer that stays wherever it was last put.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedPointer(pub Option<IVec2>);

impl FixedPointer {
    pub fn at(position: IVec2) -> Self {
        FixedPointer(Some(position))
    }

    pub fn move_to(&mut self, position: IVec2) {
        self.0 = Some(position);
    }

    /// Report no position until the next `move_to`.
    pub fn hide(&mut self) {
        self.0 = None;
    }
}

impl PointerSource for FixedPointer {
    fn position(&mut self) -> Option<IVec2> {
        self.0
    }
}

/// A pointer that walks a polyline of waypoints at a constant speed.
///
/// Each call to [`position`](PointerSource::position) reports the current
/// point and then advances `speed` pixels along the path. A non-looping path
/// parks on its last waypoint when it runs out.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedPointer {
    waypoints: Vec<Vec2>,
    speed: f32,
    looping: bool,
    segment: usize,
    along: f32,
}

impl ScriptedPointer {
    /// Walk `waypoints` in order at 10 px per tick.
    pub fn new(waypoints: Vec<Vec2>) -> Self {
        Self {
            waypoints,
            speed: 10.0,
            looping: false,
            segment: 0,
            along: 0.0,
        }
    }

    /// Straight line from `from` to `to`.
    pub fn line(from: Vec2, to: Vec2) -> Self {
        Self::new(vec![from, to])
    }

    /// Closed circle through `points` evenly spaced waypoints.
    pub fn circle(center: Vec2, radius: f32, points: usize) -> Self {
        let points = points.max(3);
        let waypoints = (0..=points)
            .map(|i| center + Vec2::from_angle(i as f32 / points as f32 * TAU) * radius)
            .collect();
        Self::new(waypoints)
    }

    /// Zigzag starting at `start`, `teeth` peaks across `width`, `height`
    /// from trough to peak.
    pub fn zigzag(start: Vec2, width: f32, height: f32, teeth: usize) -> Self {
        let steps = teeth.max(1) * 2;
        let waypoints = (0..=steps)
            .map(|i| {
                let x = start.x + width * i as f32 / steps as f32;
                let y = if i % 2 == 0 { start.y } else { start.y - height };
                Vec2::new(x, y)
            })
            .collect();
        Self::new(waypoints)
    }

    /// Pixels travelled per tick.
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed.max(0.0);
        self
    }

    /// Restart from the first waypoint after the last.
    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Whether a non-looping path has reached its end.
    pub fn is_finished(&self) -> bool {
        !self.looping && self.segment + 1 >= self.waypoints.len()
    }

    fn current(&self) -> Option<Vec2> {
        let a = *self.waypoints.get(self.segment)?;
        match self.waypoints.get(self.segment + 1) {
            Some(&b) => {
                let len = a.distance(b);
                let t = if len > 0.0 { self.along / len } else { 1.0 };
                Some(a.lerp(b, t.min(1.0)))
            }
            None => Some(a),
        }
    }

    fn advance(&mut self) {
        let mut remaining = self.speed;
        // Bounded so a zero-length looping path cannot spin forever.
        for _ in 0..=self.waypoints.len() {
            if self.segment + 1 >= self.waypoints.len() {
                if self.looping && self.waypoints.len() > 1 {
                    self.segment = 0;
                    self.along = 0.0;
                } else {
                    return;
                }
            }
            let len = self.waypoints[self.segment].distance(self.waypoints[self.segment + 1]);
            if self.along + remaining < len {
                self.along += remaining;
                return;
            }
            remaining -= len - self.along;
            self.segment += 1;
            self.along = 0.0;
        }
    }
}

impl PointerSource for ScriptedPointer {
    fn position(&mut self) -> Option<IVec2> {
        let p = self.current()?;
        self.advance();
        Some(IVec2::new(p.x.round() as i32, p.y.round() as i32))
    }
}
