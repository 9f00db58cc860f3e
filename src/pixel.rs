// One animated square and its per-frame motion.
// Visual expectation: a pixel flees the cursor, grows while it is away from
// home, then springs back, wobbles a little and locks into place.

use crate::geometry::{Point, distance};
use crate::pointer::Pointer;

/// Added to the cursor radius when the cursor never touched the surface,
/// so the "far away" branch is always taken.
const OFFSTAGE_DISTANCE: f64 = 100.0;

/// Closer than this the cursor counts as sitting right on the pixel.
const MIN_DISTANCE: f64 = 1e-4;

/// Push direction used when cursor and pixel coincide (straight up).
const COINCIDENT_DIRECTION: Point = Point::new(0.0, -1.0);

/// Kick for a coincident cursor, in multiples of `speed_up`. Must stay above
/// 1 or the snap check of the same frame swallows the kick.
const COINCIDENT_KICK: f64 = 2.0;

/// Snap only when the pixel is within this distance of home.
const SNAP_DISTANCE: f64 = 1.0;

/// Motion tuning shared by every pixel of a surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelParams {
    /// Push-away gain while the cursor is near.
    pub speed_up: f64,
    /// Pull-back gain once the cursor is gone.
    pub speed_down: f64,
    /// Velocity kept per frame while homing, in (0,1).
    pub rubbing: f64,
    /// Edge length at rest.
    pub size: f64,
    /// Largest edge length.
    pub size_max: f64,
    /// Growth of the edge per unit of distance from home.
    pub size_ratio: f64,
}

impl Default for PixelParams {
    fn default() -> Self {
        Self {
            speed_up: 1.3,
            speed_down: 0.4,
            rubbing: 0.974,
            size: 5.0,
            size_max: 15.0,
            size_ratio: 0.1,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Pixel {
    position: Point,
    rest: Point,
    velocity: Point,
    size: f64,
    color: u32, // 0x00RRGGBB
    moving: bool,
}

impl Pixel {
    /// A pixel sitting still at `rest`.
    pub fn new(rest: Point, color: u32, params: &PixelParams) -> Self {
        Self {
            position: rest,
            rest,
            velocity: Point::ZERO,
            size: params.size,
            color,
            moving: false,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn rest_position(&self) -> Point {
        self.rest
    }

    pub fn velocity(&self) -> Point {
        self.velocity
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn color(&self) -> u32 {
        self.color
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    /// Step this pixel by one frame.
    ///
    /// 1. Accumulate force: flee the cursor when it is inside its radius,
    ///    otherwise (if still displaced) get pulled home and damped.
    /// 2. Snap to rest once close to home and slow.
    /// 3. Integrate the velocity and resize by the distance from home.
    pub fn advance(&mut self, pointer: &Pointer, params: &PixelParams) {
        let d = if pointer.is_active() {
            distance(pointer.position(), self.position)
        } else {
            pointer.radius() + OFFSTAGE_DISTANCE
        };

        if d < pointer.radius() {
            self.repel(pointer.position(), d, params.speed_up);
            self.moving = true;
        } else if self.moving {
            // The cursor distance is reused for the pull on purpose:
            // homing gets slower the further away the cursor sits.
            self.pull_home(d, params.speed_down);
            self.rub(params.rubbing);
        }

        if distance(self.position, self.rest) < SNAP_DISTANCE
            && distance(self.position, self.position - self.velocity) < params.speed_up
        {
            if self.moving {
                log::trace!("pixel snapped to rest at ({}, {})", self.rest.x, self.rest.y);
            }
            self.velocity = Point::ZERO;
            self.position = self.rest;
            self.moving = false;
        }

        self.position += self.velocity;
        self.size = (params.size + distance(self.position, self.rest) * params.size_ratio)
            .min(params.size_max);
    }

    /// Scale the offset from the cursor by `(d + gain) / d` and add the
    /// difference. The added vector has length `gain` and points away.
    /// Multiply before dividing: the rounding of this order decides whether
    /// a push from rest clears the snap threshold.
    fn repel(&mut self, cursor: Point, d: f64, gain: f64) {
        if d < MIN_DISTANCE {
            // No direction to flee along; pick a fixed one.
            self.velocity += COINCIDENT_DIRECTION * (gain * COINCIDENT_KICK);
            return;
        }
        let offset = self.position - cursor;
        self.velocity += offset * (d + gain) / d - offset;
    }

    fn pull_home(&mut self, d: f64, gain: f64) {
        let offset = self.position - self.rest;
        self.velocity = self.velocity - (offset * (d + gain) / d - offset);
    }

    fn rub(&mut self, rubbing: f64) {
        self.velocity = self.velocity * rubbing;
    }
}
