pub const MIN_SCALE: f64 = 1.0;
pub const MAX_SCALE: f64 = 8.0;
/// Exponent applied per zoom button press.
pub const BUTTON_STEP: f64 = 0.5;
/// Exponent applied per wheel notch.
pub const WHEEL_STEP: f64 = 0.2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Scale and translation applied to the wrapped content.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    pub scale: f64,
    pub offset: Point,
    /// While pinned, pointer and wheel gestures are ignored.
    pub pinned: bool,
    initial_scale: f64,
    initial_offset: Point,
    /// Pointer position minus offset at the start of a pan.
    pan_anchor: Option<Point>,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new(1.0, Point::ORIGIN)
    }
}

impl ViewTransform {
    pub fn new(initial_scale: f64, initial_offset: Point) -> Self {
        let initial_scale = initial_scale.clamp(MIN_SCALE, MAX_SCALE);
        Self {
            scale: initial_scale,
            offset: initial_offset,
            pinned: false,
            initial_scale,
            initial_offset,
            pan_anchor: None,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "transform: translate({}px, {}px) scale({}); transform-origin: 0 0;",
            self.offset.x, self.offset.y, self.scale
        )
    }

    /// Rescales so that `focus` (in viewport coordinates) stays put.
    pub fn zoom_at(&mut self, exponent: f64, focus: Point) {
        let next = (self.scale * exponent.exp()).clamp(MIN_SCALE, MAX_SCALE);
        let ratio = next / self.scale;
        self.offset.x = focus.x - (focus.x - self.offset.x) * ratio;
        self.offset.y = focus.y - (focus.y - self.offset.y) * ratio;
        self.scale = next;
    }

    pub fn zoom_in(&mut self, center: Point) {
        self.zoom_at(BUTTON_STEP, center);
    }

    pub fn zoom_out(&mut self, center: Point) {
        self.zoom_at(-BUTTON_STEP, center);
    }

    pub fn reset(&mut self) {
        self.scale = self.initial_scale;
        self.offset = self.initial_offset;
        self.pan_anchor = None;
    }

    pub fn toggle_pin(&mut self) {
        self.pinned = !self.pinned;
        self.pan_anchor = None;
    }

    /// Wheel gesture. Positive `delta_y` scrolls down and zooms out.
    pub fn wheel(&mut self, delta_y: f64, focus: Point) {
        if self.pinned || delta_y == 0.0 {
            return;
        }
        self.zoom_at(-delta_y.signum() * WHEEL_STEP, focus);
    }

    pub fn begin_pan(&mut self, pointer: Point) {
        if self.pinned {
            return;
        }
        self.pan_anchor = Some(Point::new(
            pointer.x - self.offset.x,
            pointer.y - self.offset.y,
        ));
    }

    pub fn pan_to(&mut self, pointer: Point) {
        if let Some(anchor) = self.pan_anchor {
            self.offset = Point::new(pointer.x - anchor.x, pointer.y - anchor.y);
        }
    }

    pub fn end_pan(&mut self) {
        self.pan_anchor = None;
    }

    pub fn is_panning(&self) -> bool {
        self.pan_anchor.is_some()
    }
}
