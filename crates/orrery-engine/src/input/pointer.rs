use glam::Vec2;

/// What a pointer event means once press/move/release are paired up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerAction {
    /// Pointer moved while held: rotate by this many pixels.
    Drag { dx: f32, dy: f32 },
    /// Press and release without travelling past the drag threshold.
    Click { x: f32, y: f32 },
}

/// Separates clicks from camera drags.
#[derive(Debug, Clone)]
pub struct PointerTracker {
    threshold: f32,
    pressed: bool,
    moved: bool,
    start: Vec2,
    last: Vec2,
}

impl PointerTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            pressed: false,
            moved: false,
            start: Vec2::ZERO,
            last: Vec2::ZERO,
        }
    }

    pub fn down(&mut self, x: f32, y: f32) {
        self.pressed = true;
        self.moved = false;
        self.start = Vec2::new(x, y);
        self.last = self.start;
    }

    pub fn moved(&mut self, x: f32, y: f32) -> Option<PointerAction> {
        if !self.pressed {
            return None;
        }
        let pos = Vec2::new(x, y);
        if !self.moved && pos.distance(self.start) > self.threshold {
            self.moved = true;
        }
        let delta = pos - self.last;
        self.last = pos;
        self.moved.then_some(PointerAction::Drag { dx: delta.x, dy: delta.y })
    }

    pub fn up(&mut self, x: f32, y: f32) -> Option<PointerAction> {
        let was_click = self.pressed && !self.moved;
        self.pressed = false;
        self.moved = false;
        was_click.then_some(PointerAction::Click { x, y })
    }

    pub fn is_dragging(&self) -> bool {
        self.pressed && self.moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_and_release_in_place_is_click() {
        let mut t = PointerTracker::new(5.0);
        t.down(100.0, 100.0);
        assert_eq!(t.moved(102.0, 101.0), None);
        assert_eq!(t.up(102.0, 101.0), Some(PointerAction::Click { x: 102.0, y: 101.0 }));
    }

    #[test]
    fn travel_past_threshold_is_drag() {
        let mut t = PointerTracker::new(5.0);
        t.down(100.0, 100.0);
        let action = t.moved(120.0, 100.0);
        assert_eq!(action, Some(PointerAction::Drag { dx: 20.0, dy: 0.0 }));
        assert!(t.is_dragging());
        assert_eq!(t.moved(125.0, 103.0), Some(PointerAction::Drag { dx: 5.0, dy: 3.0 }));
        assert_eq!(t.up(125.0, 103.0), None);
    }

    #[test]
    fn hover_without_press_does_nothing() {
        let mut t = PointerTracker::new(5.0);
        assert_eq!(t.moved(50.0, 50.0), None);
        assert_eq!(t.up(50.0, 50.0), None);
    }
}
