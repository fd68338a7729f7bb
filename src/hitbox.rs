/*
 * Hit Box Module
 *
 * Axis-aligned collision boxes in world coordinates. The origin is the
 * top-left corner of the arena and y grows downwards.
 */

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitBox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl HitBox {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    // Square box of the given side length centered on (cx, cy)
    pub fn centered(cx: f32, cy: f32, size: f32) -> Self {
        Self::new(cx - size / 2.0, cy - size / 2.0, size, size)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    // Move the box so that its center sits on (cx, cy), keeping its size
    pub fn recenter(&mut self, cx: f32, cy: f32) {
        self.x = cx - self.width / 2.0;
        self.y = cy - self.height / 2.0;
    }

    /// Whether the two boxes share any interior area.
    ///
    /// Boxes that only touch along an edge do not overlap.
    pub fn overlaps(&self, other: &HitBox) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_box_reports_its_center() {
        let hit_box = HitBox::centered(100.0, 50.0, 16.0);
        assert_eq!(hit_box.left(), 92.0);
        assert_eq!(hit_box.top(), 42.0);
        assert_eq!(hit_box.center(), (100.0, 50.0));
    }

    #[test]
    fn recenter_keeps_size() {
        let mut hit_box = HitBox::centered(0.0, 0.0, 16.0);
        hit_box.recenter(40.0, 30.0);
        assert_eq!(hit_box.center(), (40.0, 30.0));
        assert_eq!(hit_box.width, 16.0);
        assert_eq!(hit_box.height, 16.0);
    }

    #[test]
    fn edge_contact_is_not_overlap() {
        let a = HitBox::new(0.0, 0.0, 32.0, 32.0);
        let touching = HitBox::new(32.0, 0.0, 32.0, 32.0);
        let inside = HitBox::new(31.0, 31.0, 32.0, 32.0);
        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a));
    }
}
