//! Clipping rectangles for panel drawing.

/// A rectangle in buffer coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClipRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl ClipRect {
    #[must_use]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub const fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    #[must_use]
    pub const fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    #[must_use]
    pub const fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && py >= self.y && px < self.right() && py < self.bottom()
    }

    /// Overlap of two rectangles; zero-sized when they do not touch.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Self::new(x, y, right.saturating_sub(x), bottom.saturating_sub(y))
    }

    /// Shrink by `n` cells on every side.
    #[must_use]
    pub const fn inset(&self, n: u32) -> Self {
        Self::new(
            self.x.saturating_add(n),
            self.y.saturating_add(n),
            self.width.saturating_sub(n.saturating_mul(2)),
            self.height.saturating_sub(n.saturating_mul(2)),
        )
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl Default for ClipRect {
    fn default() -> Self {
        Self::new(0, 0, u32::MAX, u32::MAX)
    }
}

/// Nested clip regions. Each push intersects with the region below it.
#[derive(Clone, Debug, Default)]
pub struct ScissorStack {
    stack: Vec<ClipRect>,
}

impl ScissorStack {
    pub fn push(&mut self, rect: ClipRect) {
        let clipped = self.current().intersect(&rect);
        self.stack.push(clipped);
    }

    pub fn pop(&mut self) {
        self.stack.pop();
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }

    /// The effective clip region (unbounded when the stack is empty).
    #[must_use]
    pub fn current(&self) -> ClipRect {
        self.stack.last().copied().unwrap_or_default()
    }

    #[must_use]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        self.current().contains(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersect_and_empty() {
        let a = ClipRect::new(0, 0, 10, 10);
        let b = ClipRect::new(5, 5, 10, 10);
        assert_eq!(a.intersect(&b), ClipRect::new(5, 5, 5, 5));
        assert!(a.intersect(&ClipRect::new(20, 20, 1, 1)).is_empty());
    }

    #[test]
    fn test_inset_saturates() {
        assert_eq!(ClipRect::new(2, 2, 10, 6).inset(1), ClipRect::new(3, 3, 8, 4));
        assert!(ClipRect::new(0, 0, 1, 1).inset(1).is_empty());
    }

    #[test]
    fn test_stack_nests() {
        let mut stack = ScissorStack::default();
        assert!(stack.contains(1000, 1000));
        stack.push(ClipRect::new(0, 0, 10, 10));
        stack.push(ClipRect::new(5, 0, 10, 10));
        assert!(!stack.contains(4, 0));
        assert!(stack.contains(9, 0));
        assert!(!stack.contains(10, 0));
        stack.pop();
        assert!(stack.contains(4, 0));
    }
}
