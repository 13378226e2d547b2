//! Outside-click detection for the widget container.
//!
//! The detector plays the role of a document-wide pointer-down listener: while
//! attached, every pointer-down is tested against the container region the
//! widget occupied at its last render, and a deactivation callback runs when
//! the pointer lands outside it. Until the first render there is no container
//! and pointer events are ignored.

/// A cell position inside the plugin pane (0-indexed line and column).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub line: usize,
    pub col: usize,
}

impl Point {
    #[must_use]
    pub const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// Axis-aligned rectangle of cells (0-indexed, end exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub top: usize,
    pub left: usize,
    pub height: usize,
    pub width: usize,
}

impl Region {
    #[must_use]
    pub const fn new(top: usize, left: usize, height: usize, width: usize) -> Self {
        Self {
            top,
            left,
            height,
            width,
        }
    }

    /// First line below the region.
    #[must_use]
    pub const fn bottom(&self) -> usize {
        self.top + self.height
    }

    /// First column right of the region.
    #[must_use]
    pub const fn right(&self) -> usize {
        self.left + self.width
    }

    #[must_use]
    pub const fn contains(&self, point: Point) -> bool {
        point.line >= self.top
            && point.line < self.bottom()
            && point.col >= self.left
            && point.col < self.right()
    }
}

/// Tracks the container region and reports pointer-downs that land outside it.
#[derive(Debug, Clone, Default)]
pub struct OutsideClickDetector {
    container: Option<Region>,
    attached: bool,
}

impl OutsideClickDetector {
    /// Starts listening. Called when the owning widget mounts.
    pub fn attach(&mut self) {
        tracing::trace!("outside-click listener attached");
        self.attached = true;
    }

    /// Stops listening and forgets the container. Called on teardown.
    pub fn detach(&mut self) {
        tracing::trace!("outside-click listener detached");
        self.attached = false;
        self.container = None;
    }

    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.attached
    }

    /// Records where the container was drawn.
    pub fn observe(&mut self, container: Region) {
        self.container = Some(container);
    }

    #[must_use]
    pub const fn container(&self) -> Option<Region> {
        self.container
    }

    /// Runs `deactivate` if the pointer-down at `point` lies outside the container.
    ///
    /// `point` is `None` for positions that cannot be expressed in pane
    /// coordinates (above the first line), which are always outside. No-op
    /// while detached or before any container has been observed.
    ///
    /// Returns `true` if `deactivate` ran.
    ///
    /// # Examples
    ///
    /// ```
    /// use zuggest::app::focus::{OutsideClickDetector, Point, Region};
    ///
    /// let mut detector = OutsideClickDetector::default();
    /// detector.attach();
    /// detector.observe(Region::new(3, 5, 3, 70));
    ///
    /// let mut focused = true;
    /// detector.on_pointer_down(Some(Point::new(4, 10)), || focused = false);
    /// assert!(focused);
    /// detector.on_pointer_down(Some(Point::new(20, 10)), || focused = false);
    /// assert!(!focused);
    /// ```
    pub fn on_pointer_down<F: FnOnce()>(&self, point: Option<Point>, deactivate: F) -> bool {
        if !self.attached {
            return false;
        }
        let Some(container) = self.container else {
            tracing::trace!("no container observed yet, ignoring pointer-down");
            return false;
        };

        let inside = point.is_some_and(|p| container.contains(p));
        if inside {
            return false;
        }

        tracing::debug!(point = ?point, container = ?container, "pointer-down outside container");
        deactivate();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attached_over(region: Region) -> OutsideClickDetector {
        let mut detector = OutsideClickDetector::default();
        detector.attach();
        detector.observe(region);
        detector
    }

    #[test]
    fn region_bounds_are_end_exclusive() {
        let region = Region::new(3, 5, 3, 10);

        assert!(region.contains(Point::new(3, 5)));
        assert!(region.contains(Point::new(5, 14)));
        assert!(!region.contains(Point::new(6, 5)));
        assert!(!region.contains(Point::new(3, 15)));
        assert!(!region.contains(Point::new(2, 5)));
    }

    #[test]
    fn inside_click_keeps_focus() {
        let detector = attached_over(Region::new(3, 5, 3, 10));
        let mut focused = true;

        let fired = detector.on_pointer_down(Some(Point::new(4, 6)), || focused = false);

        assert!(!fired);
        assert!(focused);
    }

    #[test]
    fn outside_click_deactivates() {
        let detector = attached_over(Region::new(3, 5, 3, 10));
        let mut focused = true;

        assert!(detector.on_pointer_down(Some(Point::new(0, 0)), || focused = false));
        assert!(!focused);
    }

    #[test]
    fn unrepresentable_point_is_outside() {
        let detector = attached_over(Region::new(3, 5, 3, 10));
        assert!(detector.on_pointer_down(None, || {}));
    }

    #[test]
    fn missing_container_is_noop() {
        let mut detector = OutsideClickDetector::default();
        detector.attach();

        assert!(!detector.on_pointer_down(Some(Point::new(0, 0)), || {}));
    }

    #[test]
    fn detached_listener_ignores_events() {
        let mut detector = attached_over(Region::new(3, 5, 3, 10));
        detector.detach();

        assert!(!detector.is_attached());
        assert_eq!(detector.container(), None);
        assert!(!detector.on_pointer_down(Some(Point::new(0, 0)), || {}));
    }
}
