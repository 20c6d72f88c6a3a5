//! Intersection Observer
//!
//! Observe element overlap with the viewport. Element rectangles are
//! supplied by the host; layout is not modeled here.

use std::collections::HashMap;

use hush_dom::{NodeId, Rect};

/// Intersection observer entry
#[derive(Debug, Clone)]
pub struct IntersectionEntry {
    pub target: NodeId,
    pub intersection_ratio: f64,
    pub is_intersecting: bool,
}

/// Intersection observer with a single ratio threshold.
///
/// `check` reports an entry for each observed element on its first
/// observation and on every threshold crossing afterwards.
#[derive(Debug)]
pub struct IntersectionObserver {
    threshold: f64,
    observed: HashMap<NodeId, Option<f64>>, // last ratio
}

impl IntersectionObserver {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            observed: HashMap::new(),
        }
    }

    /// Observe an element. Re-observing keeps the existing observation.
    pub fn observe(&mut self, target: NodeId) {
        self.observed.entry(target).or_insert(None);
    }

    /// Check if a target is observed
    pub fn is_observing(&self, target: NodeId) -> bool {
        self.observed.contains_key(&target)
    }

    /// Number of observed elements
    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }

    /// Compute intersections against the viewport.
    ///
    /// Elements with no known rectangle are skipped; the host has not laid
    /// them out yet and there is nothing to report.
    pub fn check(
        &mut self,
        viewport: Rect,
        element_rects: &HashMap<NodeId, Rect>,
    ) -> Vec<IntersectionEntry> {
        let mut entries = Vec::new();

        for (node, last_ratio) in self.observed.iter_mut() {
            let Some(rect) = element_rects.get(node) else {
                continue;
            };

            let area = rect.area();
            let ratio = if area > 0.0 {
                rect.intersect(&viewport)
                    .map(|overlap| overlap.area() / area)
                    .unwrap_or(0.0)
            } else {
                0.0
            };

            let crossed = match *last_ratio {
                Some(last) => (last > self.threshold) != (ratio > self.threshold),
                None => true,
            };
            *last_ratio = Some(ratio);

            if crossed {
                entries.push(IntersectionEntry {
                    target: *node,
                    intersection_ratio: ratio,
                    is_intersecting: ratio > self.threshold,
                });
            }
        }

        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Rect {
        Rect::from_xywh(0.0, 0.0, 800.0, 600.0)
    }

    #[test]
    fn test_first_check_reports() {
        let mut observer = IntersectionObserver::new(0.0);
        let node = NodeId::from_raw(1);
        observer.observe(node);

        let mut rects = HashMap::new();
        rects.insert(node, Rect::from_xywh(100.0, 100.0, 200.0, 200.0));

        let entries = observer.check(viewport(), &rects);
        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_intersecting);
    }

    #[test]
    fn test_no_change_is_silent() {
        let mut observer = IntersectionObserver::new(0.0);
        let node = NodeId::from_raw(1);
        observer.observe(node);

        let mut rects = HashMap::new();
        rects.insert(node, Rect::from_xywh(100.0, 100.0, 200.0, 200.0));

        observer.check(viewport(), &rects);
        assert!(observer.check(viewport(), &rects).is_empty());
    }

    #[test]
    fn test_zero_overlap_crossing_reports() {
        let mut observer = IntersectionObserver::new(0.0);
        let node = NodeId::from_raw(1);
        observer.observe(node);

        let mut rects = HashMap::new();
        rects.insert(node, Rect::from_xywh(100.0, 100.0, 200.0, 200.0));
        observer.check(viewport(), &rects);

        // Scrolled fully below the fold.
        rects.insert(node, Rect::from_xywh(100.0, 900.0, 200.0, 200.0));
        let entries = observer.check(viewport(), &rects);
        assert_eq!(entries.len(), 1);
        assert!(!entries[0].is_intersecting);
        assert_eq!(entries[0].intersection_ratio, 0.0);

        // Partial overlap counts as intersecting again.
        rects.insert(node, Rect::from_xywh(100.0, 500.0, 200.0, 200.0));
        let entries = observer.check(viewport(), &rects);
        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_intersecting);
    }

    #[test]
    fn test_observe_is_idempotent() {
        let mut observer = IntersectionObserver::new(0.0);
        let node = NodeId::from_raw(1);

        observer.observe(node);
        let mut rects = HashMap::new();
        rects.insert(node, Rect::from_xywh(0.0, 0.0, 100.0, 100.0));
        observer.check(viewport(), &rects);

        // Re-observing must not reset the crossing baseline.
        observer.observe(node);
        assert_eq!(observer.observed_count(), 1);
        assert!(observer.check(viewport(), &rects).is_empty());
    }

    #[test]
    fn test_unlaid_out_element_is_skipped() {
        let mut observer = IntersectionObserver::new(0.0);
        observer.observe(NodeId::from_raw(7));
        assert!(observer.check(viewport(), &HashMap::new()).is_empty());
    }
}
