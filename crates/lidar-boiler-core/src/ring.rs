//! Borrowed circular view over one frame's fitted segments.
//!
//! The segment after the last one is the first one. Traversal is a bounded
//! index walk with wraparound: starting at any index, [`SegmentRing::pairs_from`]
//! visits every consecutive `(current, next)` pair exactly once and stops when
//! it is back at the start.

use crate::Segment;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RingError {
    #[error("segment ring is empty")]
    Empty,
}

/// Read-only circular ring of segments for a single sensor frame.
///
/// The caller owns the storage; the ring never mutates or frees it.
#[derive(Clone, Copy, Debug)]
pub struct SegmentRing<'a> {
    segments: &'a [Segment],
}

impl<'a> SegmentRing<'a> {
    pub fn new(segments: &'a [Segment]) -> Result<Self, RingError> {
        if segments.is_empty() {
            return Err(RingError::Empty);
        }
        Ok(Self { segments })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always `false` for a constructed ring; kept for API symmetry with slices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[inline]
    pub fn segments(&self) -> &'a [Segment] {
        self.segments
    }

    /// Segment at `index`, wrapping around the ring.
    #[inline]
    pub fn get(&self, index: usize) -> &'a Segment {
        &self.segments[index % self.segments.len()]
    }

    #[inline]
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.segments.len()
    }

    /// Iterate the `len()` consecutive pairs, beginning with `(start, start + 1)`.
    ///
    /// `start` wraps around, so any index names a valid entry segment.
    pub fn pairs_from(&self, start: usize) -> RingPairs<'a> {
        RingPairs {
            ring: *self,
            current: start % self.segments.len(),
            remaining: self.segments.len(),
        }
    }
}

/// Iterator over consecutive ring pairs, yielding `(index_of_current, current, next)`.
#[derive(Clone, Debug)]
pub struct RingPairs<'a> {
    ring: SegmentRing<'a>,
    current: usize,
    remaining: usize,
}

impl<'a> Iterator for RingPairs<'a> {
    type Item = (usize, &'a Segment, &'a Segment);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let index = self.current;
        let next = self.ring.next_index(index);
        self.current = next;
        Some((index, self.ring.get(index), self.ring.get(next)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RingPairs<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{segments_from_closed_polyline, Point};

    fn square() -> Vec<Segment> {
        segments_from_closed_polyline(&[
            Point::new(0, 0),
            Point::new(100, 0),
            Point::new(100, 100),
            Point::new(0, 100),
        ])
    }

    #[test]
    fn empty_ring_is_rejected() {
        assert_eq!(SegmentRing::new(&[]).unwrap_err(), RingError::Empty);
    }

    #[test]
    fn indices_wrap_past_the_last_segment() {
        let segs = square();
        let ring = SegmentRing::new(&segs).expect("ring");
        assert_eq!(ring.next_index(3), 0);
        assert_eq!(ring.get(5), &segs[1]);
    }

    #[test]
    fn pairs_visit_every_pair_once_and_stop_at_start() {
        let segs = square();
        let ring = SegmentRing::new(&segs).expect("ring");
        let visited: Vec<usize> = ring.pairs_from(2).map(|(i, _, _)| i).collect();
        assert_eq!(visited, vec![2, 3, 0, 1]);

        let (_, last, first) = ring.pairs_from(3).next().expect("pair");
        assert_eq!(last, &segs[3]);
        assert_eq!(first, &segs[0]);
    }

    #[test]
    fn single_segment_ring_pairs_with_itself() {
        let seg = Segment::new(Point::new(0, 0), Point::new(10, 0));
        let segs = [seg];
        let ring = SegmentRing::new(&segs).expect("ring");
        let pairs: Vec<_> = ring.pairs_from(0).collect();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0], (0, &seg, &seg));
    }

    #[test]
    fn start_index_wraps() {
        let segs = square();
        let ring = SegmentRing::new(&segs).expect("ring");
        let first = ring.pairs_from(6).next().map(|(i, _, _)| i);
        assert_eq!(first, Some(2));
        assert_eq!(ring.pairs_from(6).len(), 4);
    }
}
