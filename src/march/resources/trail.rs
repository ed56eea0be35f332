//! Trail resource - visited-square history
//!
//! Maintains the complete chronological record of squares the pawn has
//! occupied. The trail is append-only and insertion-ordered: entries are
//! never removed, deduplicated, or compacted, and each entry's index is
//! stable for the lifetime of the session. The ghost-marker system relies
//! on that stability to spawn one marker per entry incrementally.
//!
//! Growth is unbounded; there is no decimation policy.

use crate::march::rules::Coordinate;
use bevy::prelude::*;

/// Resource storing the ordered history of visited squares
#[derive(Resource, Debug, Default, Reflect)]
#[reflect(Resource)]
pub struct Trail {
    positions: Vec<Coordinate>,
}

impl Trail {
    /// Build a trail from previously recorded positions
    ///
    /// An absent record is treated as an empty sequence, never a fault.
    pub fn from_saved(saved: Option<Vec<Coordinate>>) -> Self {
        Self {
            positions: saved.unwrap_or_default(),
        }
    }

    /// Append a visited position to the end of the trail
    ///
    /// Called once per advance, with the position the pawn is leaving.
    pub fn record(&mut self, position: Coordinate) {
        self.positions.push(position);
    }

    /// Number of recorded positions
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True if nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The most recently recorded position, if any
    pub fn last(&self) -> Option<&Coordinate> {
        self.positions.last()
    }

    /// Position at a specific index (0 = first square visited)
    pub fn get(&self, index: usize) -> Option<&Coordinate> {
        self.positions.get(index)
    }

    /// Iterate over recorded positions in visit order
    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.positions.iter()
    }

    /// All recorded positions in visit order
    pub fn positions(&self) -> &[Coordinate] {
        &self.positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_default_is_empty() {
        let trail = Trail::default();
        assert!(trail.is_empty());
        assert_eq!(trail.len(), 0);
        assert!(trail.last().is_none());
    }

    #[test]
    fn test_record_appends_exactly_one_entry() {
        let mut trail = Trail::default();
        trail.record(Coordinate::new(-2.0, 1.5));
        assert_eq!(trail.len(), 1);
        assert_eq!(trail.last(), Some(&Coordinate::new(-2.0, 1.5)));
    }

    #[test]
    fn test_record_preserves_prior_entries() {
        //! Appending never mutates or reorders what was already recorded
        let mut trail = Trail::default();
        let first = Coordinate::new(-2.0, 1.5);
        let second = Coordinate::new(-1.5, 1.5);
        trail.record(first);

        let before: Vec<Coordinate> = trail.iter().copied().collect();
        trail.record(second);

        assert_eq!(trail.len(), 2);
        assert_eq!(&trail.positions()[..1], before.as_slice());
        assert_eq!(trail.get(1), Some(&second));
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut trail = Trail::default();
        for i in 0..5 {
            trail.record(Coordinate::new(i as f32, 0.0));
        }
        for (i, position) in trail.iter().enumerate() {
            assert_eq!(position.x, i as f32);
        }
    }

    #[test]
    fn test_duplicate_positions_are_kept() {
        //! The trail never deduplicates; revisited squares get fresh
        //! entries
        let mut trail = Trail::default();
        let square = Coordinate::new(0.0, 0.0);
        trail.record(square);
        trail.record(square);
        assert_eq!(trail.len(), 2);
    }

    #[test]
    fn test_from_saved_none_is_empty() {
        //! Absent saved state substitutes an empty trail, never a fault
        let trail = Trail::from_saved(None);
        assert!(trail.is_empty());
    }

    #[test]
    fn test_from_saved_restores_positions() {
        let saved = vec![Coordinate::new(-2.0, 1.5), Coordinate::new(-1.5, 1.5)];
        let trail = Trail::from_saved(Some(saved.clone()));
        assert_eq!(trail.positions(), saved.as_slice());
    }
}
