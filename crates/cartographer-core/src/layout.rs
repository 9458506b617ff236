//! Initial node placement

use crate::model::Position;
use std::hash::{DefaultHasher, Hash, Hasher};

pub const GRID_COLUMNS: usize = 6;
pub const COLUMN_WIDTH: f32 = 220.0;
pub const ROW_HEIGHT: f32 = 180.0;
/// Jitter is drawn from `0..JITTER` on both axes.
pub const JITTER: u64 = 50;

/// Grid position for the `index`-th file, nudged by a jitter derived from its name.
pub fn grid_position(index: usize, name: &str) -> Position {
    let mut hasher = DefaultHasher::new();
    name.hash(&mut hasher);
    let h = hasher.finish();

    let jitter_x = (h % JITTER) as f32;
    let jitter_y = ((h >> 32) % JITTER) as f32;

    Position {
        x: (index % GRID_COLUMNS) as f32 * COLUMN_WIDTH + jitter_x,
        y: (index / GRID_COLUMNS) as f32 * ROW_HEIGHT + jitter_y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_after_six_columns() {
        let first = grid_position(0, "a.js");
        let seventh = grid_position(6, "b.js");
        assert!(first.x < COLUMN_WIDTH);
        assert!(first.y < ROW_HEIGHT);
        assert!(seventh.x < COLUMN_WIDTH);
        assert!(seventh.y >= ROW_HEIGHT && seventh.y < 2.0 * ROW_HEIGHT);
    }

    #[test]
    fn placement_is_reproducible() {
        assert_eq!(grid_position(3, "utils.js"), grid_position(3, "utils.js"));
    }
}
