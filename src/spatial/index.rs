//! Precomputed board-traversal index
//!
//! Some policies and the spawn planner scan the whole board in a fixed
//! order. `BoardIndex` memoizes that ordering for one grid size as an
//! explicit object the caller owns and rebuilds when the size changes;
//! there is no process-wide cache.

use crate::core::types::Point;

/// Caller-owned traversal cache for one grid size
#[derive(Debug, Clone)]
pub struct BoardIndex {
    size: i32,
    cells: Vec<Point>,
    center: Point,
}

impl BoardIndex {
    /// Build the row-major cell ordering for a grid
    ///
    /// Callers keep one of these per grid size and rebuild on resize; reads
    /// never mutate it.
    pub fn new(size: i32) -> Self {
        let mut cells = Vec::with_capacity((size * size).max(0) as usize);
        for y in 0..size {
            for x in 0..size {
                cells.push(Point::new(x, y));
            }
        }
        Self {
            size,
            cells,
            center: Point::new(size / 2, size / 2),
        }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// Board center cell (rounds down on even sizes)
    pub fn center(&self) -> Point {
        self.center
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    /// Interior cells only (outer ring excluded), row-major
    pub fn interior_cells(&self) -> impl Iterator<Item = Point> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .copied()
            .filter(move |p| p.x > 0 && p.x < size - 1 && p.y > 0 && p.y < size - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_order() {
        let index = BoardIndex::new(3);
        assert_eq!(index.cells().len(), 9);
        assert_eq!(index.cells()[0], Point::new(0, 0));
        assert_eq!(index.cells()[1], Point::new(1, 0));
        assert_eq!(index.cells()[3], Point::new(0, 1));
    }

    #[test]
    fn test_interior_excludes_ring() {
        let index = BoardIndex::new(4);
        let interior: Vec<_> = index.interior_cells().collect();
        assert_eq!(
            interior,
            vec![
                Point::new(1, 1),
                Point::new(2, 1),
                Point::new(1, 2),
                Point::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_no_interior_below_size_three() {
        assert_eq!(BoardIndex::new(2).interior_cells().count(), 0);
    }

    #[test]
    fn test_center() {
        assert_eq!(BoardIndex::new(9).center(), Point::new(4, 4));
        assert_eq!(BoardIndex::new(10).center(), Point::new(5, 5));
    }
}
