//! Coordinate statistics
//!
//! Running sums over the parsed coordinates and the means derived from them.
//!
//! # Example
//!
//! ```
//! use coordavg::parse::Coordinate;
//! use coordavg::stats::CoordinateStats;
//!
//! let mut stats = CoordinateStats::new();
//! stats.record(&Coordinate::new(1.0, 2.0));
//! stats.record(&Coordinate::new(3.0, 4.0));
//!
//! assert_eq!(stats.count(), 2);
//! assert_eq!(stats.mean_x(), Some(2.0));
//! assert_eq!(stats.mean_y(), Some(3.0));
//! ```

use crate::parse::Coordinate;

/// Running x/y totals
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoordinateStats {
    count: usize,
    total_x: f64,
    total_y: f64,
}

impl CoordinateStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate totals over a sequence of coordinates
    pub fn from_coordinates<'a, I>(coordinates: I) -> Self
    where
        I: IntoIterator<Item = &'a Coordinate>,
    {
        let mut stats = Self::new();
        for c in coordinates {
            stats.record(c);
        }
        stats
    }

    /// Add one coordinate to the running totals
    #[inline]
    pub fn record(&mut self, coordinate: &Coordinate) {
        self.count += 1;
        self.total_x += coordinate.x;
        self.total_y += coordinate.y;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn total_x(&self) -> f64 {
        self.total_x
    }

    pub fn total_y(&self) -> f64 {
        self.total_y
    }

    /// Mean of the x components, `None` before anything was recorded
    pub fn mean_x(&self) -> Option<f64> {
        (self.count > 0).then(|| self.total_x / self.count as f64)
    }

    /// Mean of the y components, `None` before anything was recorded
    pub fn mean_y(&self) -> Option<f64> {
        (self.count > 0).then(|| self.total_y / self.count as f64)
    }
}
