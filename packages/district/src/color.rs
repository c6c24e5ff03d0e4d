//! Quantized choropleth color scale.

use mob_map_district_models::ColorBucket;

/// Palette for positive counts, lightest first.
pub const PALETTE: &[&str] = &["#fee5d9", "#fcae91", "#fb6a4a", "#de2d26", "#a50f15"];

/// Fill used for [`ColorBucket::NoData`].
pub const NO_DATA_COLOR: &str = "#e0e0e0";

/// Maps incident counts onto [`PALETTE`] buckets.
///
/// Positive counts are quantized evenly over `1..=max_count`; anything
/// above `max_count` saturates at the darkest bucket. Zero never lands in a
/// palette bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScale {
    max_count: u64,
}

impl ColorScale {
    /// Default upper domain bound.
    pub const DEFAULT_MAX_COUNT: u64 = 10;

    /// Creates a scale whose darkest bucket starts near `max_count`.
    /// A bound of zero is treated as one.
    #[must_use]
    pub fn new(max_count: u64) -> Self {
        Self {
            max_count: max_count.max(1),
        }
    }

    /// Upper domain bound.
    #[must_use]
    pub const fn max_count(&self) -> u64 {
        self.max_count
    }

    /// Buckets a count.
    #[must_use]
    pub fn bucket(&self, count: u64) -> ColorBucket {
        if count == 0 {
            return ColorBucket::NoData;
        }

        let levels = PALETTE.len() as u64;
        let clamped = count.min(self.max_count);
        let level = clamped.saturating_mul(levels).div_ceil(self.max_count) - 1;

        ColorBucket::Level(u8::try_from(level).unwrap_or(u8::MAX))
    }

    /// Buckets a count for a feature key. Unresolved (empty) keys are
    /// always [`ColorBucket::NoData`].
    #[must_use]
    pub fn bucket_for(&self, key: &str, count: u64) -> ColorBucket {
        if key.is_empty() {
            ColorBucket::NoData
        } else {
            self.bucket(count)
        }
    }
}

impl Default for ColorScale {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_COUNT)
    }
}

/// Returns the fill color for a bucket.
#[must_use]
pub fn fill_color(bucket: ColorBucket) -> &'static str {
    match bucket {
        ColorBucket::NoData => NO_DATA_COLOR,
        ColorBucket::Level(level) => PALETTE
            .get(usize::from(level))
            .or_else(|| PALETTE.last())
            .copied()
            .unwrap_or(NO_DATA_COLOR),
    }
}
