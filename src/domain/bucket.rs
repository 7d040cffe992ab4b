// Temperature bucketing - maps an absolute temperature to a visual tier
use crate::error::ThresholdError;
use serde::Serialize;

/// Inclusive lower bound selecting `bucket`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold<B> {
    pub lower_bound: f64,
    pub bucket: B,
}

/// Ordered table of thresholds, highest first, plus the catch-all bucket for
/// values below every threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdTable<B> {
    thresholds: Vec<Threshold<B>>,
    floor: B,
}

impl<B: Copy> ThresholdTable<B> {
    pub fn new(thresholds: Vec<Threshold<B>>, floor: B) -> Result<Self, ThresholdError> {
        for (position, threshold) in thresholds.iter().enumerate() {
            if !threshold.lower_bound.is_finite() {
                return Err(ThresholdError::NonFinite { position });
            }
            if position > 0 {
                let previous = thresholds[position - 1].lower_bound;
                if threshold.lower_bound >= previous {
                    return Err(ThresholdError::NotDescending {
                        position,
                        previous,
                        current: threshold.lower_bound,
                    });
                }
            }
        }

        Ok(Self { thresholds, floor })
    }

    /// First (highest) threshold with `lower_bound <= value` wins. NaN falls
    /// through to the catch-all.
    pub fn bucket(&self, value: f64) -> B {
        self.thresholds
            .iter()
            .find(|t| value >= t.lower_bound)
            .map(|t| t.bucket)
            .unwrap_or(self.floor)
    }

    /// Same result as [`bucket`](Self::bucket), found by bisection.
    pub fn bucket_bisect(&self, value: f64) -> B {
        // thresholds are descending, so the unsatisfied ones form a prefix
        let idx = self.thresholds.partition_point(|t| !(value >= t.lower_bound));
        self.thresholds
            .get(idx)
            .map(|t| t.bucket)
            .unwrap_or(self.floor)
    }

    pub fn thresholds(&self) -> &[Threshold<B>] {
        &self.thresholds
    }

    pub fn floor(&self) -> B {
        self.floor
    }

    /// Buckets from lowest to highest, catch-all first.
    pub fn buckets_ascending(&self) -> Vec<B> {
        std::iter::once(self.floor)
            .chain(self.thresholds.iter().rev().map(|t| t.bucket))
            .collect()
    }

    /// Lower bounds from lowest to highest.
    pub fn bounds_ascending(&self) -> Vec<f64> {
        self.thresholds.iter().rev().map(|t| t.lower_bound).collect()
    }
}

/// Diverging blue-to-red palette, coldest first.
pub const PALETTE: [&str; 11] = [
    "rgb(49, 54, 149)",
    "rgb(69, 117, 180)",
    "rgb(116, 173, 209)",
    "rgb(171, 217, 233)",
    "rgb(224, 243, 248)",
    "rgb(255, 255, 191)",
    "rgb(254, 224, 144)",
    "rgb(253, 174, 97)",
    "rgb(244, 109, 67)",
    "rgb(215, 48, 39)",
    "rgb(165, 0, 38)",
];

const PALETTE_BOUNDS: [f64; 10] = [12.8, 11.7, 10.6, 9.5, 8.3, 7.2, 6.1, 5.0, 3.9, 2.8];

/// Temperature tiers for the class-styled chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Level {
    #[serde(rename = "level-1")]
    One,
    #[serde(rename = "level-2")]
    Two,
    #[serde(rename = "level-3")]
    Three,
    #[serde(rename = "level-4")]
    Four,
}

impl Level {
    pub fn class(self) -> &'static str {
        match self {
            Level::One => "level-1",
            Level::Two => "level-2",
            Level::Three => "level-3",
            Level::Four => "level-4",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Level::One => "#4575b4",
            Level::Two => "#e0f3f8",
            Level::Three => "#fee090",
            Level::Four => "#d73027",
        }
    }
}

/// How a cell is painted: an inline fill or a CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum CellStyle {
    Fill(&'static str),
    Class(&'static str),
}

/// A threshold table bound to the styles its buckets select.
#[derive(Debug, Clone)]
pub enum BucketScheme {
    /// 11 buckets indexing [`PALETTE`].
    Palette(ThresholdTable<usize>),
    /// 4 buckets rendered as `level-N` classes.
    Levels(ThresholdTable<Level>),
}

impl BucketScheme {
    pub fn palette() -> Self {
        let thresholds = PALETTE_BOUNDS
            .iter()
            .enumerate()
            .map(|(i, &lower_bound)| Threshold {
                lower_bound,
                bucket: PALETTE_BOUNDS.len() - i,
            })
            .collect();

        match ThresholdTable::new(thresholds, 0) {
            Ok(table) => BucketScheme::Palette(table),
            Err(e) => unreachable!("palette thresholds are descending: {e}"),
        }
    }

    pub fn levels() -> Self {
        let thresholds = vec![
            Threshold { lower_bound: 10.0, bucket: Level::Four },
            Threshold { lower_bound: 7.5, bucket: Level::Three },
            Threshold { lower_bound: 5.0, bucket: Level::Two },
        ];

        match ThresholdTable::new(thresholds, Level::One) {
            Ok(table) => BucketScheme::Levels(table),
            Err(e) => unreachable!("level thresholds are descending: {e}"),
        }
    }

    /// Style for an absolute temperature.
    pub fn style(&self, temperature: f64) -> CellStyle {
        match self {
            BucketScheme::Palette(table) => Self::palette_style(table.bucket(temperature)),
            BucketScheme::Levels(table) => CellStyle::Class(table.bucket(temperature).class()),
        }
    }

    /// Every bucket's style, coldest first.
    pub fn styles_ascending(&self) -> Vec<CellStyle> {
        match self {
            BucketScheme::Palette(table) => table
                .buckets_ascending()
                .into_iter()
                .map(Self::palette_style)
                .collect(),
            BucketScheme::Levels(table) => table
                .buckets_ascending()
                .into_iter()
                .map(|level| CellStyle::Class(level.class()))
                .collect(),
        }
    }

    pub fn bounds_ascending(&self) -> Vec<f64> {
        match self {
            BucketScheme::Palette(table) => table.bounds_ascending(),
            BucketScheme::Levels(table) => table.bounds_ascending(),
        }
    }

    fn palette_style(bucket: usize) -> CellStyle {
        CellStyle::Fill(PALETTE[bucket.min(PALETTE.len() - 1)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette_table() -> ThresholdTable<usize> {
        match BucketScheme::palette() {
            BucketScheme::Palette(table) => table,
            BucketScheme::Levels(_) => unreachable!(),
        }
    }

    fn level_table() -> ThresholdTable<Level> {
        match BucketScheme::levels() {
            BucketScheme::Levels(table) => table,
            BucketScheme::Palette(_) => unreachable!(),
        }
    }

    #[test]
    fn test_palette_thresholds_are_inclusive() {
        let table = palette_table();
        let expected = [
            (12.8, 10),
            (11.7, 9),
            (10.6, 8),
            (9.5, 7),
            (8.3, 6),
            (7.2, 5),
            (6.1, 4),
            (5.0, 3),
            (3.9, 2),
            (2.8, 1),
        ];
        for (bound, bucket) in expected {
            assert_eq!(table.bucket(bound), bucket, "at {bound}");
            assert_eq!(table.bucket(bound - 1e-9), bucket - 1, "just below {bound}");
        }
    }

    #[test]
    fn test_palette_extremes() {
        let table = palette_table();
        assert_eq!(table.bucket(-1e12), 0);
        assert_eq!(table.bucket(f64::NEG_INFINITY), 0);
        assert_eq!(table.bucket(1e12), 10);
        assert_eq!(table.bucket(f64::INFINITY), 10);
        assert_eq!(table.bucket(f64::NAN), 0);
    }

    #[test]
    fn test_palette_bucket_is_monotonic() {
        let table = palette_table();
        let mut previous = table.bucket(-5.0);
        let mut t = -5.0;
        while t < 20.0 {
            let bucket = table.bucket(t);
            assert!(bucket >= previous, "bucket dropped at {t}");
            previous = bucket;
            t += 0.01;
        }
        assert_eq!(previous, 10);
    }

    #[test]
    fn test_bisect_agrees_with_linear_scan() {
        let palette = palette_table();
        let levels = level_table();

        let mut probes: Vec<f64> = vec![f64::NEG_INFINITY, f64::INFINITY, f64::NAN, -0.0, 0.0];
        for bound in palette.bounds_ascending().into_iter().chain(levels.bounds_ascending()) {
            probes.extend([bound, bound - 1e-9, bound + 1e-9]);
        }
        let mut t = -3.0;
        while t < 16.0 {
            probes.push(t);
            t += 0.037;
        }

        for t in probes {
            assert_eq!(palette.bucket(t), palette.bucket_bisect(t), "palette at {t}");
            assert_eq!(levels.bucket(t), levels.bucket_bisect(t), "levels at {t}");
        }
    }

    #[test]
    fn test_levels() {
        let table = level_table();
        assert_eq!(table.bucket(4.99), Level::One);
        assert_eq!(table.bucket(5.0), Level::Two);
        assert_eq!(table.bucket(7.5), Level::Three);
        assert_eq!(table.bucket(9.99), Level::Three);
        assert_eq!(table.bucket(10.0), Level::Four);
        assert_eq!(table.bucket(-100.0), Level::One);
        assert_eq!(table.bucket(100.0), Level::Four);
    }

    #[test]
    fn test_single_record_end_to_end_bucket() {
        // base 5 + variance 5 = 10; 10 < 10.6 and 10 >= 9.5
        let base: f64 = 5.0;
        let variance: f64 = 5.0;
        assert_eq!(palette_table().bucket(base + variance), 7);
        assert_eq!(
            BucketScheme::palette().style(base + variance),
            CellStyle::Fill("rgb(253, 174, 97)")
        );
    }

    #[test]
    fn test_table_rejects_unordered_thresholds() {
        let err = ThresholdTable::new(
            vec![
                Threshold { lower_bound: 1.0, bucket: 1 },
                Threshold { lower_bound: 2.0, bucket: 2 },
            ],
            0,
        )
        .unwrap_err();
        assert!(matches!(err, ThresholdError::NotDescending { position: 1, .. }));

        let err = ThresholdTable::new(vec![Threshold { lower_bound: f64::NAN, bucket: 1 }], 0).unwrap_err();
        assert_eq!(err, ThresholdError::NonFinite { position: 0 });
    }

    #[test]
    fn test_empty_table_is_catch_all() {
        let table = ThresholdTable::new(Vec::new(), 42).unwrap();
        assert_eq!(table.bucket(1.0), 42);
        assert_eq!(table.bucket_bisect(1.0), 42);
    }

    #[test]
    fn test_styles_ascending() {
        let styles = BucketScheme::palette().styles_ascending();
        assert_eq!(styles.len(), 11);
        assert_eq!(styles[0], CellStyle::Fill(PALETTE[0]));
        assert_eq!(styles[10], CellStyle::Fill(PALETTE[10]));

        let styles = BucketScheme::levels().styles_ascending();
        assert_eq!(
            styles,
            vec![
                CellStyle::Class("level-1"),
                CellStyle::Class("level-2"),
                CellStyle::Class("level-3"),
                CellStyle::Class("level-4"),
            ]
        );
        assert_eq!(BucketScheme::levels().bounds_ascending(), vec![5.0, 7.5, 10.0]);
    }
}
