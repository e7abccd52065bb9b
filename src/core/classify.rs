use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::{Attribute, Observation};
use crate::error::{AtlasError, AtlasResult};
use crate::render::Color;

/// Number of color classes drawn by the atlas.
pub const CLASS_COUNT: usize = 5;

/// Fill colors used by the threshold scale, lightest to darkest, plus the fill
/// for regions without a numeric value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassPalette {
    pub classes: Vec<Color>,
    pub no_data: Color,
}

impl Default for ClassPalette {
    fn default() -> Self {
        Self {
            classes: vec![
                Color::from_rgb8(0xFF, 0xE3, 0xCC),
                Color::from_rgb8(0xFD, 0xBE, 0x85),
                Color::from_rgb8(0xFD, 0x8D, 0x3C),
                Color::from_rgb8(0xE6, 0x55, 0x0D),
                Color::from_rgb8(0xA6, 0x36, 0x03),
            ],
            no_data: Color::from_rgb8(0xCC, 0xCC, 0xCC),
        }
    }
}

impl ClassPalette {
    pub fn validate(&self) -> AtlasResult<()> {
        if self.classes.is_empty() {
            return Err(AtlasError::InvalidData(
                "class palette must contain at least one color".to_owned(),
            ));
        }
        for color in &self.classes {
            color.validate()?;
        }
        self.no_data.validate()
    }
}

/// Threshold color scale: `breakpoints[i]` is the lower bound of class `i + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    breakpoints: SmallVec<[f64; CLASS_COUNT]>,
    palette: ClassPalette,
}

impl ColorScale {
    pub fn new(breakpoints: &[f64], palette: ClassPalette) -> AtlasResult<Self> {
        palette.validate()?;
        if breakpoints.iter().any(|b| !b.is_finite()) {
            return Err(AtlasError::InvalidData(
                "color scale breakpoints must be finite".to_owned(),
            ));
        }
        if breakpoints.windows(2).any(|w| w[0] > w[1]) {
            return Err(AtlasError::InvalidData(
                "color scale breakpoints must be ascending".to_owned(),
            ));
        }
        if breakpoints.len() >= palette.classes.len() {
            return Err(AtlasError::InvalidData(format!(
                "{} breakpoints need more than {} colors",
                breakpoints.len(),
                palette.classes.len()
            )));
        }
        Ok(Self {
            breakpoints: SmallVec::from_slice(breakpoints),
            palette,
        })
    }

    /// Builds the scale for `attribute` from the natural breaks of every
    /// observation's finite value.
    pub fn natural_breaks(
        observations: &[Observation],
        attribute: Attribute,
        palette: ClassPalette,
    ) -> AtlasResult<Self> {
        let values: Vec<f64> = observations
            .iter()
            .filter_map(|o| o.finite_value(attribute))
            .collect();
        let classes = palette.classes.len();
        let breakpoints = natural_breakpoints(&values, classes)?;
        debug!(
            attribute = %attribute,
            finite_values = values.len(),
            skipped = observations.len() - values.len(),
            breakpoints = ?breakpoints,
            "rebuilt color scale"
        );
        Self::new(&breakpoints, palette)
    }

    #[must_use]
    pub fn breakpoints(&self) -> &[f64] {
        &self.breakpoints
    }

    #[must_use]
    pub fn palette(&self) -> &ClassPalette {
        &self.palette
    }

    /// Class index of a finite value; values equal to a breakpoint fall into
    /// the upper class.
    #[must_use]
    pub fn class_index(&self, value: f64) -> Option<usize> {
        if !value.is_finite() {
            return None;
        }
        Some(self.breakpoints.partition_point(|b| *b <= value))
    }

    /// Fill for `value`, or the no-data color when it is missing or non-finite.
    #[must_use]
    pub fn color_for(&self, value: Option<f64>) -> Color {
        match value.and_then(|v| self.class_index(v)) {
            Some(index) => self.palette.classes[index.min(self.palette.classes.len() - 1)],
            None => self.palette.no_data,
        }
    }
}

/// Lower bounds of every cluster but the first, from a ckmeans partition into
/// at most `classes` clusters.
///
/// Repeated values may be split across clusters, giving repeated breakpoints.
/// Fewer values than classes, or a single repeated value, yields fewer
/// breakpoints; an empty input yields none.
pub fn natural_breakpoints(values: &[f64], classes: usize) -> AtlasResult<Vec<f64>> {
    if values.is_empty() {
        return Ok(Vec::new());
    }
    let clusters = ckmeans(values, classes.min(values.len()))?;
    Ok(clusters
        .iter()
        .skip(1)
        .filter_map(|cluster| cluster.first().copied())
        .collect())
}

/// Optimal 1-D k-means (ckmeans) by dynamic programming over sorted values.
///
/// Returns `cluster_count` non-empty, sorted clusters in ascending order, or a
/// single cluster when every value is identical.
pub fn ckmeans(values: &[f64], cluster_count: usize) -> AtlasResult<Vec<Vec<f64>>> {
    if cluster_count == 0 {
        return Err(AtlasError::InvalidData(
            "ckmeans needs at least one cluster".to_owned(),
        ));
    }
    if cluster_count > values.len() {
        return Err(AtlasError::InvalidData(format!(
            "cannot build {cluster_count} clusters from {} values",
            values.len()
        )));
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(AtlasError::InvalidData(
            "ckmeans input must be finite".to_owned(),
        ));
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    if sorted.first() == sorted.last() {
        return Ok(vec![sorted]);
    }

    let n = sorted.len();
    let sums = PrefixSums::new(&sorted);
    let mut cost = vec![vec![f64::INFINITY; n]; cluster_count];
    let mut backtrack = vec![vec![0usize; n]; cluster_count];

    for i in 0..n {
        cost[0][i] = sums.within_ssq(0, i);
    }
    for cluster in 1..cluster_count {
        for i in cluster..n {
            for j in (cluster..=i).rev() {
                let candidate = cost[cluster - 1][j - 1] + sums.within_ssq(j, i);
                if candidate < cost[cluster][i] {
                    cost[cluster][i] = candidate;
                    backtrack[cluster][i] = j;
                }
            }
        }
    }

    let mut clusters = vec![Vec::new(); cluster_count];
    let mut right = n - 1;
    for cluster in (0..cluster_count).rev() {
        let left = backtrack[cluster][right];
        clusters[cluster] = sorted[left..=right].to_vec();
        if cluster > 0 {
            right = left - 1;
        }
    }
    Ok(clusters)
}

/// Cumulative sums shifted by the median for numerical stability.
struct PrefixSums {
    sum: Vec<f64>,
    sum_sq: Vec<f64>,
}

impl PrefixSums {
    fn new(sorted: &[f64]) -> Self {
        let shift = sorted[sorted.len() / 2];
        let mut sum = Vec::with_capacity(sorted.len());
        let mut sum_sq = Vec::with_capacity(sorted.len());
        let (mut acc, mut acc_sq) = (0.0, 0.0);
        for value in sorted {
            let shifted = value - shift;
            acc += shifted;
            acc_sq += shifted * shifted;
            sum.push(acc);
            sum_sq.push(acc_sq);
        }
        Self { sum, sum_sq }
    }

    /// Sum of squared deviations of `sorted[j..=i]` from their mean.
    fn within_ssq(&self, j: usize, i: usize) -> f64 {
        let count = (i - j + 1) as f64;
        let ssq = if j > 0 {
            let mean = (self.sum[i] - self.sum[j - 1]) / count;
            self.sum_sq[i] - self.sum_sq[j - 1] - count * mean * mean
        } else {
            self.sum_sq[i] - self.sum[i] * self.sum[i] / count
        };
        ssq.max(0.0)
    }
}
