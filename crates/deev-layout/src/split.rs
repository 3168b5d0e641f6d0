//! Container geometry, width bounds and the primary/secondary split.

use serde::{Deserialize, Serialize};

use crate::SplitLayoutError;

/// Percentages are expressed on a `0..=100` scale.
pub const PERCENT_SCALE: f64 = 100.0;

/// Horizontal extent of the container that holds both panes, in pixels.
///
/// Read from live layout for every pointer sample; never cached across a
/// gesture, so the container may resize mid-drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerBounds {
    pub left: f64,
    pub width: f64,
}

impl ContainerBounds {
    #[must_use]
    pub const fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Geometry can be divided by: finite left edge and a positive, finite width.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.left.is_finite() && self.width.is_finite() && self.width > 0.0
    }

    /// Raw primary-pane percentage for a pointer at `pointer_x`.
    ///
    /// Returns `None` when the geometry is unusable (including zero width)
    /// or the result would not be a finite number.
    #[must_use]
    pub fn percent_at(&self, pointer_x: f64) -> Option<f64> {
        if !self.is_usable() || !pointer_x.is_finite() {
            return None;
        }
        let raw = (pointer_x - self.left) / self.width * PERCENT_SCALE;
        raw.is_finite().then_some(raw)
    }

    /// Pixel widths of the primary and secondary panes for `percent`.
    #[must_use]
    pub fn pixel_widths(&self, percent: PaneWidthPercent) -> (f64, f64) {
        let width = if self.is_usable() { self.width } else { 0.0 };
        let primary = width * percent.value() / PERCENT_SCALE;
        (primary, width - primary)
    }
}

/// Inclusive `[min, max]` band for the primary pane's width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneWidthBounds {
    min: f64,
    max: f64,
}

impl PaneWidthBounds {
    /// Validate and construct bounds on the `0..=100` scale.
    pub fn new(min: f64, max: f64) -> Result<Self, SplitLayoutError> {
        for value in [min, max] {
            if !value.is_finite() {
                return Err(SplitLayoutError::NonFiniteBound { value });
            }
            if !(0.0..=PERCENT_SCALE).contains(&value) {
                return Err(SplitLayoutError::BoundOutOfRange { value });
            }
        }
        if min > max {
            return Err(SplitLayoutError::InvertedBounds { min, max });
        }
        Ok(Self { min, max })
    }

    // Callers guarantee 0 <= min <= max <= 100.
    pub(crate) const fn from_trusted(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Accept `value` only when it already lies inside the band.
    #[must_use]
    pub fn accept(&self, value: f64) -> Option<PaneWidthPercent> {
        self.contains(value).then_some(PaneWidthPercent(value))
    }

    /// Pull `value` to the nearest edge of the band. NaN saturates to `min`.
    #[must_use]
    pub fn saturate(&self, value: f64) -> PaneWidthPercent {
        if value.is_nan() {
            return PaneWidthPercent(self.min);
        }
        PaneWidthPercent(value.clamp(self.min, self.max))
    }
}

/// Primary pane width, guaranteed to sit inside the bounds it was made from.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct PaneWidthPercent(f64);

impl PaneWidthPercent {
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Share left for the secondary pane.
    #[must_use]
    pub fn complement(self) -> f64 {
        PERCENT_SCALE - self.0
    }
}

/// What to do with a sample whose raw percentage falls outside the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClampPolicy {
    /// Keep the last accepted width until the pointer re-enters the band.
    #[default]
    RejectOutOfBand,
    /// Snap to the nearest bound.
    Saturate,
}

impl ClampPolicy {
    /// Width to apply for `raw`, or `None` when the sample is dropped.
    #[must_use]
    pub fn resolve(self, bounds: PaneWidthBounds, raw: f64) -> Option<PaneWidthPercent> {
        match self {
            Self::RejectOutOfBand => bounds.accept(raw),
            Self::Saturate => Some(bounds.saturate(raw)),
        }
    }
}

/// Rendered shares of both panes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitWidths {
    pub primary_percent: f64,
    pub secondary_percent: f64,
}

impl SplitWidths {
    #[must_use]
    pub fn from_percent(percent: PaneWidthPercent) -> Self {
        Self {
            primary_percent: percent.value(),
            secondary_percent: percent.complement(),
        }
    }

    /// Inline style value for the primary pane, e.g. `"70%"`.
    #[must_use]
    pub fn primary_css(&self) -> String {
        format!("{}%", self.primary_percent)
    }

    #[must_use]
    pub fn secondary_css(&self) -> String {
        format!("{}%", self.secondary_percent)
    }
}

impl From<PaneWidthPercent> for SplitWidths {
    fn from(percent: PaneWidthPercent) -> Self {
        Self::from_percent(percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bounds(min: f64, max: f64) -> PaneWidthBounds {
        PaneWidthBounds::new(min, max).expect("test bounds should be valid")
    }

    #[test]
    fn percent_at_maps_pointer_into_container_space() {
        let container = ContainerBounds::new(100.0, 1000.0);
        assert_eq!(container.percent_at(600.0), Some(50.0));
        assert_eq!(container.percent_at(150.0), Some(5.0));
        assert_eq!(container.percent_at(100.0), Some(0.0));
    }

    #[test]
    fn zero_width_container_is_unavailable() {
        let container = ContainerBounds::new(0.0, 0.0);
        assert!(!container.is_usable());
        assert_eq!(container.percent_at(10.0), None);
    }

    #[test]
    fn negative_or_non_finite_geometry_is_unavailable() {
        assert_eq!(ContainerBounds::new(0.0, -5.0).percent_at(1.0), None);
        assert_eq!(ContainerBounds::new(f64::NAN, 500.0).percent_at(1.0), None);
        assert_eq!(
            ContainerBounds::new(0.0, f64::INFINITY).percent_at(1.0),
            None
        );
        assert_eq!(ContainerBounds::new(0.0, 500.0).percent_at(f64::NAN), None);
    }

    #[test]
    fn bounds_reject_invalid_ranges() {
        assert!(matches!(
            PaneWidthBounds::new(60.0, 40.0),
            Err(SplitLayoutError::InvertedBounds { .. })
        ));
        assert!(matches!(
            PaneWidthBounds::new(-1.0, 40.0),
            Err(SplitLayoutError::BoundOutOfRange { .. })
        ));
        assert!(matches!(
            PaneWidthBounds::new(10.0, 101.0),
            Err(SplitLayoutError::BoundOutOfRange { .. })
        ));
        assert!(matches!(
            PaneWidthBounds::new(f64::NAN, 40.0),
            Err(SplitLayoutError::NonFiniteBound { .. })
        ));
    }

    #[test]
    fn non_finite_bound_message_names_the_value() {
        let err = PaneWidthBounds::new(10.0, f64::INFINITY).expect_err("infinite max");
        assert_eq!(err.to_string(), "pane width bound must be finite (got inf)");
    }

    #[test]
    fn degenerate_single_point_band_is_allowed() {
        let band = bounds(50.0, 50.0);
        assert_eq!(band.accept(50.0).map(PaneWidthPercent::value), Some(50.0));
        assert_eq!(band.accept(50.1), None);
    }

    #[test]
    fn accept_is_boundary_inclusive() {
        let band = bounds(20.0, 80.0);
        assert_eq!(band.accept(20.0).map(PaneWidthPercent::value), Some(20.0));
        assert_eq!(band.accept(80.0).map(PaneWidthPercent::value), Some(80.0));
        assert_eq!(band.accept(80.0001), None);
        assert_eq!(band.accept(19.9999), None);
    }

    #[test]
    fn policies_differ_only_outside_the_band() {
        let band = bounds(30.0, 90.0);
        assert_eq!(
            ClampPolicy::RejectOutOfBand.resolve(band, 45.0),
            ClampPolicy::Saturate.resolve(band, 45.0)
        );
        assert_eq!(ClampPolicy::RejectOutOfBand.resolve(band, 5.0), None);
        assert_eq!(
            ClampPolicy::Saturate
                .resolve(band, 5.0)
                .map(PaneWidthPercent::value),
            Some(30.0)
        );
        assert_eq!(
            ClampPolicy::Saturate
                .resolve(band, 140.0)
                .map(PaneWidthPercent::value),
            Some(90.0)
        );
    }

    #[test]
    fn split_widths_render_as_complementary_percentages() {
        let widths = SplitWidths::from_percent(bounds(30.0, 90.0).saturate(70.0));
        assert_eq!(widths.primary_css(), "70%");
        assert_eq!(widths.secondary_css(), "30%");
        assert_eq!(
            widths.primary_percent + widths.secondary_percent,
            PERCENT_SCALE
        );
    }

    #[test]
    fn pixel_widths_split_the_container() {
        let container = ContainerBounds::new(40.0, 800.0);
        let (primary, secondary) = container.pixel_widths(bounds(20.0, 80.0).saturate(25.0));
        assert_eq!(primary, 200.0);
        assert_eq!(secondary, 600.0);
    }

    #[test]
    fn policy_serializes_snake_case() {
        let json = serde_json::to_string(&ClampPolicy::RejectOutOfBand).expect("serialize");
        assert_eq!(json, "\"reject_out_of_band\"");
    }
}
