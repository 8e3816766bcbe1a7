//! Font size value bound to the slider range.

use std::fmt;

/// Font size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontSize(u32);

impl FontSize {
    /// Smallest size the slider offers.
    pub const MIN: u32 = 12;
    /// Largest size the slider offers.
    pub const MAX: u32 = 30;
    /// Slider increment.
    pub const STEP: u32 = 1;
    /// Size restored on reset.
    pub const DEFAULT: Self = Self(16);

    /// Clamp `value` into `[min, max]` and snap it onto the `step` grid
    /// anchored at `min`. A zero step behaves like a step of one.
    #[must_use]
    pub fn within(value: u32, min: u32, max: u32, step: u32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let step = step.max(1);
        let clamped = value.clamp(min, max);
        let offset = clamped - min;
        let snapped = min.saturating_add((offset.saturating_add(step / 2) / step) * step);
        if snapped > max {
            Self(snapped.saturating_sub(step).max(min))
        } else {
            Self(snapped)
        }
    }

    /// Clamp into the standard 12..=30 range.
    #[must_use]
    pub fn clamped(value: u32) -> Self {
        Self::within(value, Self::MIN, Self::MAX, Self::STEP)
    }

    /// Raw pixel value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::FontSize;

    #[test]
    fn values_inside_range_are_kept_exactly() {
        for value in FontSize::MIN..=FontSize::MAX {
            assert_eq!(FontSize::clamped(value).get(), value);
        }
    }

    #[test]
    fn values_outside_range_clamp_to_bounds() {
        assert_eq!(FontSize::clamped(0).get(), 12);
        assert_eq!(FontSize::clamped(11).get(), 12);
        assert_eq!(FontSize::clamped(31).get(), 30);
        assert_eq!(FontSize::clamped(u32::MAX).get(), 30);
    }

    #[test]
    fn coarse_steps_snap_to_grid() {
        assert_eq!(FontSize::within(13, 12, 30, 2).get(), 14);
        assert_eq!(FontSize::within(15, 12, 30, 4).get(), 16);
        assert_eq!(FontSize::within(30, 12, 30, 4).get(), 28);
        assert_eq!(FontSize::within(20, 12, 30, 0).get(), 20);
    }

    #[test]
    fn default_is_sixteen() {
        assert_eq!(FontSize::default().get(), 16);
        assert_eq!(FontSize::default().to_string(), "16");
    }
}
