//! Rectangles and CSS-style margins for viewport intersection.
//!
//! Mirrors what `IntersectionObserver` computes so the scroll fallback in
//! [`crate::animation::viewport`] reports the same ratios a browser would.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Overlap of two rectangles. Touching edges count as an intersection of
    /// zero area, matching the observer's edge-adjacent behaviour.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right < left || bottom < top {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }

    /// Grows the rectangle by the margin; negative margins shrink it.
    pub fn expand(&self, margin: &RootMargin) -> Rect {
        let top = margin.top.resolve(self.height);
        let right = margin.right.resolve(self.width);
        let bottom = margin.bottom.resolve(self.height);
        let left = margin.left.resolve(self.width);
        Rect::new(
            self.left - left,
            self.top - top,
            (self.width + left + right).max(0.0),
            (self.height + top + bottom).max(0.0),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    Px(f64),
    Percent(f64),
}

impl Length {
    pub fn resolve(&self, base: f64) -> f64 {
        match self {
            Length::Px(px) => *px,
            Length::Percent(pct) => base * pct / 100.0,
        }
    }
}

impl Default for Length {
    fn default() -> Self {
        Length::Px(0.0)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(px) => write!(f, "{}px", px),
            Length::Percent(pct) => write!(f, "{}%", pct),
        }
    }
}

impl FromStr for Length {
    type Err = MarginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (number, percent) = if let Some(n) = s.strip_suffix('%') {
            (n, true)
        } else if let Some(n) = s.strip_suffix("px") {
            (n, false)
        } else if s == "0" {
            (s, false)
        } else {
            return Err(MarginError::Unit(s.to_string()));
        };
        let value: f64 = number
            .trim()
            .parse()
            .map_err(|_| MarginError::Number(s.to_string()))?;
        if !value.is_finite() {
            return Err(MarginError::Number(s.to_string()));
        }
        Ok(if percent { Length::Percent(value) } else { Length::Px(value) })
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum MarginError {
    #[error("expected 1 to 4 lengths, got {0}")]
    Arity(usize),
    #[error("length `{0}` needs a px or % unit")]
    Unit(String),
    #[error("`{0}` is not a number")]
    Number(String),
}

/// Adjustment applied to the viewport before measuring intersection, in
/// the same shorthand as CSS `margin`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RootMargin {
    pub top: Length,
    pub right: Length,
    pub bottom: Length,
    pub left: Length,
}

impl RootMargin {
    pub fn uniform(length: Length) -> Self {
        Self { top: length, right: length, bottom: length, left: length }
    }
}

impl FromStr for RootMargin {
    type Err = MarginError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split_whitespace()
            .map(str::parse::<Length>)
            .collect::<Result<Vec<_>, _>>()?;
        let margin = match parts.as_slice() {
            [all] => RootMargin::uniform(*all),
            [vertical, horizontal] => RootMargin {
                top: *vertical,
                right: *horizontal,
                bottom: *vertical,
                left: *horizontal,
            },
            [top, horizontal, bottom] => RootMargin {
                top: *top,
                right: *horizontal,
                bottom: *bottom,
                left: *horizontal,
            },
            [top, right, bottom, left] => RootMargin {
                top: *top,
                right: *right,
                bottom: *bottom,
                left: *left,
            },
            other => return Err(MarginError::Arity(other.len())),
        };
        Ok(margin)
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
    }
}

/// Fraction of `region` inside `viewport` once the margin is applied.
pub fn intersection_ratio(region: &Rect, viewport: &Rect, margin: &RootMargin) -> f64 {
    let bounds = viewport.expand(margin);
    let Some(overlap) = region.intersect(&bounds) else {
        return 0.0;
    };
    let area = region.area();
    if area == 0.0 {
        return 1.0;
    }
    (overlap.area() / area).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Rect {
        Rect::new(0.0, 0.0, 1000.0, 800.0)
    }

    #[test]
    fn parses_single_and_four_value_margins() {
        let single: RootMargin = "-50px".parse().unwrap();
        assert_eq!(single, RootMargin::uniform(Length::Px(-50.0)));

        let four: RootMargin = "0px 0px -50px 0px".parse().unwrap();
        assert_eq!(four.bottom, Length::Px(-50.0));
        assert_eq!(four.top, Length::Px(0.0));

        let pct: RootMargin = "10% 0".parse().unwrap();
        assert_eq!(pct.top, Length::Percent(10.0));
        assert_eq!(pct.left, Length::Px(0.0));
    }

    #[test]
    fn rejects_bad_margins() {
        assert_eq!("".parse::<RootMargin>(), Err(MarginError::Arity(0)));
        assert_eq!("1px 2px 3px 4px 5px".parse::<RootMargin>(), Err(MarginError::Arity(5)));
        assert!(matches!("50".parse::<RootMargin>(), Err(MarginError::Unit(_))));
        assert!(matches!("abcpx".parse::<RootMargin>(), Err(MarginError::Number(_))));
    }

    #[test]
    fn margin_renders_as_css() {
        let margin: RootMargin = "-100px".parse().unwrap();
        assert_eq!(margin.to_string(), "-100px -100px -100px -100px");
    }

    #[test]
    fn ratio_of_fully_visible_region_is_one() {
        let region = Rect::new(100.0, 100.0, 200.0, 200.0);
        assert_eq!(intersection_ratio(&region, &viewport(), &RootMargin::default()), 1.0);
    }

    #[test]
    fn ratio_of_region_below_fold() {
        // Top quarter of the region pokes into the viewport.
        let region = Rect::new(0.0, 700.0, 100.0, 400.0);
        let ratio = intersection_ratio(&region, &viewport(), &RootMargin::default());
        assert!((ratio - 0.25).abs() < 1e-9);
    }

    #[test]
    fn negative_margin_delays_visibility() {
        let region = Rect::new(0.0, 760.0, 100.0, 100.0);
        let plain = intersection_ratio(&region, &viewport(), &RootMargin::default());
        let inset = intersection_ratio(&region, &viewport(), &"-50px".parse().unwrap());
        assert!(plain > 0.0);
        assert_eq!(inset, 0.0);
    }

    #[test]
    fn positive_margin_triggers_early() {
        let region = Rect::new(0.0, 820.0, 100.0, 100.0);
        assert_eq!(intersection_ratio(&region, &viewport(), &RootMargin::default()), 0.0);
        let ratio = intersection_ratio(&region, &viewport(), &"50px".parse().unwrap());
        assert!((ratio - 0.3).abs() < 1e-9);
    }

    #[test]
    fn percent_margin_resolves_against_viewport() {
        let margin: RootMargin = "-10%".parse().unwrap();
        let shrunk = viewport().expand(&margin);
        assert_eq!(shrunk, Rect::new(100.0, 80.0, 800.0, 640.0));
    }

    #[test]
    fn zero_area_region() {
        let inside = Rect::new(10.0, 10.0, 0.0, 0.0);
        let outside = Rect::new(10.0, 900.0, 0.0, 0.0);
        assert_eq!(intersection_ratio(&inside, &viewport(), &RootMargin::default()), 1.0);
        assert_eq!(intersection_ratio(&outside, &viewport(), &RootMargin::default()), 0.0);
    }
}
