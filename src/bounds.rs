use biterator::Bit;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Every latitude lies in this range.
pub const LATITUDE_DOMAIN: Range = Range {
    min: -90.0,
    max: 90.0,
};

/// Every longitude lies in this range.
pub const LONGITUDE_DOMAIN: Range = Range {
    min: -180.0,
    max: 180.0,
};

/// The axis being bisected at a given step of encoding or decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// The axis bisected after this one.
    pub fn next(self) -> Self {
        match self {
            Axis::Latitude => Axis::Longitude,
            Axis::Longitude => Axis::Latitude,
        }
    }
}

/// A WGS84-style coordinate pair, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
}

impl Point {
    /// Create a point from latitude and longitude, in that order.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// The coordinate along the given axis.
    pub fn coordinate(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Latitude => self.latitude,
            Axis::Longitude => self.longitude,
        }
    }
}

/// A closed interval `[min, max]` with `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    /// The midpoint, where the range is bisected.
    pub fn mid(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// The width of the range.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Whether `value` lies in the range, bounds included.
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Whether this range is a sub-interval of `other`.
    pub fn is_within(&self, other: &Range) -> bool {
        other.min <= self.min && self.max <= other.max
    }

    /// Halve the range towards `value`, returning which half was kept.
    ///
    /// Values at or above the midpoint keep the upper half.
    pub(crate) fn bisect(&mut self, value: f64) -> Bit {
        let bit = if value >= self.mid() { Bit::One } else { Bit::Zero };
        self.narrow(&bit);
        bit
    }

    /// Keep the upper half of the range for a one bit, the lower half for a
    /// zero bit.
    pub(crate) fn narrow(&mut self, bit: &Bit) {
        let mid = self.mid();
        match bit {
            Bit::One => self.min = mid,
            Bit::Zero => self.max = mid,
        }
    }
}

/// The rectangle a geocode denotes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RangeBounds {
    pub latitude: Range,
    pub longitude: Range,
}

impl RangeBounds {
    /// The whole globe, where every encoding and decoding starts.
    pub fn world() -> Self {
        Self {
            latitude: LATITUDE_DOMAIN,
            longitude: LONGITUDE_DOMAIN,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.latitude.mid(), self.longitude.mid())
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.latitude.contains(point.latitude) && self.longitude.contains(point.longitude)
    }

    pub fn is_within(&self, other: &RangeBounds) -> bool {
        self.latitude.is_within(&other.latitude) && self.longitude.is_within(&other.longitude)
    }

    pub(crate) fn axis_mut(&mut self, axis: Axis) -> &mut Range {
        match axis {
            Axis::Latitude => &mut self.latitude,
            Axis::Longitude => &mut self.longitude,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn axes_alternate() {
        assert_eq!(Axis::Longitude.next(), Axis::Latitude);
        assert_eq!(Axis::Latitude.next().next(), Axis::Latitude);
    }

    #[test]
    fn bisect_keeps_upper_half_at_midpoint() {
        let mut range = LONGITUDE_DOMAIN;
        assert_eq!(range.bisect(0.0), Bit::One);
        assert_eq!(range, Range { min: 0.0, max: 180.0 });
    }

    #[test]
    fn bisect_keeps_lower_half_below_midpoint() {
        let mut range = LATITUDE_DOMAIN;
        assert_eq!(range.bisect(-0.5), Bit::Zero);
        assert_eq!(range, Range { min: -90.0, max: 0.0 });
        assert_eq!(range.bisect(-60.0), Bit::Zero);
        assert_eq!(range, Range { min: -90.0, max: -45.0 });
    }

    #[test]
    fn narrow_follows_bits() {
        let mut range = LATITUDE_DOMAIN;
        range.narrow(&Bit::One);
        range.narrow(&Bit::Zero);
        assert_eq!(range, Range { min: 0.0, max: 45.0 });
        assert_eq!(range.span(), 45.0);
        assert_eq!(range.mid(), 22.5);
    }

    #[test]
    fn world_center_is_origin() {
        let world = RangeBounds::world();
        assert_eq!(world.center(), Point::new(0.0, 0.0));
        assert!(world.contains(&Point::new(90.0, -180.0)));
        assert!(!world.contains(&Point::new(90.5, 0.0)));
        assert!(!world.contains(&Point::new(f64::NAN, 1.0)));
    }

    #[test]
    fn sub_rectangle_is_within_world() {
        let mut bounds = RangeBounds::world();
        bounds.axis_mut(Axis::Longitude).narrow(&Bit::Zero);
        assert!(bounds.is_within(&RangeBounds::world()));
        assert!(!RangeBounds::world().is_within(&bounds));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn bounds_serialize_by_axis() {
        let json = serde_json::to_value(RangeBounds::world()).unwrap();
        assert_eq!(json["latitude"]["min"], -90.0);
        assert_eq!(json["longitude"]["max"], 180.0);
    }
}
