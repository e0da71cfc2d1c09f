use crate::alphabet::Alphabet;
use crate::bounds::{LATITUDE_DOMAIN, LONGITUDE_DOMAIN, Point, RangeBounds};
use crate::error::{Error, Result};
use crate::{MAX_PRECISION, MIN_PRECISION};
use biterator::Bit;

pub struct Encoder<A: Alphabet> {
    alphabet: A,
}

/// Clamp a requested precision into `MIN_PRECISION..=MAX_PRECISION`.
///
/// Out of range requests go to the nearest bound: a precision of 0 yields a
/// single symbol, not a `MAX_PRECISION` geocode.
pub(crate) fn clamp_precision(precision: usize) -> usize {
    precision.clamp(MIN_PRECISION, MAX_PRECISION)
}

/// Check that a point can be encoded.
///
/// Points on the equator or the prime meridian are rejected, as are
/// non-finite and out of range coordinates.
pub(crate) fn validate(point: &Point) -> Result<()> {
    let invalid = Error::InvalidLatLong {
        latitude: point.latitude,
        longitude: point.longitude,
    };

    if !point.latitude.is_finite() || !point.longitude.is_finite() {
        log::warn!("Rejecting point with non-finite coordinates: {point:?}");
        return Err(invalid);
    }

    // Zero on either axis has never been encodable.
    if point.latitude == 0.0 || point.longitude == 0.0 {
        log::debug!("Rejecting point with a zero coordinate: {point:?}");
        return Err(invalid);
    }

    if !LATITUDE_DOMAIN.contains(point.latitude) || !LONGITUDE_DOMAIN.contains(point.longitude) {
        log::debug!("Rejecting point outside [-90, 90] x [-180, 180]: {point:?}");
        return Err(invalid);
    }

    Ok(())
}

fn bit_value(bit: &Bit) -> u8 {
    match bit {
        Bit::Zero => 0,
        Bit::One => 1,
    }
}

// Encoder Algorithm
//
// bounds = [-90, 90] x [-180, 180], axis = leading axis
// while len(geocode) < precision
//     value = 0
//     repeat BITS_PER_SYMBOL times
//         mid = midpoint of bounds[axis]
//         if point[axis] >= mid: value = 2 * value + 1, bounds[axis].min = mid
//         else:                  value = 2 * value,     bounds[axis].max = mid
//         axis = other axis
//     append symbol(value)
impl<A: Alphabet> Encoder<A> {
    /// Create an encoder that emits symbols from the given alphabet.
    pub fn new(alphabet: A) -> Self {
        Self { alphabet }
    }

    /// Encode a point as a geocode of `precision` symbols.
    ///
    /// The precision is clamped into `MIN_PRECISION..=MAX_PRECISION`.
    pub fn encode(&self, point: Point, precision: usize) -> Result<String> {
        validate(&point)?;

        let precision = clamp_precision(precision);
        let mut bounds = RangeBounds::world();
        let mut axis = A::LEADING_AXIS;
        let mut geocode = String::with_capacity(precision);

        for _ in 0..precision {
            let mut value = 0u8;
            for _ in 0..A::BITS_PER_SYMBOL {
                let bit = bounds.axis_mut(axis).bisect(point.coordinate(axis));
                value = (value << 1) | bit_value(&bit);
                axis = axis.next();
            }

            let symbol = self.alphabet.symbol(value);
            log::trace!("Encoded {value:#07b} as {symbol:?}, bounds now {bounds:?}");
            geocode.push(symbol);
        }

        Ok(geocode)
    }
}
