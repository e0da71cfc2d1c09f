use crate::alphabet::Alphabet;
use crate::bounds::RangeBounds;
use crate::error::{Error, Result};
use biterator::Bit;

pub struct Decoder<A: Alphabet> {
    alphabet: A,
}

impl<A: Alphabet> Decoder<A> {
    /// Create a decoder for geocodes written with the given alphabet.
    pub fn new(alphabet: A) -> Self {
        Decoder { alphabet }
    }

    /// Decode a geocode into the rectangle it denotes.
    ///
    /// Each symbol is expanded into its bits, most significant first, and
    /// every bit halves the current axis exactly as encoding did. Axis
    /// alternation carries over from one symbol to the next.
    pub fn decode(&self, geocode: &str) -> Result<RangeBounds> {
        if geocode.is_empty() {
            log::debug!("Rejecting empty geocode");
            return Err(Error::invalid_geocode(geocode, "empty geocode"));
        }

        let mut bounds = RangeBounds::world();
        let mut axis = A::LEADING_AXIS;

        for symbol in geocode.chars() {
            let Some(value) = self.alphabet.value(symbol) else {
                log::debug!("Rejecting geocode {geocode:?}: unknown symbol {symbol:?}");
                return Err(Error::invalid_geocode(geocode, "symbol not in alphabet"));
            };

            for n in (0..A::BITS_PER_SYMBOL).rev() {
                let bit = if (value >> n) & 1 == 1 {
                    Bit::One
                } else {
                    Bit::Zero
                };
                bounds.axis_mut(axis).narrow(&bit);
                axis = axis.next();
            }
            log::trace!("Decoded {symbol:?} as {value:#07b}, bounds now {bounds:?}");
        }

        Ok(bounds)
    }
}
