use crate::alphabet::Alphabet;
use crate::base32::Base32Alphabet;
use crate::bounds::{Point, RangeBounds};
use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::Result;
use crate::quadrant::QuadrantAlphabet;

/// Converts coordinates to geocodes and back.
pub trait GeoCoder {
    /// Encode a coordinate as a geocode of `precision` symbols, clamped into
    /// `MIN_PRECISION..=MAX_PRECISION`.
    fn encode(&self, latitude: f64, longitude: f64, precision: usize) -> Result<String>;

    /// Recover the rectangle a geocode denotes.
    fn decode(&self, geocode: &str) -> Result<RangeBounds>;
}

/// An encoder and a decoder sharing one alphabet.
pub struct Coder<A: Alphabet> {
    encoder: Encoder<A>,
    decoder: Decoder<A>,
}

/// Alternating bisection, five bits per symbol, longitude first.
pub type Base32Coder = Coder<Base32Alphabet>;

/// One latitude and one longitude bisection per symbol.
pub type QuadrantCoder = Coder<QuadrantAlphabet>;

impl<A: Alphabet + Clone> Coder<A> {
    pub fn new(alphabet: A) -> Self {
        Self {
            encoder: Encoder::new(alphabet.clone()),
            decoder: Decoder::new(alphabet),
        }
    }
}

impl<A: Alphabet + Clone + Default> Default for Coder<A> {
    fn default() -> Self {
        Self::new(A::default())
    }
}

impl<A: Alphabet> GeoCoder for Coder<A> {
    fn encode(&self, latitude: f64, longitude: f64, precision: usize) -> Result<String> {
        self.encoder
            .encode(Point::new(latitude, longitude), precision)
    }

    fn decode(&self, geocode: &str) -> Result<RangeBounds> {
        self.decoder.decode(geocode)
    }
}
