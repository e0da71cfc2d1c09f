use crate::alphabet::Alphabet;
use crate::bounds::Axis;

// Indexed by `lat_bit << 1 | lon_bit`: 00 -> a, 01 -> b, 10 -> d, 11 -> c.
const QUADRANT_CHARS: &[u8; 4] = b"abdc";

/// The four symbol quadrant alphabet. Each symbol is one latitude bisection
/// followed by one longitude bisection.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuadrantAlphabet;

impl Alphabet for QuadrantAlphabet {
    const BITS_PER_SYMBOL: u32 = 2;
    const LEADING_AXIS: Axis = Axis::Latitude;

    fn symbols(&self) -> impl Iterator<Item = char> {
        QUADRANT_CHARS.iter().map(|&c| c as char)
    }

    fn symbol(&self, value: u8) -> char {
        QUADRANT_CHARS[usize::from(value)] as char
    }

    fn value(&self, symbol: char) -> Option<u8> {
        match symbol {
            'a' => Some(0b00),
            'b' => Some(0b01),
            'c' => Some(0b11),
            'd' => Some(0b10),
            _ => None,
        }
    }
}
