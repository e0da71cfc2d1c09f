use crate::alphabet::Alphabet;
use crate::bounds::Axis;

/// Digits followed by the lower-case letters, without `a`, `i`, `l` and `o`.
const GEOHASH_CHARS: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// The 32 symbol geohash alphabet. Each symbol packs five bisections,
/// starting with longitude.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base32Alphabet;

impl Alphabet for Base32Alphabet {
    const BITS_PER_SYMBOL: u32 = 5;
    const LEADING_AXIS: Axis = Axis::Longitude;

    fn symbols(&self) -> impl Iterator<Item = char> {
        GEOHASH_CHARS.iter().map(|&c| c as char)
    }

    fn symbol(&self, value: u8) -> char {
        GEOHASH_CHARS[usize::from(value)] as char
    }

    /// Lookups are case-insensitive.
    fn value(&self, symbol: char) -> Option<u8> {
        let symbol = symbol.to_ascii_lowercase();
        self.symbols()
            .position(|c| c == symbol)
            .and_then(|index| u8::try_from(index).ok())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_symbols() {
        let alphabet = Base32Alphabet;
        assert_eq!(alphabet.symbols().count(), 32);
        assert_eq!(
            alphabet.symbols().collect::<String>(),
            "0123456789bcdefghjkmnpqrstuvwxyz"
        );
    }

    #[test]
    fn test_symbol() {
        let alphabet = Base32Alphabet;
        assert_eq!(alphabet.symbol(0), '0');
        assert_eq!(alphabet.symbol(10), 'b');
        assert_eq!(alphabet.symbol(31), 'z');
    }

    #[test]
    fn test_value() {
        let alphabet = Base32Alphabet;
        assert_eq!(alphabet.value('0'), Some(0));
        assert_eq!(alphabet.value('u'), Some(26));
        assert_eq!(alphabet.value('U'), Some(26));
        assert_eq!(alphabet.value('z'), Some(31));
    }

    #[test]
    fn confusable_letters_are_missing() {
        let alphabet = Base32Alphabet;
        for c in ['a', 'i', 'l', 'o', 'A', 'I', 'L', 'O', '-', 'é'] {
            assert_eq!(alphabet.value(c), None, "{c:?} should not decode");
        }
    }

    #[test]
    fn every_symbol_maps_back_to_its_value() {
        let alphabet = Base32Alphabet;
        for (value, symbol) in alphabet.symbols().enumerate() {
            assert_eq!(alphabet.value(symbol), Some(value as u8));
        }
    }
}
