use crate::bounds::Axis;

/// A fixed table mapping groups of bisection bits onto symbols.
///
/// Implementations are immutable lookup tables, so a single alphabet can be
/// shared by any number of encoders and decoders.
pub trait Alphabet {
    /// How many bisection bits each symbol carries.
    const BITS_PER_SYMBOL: u32;

    /// The axis bisected first. Axes alternate on every bit after that.
    const LEADING_AXIS: Axis;

    /// An iterator over the symbols in the alphabet, ordered by value.
    fn symbols(&self) -> impl Iterator<Item = char>;

    /// The symbol for a group of bits. `value` is always below
    /// `1 << BITS_PER_SYMBOL`.
    fn symbol(&self, value: u8) -> char;

    /// The group of bits a symbol stands for, or `None` if the symbol is not
    /// part of the alphabet.
    fn value(&self, symbol: char) -> Option<u8>;
}
