//! Integer octets.
//!
//! An integer is rendered by reinterpreting its bit pattern as unsigned of the
//! same width and splitting it into bytes, most significant first. `-1i16`
//! becomes `0xFFFF` and renders as `255.255`.

use std::iter::FusedIterator;


/// Byte width of a fixed-width integer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Width {
    One,
    Two,
    Four,
    Eight,
}

impl Width {
    /// Number of bytes, and so of rendered components.
    #[inline]
    pub const fn bytes(self) -> usize {
        match self {
            Width::One => 1,
            Width::Two => 2,
            Width::Four => 4,
            Width::Eight => 8,
        }
    }

    /// Mask selecting the low `bytes()` bytes of a `u64`.
    #[inline]
    const fn mask(self) -> u64 {
        match self {
            Width::One => 0xFF,
            Width::Two => 0xFFFF,
            Width::Four => 0xFFFF_FFFF,
            Width::Eight => u64::MAX,
        }
    }
}

/// Unsigned bit pattern of an integer together with its width.
///
/// Bits above the width are always zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Octets {
    bits: u64,
    width: Width,
}

impl Octets {
    /// Create octets from raw bits, truncated to `width`.
    #[inline]
    pub const fn new(bits: u64, width: Width) -> Self {
        Octets {
            bits: bits & width.mask(),
            width,
        }
    }

    /// The unsigned bit pattern.
    #[inline]
    pub const fn bits(self) -> u64 {
        self.bits
    }

    #[inline]
    pub const fn width(self) -> Width {
        self.width
    }

    /// Iterate bytes from most to least significant.
    pub fn iter(self) -> OctetIter {
        OctetIter {
            bytes: self.bits.to_be_bytes(),
            pos: 8 - self.width.bytes(),
        }
    }
}

impl IntoIterator for Octets {
    type Item = u8;
    type IntoIter = OctetIter;

    fn into_iter(self) -> OctetIter {
        self.iter()
    }
}

/// Iterator over the bytes of [`Octets`], most significant first.
#[derive(Clone, Debug)]
pub struct OctetIter {
    bytes: [u8; 8],
    pos: usize,
}

impl Iterator for OctetIter {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<u8> {
        let byte = *self.bytes.get(self.pos)?;
        self.pos += 1;
        Some(byte)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bytes.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for OctetIter {}
impl FusedIterator for OctetIter {}

/// Implement `From<$int> for Octets` for each fixed-width integer.
///
/// Signed values are cast to the unsigned type of the same width first, so
/// the bit pattern is preserved rather than sign-extended.
macro_rules! impl_from_int {
    ($($int:ty => $uint:ty, $width:expr;)*) => {
        $(
            impl From<$int> for Octets {
                #[inline]
                #[allow(
                    clippy::cast_sign_loss,
                    clippy::unnecessary_cast,
                    reason = "reinterprets the bit pattern"
                )]
                fn from(value: $int) -> Self {
                    Octets::new(u64::from(value as $uint), $width)
                }
            }
        )*
    };
}

impl_from_int! {
    i8 => u8, Width::One;
    i16 => u16, Width::Two;
    i32 => u32, Width::Four;
    i64 => u64, Width::Eight;
    u8 => u8, Width::One;
    u16 => u16, Width::Two;
    u32 => u32, Width::Four;
    u64 => u64, Width::Eight;
}
