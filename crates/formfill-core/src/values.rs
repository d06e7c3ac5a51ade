//! Adapters from runtime values to forms with fixed-width blanks.
//!
//! Every adapter reserves the worst-case width for its value type at layout
//! time, then space-fills the whole blank before writing, so renders of
//! different values through the same blank never leak stale bytes.

use crate::filler::Fill;
use crate::form::Form;

/// Five-byte blank rendering `"false"` or `" true"`. Both spellings are
/// exactly five bytes, so no separate padding step runs.
#[must_use]
pub fn boolean(value: bool) -> Form<impl Fill> {
    Form::placeholder(5).with_filler(move |bytes: &mut [u8]| {
        let spelled: &[u8; 5] = if value { b" true" } else { b"false" };
        bytes[..5].copy_from_slice(spelled);
    })
}

/// Blank sized to the worst case for `T`, digits left-justified.
///
/// The width comes from the type, not the value: `integer(7u8)` and
/// `integer(255u8)` occupy the same three bytes, the former as `"7  "`.
/// The blank is fully space-filled before the digits land, so a shorter
/// value never exposes a previous render's digits.
#[must_use]
pub fn integer<T: FixedWidthInt>(value: T) -> Form<impl Fill> {
    Form::placeholder(T::WIDTH).with_filler(move |bytes: &mut [u8]| {
        bytes[..T::WIDTH].fill(b' ');
        value.write_decimal(bytes);
    })
}

/// Blank of exactly `width` bytes copied from `source`.
///
/// `source` must yield at least `width` bytes; a shorter source leaves the
/// tail of the blank as space padding. That is a caller contract, not a
/// checked error.
#[must_use]
pub fn text<I>(width: usize, source: I) -> Form<impl Fill>
where
    I: IntoIterator<Item = u8>,
{
    Form::placeholder(width).with_filler(move |bytes: &mut [u8]| {
        let blank = &mut bytes[..width];
        blank.fill(b' ');
        for (slot, byte) in blank.iter_mut().zip(source) {
            *slot = byte;
        }
    })
}

/// Literal text wrapped in `"` on both sides.
///
/// No escaping is performed: the output is valid JSON only if `literal`
/// needs none.
#[must_use]
pub fn quoted(literal: &str) -> Form<impl Fill> {
    Form::literal("\"") + Form::literal(literal) + Form::literal("\"")
}

/// Any form wrapped in `"` on both sides. As [`quoted`], performs no
/// escaping.
#[must_use]
pub fn quoted_value<F: Fill>(value: Form<F>) -> Form<impl Fill> {
    Form::literal("\"") + value + Form::literal("\"")
}

/// Fixed-width integer primitives usable with [`integer`].
///
/// `WIDTH` is the worst-case decimal width for the whole type: the digit
/// count of its maximum value, plus a sign byte for signed types. It
/// depends only on the type's bit width, so the blank fits any value.
pub trait FixedWidthInt: sealed::Sealed + Copy {
    /// Worst-case decimal width for the type.
    const WIDTH: usize;

    /// Write the decimal form at the start of `bytes`, returning the byte
    /// count written. `bytes` must hold at least `WIDTH` bytes.
    fn write_decimal(self, bytes: &mut [u8]) -> usize;
}

mod sealed {
    pub trait Sealed {}
}

const fn decimal_digits(mut value: u128) -> usize {
    let mut digits = 1;
    while value >= 10 {
        value /= 10;
        digits += 1;
    }
    digits
}

// u128::MAX is 39 digits.
fn write_unsigned(bytes: &mut [u8], mut value: u128) -> usize {
    let mut scratch = [0u8; 39];
    let mut at = scratch.len();
    loop {
        at -= 1;
        scratch[at] = b'0' + (value % 10) as u8;
        value /= 10;
        if value == 0 {
            break;
        }
    }
    let digits = scratch.len() - at;
    bytes[..digits].copy_from_slice(&scratch[at..]);
    digits
}

macro_rules! impl_fixed_width_unsigned {
    ($($ty:ty),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl FixedWidthInt for $ty {
            const WIDTH: usize = decimal_digits(<$ty>::MAX as u128);

            fn write_decimal(self, bytes: &mut [u8]) -> usize {
                write_unsigned(bytes, u128::from(self))
            }
        }
    )*};
}

macro_rules! impl_fixed_width_signed {
    ($($ty:ty),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl FixedWidthInt for $ty {
            const WIDTH: usize = decimal_digits(<$ty>::MAX as u128) + 1;

            fn write_decimal(self, bytes: &mut [u8]) -> usize {
                // Widening first keeps `MIN` in range for negation.
                let magnitude = i128::from(self).unsigned_abs();
                if self < 0 {
                    bytes[0] = b'-';
                    1 + write_unsigned(&mut bytes[1..], magnitude)
                } else {
                    write_unsigned(bytes, magnitude)
                }
            }
        }
    )*};
}

impl_fixed_width_unsigned!(u8, u16, u32, u64, u128);
impl_fixed_width_signed!(i8, i16, i32, i64, i128);
