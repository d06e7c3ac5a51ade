//! Static blueprint text with a content fingerprint.
//!
//! A [`Blueprint`] is the layout half of the engine: the complete static
//! text of an emitter, with blank regions already reserved as space bytes.
//! Layout is computed before any dynamic value exists, so the exact output
//! length is known up front and never changes.

use std::fmt;

/// Immutable static text with a trailing NUL terminator and a fast
/// fingerprint of its bytes.
///
/// The terminator is not counted by [`len`](Self::len): a blueprint built
/// from `"abc"` stores four bytes and reports length 3. Concatenation drops
/// the left operand's terminator so a NUL never appears mid-text.
///
/// Blueprints allocate once when the layout is computed; rendering through
/// any buffer strategy performs no allocation.
#[derive(Clone, PartialEq, Eq)]
pub struct Blueprint {
    text: Box<[u8]>,
    fingerprint: u64,
}

impl Blueprint {
    fn from_terminated(text: Box<[u8]>) -> Self {
        debug_assert_eq!(text.last(), Some(&0), "blueprint text must end in NUL");
        let fingerprint = seahash::hash(&text);
        Self { text, fingerprint }
    }

    /// Blueprint holding exactly `text` plus the terminator. No blank
    /// region.
    #[must_use]
    pub fn literal(text: &str) -> Self {
        let mut bytes = Vec::with_capacity(text.len() + 1);
        bytes.extend_from_slice(text.as_bytes());
        bytes.push(0);
        Self::from_terminated(bytes.into_boxed_slice())
    }

    /// Blueprint of `width` space bytes: one blank region spanning the
    /// whole text.
    #[must_use]
    pub fn placeholder(width: usize) -> Self {
        let mut bytes = vec![b' '; width + 1];
        bytes[width] = 0;
        Self::from_terminated(bytes.into_boxed_slice())
    }

    /// Decimal digits of a layout-time constant. No blank region: the
    /// digits are baked into the static text, so a different value needs a
    /// different blueprint. Per-render counters belong in
    /// [`values::integer`](crate::values::integer) instead.
    #[must_use]
    pub fn numeral(value: u64) -> Self {
        Self::literal(&value.to_string())
    }

    /// As [`numeral`](Self::numeral), for signed constants.
    #[must_use]
    pub fn signed_numeral(value: i64) -> Self {
        Self::literal(&value.to_string())
    }

    /// Length in bytes, terminator excluded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len() - 1
    }

    /// Whether the blueprint holds no content beyond the terminator.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The full static text, terminator included.
    #[must_use]
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    /// 64-bit seahash of the full text. Persistent buffers use this as the
    /// blueprint's identity; see
    /// [`PersistentBuffer`](crate::PersistentBuffer) for the collision
    /// caveat.
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// Concatenate, dropping this blueprint's terminator and keeping
    /// `other`'s: the result is `self.len() + other.len()` content bytes
    /// plus one NUL.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        let mut bytes = Vec::with_capacity(self.len() + other.text.len());
        bytes.extend_from_slice(&self.text[..self.len()]);
        bytes.extend_from_slice(&other.text);
        Self::from_terminated(bytes.into_boxed_slice())
    }
}

impl fmt::Debug for Blueprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Blueprint")
            .field("text", &String::from_utf8_lossy(&self.text[..self.len()]))
            .field("fingerprint", &self.fingerprint)
            .finish()
    }
}
