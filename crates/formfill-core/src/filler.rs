//! Move-only write operations over a blueprint's blank regions.
//!
//! A filler touches only the bytes of its blueprint's blank regions; the
//! surrounding static text is the buffer's responsibility. Fillers consume
//! themselves when run, so captured state is used at most once.

/// A single-shot write of dynamic bytes at known offsets.
///
/// `fill` takes `self` by value: a filler cannot be run twice or duplicated
/// by accident. Composition moves both sub-fillers into the new owner.
pub trait Fill {
    /// Whether this filler writes nothing. [`Chain`] branches on it so a
    /// pure-literal side costs nothing after monomorphization.
    const IS_NOOP: bool;

    /// Write dynamic bytes into `bytes`, which starts at this filler's
    /// region of the render storage.
    fn fill(self, bytes: &mut [u8]);
}

/// The filler of a blueprint with zero dynamic content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Noop;

impl Fill for Noop {
    const IS_NOOP: bool = true;

    fn fill(self, _bytes: &mut [u8]) {}
}

/// Closure-backed filler for a single blank region.
pub struct Leaf<F>(F);

impl<F> Leaf<F> {
    pub(crate) fn new(write: F) -> Self {
        Self(write)
    }
}

impl<F: FnOnce(&mut [u8])> Fill for Leaf<F> {
    const IS_NOOP: bool = false;

    fn fill(self, bytes: &mut [u8]) {
        (self.0)(bytes);
    }
}

/// Two fillers in sequence, the second shifted past the first side's static
/// text (its content length, terminator excluded).
///
/// When either side is [`Noop`] the corresponding branch of `fill` is a
/// compile-time constant, so chains of pure-literal concatenation collapse
/// to a single write with one offset.
pub struct Chain<A, B> {
    pub(crate) first: A,
    pub(crate) second: B,
    pub(crate) offset: usize,
}

impl<A: Fill, B: Fill> Fill for Chain<A, B> {
    const IS_NOOP: bool = A::IS_NOOP && B::IS_NOOP;

    fn fill(self, bytes: &mut [u8]) {
        if !A::IS_NOOP {
            self.first.fill(&mut bytes[..]);
        }
        if !B::IS_NOOP {
            self.second.fill(&mut bytes[self.offset..]);
        }
    }
}
