//! Storage policies for rendered bytes.
//!
//! All three buffers expose one capability: hand out writable storage whose
//! bytes outside the blank regions already equal the bound blueprint's
//! static text. They differ in how much copying each render pays for.
//!
//! | Buffer | Static text copied |
//! |--------|--------------------|
//! | [`TransientBuffer`] | on every construction |
//! | [`PersistentBuffer`] | only when the blueprint changes |
//! | [`OnceBuffer`] | exactly once, at construction |
//!
//! None of them synchronize: a buffer belongs to one render at a time on
//! one thread.

use crate::blueprint::Blueprint;

/// Writable storage whose static bytes are guaranteed correct for the bound
/// blueprint on every access.
pub trait Buffer {
    /// Writable bytes covering the blueprint's full text, terminator
    /// included, with the static text already in place. Fillers overwrite
    /// only the blank regions of the returned slice.
    fn data(&mut self, blueprint: &Blueprint) -> &mut [u8];
}

/// Caller-supplied storage, re-initialized on every construction.
///
/// Building a `TransientBuffer` eagerly copies the blueprint's full static
/// text into the storage, so wrapping the same storage for a different
/// blueprint leaves no residue of the first.
pub struct TransientBuffer<'a> {
    bytes: &'a mut [u8],
}

impl<'a> TransientBuffer<'a> {
    /// Copy `blueprint`'s static text into `storage` and bind to it.
    ///
    /// # Panics
    ///
    /// Panics if `storage` is smaller than the blueprint's full text.
    pub fn new(storage: &'a mut [u8], blueprint: &Blueprint) -> Self {
        let text = blueprint.text();
        assert!(
            storage.len() >= text.len(),
            "storage holds {} bytes, blueprint needs {}",
            storage.len(),
            text.len()
        );
        let bytes = &mut storage[..text.len()];
        bytes.copy_from_slice(text);
        Self { bytes }
    }

    /// The bound region of the storage, terminator included.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.bytes
    }
}

impl Buffer for TransientBuffer<'_> {
    fn data(&mut self, blueprint: &Blueprint) -> &mut [u8] {
        debug_assert_eq!(
            self.bytes.len(),
            blueprint.text().len(),
            "buffer bound to a blueprint of a different length"
        );
        self.bytes
    }
}

/// Owned storage reused across many renders, keyed by blueprint
/// fingerprint.
///
/// The buffer remembers the fingerprint of the last blueprint whose static
/// text it copied. A matching fingerprint on the next access skips the copy
/// entirely, trusting that the storage still holds those bytes from the
/// prior render.
///
/// Identity is a 64-bit seahash, not a byte comparison: two distinct
/// blueprints with colliding fingerprints would silently leave the wrong
/// static bytes in place. The hash makes that implausible for the handful
/// of blueprints a buffer typically sees, but it is a trust decision, not a
/// checked one.
pub struct PersistentBuffer {
    bytes: Box<[u8]>,
    len: usize,
    last_fingerprint: Option<u64>,
}

impl PersistentBuffer {
    /// Buffer of `capacity` bytes, not yet holding any blueprint.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            bytes: vec![0; capacity].into_boxed_slice(),
            len: 0,
            last_fingerprint: None,
        }
    }

    /// Total capacity in bytes.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    /// Bytes of the most recently bound blueprint, terminator included.
    /// Empty until the first render.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

impl Buffer for PersistentBuffer {
    /// # Panics
    ///
    /// Panics if the buffer's capacity is smaller than the blueprint's full
    /// text.
    fn data(&mut self, blueprint: &Blueprint) -> &mut [u8] {
        let text = blueprint.text();
        assert!(
            text.len() <= self.bytes.len(),
            "buffer holds {} bytes, blueprint needs {}",
            self.bytes.len(),
            text.len()
        );
        if self.last_fingerprint != Some(blueprint.fingerprint()) {
            self.bytes[..text.len()].copy_from_slice(text);
            self.last_fingerprint = Some(blueprint.fingerprint());
        }
        self.len = text.len();
        &mut self.bytes[..text.len()]
    }
}

/// Storage sized exactly to one blueprint, initialized once.
///
/// The static text is copied at construction and never revisited; every
/// render pays only for its blank regions.
pub struct OnceBuffer {
    bytes: Box<[u8]>,
    fingerprint: u64,
}

impl OnceBuffer {
    /// Storage initialized to `blueprint`'s static text.
    #[must_use]
    pub fn new(blueprint: &Blueprint) -> Self {
        Self {
            bytes: blueprint.text().into(),
            fingerprint: blueprint.fingerprint(),
        }
    }

    /// The full storage, terminator included.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl Buffer for OnceBuffer {
    fn data(&mut self, blueprint: &Blueprint) -> &mut [u8] {
        debug_assert_eq!(
            self.fingerprint,
            blueprint.fingerprint(),
            "buffer bound to a different blueprint"
        );
        &mut self.bytes
    }
}
