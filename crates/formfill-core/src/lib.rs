//! Text templating into fixed-size byte buffers, with zero allocation per
//! render.
//!
//! The engine splits emission into two phases. The *layout* phase composes
//! a [`Blueprint`]: immutable static text in which blank regions are
//! reserved as space bytes, with every offset and the total length fixed
//! before any dynamic value exists. The *fill* phase runs a move-only
//! filler that overwrites exactly the blank regions of a prepared byte
//! buffer.
//!
//! - [`Form`] pairs a blueprint with its filler and is the unit of
//!   composition: `+` concatenates forms, deriving all offsets
//!   mechanically.
//! - [`values`] adapts booleans, fixed-width integers, and fixed-length
//!   byte sequences into forms with appropriately sized blanks.
//! - Three [`Buffer`] strategies trade copying for reuse:
//!   [`TransientBuffer`] re-copies static text on every construction,
//!   [`PersistentBuffer`] skips the copy when its fingerprint says the
//!   storage already holds the blueprint, and [`OnceBuffer`] copies exactly
//!   once.
//!
//! The engine performs no I/O; it only fills bytes in memory.
//!
//! ```
//! use formfill_core::{values, Form, PersistentBuffer};
//!
//! let form = values::integer(9u8) + Form::literal(" bottles");
//! let mut buf = PersistentBuffer::new(64);
//! let len = form.length();
//! form.write_to(&mut buf);
//! assert_eq!(&buf.bytes()[..len], b"9   bottles");
//! ```

mod blueprint;
mod buffer;
mod filler;
mod form;
pub mod values;

pub use blueprint::Blueprint;
pub use buffer::{Buffer, OnceBuffer, PersistentBuffer, TransientBuffer};
pub use filler::{Chain, Fill, Leaf, Noop};
pub use form::Form;
