//! Composable blueprint/filler pairs.

use std::ops::Add;

use crate::blueprint::Blueprint;
use crate::buffer::Buffer;
use crate::filler::{Chain, Fill, Leaf, Noop};

/// A blueprint paired with the filler that writes its blank regions: the
/// composable, renderable unit.
///
/// Forms are one-shot emitters. [`write_to`](Self::write_to) consumes the
/// form because its filler is move-only; render again by rebuilding the
/// form with fresh values. The static layout is reusable the whole time:
/// [`length`](Self::length) and [`blueprint`](Self::blueprint) never depend
/// on the values.
///
/// Filler offsets are derived mechanically during concatenation, never
/// supplied by hand, so a form's filler always matches its blueprint's
/// blank-region layout.
pub struct Form<F: Fill = Noop> {
    blueprint: Blueprint,
    filler: F,
}

impl Form<Noop> {
    /// Literal text with no blank region.
    #[must_use]
    pub fn literal(text: &str) -> Self {
        Self {
            blueprint: Blueprint::literal(text),
            filler: Noop,
        }
    }

    /// A blank of `width` space bytes and no filler. Value adapters attach
    /// one with [`with_filler`](Self::with_filler).
    #[must_use]
    pub fn placeholder(width: usize) -> Self {
        Self {
            blueprint: Blueprint::placeholder(width),
            filler: Noop,
        }
    }

    /// Decimal digits of a layout-time constant, e.g. a derived content
    /// length. The digits are static text: a different value is a different
    /// blueprint. Per-render counters belong in
    /// [`values::integer`](crate::values::integer).
    #[must_use]
    pub fn numeral(value: u64) -> Self {
        Self {
            blueprint: Blueprint::numeral(value),
            filler: Noop,
        }
    }

    /// As [`numeral`](Self::numeral), for signed constants.
    #[must_use]
    pub fn signed_numeral(value: i64) -> Self {
        Self {
            blueprint: Blueprint::signed_numeral(value),
            filler: Noop,
        }
    }

    /// Attach a write operation to this layout. The closure receives the
    /// bytes starting at this form's position in the render storage.
    pub fn with_filler<F>(self, filler: F) -> Form<Leaf<F>>
    where
        F: FnOnce(&mut [u8]),
    {
        Form {
            blueprint: self.blueprint,
            filler: Leaf::new(filler),
        }
    }
}

impl<F: Fill> Form<F> {
    /// Static byte length of a full render, terminator excluded. Known
    /// before any value is; hosts use it to embed one form's length as a
    /// [`numeral`](Form::numeral) inside another.
    #[must_use]
    pub fn length(&self) -> usize {
        self.blueprint.len()
    }

    /// The underlying layout.
    #[must_use]
    pub fn blueprint(&self) -> &Blueprint {
        &self.blueprint
    }

    /// Render: obtain the buffer's correctly-initialized bytes and run the
    /// composed filler over them. Consumes the form; the buffer's content
    /// is the entire effect.
    pub fn write_to<B: Buffer>(self, buffer: &mut B) {
        let bytes = buffer.data(&self.blueprint);
        self.filler.fill(bytes);
    }
}

/// Concatenation. Left-associative and order-sensitive, like the text it
/// joins; the right filler is shifted past the left side's content.
impl<L: Fill, R: Fill> Add<Form<R>> for Form<L> {
    type Output = Form<Chain<L, R>>;

    fn add(self, rhs: Form<R>) -> Self::Output {
        let offset = self.blueprint.len();
        Form {
            blueprint: self.blueprint.concat(&rhs.blueprint),
            filler: Chain {
                first: self.filler,
                second: rhs.filler,
                offset,
            },
        }
    }
}
