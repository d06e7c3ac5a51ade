//! Integration tests for formfill-core.
//!
//! These exercise the public API end-to-end: composition, the three buffer
//! strategies, and the algebraic properties the engine guarantees.

use formfill_core::{values, Blueprint, Buffer, Form, OnceBuffer, PersistentBuffer, TransientBuffer};
use proptest::prelude::*;

// =============================================================================
// Composition
// =============================================================================

#[test]
fn test_bottles_once_buffer_end_to_end() {
    let form = Form::numeral(3) + Form::literal(" bottles");
    let mut buf = OnceBuffer::new(form.blueprint());
    form.write_to(&mut buf);
    assert_eq!(buf.bytes(), b"3 bottles\0");
}

#[test]
fn test_length_known_before_values() {
    // A host embeds one form's length as a numeral inside another, the way
    // a length-prefixed protocol header does.
    let body = Form::literal("{\"ok\":") + values::boolean(true) + Form::literal("}");
    let header = Form::literal("Content-Length:") + Form::numeral(body.length() as u64);
    let message = header + Form::literal("\r\n\r\n") + body;

    let mut buf = OnceBuffer::new(message.blueprint());
    message.write_to(&mut buf);
    assert_eq!(buf.bytes(), b"Content-Length:12\r\n\r\n{\"ok\": true}\0");
}

#[test]
fn test_mixed_adapters_render() {
    let form = values::integer(42u16)
        + Form::literal(" / ")
        + values::boolean(false)
        + Form::literal(" / ")
        + values::text(3, b"abc".iter().copied());
    let mut buf = OnceBuffer::new(form.blueprint());
    form.write_to(&mut buf);
    assert_eq!(buf.bytes(), b"42    / false / abc\0");
}

// =============================================================================
// Buffer strategies
// =============================================================================

#[test]
fn test_persistent_second_render_skips_static_copy() {
    let layout = |count: u32| {
        values::integer(count) + Form::literal(" bottles of beer on the wall\n")
    };

    let mut buf = PersistentBuffer::new(64);
    let first = layout(99);
    let len = first.length();
    first.write_to(&mut buf);
    let after_first = buf.bytes().to_vec();

    // Scribble on a static byte. The second render binds the same
    // blueprint, so the fingerprint matches and the static text is not
    // recopied: the scribble proves the copy was skipped.
    let blueprint = layout(98).blueprint().clone();
    buf.data(&blueprint)[len - 1] = b'?';

    let second = layout(98);
    second.write_to(&mut buf);
    let after_second = buf.bytes().to_vec();

    assert_eq!(&after_first[..10], b"99        ");
    assert_eq!(&after_second[..10], b"98        ");
    assert_eq!(after_second[len - 1], b'?');
}

#[test]
fn test_persistent_blank_reflects_latest_values_only() {
    let layout = |count: u32| values::integer(count) + Form::literal(" left");

    let mut buf = PersistentBuffer::new(32);
    layout(1000).write_to(&mut buf);
    assert_eq!(buf.bytes(), b"1000       left\0");

    // Fewer digits than the previous render: the fill-then-write blank
    // leaves no stale digits behind.
    layout(9).write_to(&mut buf);
    assert_eq!(buf.bytes(), b"9          left\0");
}

#[test]
fn test_transient_reconstruction_leaves_no_residue() {
    let mut storage = [0u8; 32];

    let first = Form::literal("aaaaaaaaaa");
    let mut buf = TransientBuffer::new(&mut storage, first.blueprint());
    first.write_to(&mut buf);
    assert_eq!(buf.bytes(), b"aaaaaaaaaa\0");

    let second = Form::literal("bb");
    let mut buf = TransientBuffer::new(&mut storage, second.blueprint());
    second.write_to(&mut buf);
    assert_eq!(buf.bytes(), b"bb\0");
}

#[test]
fn test_persistent_alternating_blueprints_recopy() {
    let verse = Form::literal("verse one");
    let chorus = Form::literal("a chorus");
    let verse_bp = verse.blueprint().clone();
    let chorus_bp = chorus.blueprint().clone();

    let mut buf = PersistentBuffer::new(32);
    verse.write_to(&mut buf);
    assert_eq!(buf.bytes(), b"verse one\0");
    chorus.write_to(&mut buf);
    assert_eq!(buf.bytes(), b"a chorus\0");

    // Rebinding either blueprint restores its text in full.
    assert_eq!(buf.data(&verse_bp), b"verse one\0");
    assert_eq!(buf.data(&chorus_bp), b"a chorus\0");
}

// =============================================================================
// Algebraic properties
// =============================================================================

proptest! {
    #[test]
    fn prop_concat_text_is_associative(a in ".{0,16}", b in ".{0,16}", c in ".{0,16}") {
        let (a, b, c) = (Blueprint::literal(&a), Blueprint::literal(&b), Blueprint::literal(&c));
        let left_first = a.concat(&b).concat(&c);
        let right_first = a.concat(&b.concat(&c));
        prop_assert_eq!(left_first.text(), right_first.text());
    }

    #[test]
    fn prop_length_matches_render_size(
        a in ".{0,12}",
        b in ".{0,12}",
        width in 0usize..8,
        flag: bool,
    ) {
        let form = Form::literal(&a) + values::boolean(flag) + Form::placeholder(width) + Form::literal(&b);
        let length = form.length();
        let mut buf = OnceBuffer::new(form.blueprint());
        form.write_to(&mut buf);
        // Declared length is the full render minus the terminator.
        prop_assert_eq!(length, buf.bytes().len() - 1);
    }

    #[test]
    fn prop_integer_renders_fit_the_blank(value: u32) {
        let form = values::integer(value) + Form::literal("|");
        let mut buf = OnceBuffer::new(form.blueprint());
        form.write_to(&mut buf);
        let rendered = buf.bytes();
        // Ten-byte blank: digits first, spaces after, delimiter untouched.
        let digits = value.to_string();
        prop_assert_eq!(&rendered[..digits.len()], digits.as_bytes());
        prop_assert!(rendered[digits.len()..10].iter().all(|&b| b == b' '));
        prop_assert_eq!(rendered[10], b'|');
    }
}
