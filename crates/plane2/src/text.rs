//! Generic value-to-text conversion and one-line printing.
//!
//! Purpose
//! - `Stringify` renders a value as text by shape: scalars use their natural
//!   form, ordered sequences become `[e1, e2, ...]`, and ordered mappings
//!   become `{k1: v1, k2: v2}`. Implementations recurse, so containers of
//!   containers of stringifiable things compose freely.
//! - [`print_all!`](crate::print_all) is the variadic front end: it joins
//!   the stringified arguments with `", "` and writes one newline-terminated
//!   line to stdout.
//!
//! Notes
//! - Mappings are covered for `BTreeMap` only; hash maps iterate in an
//!   unspecified order, which would leak into the output.
//! - The empty sequence renders as `[]`, the empty mapping as `{}`; no
//!   trailing separator is ever produced.

use std::collections::BTreeMap;

use crate::point2::Point2f;
use crate::vec2::Vector2f;

/// Conversion of a value to its canonical one-line text form.
pub trait Stringify {
    fn stringify(&self) -> String;
}

macro_rules! stringify_via_display {
    ($($t:ty),* $(,)?) => {$(
        impl Stringify for $t {
            #[inline]
            fn stringify(&self) -> String {
                self.to_string()
            }
        }
    )*};
}

stringify_via_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String, Vector2f, Point2f,
);

impl<T: Stringify + ?Sized> Stringify for &T {
    #[inline]
    fn stringify(&self) -> String {
        (**self).stringify()
    }
}

impl<T: Stringify> Stringify for [T] {
    fn stringify(&self) -> String {
        let mut out = String::from("[");
        push_joined(&mut out, self.iter().map(Stringify::stringify));
        out.push(']');
        out
    }
}

impl<T: Stringify> Stringify for Vec<T> {
    #[inline]
    fn stringify(&self) -> String {
        self.as_slice().stringify()
    }
}

impl<T: Stringify, const N: usize> Stringify for [T; N] {
    #[inline]
    fn stringify(&self) -> String {
        self.as_slice().stringify()
    }
}

impl<K: Stringify, V: Stringify> Stringify for BTreeMap<K, V> {
    fn stringify(&self) -> String {
        let mut out = String::from("{");
        push_joined(
            &mut out,
            self.iter()
                .map(|(k, v)| format!("{}: {}", k.stringify(), v.stringify())),
        );
        out.push('}');
        out
    }
}

fn push_joined<I: Iterator<Item = String>>(out: &mut String, items: I) {
    for (i, item) in items.enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&item);
    }
}

/// Stringify each value and join with `", "`. An empty slice yields the
/// empty string.
pub fn join_values(values: &[&dyn Stringify]) -> String {
    let mut out = String::new();
    push_joined(&mut out, values.iter().map(|v| v.stringify()));
    out
}

/// Write the joined values and a newline to stdout. Prefer the
/// [`print_all!`](crate::print_all) macro, which builds the slice and
/// requires at least one argument at compile time.
pub fn print_values(values: &[&dyn Stringify]) {
    println!("{}", join_values(values));
}

/// Print one or more heterogeneous values on a single stdout line, joined
/// with `", "` and newline-terminated.
///
/// ```
/// use plane2::{print_all, Point2f};
///
/// print_all!("origin", Point2f::ORIGIN, vec![1, 2, 3]);
/// // origin, (0, 0), [1, 2, 3]
/// ```
#[macro_export]
macro_rules! print_all {
    ($($value:expr),+ $(,)?) => {
        $crate::text::print_values(&[$(&$value as &dyn $crate::text::Stringify),+])
    };
}
