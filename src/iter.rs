//! A read-only, bidirectional cursor over the elements of an array or the entries of a map.
//!
//! The cursor sits in a gap between elements. [`Cursor::next`] yields the element after the
//! gap and moves past it, [`Cursor::prev`] yields the element before the gap and moves back.
//! A cursor built over anything other than an array or map has no elements.
//!
//! # Example
//!
//! ```
//! use cbor_value::prelude::*;
//!
//! let map = Value::convert_from_map(vec![("a", "A"), ("b", "B")]);
//! let mut it = map.cursor();
//!
//! assert!(it.has_next());
//! assert_eq!(it.next(), &Value::from("A"));
//! assert_eq!(it.key(), Value::from("a"));
//! ```

use crate::{Value, NULL};

#[derive(Clone, Copy, Debug)]
enum CursorKind<'a> {
    Array(&'a [Value]),
    Map(&'a [(Value, Value)]),
    Inert,
}

impl<'a> CursorKind<'a> {
    fn len(&self) -> usize {
        match self {
            CursorKind::Array(a) => a.len(),
            CursorKind::Map(m) => m.len(),
            CursorKind::Inert => 0,
        }
    }
}

/// Cursor over a borrowed container. See the [module level documentation](crate::iter).
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    kind: CursorKind<'a>,
    pos: usize,
    last: Option<usize>,
}

#[allow(clippy::should_implement_trait)]
impl<'a> Cursor<'a> {
    pub fn new(value: &'a Value) -> Self {
        let kind = match value {
            Value::Array(a) => CursorKind::Array(a),
            Value::Map(m) => CursorKind::Map(m.as_slice()),
            _ => CursorKind::Inert,
        };
        Cursor {
            kind,
            pos: 0,
            last: None,
        }
    }

    pub fn has_next(&self) -> bool { self.pos < self.kind.len() }

    pub fn has_prev(&self) -> bool { self.pos > 0 }

    fn element(&self, i: usize) -> &'a Value {
        match self.kind {
            CursorKind::Array(a) => &a[i],
            CursorKind::Map(m) => &m[i].1,
            CursorKind::Inert => &NULL,
        }
    }

    /// Moves forward one element and returns it, or [`Value::Null`] at the end.
    pub fn next(&mut self) -> &'a Value {
        if !self.has_next() {
            return &NULL;
        }
        let i = self.pos;
        self.pos += 1;
        self.last = Some(i);
        self.element(i)
    }

    /// Moves back one element and returns it, or [`Value::Null`] at the start.
    pub fn prev(&mut self) -> &'a Value {
        if !self.has_prev() {
            return &NULL;
        }
        self.pos -= 1;
        self.last = Some(self.pos);
        self.element(self.pos)
    }

    /// The index (arrays) or key (maps) of the element last returned by `next` or `prev`.
    /// [`Value::Null`] before either has returned an element.
    pub fn key(&self) -> Value {
        match (self.kind, self.last) {
            (CursorKind::Array(_), Some(i)) => Value::from(i),
            (CursorKind::Map(m), Some(i)) => m[i].0.clone(),
            _ => Value::Null,
        }
    }

    /// The element last returned by `next` or `prev`.
    pub fn value(&self) -> &'a Value { self.last.map_or(&NULL, |i| self.element(i)) }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn map_cursor() {
        let map = Value::convert_from_map(vec![("b", "B"), ("a", "A")]);
        let mut it = map.cursor();

        assert!(it.has_next());
        assert!(!it.has_prev());
        assert!(it.key().is_null());
        assert!(it.value().is_null());

        assert_eq!(it.next(), &Value::from("A"));
        assert_eq!(it.key(), Value::from("a"));
        assert_eq!(it.value(), &Value::from("A"));

        assert_eq!(it.next(), &Value::from("B"));
        assert!(!it.has_next());
        assert!(it.has_prev());
        assert_eq!(it.key(), Value::from("b"));
        assert_eq!(it.value(), &Value::from("B"));

        assert!(it.next().is_null());
        assert_eq!(it.key(), Value::from("b"));
    }

    #[test]
    fn array_cursor() {
        let arr = Value::from(vec!["A", "B"]);
        let mut it = arr.cursor();

        assert!(it.has_next());
        assert!(!it.has_prev());
        assert_eq!(it.next(), &Value::from("A"));
        assert_eq!(it.key(), Value::from(0));
        assert_eq!(it.value(), &Value::from("A"));

        assert_eq!(it.next(), &Value::from("B"));
        assert!(!it.has_next());
        assert!(it.has_prev());
        assert_eq!(it.key(), Value::from(1));
        assert_eq!(it.value(), &Value::from("B"));
    }

    #[test]
    fn walks_back() {
        let arr = Value::from(vec![10, 20, 30]);
        let mut it = arr.cursor();
        while it.has_next() {
            it.next();
        }

        assert_eq!(it.prev(), &Value::from(30));
        assert_eq!(it.key(), Value::from(2));
        assert_eq!(it.prev(), &Value::from(20));
        assert_eq!(it.prev(), &Value::from(10));
        assert!(!it.has_prev());
        assert!(it.prev().is_null());
        assert_eq!(it.key(), Value::from(0));

        assert_eq!(it.next(), &Value::from(10));
    }

    #[test]
    fn scalar_is_inert() {
        let v = Value::from(5);
        let mut it = Cursor::new(&v);
        assert!(!it.has_next());
        assert!(!it.has_prev());
        assert!(it.next().is_null());
        assert!(it.prev().is_null());
        assert!(it.key().is_null());
        assert!(it.value().is_null());
    }
}
