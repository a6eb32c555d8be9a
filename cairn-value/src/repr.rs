// cairn-value - Literal text builders
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Builders for the bracketed literal forms of lists and maps.
//!
//! Both composite kinds (`Map` and `Struct`) render through
//! [`MapReprBuilder`], so their output is indistinguishable in style:
//!
//! ```text
//! [&]                  empty map
//! [&a=1 &b=2]          single-line
//! [
//!  &a=
//!   1
//! ]                    pretty, starting at indent 0
//! ```

use std::cell::Cell;

// Thread-local print settings (can be configured by the runtime)
thread_local! {
    /// Whether `Display` renders values in multi-line form.
    /// Default: false (single-line)
    static PRETTY: Cell<bool> = const { Cell::new(false) };
}

/// Get the current pretty-print setting.
pub fn pretty() -> bool {
    PRETTY.with(|p| p.get())
}

/// Set the pretty-print setting. Returns the previous value.
pub fn set_pretty(on: bool) -> bool {
    PRETTY.with(|p| p.replace(on))
}

/// The indent `Display` implementations start from.
pub fn default_indent() -> Indent {
    if pretty() {
        Indent::Level(0)
    } else {
        Indent::None
    }
}

/// Indentation state for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Indent {
    /// Everything on one line
    None,
    /// Multi-line, currently indented by this many columns
    Level(usize),
}

impl Indent {
    /// Indentation `by` columns deeper. `None` stays `None`.
    pub fn nested(self, by: usize) -> Indent {
        match self {
            Indent::None => Indent::None,
            Indent::Level(n) => Indent::Level(n + by),
        }
    }
}

/// Accumulates elements of a `[...]` literal.
#[derive(Debug)]
pub struct ListReprBuilder {
    indent: Indent,
    buf: String,
}

impl ListReprBuilder {
    pub fn new(indent: Indent) -> Self {
        ListReprBuilder {
            indent,
            buf: String::new(),
        }
    }

    /// Append one already-rendered element.
    pub fn write_elem(&mut self, elem: &str) {
        if self.buf.is_empty() {
            self.buf.push('[');
        }
        match self.indent {
            Indent::Level(n) => {
                self.buf.push('\n');
                push_spaces(&mut self.buf, n + 1);
            }
            Indent::None => {
                if self.buf.len() > 1 {
                    self.buf.push(' ');
                }
            }
        }
        self.buf.push_str(elem);
    }

    /// True if no element has been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn finish(mut self) -> String {
        if self.buf.is_empty() {
            return "[]".to_string();
        }
        if let Indent::Level(n) = self.indent {
            self.buf.push('\n');
            push_spaces(&mut self.buf, n);
        }
        self.buf.push(']');
        self.buf
    }
}

/// Accumulates `&key=value` pairs of a map literal.
#[derive(Debug)]
pub struct MapReprBuilder {
    list: ListReprBuilder,
}

impl MapReprBuilder {
    pub fn new(indent: Indent) -> Self {
        MapReprBuilder {
            list: ListReprBuilder::new(indent),
        }
    }

    /// Append one pair. With a positive `hint` the value goes on its own
    /// line, indented by `hint` columns; otherwise the pair stays inline.
    pub fn write_pair(&mut self, key: &str, hint: Indent, value: &str) {
        let mut elem = String::with_capacity(key.len() + value.len() + 2);
        elem.push('&');
        elem.push_str(key);
        elem.push('=');
        if let Indent::Level(n) = hint
            && n > 0
        {
            elem.push('\n');
            push_spaces(&mut elem, n);
        }
        elem.push_str(value);
        self.list.write_elem(&elem);
    }

    pub fn finish(self) -> String {
        if self.list.is_empty() {
            return "[&]".to_string();
        }
        self.list.finish()
    }
}

fn push_spaces(buf: &mut String, n: usize) {
    buf.extend(std::iter::repeat_n(' ', n));
}
