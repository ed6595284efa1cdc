// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Column-aligned message formatter.

use std::fmt::Write as _;
use std::io::{self, Write};

use crate::field::Field;
use crate::message::Message;
use crate::value::Value;

/// How many array elements to print before truncating.
const ARRAY_TRUNCATE: usize = 8;

/// Formats a message one field per line, sub-messages indented.
///
/// ```text
/// 0-name        string  Random Person
/// 1-(4) dob     int     19801231
/// 2-address     message
///   0-(0)       string  123 Fake Street
/// ```
pub struct PrettyPrinter<W> {
    writer: W,
    indent: usize,
}

impl<W: Write> PrettyPrinter<W> {
    pub const DEFAULT_INDENT: usize = 2;

    pub fn new(writer: W) -> Self {
        Self::with_indent(writer, Self::DEFAULT_INDENT)
    }

    /// `indent` is how far each sub-message level is shifted right.
    pub fn with_indent(writer: W, indent: usize) -> Self {
        PrettyPrinter { writer, indent }
    }

    /// Write the formatted message to the underlying writer.
    pub fn format(&mut self, message: &Message) -> io::Result<()> {
        self.format_at(message, 0)
    }

    fn format_at(&mut self, message: &Message, depth: usize) -> io::Result<()> {
        if message.fields.is_empty() {
            return Ok(());
        }

        let fieldspecs: Vec<String> = message
            .fields
            .iter()
            .enumerate()
            .map(|(index, field)| self.fieldspec(field, index, depth))
            .collect();
        let spec_width = fieldspecs.iter().map(String::len).max().unwrap_or(0);
        let typename_width = message
            .fields
            .iter()
            .map(|field| field.type_.name().len())
            .max()
            .unwrap_or(0);

        for (field, fieldspec) in message.fields.iter().zip(&fieldspecs) {
            write!(
                self.writer,
                "{fieldspec:<spec_width$} {:<typename_width$} ",
                field.type_.name()
            )?;
            if let Value::Message(sub_message) = &field.value {
                writeln!(self.writer)?;
                self.format_at(sub_message, depth + 1)?;
            } else {
                self.write_value(&field.value)?;
            }
            writeln!(self.writer)?;
        }
        self.writer.flush()
    }

    /// `index-(ordinal) name` header for one field line.
    fn fieldspec(&self, field: &Field, index: usize, depth: usize) -> String {
        let mut spec = String::new();
        spec.push_str(&" ".repeat(self.indent * depth));
        let _ = write!(spec, "{index}-");
        if let Some(ordinal) = field.ordinal {
            let _ = write!(spec, "({ordinal})");
            if field.name.is_some() {
                spec.push(' ');
            }
        }
        if let Some(name) = &field.name {
            spec.push_str(name);
        }
        spec
    }

    fn write_value(&mut self, value: &Value) -> io::Result<()> {
        match value {
            Value::Indicator => write!(self.writer, "indicator"),
            Value::Bool(v) => write!(self.writer, "{v}"),
            Value::Int(v) => write!(self.writer, "{v}"),
            Value::Float(v) => write!(self.writer, "{v}"),
            Value::Double(v) => write!(self.writer, "{v}"),
            Value::String(v) => write!(self.writer, "{v}"),
            Value::Bytes(v) => self.write_array(v),
            Value::ShortArray(v) => self.write_array(v),
            Value::IntArray(v) => self.write_array(v),
            Value::LongArray(v) => self.write_array(v),
            Value::FloatArray(v) => self.write_array(v),
            Value::DoubleArray(v) => self.write_array(v),
            // handled by the sub-message branch in format_at
            Value::Message(_) => Ok(()),
        }
    }

    fn write_array<T: std::fmt::Display>(&mut self, elements: &[T]) -> io::Result<()> {
        let shown = elements.len().min(ARRAY_TRUNCATE);
        write!(self.writer, "[")?;
        for (index, element) in elements[..shown].iter().enumerate() {
            if index > 0 {
                write!(self.writer, ", ")?;
            }
            write!(self.writer, "{element}")?;
        }
        if shown < elements.len() {
            write!(self.writer, " ... {} more", elements.len() - shown)?;
        }
        write!(self.writer, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(message: &Message) -> String {
        let mut out = Vec::new();
        PrettyPrinter::new(&mut out)
            .format(message)
            .expect("format should succeed");
        String::from_utf8(out).expect("printer output is UTF-8")
    }

    #[test]
    fn test_empty_message_prints_nothing() {
        assert_eq!(render(&Message::new()), "");
    }

    #[test]
    fn test_fields_are_column_aligned() {
        let mut message = Message::new();
        message.add_named("name", "Random Person");
        message.add_field(19801231i64, Some(4), Some("dob"), None);
        let out = render(&message);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("0-name"));
        assert!(lines[1].starts_with("1-(4) dob"));
        assert!(lines[0].contains("string"));
        assert!(lines[1].contains("int"));
        assert!(lines[0].ends_with("Random Person"));
        assert!(lines[1].ends_with("19801231"));
    }

    #[test]
    fn test_sub_message_is_indented() {
        let mut sub_message = Message::new();
        sub_message.add_ordinal(0, "123 Fake Street");
        let mut message = Message::new();
        message.add_named("address", sub_message);
        let out = render(&message);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("0-address"));
        assert!(lines[0].contains("message"));
        assert!(lines[1].starts_with("  0-(0)"));
        assert!(lines[1].ends_with("123 Fake Street"));
    }

    #[test]
    fn test_long_arrays_are_truncated() {
        let mut message = Message::new();
        message.add((0..12i32).collect::<Vec<i32>>());
        let out = render(&message);
        assert!(out.contains("[0, 1, 2, 3, 4, 5, 6, 7 ... 4 more]"));
    }

    #[test]
    fn test_short_arrays_print_in_full() {
        let mut message = Message::new();
        message.add(vec![1i32, 2, 3]);
        let out = render(&message);
        assert!(out.contains("[1, 2, 3]"));
        assert!(!out.contains("more"));
    }
}
