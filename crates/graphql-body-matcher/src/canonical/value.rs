use std::fmt::Write;

use crate::ast::{Argument, Type, Value};

/// Arguments are unordered in GraphQL, so they render sorted by name.
pub(super) fn render_arguments(arguments: &[Argument], rendered: &mut String) {
    if arguments.is_empty() {
        return;
    }

    let mut arguments = arguments.iter().collect::<Vec<_>>();
    arguments.sort_by(|a, b| a.name.cmp(&b.name));

    rendered.push('(');

    for (i, argument) in arguments.into_iter().enumerate() {
        if i > 0 {
            rendered.push_str(", ");
        }

        rendered.push_str(&argument.name);
        rendered.push_str(": ");

        render(&argument.value, rendered);
    }

    rendered.push(')');
}

pub(super) fn render(value: &Value, rendered: &mut String) {
    match value {
        Value::Variable(name) => {
            rendered.push('$');
            rendered.push_str(name);
        }
        Value::Int(number) => {
            write!(rendered, "{number}").ok();
        }
        Value::Float(number) => render_float(*number, rendered),
        Value::String(string) => render_string(string, rendered),
        Value::Boolean(true) => rendered.push_str("true"),
        Value::Boolean(false) => rendered.push_str("false"),
        Value::Null => rendered.push_str("null"),
        Value::Enum(name) => rendered.push_str(name),
        Value::List(items) => {
            rendered.push('[');

            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    rendered.push_str(", ");
                }

                render(item, rendered);
            }

            rendered.push(']');
        }
        Value::Object(fields) => {
            let mut fields = fields.iter().collect::<Vec<_>>();
            fields.sort_by(|(a, _), (b, _)| a.cmp(b));

            rendered.push('{');

            for (i, (name, value)) in fields.into_iter().enumerate() {
                if i > 0 {
                    rendered.push_str(", ");
                }

                rendered.push_str(name);
                rendered.push_str(": ");

                render(value, rendered);
            }

            rendered.push('}');
        }
    }
}

pub(super) fn render_type(ty: &Type, rendered: &mut String) {
    match ty {
        Type::Named(name) => rendered.push_str(name),
        Type::List(inner) => {
            rendered.push('[');
            render_type(inner, rendered);
            rendered.push(']');
        }
        Type::NonNull(inner) => {
            render_type(inner, rendered);
            rendered.push('!');
        }
    }
}

/// The debug rendering of `f64` is the shortest one that round-trips and always
/// carries a `.` or an exponent, which keeps floats apart from ints.
fn render_float(number: f64, rendered: &mut String) {
    let number = if number == 0.0 { 0.0 } else { number };

    write!(rendered, "{number:?}").ok();
}

fn render_string(string: &str, rendered: &mut String) {
    rendered.push('"');

    for c in string.chars() {
        match c {
            '"' => rendered.push_str("\\\""),
            '\\' => rendered.push_str("\\\\"),
            '\n' => rendered.push_str("\\n"),
            '\r' => rendered.push_str("\\r"),
            '\t' => rendered.push_str("\\t"),
            '\u{08}' => rendered.push_str("\\b"),
            '\u{0C}' => rendered.push_str("\\f"),
            c if c.is_control() => {
                write!(rendered, "\\u{:04X}", c as u32).ok();
            }
            c => rendered.push(c),
        }
    }

    rendered.push('"');
}
