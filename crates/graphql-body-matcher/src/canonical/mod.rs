//! Canonical rendering of an executable document.
//!
//! Two documents requesting the same data render to the same string, no matter
//! how they were formatted. The rendering follows these rules:
//!
//! - All whitespace, comments and source locations are dropped.
//! - Sibling selections keep their declared order.
//! - Aliases stay, `x: a` and `a` are different selections.
//! - Directives keep their declared order.
//! - Arguments and input object fields are sorted by name.
//! - Every literal has a single spelling: `1.0` and `10e-1` are the same float,
//!   but the int `1` and the float `1.0` are not the same value.
//! - Fragment spreads are kept as they are, no inlining happens. Fragment
//!   definitions are rendered after the operations, sorted by name.
//! - The `{ a }` shorthand renders as `query { a }`.

mod directives;
mod selection;
mod value;

use std::fmt;

use crate::{
    ast::{Definition, Document, FragmentDefinition, OperationDefinition},
    parser::{self, ParseError},
};

/// The normalized form of a document. Only ever compared for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalForm(String);

impl CanonicalForm {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalForm {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Renders the canonical form of a parsed document.
pub fn canonicalize(document: &Document) -> CanonicalForm {
    let mut rendered = String::new();

    let mut fragments = Vec::new();

    for definition in &document.definitions {
        match definition {
            Definition::Operation(operation) => {
                separate(&mut rendered);
                render_operation(operation, &mut rendered);
            }
            Definition::Fragment(fragment) => fragments.push(fragment),
        }
    }

    // stable, so duplicated names keep their relative order
    fragments.sort_by(|a, b| a.name.cmp(&b.name));

    for fragment in fragments {
        separate(&mut rendered);
        render_fragment(fragment, &mut rendered);
    }

    CanonicalForm(rendered)
}

/// Parses the query text and renders its canonical form.
pub fn canonicalize_query(source_text: &str) -> Result<CanonicalForm, ParseError> {
    parser::parse(source_text).map(|document| canonicalize(&document))
}

fn separate(rendered: &mut String) {
    if !rendered.is_empty() {
        rendered.push(' ');
    }
}

fn render_operation(operation: &OperationDefinition, rendered: &mut String) {
    rendered.push_str(operation.kind.as_str());

    if let Some(name) = &operation.name {
        rendered.push(' ');
        rendered.push_str(name);
    }

    let variables_count = operation.variable_definitions.len();

    for (i, variable) in operation.variable_definitions.iter().enumerate() {
        if i == 0 {
            rendered.push('(');
        }

        rendered.push('$');
        rendered.push_str(&variable.name);
        rendered.push_str(": ");
        value::render_type(&variable.ty, rendered);

        if let Some(default_value) = &variable.default_value {
            rendered.push_str(" = ");
            value::render(default_value, rendered);
        }

        if i == variables_count - 1 {
            rendered.push(')');
        } else {
            rendered.push_str(", ");
        }
    }

    directives::render(&operation.directives, rendered);
    selection::render(&operation.selection_set, rendered);
}

fn render_fragment(fragment: &FragmentDefinition, rendered: &mut String) {
    rendered.push_str("fragment ");
    rendered.push_str(&fragment.name);
    rendered.push_str(" on ");
    rendered.push_str(&fragment.type_condition);

    directives::render(&fragment.directives, rendered);
    selection::render(&fragment.selection_set, rendered);
}
