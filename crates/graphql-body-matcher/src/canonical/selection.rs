use crate::ast::Selection;

/// Renders a selection set, keeping the order of the selections. Leaf fields
/// have an empty set and render nothing.
pub(super) fn render(selection_set: &[Selection], rendered: &mut String) {
    if selection_set.is_empty() {
        return;
    }

    rendered.push_str(" {");

    for selection in selection_set {
        match selection {
            Selection::Field(field) => {
                rendered.push(' ');

                if let Some(alias) = &field.alias {
                    rendered.push_str(alias);
                    rendered.push_str(": ");
                }

                rendered.push_str(&field.name);

                super::value::render_arguments(&field.arguments, rendered);
                super::directives::render(&field.directives, rendered);
                render(&field.selection_set, rendered);
            }
            Selection::FragmentSpread(spread) => {
                rendered.push_str(" ...");
                rendered.push_str(&spread.fragment_name);

                super::directives::render(&spread.directives, rendered);
            }
            Selection::InlineFragment(fragment) => {
                rendered.push_str(" ...");

                if let Some(r#type) = &fragment.type_condition {
                    rendered.push_str(" on ");
                    rendered.push_str(r#type);
                }

                super::directives::render(&fragment.directives, rendered);
                render(&fragment.selection_set, rendered);
            }
        }
    }

    rendered.push_str(" }");
}
