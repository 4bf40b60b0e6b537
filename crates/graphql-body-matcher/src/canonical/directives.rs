use crate::ast::Directive;

pub(super) fn render(directives: &[Directive], rendered: &mut String) {
    for directive in directives {
        rendered.push_str(" @");
        rendered.push_str(&directive.name);

        super::value::render_arguments(&directive.arguments, rendered);
    }
}
