//! Parsing of query text into the [`ast`](crate::ast) types.
//!
//! The grammar itself is handled by `graphql-parser`; this module only maps
//! its tree into ours. Parsing is all or nothing: a document is either fully
//! converted or rejected with a [`ParseError`].

use graphql_parser::query as gql;

use crate::ast::{
    Argument, Definition, Directive, Document, Field, FragmentDefinition, FragmentSpread, InlineFragment,
    OperationDefinition, OperationKind, Selection, Type, Value, VariableDefinition,
};

/// The query text is not a valid executable GraphQL document.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Syntax(#[from] gql::ParseError),
    #[error("integer literal does not fit into a 64-bit signed integer")]
    IntegerOutOfRange,
}

/// Parses an executable document.
pub fn parse(source_text: &str) -> Result<Document, ParseError> {
    let document = graphql_parser::parse_query::<&str>(source_text)?;

    let definitions = document
        .definitions
        .into_iter()
        .map(convert_definition)
        .collect::<Result<_, _>>()?;

    Ok(Document { definitions })
}

fn convert_definition<'a>(definition: gql::Definition<'a, &'a str>) -> Result<Definition, ParseError> {
    match definition {
        gql::Definition::Operation(operation) => convert_operation(operation).map(Definition::Operation),
        gql::Definition::Fragment(fragment) => Ok(Definition::Fragment(FragmentDefinition {
            name: fragment.name.to_string(),
            type_condition: type_condition(fragment.type_condition),
            directives: convert_directives(fragment.directives)?,
            selection_set: convert_selection_set(fragment.selection_set)?,
        })),
    }
}

fn convert_operation<'a>(operation: gql::OperationDefinition<'a, &'a str>) -> Result<OperationDefinition, ParseError> {
    let (kind, name, variable_definitions, directives, selection_set) = match operation {
        gql::OperationDefinition::SelectionSet(selection_set) => {
            (OperationKind::Query, None, Vec::new(), Vec::new(), selection_set)
        }
        gql::OperationDefinition::Query(query) => (
            OperationKind::Query,
            query.name,
            query.variable_definitions,
            query.directives,
            query.selection_set,
        ),
        gql::OperationDefinition::Mutation(mutation) => (
            OperationKind::Mutation,
            mutation.name,
            mutation.variable_definitions,
            mutation.directives,
            mutation.selection_set,
        ),
        gql::OperationDefinition::Subscription(subscription) => (
            OperationKind::Subscription,
            subscription.name,
            subscription.variable_definitions,
            subscription.directives,
            subscription.selection_set,
        ),
    };

    Ok(OperationDefinition {
        kind,
        name: name.map(str::to_string),
        variable_definitions: variable_definitions
            .into_iter()
            .map(convert_variable_definition)
            .collect::<Result<_, _>>()?,
        directives: convert_directives(directives)?,
        selection_set: convert_selection_set(selection_set)?,
    })
}

fn convert_variable_definition<'a>(
    definition: gql::VariableDefinition<'a, &'a str>,
) -> Result<VariableDefinition, ParseError> {
    Ok(VariableDefinition {
        name: definition.name.to_string(),
        ty: convert_type(definition.var_type),
        default_value: definition.default_value.map(convert_value).transpose()?,
    })
}

fn convert_type<'a>(ty: gql::Type<'a, &'a str>) -> Type {
    match ty {
        gql::Type::NamedType(name) => Type::Named(name.to_string()),
        gql::Type::ListType(inner) => Type::List(Box::new(convert_type(*inner))),
        gql::Type::NonNullType(inner) => Type::NonNull(Box::new(convert_type(*inner))),
    }
}

fn type_condition<'a>(condition: gql::TypeCondition<'a, &'a str>) -> String {
    match condition {
        gql::TypeCondition::On(name) => name.to_string(),
    }
}

fn convert_selection_set<'a>(
    selection_set: gql::SelectionSet<'a, &'a str>,
) -> Result<Vec<Selection>, ParseError> {
    selection_set.items.into_iter().map(convert_selection).collect()
}

fn convert_selection<'a>(selection: gql::Selection<'a, &'a str>) -> Result<Selection, ParseError> {
    let selection = match selection {
        gql::Selection::Field(field) => Selection::Field(Field {
            alias: field.alias.map(str::to_string),
            name: field.name.to_string(),
            arguments: convert_arguments(field.arguments)?,
            directives: convert_directives(field.directives)?,
            selection_set: convert_selection_set(field.selection_set)?,
        }),
        gql::Selection::FragmentSpread(spread) => Selection::FragmentSpread(FragmentSpread {
            fragment_name: spread.fragment_name.to_string(),
            directives: convert_directives(spread.directives)?,
        }),
        gql::Selection::InlineFragment(fragment) => Selection::InlineFragment(InlineFragment {
            type_condition: fragment.type_condition.map(type_condition),
            directives: convert_directives(fragment.directives)?,
            selection_set: convert_selection_set(fragment.selection_set)?,
        }),
    };

    Ok(selection)
}

fn convert_directives<'a>(directives: Vec<gql::Directive<'a, &'a str>>) -> Result<Vec<Directive>, ParseError> {
    directives
        .into_iter()
        .map(|directive| {
            Ok(Directive {
                name: directive.name.to_string(),
                arguments: convert_arguments(directive.arguments)?,
            })
        })
        .collect()
}

fn convert_arguments<'a>(arguments: Vec<(&'a str, gql::Value<'a, &'a str>)>) -> Result<Vec<Argument>, ParseError> {
    arguments
        .into_iter()
        .map(|(name, value)| {
            Ok(Argument {
                name: name.to_string(),
                value: convert_value(value)?,
            })
        })
        .collect()
}

fn convert_value<'a>(value: gql::Value<'a, &'a str>) -> Result<Value, ParseError> {
    let value = match value {
        gql::Value::Variable(name) => Value::Variable(name.to_string()),
        gql::Value::Int(number) => Value::Int(number.as_i64().ok_or(ParseError::IntegerOutOfRange)?),
        gql::Value::Float(number) => Value::Float(number),
        gql::Value::String(string) => Value::String(string),
        gql::Value::Boolean(boolean) => Value::Boolean(boolean),
        gql::Value::Null => Value::Null,
        gql::Value::Enum(name) => Value::Enum(name.to_string()),
        gql::Value::List(items) => Value::List(items.into_iter().map(convert_value).collect::<Result<_, _>>()?),
        gql::Value::Object(fields) => Value::Object(
            fields
                .into_iter()
                .map(|(name, value)| Ok((name.to_string(), convert_value(value)?)))
                .collect::<Result<_, ParseError>>()?,
        ),
    };

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthand_is_an_anonymous_query() {
        let document = parse("{ hero { name } }").unwrap();

        let [Definition::Operation(operation)] = document.definitions.as_slice() else {
            unreachable!("expected a single operation, got {document:?}");
        };

        assert_eq!(operation.kind, OperationKind::Query);
        assert_eq!(operation.name, None);
        assert_eq!(operation.selection_set.len(), 1);
    }

    #[test]
    fn keeps_aliases_and_arguments() {
        let document = parse(r#"query { droid: hero(episode: EMPIRE, limit: 2) @skip(if: $skip) { name } }"#).unwrap();

        let Definition::Operation(operation) = &document.definitions[0] else {
            unreachable!();
        };

        let Selection::Field(field) = &operation.selection_set[0] else {
            unreachable!();
        };

        assert_eq!(field.alias.as_deref(), Some("droid"));
        assert_eq!(field.name, "hero");
        assert_eq!(
            field.arguments,
            vec![
                Argument {
                    name: "episode".into(),
                    value: Value::Enum("EMPIRE".into())
                },
                Argument {
                    name: "limit".into(),
                    value: Value::Int(2)
                },
            ]
        );
        assert_eq!(field.directives[0].name, "skip");
        assert_eq!(
            field.directives[0].arguments[0].value,
            Value::Variable("skip".into())
        );
    }

    #[test]
    fn block_strings_are_unescaped() {
        let document = parse("{ search(text: \"\"\"\n    hello\n    world\n\"\"\") }").unwrap();

        let Definition::Operation(operation) = &document.definitions[0] else {
            unreachable!();
        };

        let Selection::Field(field) = &operation.selection_set[0] else {
            unreachable!();
        };

        assert_eq!(field.arguments[0].value, Value::String("hello\nworld".into()));
    }

    #[test]
    fn rejects_unbalanced_braces() {
        assert!(matches!(parse("{ hero { "), Err(ParseError::Syntax(_))));
    }

    #[test]
    fn rejects_unterminated_strings() {
        assert!(parse(r#"{ hero(name: "luke) { id } }"#).is_err());
    }

    #[test]
    fn rejects_empty_documents() {
        assert!(parse("").is_err());
        assert!(parse("   # only a comment").is_err());
    }
}
