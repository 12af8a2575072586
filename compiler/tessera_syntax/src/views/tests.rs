use super::*;
use crate::test_support::{array_type, generic_argument, ident_type, token};
use crate::{NodeBuilder, SyntaxElement};
use tessera_token::RawTokenKind;
use pretty_assertions::assert_eq;

#[test]
fn every_layout_kind_has_a_view() {
    let mut covered: Vec<SyntaxKind> = ALL_VIEWS.iter().map(|(kind, _)| *kind).collect();
    covered.sort_by_key(|k| *k as u16);
    let layouts: Vec<SyntaxKind> = SyntaxKind::ALL
        .iter()
        .copied()
        .filter(|k| !k.is_collection())
        .collect();
    assert_eq!(covered, layouts);
}

#[test]
fn slot_names_follow_schema_order() {
    for (kind, names) in ALL_VIEWS {
        let schema: Vec<&str> = kind.children().iter().map(|c| c.name).collect();
        assert_eq!(*names, schema.as_slice(), "{kind}");
    }
}

#[test]
fn cast_checks_kind() {
    let array = array_type(ident_type("Int"));
    assert!(IdentifierTypeSyntax::cast(array.clone()).is_none());
    let view = ArrayTypeSyntax::cast(array.clone()).unwrap();
    assert!(view.syntax().ptr_eq(&array));
    assert_eq!(view.left_square().text(), "[");
    assert_eq!(view.element().source_text(), "Int");
    assert_eq!(view.right_square().text(), "]");
    assert!(SyntaxNode::from(view).ptr_eq(&array));
}

#[test]
fn optional_accessors() {
    let with_comma = GenericArgumentSyntax::cast(generic_argument("A", true)).unwrap();
    assert_eq!(with_comma.trailing_comma().map(SyntaxToken::text), Some(","));
    assert_eq!(with_comma.argument().kind(), SyntaxKind::IdentifierType);

    let without = GenericArgumentSyntax::cast(generic_argument("A", false)).unwrap();
    assert_eq!(without.trailing_comma(), None);

    let name = IdentifierTypeSyntax::cast(ident_type("T")).unwrap();
    assert_eq!(name.name().text(), "T");
    assert_eq!(name.generic_argument_clause(), None);
}

#[test]
fn collection_accessor() {
    let list = SyntaxNode::collection(
        SyntaxKind::TupleTypeElementList,
        Vec::<SyntaxElement>::new(),
    )
    .unwrap();
    let tuple = NodeBuilder::new(SyntaxKind::TupleType)
        .set("leftParen", token(RawTokenKind::LeftParen))
        .set("elements", list)
        .set("rightParen", token(RawTokenKind::RightParen))
        .build()
        .unwrap();
    let view = TupleTypeSyntax::cast(tuple).unwrap();
    assert!(view.elements().is_empty());
    assert_eq!(view.syntax().source_text(), "()");
    assert_eq!(view.into_syntax().kind(), TupleTypeSyntax::KIND);
}
