//! The schema table.
//!
//! One entry per [`SyntaxKind`], in discriminant order. Slot order is source
//! order. Renamed slots keep their old name as `deprecated`.

use tessera_token::{Keyword, RawTokenKind};

use crate::TokenChoice::{Keyword as Kw, Token as Tok};
use crate::{BaseKind, Child, ChildKind, Node, SyntaxKind, TokenChoice, TraitSet};

const LEFT_SQUARE: &[TokenChoice] = &[Tok(RawTokenKind::LeftSquare)];
const RIGHT_SQUARE: &[TokenChoice] = &[Tok(RawTokenKind::RightSquare)];
const LEFT_PAREN: &[TokenChoice] = &[Tok(RawTokenKind::LeftParen)];
const RIGHT_PAREN: &[TokenChoice] = &[Tok(RawTokenKind::RightParen)];
const LEFT_ANGLE: &[TokenChoice] = &[Tok(RawTokenKind::LeftAngle)];
const RIGHT_ANGLE: &[TokenChoice] = &[Tok(RawTokenKind::RightAngle)];
const COLON: &[TokenChoice] = &[Tok(RawTokenKind::Colon)];
const COMMA: &[TokenChoice] = &[Tok(RawTokenKind::Comma)];
const PERIOD: &[TokenChoice] = &[Tok(RawTokenKind::Period)];
const IDENTIFIER: &[TokenChoice] = &[Tok(RawTokenKind::Identifier)];
const NAME_OR_WILDCARD: &[TokenChoice] = &[Tok(RawTokenKind::Identifier), Tok(RawTokenKind::Wildcard)];

const TYPE_SPECIFIERS: &[TokenChoice] = &[
    Kw(Keyword::Inout),
    Kw(Keyword::DunderShared),
    Kw(Keyword::DunderOwned),
    Kw(Keyword::Isolated),
    Kw(Keyword::UnderscoreConst),
    Kw(Keyword::Borrowing),
    Kw(Keyword::Consuming),
    Kw(Keyword::Transferring),
    Kw(Keyword::UnderscoreResultDependsOn),
];

/// `attributes` slot shared by every kind with `WithAttributes`.
const ATTRIBUTES_SLOT: Child = Child::new(
    "attributes",
    ChildKind::collection(SyntaxKind::AttributeList, "Attribute"),
)
.defaults_to_empty();

const TRAILING_COMMA_SLOT: Child = Child::token("trailingComma", COMMA).optional();

const ARRAY_TYPE: &[Child] = &[
    Child::token("leftSquare", LEFT_SQUARE).deprecated("leftSquareBracket"),
    Child::new("element", ChildKind::TYPE).deprecated("elementType"),
    Child::token("rightSquare", RIGHT_SQUARE).deprecated("rightSquareBracket"),
];

const ATTRIBUTED_TYPE: &[Child] = &[
    Child::token("specifier", TYPE_SPECIFIERS).optional(),
    ATTRIBUTES_SLOT,
    Child::new("baseType", ChildKind::TYPE),
];

const CLASS_RESTRICTION_TYPE: &[Child] = &[Child::token("classKeyword", &[Kw(Keyword::Class)])];

const COMPOSITION_TYPE_ELEMENT: &[Child] = &[
    Child::new("type", ChildKind::TYPE),
    Child::new("ampersand", ChildKind::AnyToken).optional(),
];

const COMPOSITION_TYPE: &[Child] = &[Child::new(
    "elements",
    ChildKind::collection(SyntaxKind::CompositionTypeElementList, "Element"),
)];

const SOME_OR_ANY_TYPE: &[Child] = &[
    Child::token("someOrAnySpecifier", &[Kw(Keyword::Some), Kw(Keyword::AnyLower)]),
    Child::new("constraint", ChildKind::TYPE).deprecated("baseType"),
];

const DICTIONARY_TYPE: &[Child] = &[
    Child::token("leftSquare", LEFT_SQUARE).deprecated("leftSquareBracket"),
    Child::new("key", ChildKind::TYPE)
        .deprecated("keyType")
        .diagnostic_name("key type"),
    Child::token("colon", COLON),
    Child::new("value", ChildKind::TYPE)
        .deprecated("valueType")
        .diagnostic_name("value type"),
    Child::token("rightSquare", RIGHT_SQUARE).deprecated("rightSquareBracket"),
];

const FUNCTION_TYPE: &[Child] = &[
    Child::token("leftParen", LEFT_PAREN),
    Child::new(
        "parameters",
        ChildKind::collection(SyntaxKind::TupleTypeElementList, "Parameter"),
    )
    .deprecated("arguments")
    .deprecated_element("Argument"),
    Child::token("rightParen", RIGHT_PAREN),
    Child::new("effectSpecifiers", ChildKind::node(SyntaxKind::TypeEffectSpecifiers))
        .optional(),
    Child::new("returnClause", ChildKind::node(SyntaxKind::ReturnClause))
        .deprecated("output"),
];

const GENERIC_ARGUMENT_CLAUSE: &[Child] = &[
    Child::token("leftAngle", LEFT_ANGLE).deprecated("leftAngleBracket"),
    Child::new(
        "arguments",
        ChildKind::collection(SyntaxKind::GenericArgumentList, "Argument"),
    ),
    Child::token("rightAngle", RIGHT_ANGLE).deprecated("rightAngleBracket"),
];

const GENERIC_ARGUMENT: &[Child] = &[
    Child::new("argument", ChildKind::TYPE).deprecated("argumentType"),
    TRAILING_COMMA_SLOT,
];

const IMPLICITLY_UNWRAPPED_OPTIONAL_TYPE: &[Child] = &[
    Child::new("wrappedType", ChildKind::TYPE),
    Child::token("exclamationMark", &[Tok(RawTokenKind::ExclamationMark)]),
];

const MEMBER_TYPE: &[Child] = &[
    Child::new("baseType", ChildKind::TYPE).diagnostic_name("base type"),
    Child::token("period", PERIOD),
    Child::token(
        "name",
        &[Tok(RawTokenKind::Identifier), Kw(Keyword::SelfLower)],
    )
    .diagnostic_name("name"),
    Child::new(
        "genericArgumentClause",
        ChildKind::node(SyntaxKind::GenericArgumentClause),
    )
    .optional(),
];

const METATYPE_TYPE: &[Child] = &[
    Child::new("baseType", ChildKind::TYPE).diagnostic_name("base type"),
    Child::token("period", PERIOD),
    Child::token(
        "metatypeSpecifier",
        &[Kw(Keyword::Type), Kw(Keyword::ProtocolUpper)],
    )
    .deprecated("typeOrProtocol"),
];

const NAMED_OPAQUE_RETURN_TYPE: &[Child] = &[
    Child::new(
        "genericParameterClause",
        ChildKind::node(SyntaxKind::GenericParameterClause),
    )
    .deprecated("genericParameters")
    .documented("The parameter clause that defines the generic parameters."),
    Child::new("type", ChildKind::TYPE).deprecated("baseType"),
];

const OPTIONAL_TYPE: &[Child] = &[
    Child::new("wrappedType", ChildKind::TYPE),
    Child::token("questionMark", &[Tok(RawTokenKind::PostfixQuestionMark)]),
];

const SUPPRESSED_TYPE: &[Child] = &[
    Child::token("withoutTilde", &[Tok(RawTokenKind::PrefixOperator)]),
    Child::new("type", ChildKind::TYPE).deprecated("patternType"),
];

const PACK_EXPANSION_TYPE: &[Child] = &[
    Child::token("repeatKeyword", &[Kw(Keyword::Repeat)]),
    Child::new("repetitionPattern", ChildKind::TYPE).deprecated("patternType"),
];

const PACK_ELEMENT_TYPE: &[Child] = &[
    Child::token("eachKeyword", &[Kw(Keyword::Each)]),
    Child::new("pack", ChildKind::TYPE).deprecated("packType"),
];

const IDENTIFIER_TYPE: &[Child] = &[
    Child::token(
        "name",
        &[
            Tok(RawTokenKind::Identifier),
            Kw(Keyword::SelfUpper),
            Kw(Keyword::AnyUpper),
            Tok(RawTokenKind::Wildcard),
        ],
    ),
    Child::new(
        "genericArgumentClause",
        ChildKind::node(SyntaxKind::GenericArgumentClause),
    )
    .optional(),
];

const TUPLE_TYPE_ELEMENT: &[Child] = &[
    Child::token("inoutKeyword", &[Kw(Keyword::Inout)])
        .deprecated("inOut")
        .optional(),
    Child::token("firstName", NAME_OR_WILDCARD)
        .deprecated("name")
        .diagnostic_name("name")
        .optional(),
    Child::token("secondName", NAME_OR_WILDCARD)
        .diagnostic_name("internal name")
        .optional(),
    Child::token("colon", COLON).optional(),
    Child::new("type", ChildKind::TYPE),
    Child::token("ellipsis", &[Tok(RawTokenKind::Ellipsis)]).optional(),
    TRAILING_COMMA_SLOT,
];

const TUPLE_TYPE: &[Child] = &[
    Child::token("leftParen", LEFT_PAREN),
    Child::new(
        "elements",
        ChildKind::collection(SyntaxKind::TupleTypeElementList, "Element"),
    ),
    Child::token("rightParen", RIGHT_PAREN),
];

const ATTRIBUTE: &[Child] = &[
    Child::token("atSign", &[Tok(RawTokenKind::AtSign)]),
    Child::new("attributeName", ChildKind::TYPE).diagnostic_name("name"),
    Child::token("leftParen", LEFT_PAREN).optional(),
    Child::new("argument", ChildKind::AnyToken).optional(),
    Child::token("rightParen", RIGHT_PAREN).optional(),
];

const TYPE_EFFECT_SPECIFIERS: &[Child] = &[
    Child::token("asyncSpecifier", &[Kw(Keyword::Async)]).optional(),
    Child::token("throwsSpecifier", &[Kw(Keyword::Throws), Kw(Keyword::Rethrows)])
        .optional(),
];

const RETURN_CLAUSE: &[Child] = &[
    Child::token("arrow", &[Tok(RawTokenKind::Arrow)]),
    Child::new("type", ChildKind::TYPE)
        .deprecated("returnType")
        .diagnostic_name("return type"),
];

const GENERIC_PARAMETER_CLAUSE: &[Child] = &[
    Child::token("leftAngle", LEFT_ANGLE).deprecated("leftAngleBracket"),
    Child::new(
        "parameters",
        ChildKind::collection(SyntaxKind::GenericParameterList, "Parameter"),
    )
    .deprecated("genericParameterList"),
    Child::token("rightAngle", RIGHT_ANGLE).deprecated("rightAngleBracket"),
];

const GENERIC_PARAMETER: &[Child] = &[
    ATTRIBUTES_SLOT,
    Child::token("eachKeyword", &[Kw(Keyword::Each)])
        .deprecated("specifier")
        .optional(),
    Child::token("name", IDENTIFIER),
    Child::token("colon", COLON).optional(),
    Child::new("inheritedType", ChildKind::TYPE).optional(),
    TRAILING_COMMA_SLOT,
];

const MISSING_TYPE: &[Child] = &[Child::token("placeholder", IDENTIFIER)
    .documented("A placeholder identifier that is missing from the source.")];

pub(crate) static NODES: [Node; SyntaxKind::COUNT] = [
    // === Types ===
    Node::layout(SyntaxKind::ArrayType, BaseKind::Type, Some("array type"), ARRAY_TYPE),
    Node::layout(SyntaxKind::AttributedType, BaseKind::Type, Some("type"), ATTRIBUTED_TYPE)
        .with_traits(TraitSet::WITH_ATTRIBUTES),
    Node::layout(SyntaxKind::ClassRestrictionType, BaseKind::Type, None, CLASS_RESTRICTION_TYPE),
    Node::collection(SyntaxKind::CompositionTypeElementList, &[SyntaxKind::CompositionTypeElement]),
    Node::layout(
        SyntaxKind::CompositionTypeElement,
        BaseKind::Syntax,
        None,
        COMPOSITION_TYPE_ELEMENT,
    ),
    Node::layout(
        SyntaxKind::CompositionType,
        BaseKind::Type,
        Some("type composition"),
        COMPOSITION_TYPE,
    ),
    Node::layout(SyntaxKind::SomeOrAnyType, BaseKind::Type, Some("type"), SOME_OR_ANY_TYPE),
    Node::layout(
        SyntaxKind::DictionaryType,
        BaseKind::Type,
        Some("dictionary type"),
        DICTIONARY_TYPE,
    ),
    Node::layout(SyntaxKind::FunctionType, BaseKind::Type, Some("function type"), FUNCTION_TYPE)
        .with_traits(TraitSet::PARENTHESIZED),
    Node::layout(
        SyntaxKind::GenericArgumentClause,
        BaseKind::Syntax,
        Some("generic argument clause"),
        GENERIC_ARGUMENT_CLAUSE,
    ),
    Node::collection(SyntaxKind::GenericArgumentList, &[SyntaxKind::GenericArgument]),
    Node::layout(
        SyntaxKind::GenericArgument,
        BaseKind::Syntax,
        Some("generic argument"),
        GENERIC_ARGUMENT,
    )
    .with_traits(TraitSet::WITH_TRAILING_COMMA),
    Node::layout(
        SyntaxKind::ImplicitlyUnwrappedOptionalType,
        BaseKind::Type,
        Some("implicitly unwrapped optional type"),
        IMPLICITLY_UNWRAPPED_OPTIONAL_TYPE,
    ),
    Node::layout(SyntaxKind::MemberType, BaseKind::Type, Some("member type"), MEMBER_TYPE),
    Node::layout(SyntaxKind::MetatypeType, BaseKind::Type, Some("metatype"), METATYPE_TYPE),
    Node::layout(
        SyntaxKind::NamedOpaqueReturnType,
        BaseKind::Type,
        Some("named opaque return type"),
        NAMED_OPAQUE_RETURN_TYPE,
    ),
    Node::layout(SyntaxKind::OptionalType, BaseKind::Type, Some("optional type"), OPTIONAL_TYPE),
    Node::layout(
        SyntaxKind::SuppressedType,
        BaseKind::Type,
        Some("suppressed type conformance"),
        SUPPRESSED_TYPE,
    ),
    Node::layout(
        SyntaxKind::PackExpansionType,
        BaseKind::Type,
        Some("variadic expansion"),
        PACK_EXPANSION_TYPE,
    ),
    Node::layout(
        SyntaxKind::PackElementType,
        BaseKind::Type,
        Some("pack element"),
        PACK_ELEMENT_TYPE,
    ),
    Node::layout(SyntaxKind::IdentifierType, BaseKind::Type, Some("type"), IDENTIFIER_TYPE),
    Node::collection(SyntaxKind::TupleTypeElementList, &[SyntaxKind::TupleTypeElement]),
    Node::layout(SyntaxKind::TupleTypeElement, BaseKind::Syntax, None, TUPLE_TYPE_ELEMENT)
        .with_traits(TraitSet::WITH_TRAILING_COMMA),
    Node::layout(SyntaxKind::TupleType, BaseKind::Type, Some("tuple type"), TUPLE_TYPE)
        .with_traits(TraitSet::PARENTHESIZED),
    // === Supporting constructs ===
    Node::layout(SyntaxKind::Attribute, BaseKind::Syntax, Some("attribute"), ATTRIBUTE)
        .documented("An `@` attribute, with an optional single-token argument."),
    Node::collection(SyntaxKind::AttributeList, &[SyntaxKind::Attribute]),
    Node::layout(
        SyntaxKind::TypeEffectSpecifiers,
        BaseKind::Syntax,
        Some("effect specifiers"),
        TYPE_EFFECT_SPECIFIERS,
    ),
    Node::layout(SyntaxKind::ReturnClause, BaseKind::Syntax, Some("return clause"), RETURN_CLAUSE),
    Node::layout(
        SyntaxKind::GenericParameterClause,
        BaseKind::Syntax,
        Some("generic parameter clause"),
        GENERIC_PARAMETER_CLAUSE,
    ),
    Node::collection(SyntaxKind::GenericParameterList, &[SyntaxKind::GenericParameter]),
    Node::layout(
        SyntaxKind::GenericParameter,
        BaseKind::Syntax,
        Some("generic parameter"),
        GENERIC_PARAMETER,
    )
    .with_traits(TraitSet::WITH_ATTRIBUTES.union(TraitSet::WITH_TRAILING_COMMA)),
    Node::layout(SyntaxKind::MissingType, BaseKind::Type, Some("type"), MISSING_TYPE)
        .documented("Stands in for a type the parser expected but did not find."),
];
