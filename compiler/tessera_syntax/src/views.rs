//! Typed wrappers over [`SyntaxNode`], one per layout kind.
//!
//! Each wrapper is a checked cast of a node of its kind with one accessor
//! per slot, in schema order. Mandatory slots return the child directly.
//! Optional slots return an `Option`.

use tessera_schema::SyntaxKind;

use crate::{SyntaxNode, SyntaxToken};

fn required<'a, T>(child: Option<&'a T>, kind: SyntaxKind, slot: &str) -> &'a T {
    match child {
        Some(child) => child,
        None => panic!("{kind} slot `{slot}` is mandatory but empty"),
    }
}

macro_rules! syntax_views {
    (@accessor $accessor:ident one token $slot:literal) => {
        pub fn $accessor(&self) -> &SyntaxToken {
            required(self.0.child_token($slot), Self::KIND, $slot)
        }
    };
    (@accessor $accessor:ident opt token $slot:literal) => {
        pub fn $accessor(&self) -> Option<&SyntaxToken> {
            self.0.child_token($slot)
        }
    };
    (@accessor $accessor:ident one node $slot:literal) => {
        pub fn $accessor(&self) -> &SyntaxNode {
            required(self.0.child_node($slot), Self::KIND, $slot)
        }
    };
    (@accessor $accessor:ident opt node $slot:literal) => {
        pub fn $accessor(&self) -> Option<&SyntaxNode> {
            self.0.child_node($slot)
        }
    };
    // Collection slots are always present once built.
    (@accessor $accessor:ident one list $slot:literal) => {
        pub fn $accessor(&self) -> &SyntaxNode {
            required(self.0.child_node($slot), Self::KIND, $slot)
        }
    };

    ($(
        $(#[$meta:meta])*
        $view:ident($kind:ident) {
            $($accessor:ident: $card:ident $shape:ident = $slot:literal,)*
        }
    )*) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Debug, PartialEq, Eq, Hash)]
            pub struct $view(SyntaxNode);

            impl $view {
                pub const KIND: SyntaxKind = SyntaxKind::$kind;

                /// Slot names in schema order.
                pub const SLOT_NAMES: &'static [&'static str] = &[$($slot),*];

                pub fn cast(node: SyntaxNode) -> Option<Self> {
                    (node.kind() == Self::KIND).then_some($view(node))
                }

                pub fn syntax(&self) -> &SyntaxNode {
                    &self.0
                }

                pub fn into_syntax(self) -> SyntaxNode {
                    self.0
                }

                $(syntax_views!(@accessor $accessor $card $shape $slot);)*
            }

            impl From<$view> for SyntaxNode {
                fn from(view: $view) -> SyntaxNode {
                    view.0
                }
            }
        )*

        #[cfg(test)]
        pub(crate) const ALL_VIEWS: &[(SyntaxKind, &[&str])] = &[
            $(($view::KIND, $view::SLOT_NAMES)),*
        ];
    };
}

syntax_views! {
    /// `[Element]`
    ArrayTypeSyntax(ArrayType) {
        left_square: one token = "leftSquare",
        element: one node = "element",
        right_square: one token = "rightSquare",
    }

    /// `inout @Sendable T`
    AttributedTypeSyntax(AttributedType) {
        specifier: opt token = "specifier",
        attributes: one list = "attributes",
        base_type: one node = "baseType",
    }

    ClassRestrictionTypeSyntax(ClassRestrictionType) {
        class_keyword: one token = "classKeyword",
    }

    CompositionTypeElementSyntax(CompositionTypeElement) {
        ty: one node = "type",
        ampersand: opt token = "ampersand",
    }

    /// `A & B`
    CompositionTypeSyntax(CompositionType) {
        elements: one list = "elements",
    }

    /// `some P`, `any P`
    SomeOrAnyTypeSyntax(SomeOrAnyType) {
        some_or_any_specifier: one token = "someOrAnySpecifier",
        constraint: one node = "constraint",
    }

    /// `[Key: Value]`
    DictionaryTypeSyntax(DictionaryType) {
        left_square: one token = "leftSquare",
        key: one node = "key",
        colon: one token = "colon",
        value: one node = "value",
        right_square: one token = "rightSquare",
    }

    /// `(A, B) async throws -> C`
    FunctionTypeSyntax(FunctionType) {
        left_paren: one token = "leftParen",
        parameters: one list = "parameters",
        right_paren: one token = "rightParen",
        effect_specifiers: opt node = "effectSpecifiers",
        return_clause: one node = "returnClause",
    }

    GenericArgumentClauseSyntax(GenericArgumentClause) {
        left_angle: one token = "leftAngle",
        arguments: one list = "arguments",
        right_angle: one token = "rightAngle",
    }

    GenericArgumentSyntax(GenericArgument) {
        argument: one node = "argument",
        trailing_comma: opt token = "trailingComma",
    }

    ImplicitlyUnwrappedOptionalTypeSyntax(ImplicitlyUnwrappedOptionalType) {
        wrapped_type: one node = "wrappedType",
        exclamation_mark: one token = "exclamationMark",
    }

    /// `Base.Name<Args>`
    MemberTypeSyntax(MemberType) {
        base_type: one node = "baseType",
        period: one token = "period",
        name: one token = "name",
        generic_argument_clause: opt node = "genericArgumentClause",
    }

    /// `T.Type`, `P.Protocol`
    MetatypeTypeSyntax(MetatypeType) {
        base_type: one node = "baseType",
        period: one token = "period",
        metatype_specifier: one token = "metatypeSpecifier",
    }

    NamedOpaqueReturnTypeSyntax(NamedOpaqueReturnType) {
        generic_parameter_clause: one node = "genericParameterClause",
        ty: one node = "type",
    }

    OptionalTypeSyntax(OptionalType) {
        wrapped_type: one node = "wrappedType",
        question_mark: one token = "questionMark",
    }

    /// `~Copyable`
    SuppressedTypeSyntax(SuppressedType) {
        without_tilde: one token = "withoutTilde",
        ty: one node = "type",
    }

    PackExpansionTypeSyntax(PackExpansionType) {
        repeat_keyword: one token = "repeatKeyword",
        repetition_pattern: one node = "repetitionPattern",
    }

    PackElementTypeSyntax(PackElementType) {
        each_keyword: one token = "eachKeyword",
        pack: one node = "pack",
    }

    IdentifierTypeSyntax(IdentifierType) {
        name: one token = "name",
        generic_argument_clause: opt node = "genericArgumentClause",
    }

    TupleTypeElementSyntax(TupleTypeElement) {
        inout_keyword: opt token = "inoutKeyword",
        first_name: opt token = "firstName",
        second_name: opt token = "secondName",
        colon: opt token = "colon",
        ty: one node = "type",
        ellipsis: opt token = "ellipsis",
        trailing_comma: opt token = "trailingComma",
    }

    TupleTypeSyntax(TupleType) {
        left_paren: one token = "leftParen",
        elements: one list = "elements",
        right_paren: one token = "rightParen",
    }

    AttributeSyntax(Attribute) {
        at_sign: one token = "atSign",
        attribute_name: one node = "attributeName",
        left_paren: opt token = "leftParen",
        argument: opt token = "argument",
        right_paren: opt token = "rightParen",
    }

    TypeEffectSpecifiersSyntax(TypeEffectSpecifiers) {
        async_specifier: opt token = "asyncSpecifier",
        throws_specifier: opt token = "throwsSpecifier",
    }

    ReturnClauseSyntax(ReturnClause) {
        arrow: one token = "arrow",
        ty: one node = "type",
    }

    GenericParameterClauseSyntax(GenericParameterClause) {
        left_angle: one token = "leftAngle",
        parameters: one list = "parameters",
        right_angle: one token = "rightAngle",
    }

    GenericParameterSyntax(GenericParameter) {
        attributes: one list = "attributes",
        each_keyword: opt token = "eachKeyword",
        name: one token = "name",
        colon: opt token = "colon",
        inherited_type: opt node = "inheritedType",
        trailing_comma: opt token = "trailingComma",
    }

    MissingTypeSyntax(MissingType) {
        placeholder: one token = "placeholder",
    }
}

#[cfg(test)]
mod tests;
