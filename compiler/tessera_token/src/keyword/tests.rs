use super::*;

// === Table shape ===

#[test]
fn discriminants_are_dense() {
    for (index, keyword) in Keyword::ALL.iter().enumerate() {
        assert_eq!(*keyword as usize, index, "{keyword:?} is out of place in ALL");
    }
    assert_eq!(Keyword::COUNT, 86);
}

#[test]
fn lookup_table_is_collision_free() {
    assert_eq!(Keyword::lookup_table_len(), Keyword::COUNT);
}

#[test]
fn lookup_is_total_over_keywords() {
    for keyword in Keyword::ALL {
        assert_eq!(Keyword::from_text(keyword.text()), Some(*keyword));
    }
}

#[test]
fn keyword_is_one_byte() {
    assert_eq!(std::mem::size_of::<Keyword>(), 1);
}

// === Lexer-classified keywords ===

#[test]
fn declaration_keywords() {
    assert_eq!(Keyword::from_text("func"), Some(Keyword::Func));
    assert_eq!(Keyword::from_text("class"), Some(Keyword::Class));
    assert_eq!(Keyword::from_text("struct"), Some(Keyword::Struct));
    assert_eq!(Keyword::from_text("enum"), Some(Keyword::Enum));
    assert_eq!(Keyword::from_text("protocol"), Some(Keyword::ProtocolLower));
    assert_eq!(Keyword::from_text("extension"), Some(Keyword::Extension));
    assert_eq!(Keyword::from_text("typealias"), Some(Keyword::Typealias));
    assert_eq!(
        Keyword::from_text("associatedtype"),
        Some(Keyword::Associatedtype)
    );
    assert_eq!(
        Keyword::from_text("precedencegroup"),
        Some(Keyword::Precedencegroup)
    );
}

#[test]
fn control_flow_keywords() {
    assert_eq!(Keyword::from_text("if"), Some(Keyword::If));
    assert_eq!(Keyword::from_text("guard"), Some(Keyword::Guard));
    assert_eq!(Keyword::from_text("switch"), Some(Keyword::Switch));
    assert_eq!(Keyword::from_text("while"), Some(Keyword::While));
    assert_eq!(Keyword::from_text("repeat"), Some(Keyword::Repeat));
    assert_eq!(Keyword::from_text("fallthrough"), Some(Keyword::Fallthrough));
    assert_eq!(Keyword::from_text("return"), Some(Keyword::Return));
}

#[test]
fn lexer_classified_flags() {
    assert!(Keyword::Func.is_lexer_classified());
    assert!(Keyword::Inout.is_lexer_classified());
    assert!(Keyword::SelfLower.is_lexer_classified());
    assert!(Keyword::SelfUpper.is_lexer_classified());
    assert!(Keyword::AnyUpper.is_lexer_classified());
    assert!(Keyword::Throws.is_lexer_classified());
}

// === Contextual keywords ===

#[test]
fn contextual_keywords_are_not_reserved() {
    for keyword in [
        Keyword::Some,
        Keyword::AnyLower,
        Keyword::Async,
        Keyword::Each,
        Keyword::Isolated,
        Keyword::Borrowing,
        Keyword::Consuming,
        Keyword::Type,
        Keyword::ProtocolUpper,
        Keyword::DunderShared,
        Keyword::UnderscoreConst,
    ] {
        assert!(!keyword.is_lexer_classified(), "{keyword:?}");
        assert_eq!(Keyword::from_text(keyword.text()), Some(keyword));
    }
}

#[test]
fn underscore_spellings() {
    assert_eq!(Keyword::from_text("__owned"), Some(Keyword::DunderOwned));
    assert_eq!(Keyword::from_text("__shared"), Some(Keyword::DunderShared));
    assert_eq!(Keyword::from_text("_const"), Some(Keyword::UnderscoreConst));
    assert_eq!(
        Keyword::from_text("_resultDependsOn"),
        Some(Keyword::UnderscoreResultDependsOn)
    );
}

// === Case sensitivity and rejection ===

#[test]
fn case_sensitivity() {
    assert_eq!(Keyword::from_text("Self"), Some(Keyword::SelfUpper));
    assert_eq!(Keyword::from_text("self"), Some(Keyword::SelfLower));
    assert_eq!(Keyword::from_text("Any"), Some(Keyword::AnyUpper));
    assert_eq!(Keyword::from_text("any"), Some(Keyword::AnyLower));
    assert_eq!(Keyword::from_text("Protocol"), Some(Keyword::ProtocolUpper));
    assert_eq!(Keyword::from_text("protocol"), Some(Keyword::ProtocolLower));
    assert_eq!(Keyword::from_text("Type"), Some(Keyword::Type));
    assert_eq!(Keyword::from_text("type"), None);
    assert_eq!(Keyword::from_text("Func"), None);
    assert_eq!(Keyword::from_text("IF"), None);
}

#[test]
fn non_keywords_return_none() {
    assert_eq!(Keyword::from_text("foo"), None);
    assert_eq!(Keyword::from_text("counter"), None);
    assert_eq!(Keyword::from_text("my_var"), None);
    assert_eq!(Keyword::from_text("`class`"), None);
}

#[test]
fn length_bounds_rejection() {
    assert_eq!(Keyword::from_text(""), None);
    assert_eq!(Keyword::from_text("a"), None);
    assert_eq!(Keyword::from_text("_"), None);
    assert_eq!(Keyword::from_text("_resultDependsOnX"), None);
    assert_eq!(Keyword::from_text("precedencegroups"), None);
}

#[test]
fn concurrent_lookup_agrees() {
    let results: Vec<Vec<Option<Keyword>>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    Keyword::ALL
                        .iter()
                        .map(|k| Keyword::from_text(k.text()))
                        .collect()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_default())
            .collect()
    });
    for per_thread in &results {
        assert_eq!(per_thread.len(), Keyword::COUNT);
        assert!(per_thread.iter().all(Option::is_some));
    }
}
