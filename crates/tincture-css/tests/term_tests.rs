//! Integration tests for value terms.

use std::thread;

use tincture_css::{RuleValueType, Term, ValueTerm};

#[test]
fn test_default_kind_is_custom() {
    assert_eq!(ValueTerm::default().kind(), RuleValueType::Custom);
    assert_eq!(ValueTerm::new("bold").kind(), RuleValueType::Custom);
}

#[test]
fn test_renders_text_verbatim() {
    let term = ValueTerm::new(String::from("Helvetica Neue"));
    assert_eq!(term.to_string(), "Helvetica Neue");
    assert_eq!(term.text(), "Helvetica Neue");
}

#[test]
fn test_inherit_singleton() {
    let inherit = ValueTerm::inherit();
    assert_eq!(inherit.to_string(), "inherit");
    assert_eq!(inherit.kind(), RuleValueType::Inherit);
    assert!(std::ptr::eq(inherit, ValueTerm::inherit()));
}

#[test]
fn test_inherit_shared_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|_| thread::spawn(|| std::ptr::from_ref(ValueTerm::inherit()) as usize))
        .collect();

    let expected = std::ptr::from_ref(ValueTerm::inherit()) as usize;
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_keyword_recognizes_inherit() {
    assert_eq!(&ValueTerm::keyword("inherit"), ValueTerm::inherit());
    assert_eq!(&ValueTerm::keyword("INHERIT"), ValueTerm::inherit());

    let other = ValueTerm::keyword("auto");
    assert_eq!(other.kind(), RuleValueType::Custom);
    assert_eq!(other.to_string(), "auto");
}

#[test]
fn test_terms_as_trait_objects() {
    let terms: Vec<Box<dyn Term>> = vec![
        Box::new(ValueTerm::new("none")),
        Box::new(ValueTerm::inherit().clone()),
    ];
    let kinds: Vec<_> = terms.iter().map(|t| t.kind()).collect();
    assert_eq!(kinds, [RuleValueType::Custom, RuleValueType::Inherit]);
    let texts: Vec<_> = terms.iter().map(|t| t.text().into_owned()).collect();
    assert_eq!(texts, ["none", "inherit"]);
}

#[test]
fn test_kind_names() {
    assert_eq!(RuleValueType::Inherit.to_string(), "Inherit");
    assert_eq!(RuleValueType::PrimitiveValue.to_string(), "PrimitiveValue");
}
