//! Stylesheet value terms
//!
//! A term is one parsed value in a declaration. Concrete value types (such
//! as [`PackedColor`]) implement [`Term`]; [`ValueTerm`] covers keywords and
//! anything else that only needs its source text.

use std::borrow::Cow;
use std::fmt;

use strum_macros::Display;

use crate::color::PackedColor;

/// What kind of value a term holds.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RuleValueType {
    /// [§ 7.3.1 Resetting a Property: the inherit keyword](https://www.w3.org/TR/css-cascade-4/#inherit)
    Inherit,
    /// A single value such as a color or length.
    PrimitiveValue,
    /// A space- or comma-separated list of values.
    ValueList,
    /// Anything not classified by the parser.
    #[default]
    Custom,
}

/// Base shared by every stylesheet value.
pub trait Term {
    /// The discriminant of this term.
    fn kind(&self) -> RuleValueType;

    /// How the term is written back into a stylesheet.
    fn text(&self) -> Cow<'_, str>;
}

/// "inherit" is the same term wherever it appears, so one static instance serves all.
static INHERIT: ValueTerm = ValueTerm {
    text: Cow::Borrowed("inherit"),
    kind: RuleValueType::Inherit,
};

/// A term that renders its stored text verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValueTerm {
    text: Cow<'static, str>,
    kind: RuleValueType,
}

impl ValueTerm {
    /// A `Custom` term with the given text.
    #[must_use]
    pub fn new(text: impl Into<Cow<'static, str>>) -> Self {
        Self {
            text: text.into(),
            kind: RuleValueType::Custom,
        }
    }

    /// [§ 7.3.1 Resetting a Property: the inherit keyword](https://www.w3.org/TR/css-cascade-4/#inherit)
    ///
    /// The shared `inherit` term. Every call returns the same instance.
    #[must_use]
    pub fn inherit() -> &'static Self {
        &INHERIT
    }

    /// Term for an identifier the parser found in value position.
    ///
    /// CSS keywords are ASCII case-insensitive, so `INHERIT` also yields the
    /// inherit term. Other identifiers become `Custom` terms.
    #[must_use]
    pub fn keyword(ident: &str) -> Self {
        if ident.eq_ignore_ascii_case("inherit") {
            INHERIT.clone()
        } else {
            Self::new(ident.to_owned())
        }
    }

    /// The stored text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The discriminant.
    #[must_use]
    pub const fn kind(&self) -> RuleValueType {
        self.kind
    }

    pub(crate) const fn set_kind(&mut self, kind: RuleValueType) {
        self.kind = kind;
    }
}

impl fmt::Display for ValueTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Term for ValueTerm {
    fn kind(&self) -> RuleValueType {
        self.kind
    }

    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.text)
    }
}

/// Freeze a color into a primitive term holding its term text.
impl From<PackedColor> for ValueTerm {
    fn from(color: PackedColor) -> Self {
        let mut term = Self::new(Term::text(&color).into_owned());
        term.set_kind(RuleValueType::PrimitiveValue);
        term
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_kind_overrides_custom() {
        let mut term = ValueTerm::new("1px solid");
        assert_eq!(term.kind(), RuleValueType::Custom);
        term.set_kind(RuleValueType::ValueList);
        assert_eq!(term.kind(), RuleValueType::ValueList);
        assert_eq!(term.text(), "1px solid");
    }
}
