//! Legacy attribute shorthand.
//!
//! Older attribute files spell some settings with macro-like shorthand: the
//! `binary` attribute implies `-diff`, and the deprecated `crlf` attribute maps
//! onto `text` and `eol`. Parsing expands these into explicit entries, and
//! serialization consults the same table to suppress the derived pair again.

use crate::{AttrValue, Attributes};

/// Condition a freshly set attribute value must satisfy to trigger a derivation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Trigger {
    /// Any truthy value.
    Truthy,
    /// Exactly `Bool(value)`.
    Bool(bool),
    /// Exactly `Text(value)`.
    Text(&'static str),
}

impl Trigger {
    fn accepts(self, value: &AttrValue) -> bool {
        match (self, value) {
            (Self::Truthy, value) => value.is_truthy(),
            (Self::Bool(expected), AttrValue::Bool(actual)) => expected == *actual,
            (Self::Text(expected), AttrValue::Text(actual)) => expected == actual,
            _ => false,
        }
    }
}

/// Value written by a derivation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Derived {
    Bool(bool),
    Text(&'static str),
}

impl Derived {
    fn to_value(self) -> AttrValue {
        match self {
            Self::Bool(value) => AttrValue::Bool(value),
            Self::Text(text) => AttrValue::Text(text.to_owned()),
        }
    }

    fn is(self, value: &AttrValue) -> bool {
        match (self, value) {
            (Self::Bool(expected), AttrValue::Bool(actual)) => expected == *actual,
            (Self::Text(expected), AttrValue::Text(actual)) => expected == actual,
            _ => false,
        }
    }
}

/// One `(trigger key, trigger value) -> (derived key, derived value)` entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Derivation {
    pub(crate) trigger_key: &'static str,
    pub(crate) trigger: Trigger,
    pub(crate) derived_key: &'static str,
    pub(crate) derived: Derived,
}

/// Derivations in application order.
pub(crate) const DERIVATIONS: &[Derivation] = &[
    Derivation {
        trigger_key: "binary",
        trigger: Trigger::Truthy,
        derived_key: "diff",
        derived: Derived::Bool(false),
    },
    Derivation {
        trigger_key: "crlf",
        trigger: Trigger::Bool(true),
        derived_key: "text",
        derived: Derived::Bool(true),
    },
    Derivation {
        trigger_key: "crlf",
        trigger: Trigger::Bool(false),
        derived_key: "text",
        derived: Derived::Bool(false),
    },
    Derivation {
        trigger_key: "crlf",
        trigger: Trigger::Text("input"),
        derived_key: "eol",
        derived: Derived::Text("lf"),
    },
];

/// Applies every derivation triggered by `key` having just been set to `value`.
pub(crate) fn apply_derivations(attrs: &mut Attributes, key: &str, value: &AttrValue) {
    for derivation in DERIVATIONS {
        if derivation.trigger_key == key && derivation.trigger.accepts(value) {
            attrs.set(derivation.derived_key, derivation.derived.to_value());
        }
    }
}

/// Returns the derivation that currently produces `key` in `attrs`, if the
/// trigger of one is present with a triggering value.
pub(crate) fn active_derivation(attrs: &Attributes, key: &str) -> Option<&'static Derivation> {
    DERIVATIONS.iter().find(|derivation| {
        derivation.derived_key == key
            && attrs
                .get(derivation.trigger_key)
                .is_some_and(|trigger| derivation.trigger.accepts(trigger))
    })
}

/// Returns `true` when `(key, value)` is implied by another entry of `attrs`
/// and can be left out of a serialized rule line.
pub(crate) fn is_implied(attrs: &Attributes, key: &str, value: &AttrValue) -> bool {
    active_derivation(attrs, key).is_some_and(|derivation| derivation.derived.is(value))
}
