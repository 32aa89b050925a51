//! One module per keyword family. Each exposes a `compile` function returning its own
//! validator type and a `validate` method on that type; [`crate::compiler`] wires the
//! object's keywords to these and [`crate::ir::Node`] wraps the result.

pub(crate) mod combinator;
pub(crate) mod enum_const;
pub(crate) mod min_max;
pub(crate) mod minimum_maximum;
pub(crate) mod multiple_of;
pub(crate) mod not;
pub(crate) mod pattern;
pub(crate) mod pattern_match;
pub(crate) mod types;
