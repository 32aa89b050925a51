//! The compiled-schema intermediate representation.
//!
//! A compiled schema is a closed tagged union rather than a tree of trait objects: every
//! keyword family this crate supports gets one variant, and validation dispatches with a
//! plain `match` instead of a virtual call. This departs from a tree of boxed trait objects
//! in favour of a flat enum — closer in spirit to an experiment the same upstream project
//! tried elsewhere (a `Keyword` enum generated by a `keywords!` macro) than to its usual
//! `Box<dyn Validate>` shape.
//!
//! There is no separate arena or teardown visitor: every variant owns its children through
//! ordinary `Vec`/`Box` fields, so `Drop` walks and frees the whole tree when a [`Node`]
//! goes out of scope. Compilation failing partway through a schema object relies on exactly
//! the same mechanism — whatever was already pushed into a sibling `Vec` is dropped the
//! moment the surrounding function returns its `Err`.
//!
//! `Node` itself stays crate-private — it is built from, and holds, the per-keyword
//! validator structs in [`crate::keywords`], which are also crate-private implementation
//! detail. [`crate::CompiledSchema`] is the opaque public handle callers outside this crate
//! actually see.

use serde_json::Value;

use crate::error::ValidateError;
use crate::keywords::combinator::CombinatorValidator;
use crate::keywords::enum_const::EnumConstValidator;
use crate::keywords::min_max::MinMaxValidator;
use crate::keywords::minimum_maximum::MinimumMaximumValidator;
use crate::keywords::multiple_of::MultipleOfValidator;
use crate::keywords::not::NotValidator;
use crate::keywords::pattern::PatternValidator;
use crate::keywords::pattern_match::PatternMatchValidator;
use crate::keywords::types::TypesValidator;

/// A fully compiled schema node, ready to validate instances without re-examining any JSON.
#[derive(Debug)]
pub(crate) enum Node {
    /// A boolean schema: `true` accepts everything, `false` rejects everything.
    Bool(bool),
    /// An object schema with more than one recognized keyword group compiles to a
    /// conjunction of their validators — the instance must satisfy all of them.
    Conjunction(Vec<Node>),
    Types(TypesValidator),
    MinMax(MinMaxValidator),
    MinimumMaximum(MinimumMaximumValidator),
    MultipleOf(MultipleOfValidator),
    PatternMatch(PatternMatchValidator),
    Combinator(CombinatorValidator),
    Not(NotValidator),
    EnumConst(EnumConstValidator),
    Pattern(PatternValidator),
}

impl Node {
    /// Validate `instance` against this compiled schema node.
    pub(crate) fn validate(&self, instance: &Value) -> Result<bool, ValidateError> {
        match self {
            Node::Bool(accept) => Ok(*accept),
            Node::Conjunction(children) => {
                for child in children {
                    if !child.validate(instance)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Node::Types(v) => v.validate(instance),
            Node::MinMax(v) => v.validate(instance),
            Node::MinimumMaximum(v) => v.validate(instance),
            Node::MultipleOf(v) => v.validate(instance),
            Node::PatternMatch(v) => v.validate(instance),
            Node::Combinator(v) => v.validate(instance),
            Node::Not(v) => v.validate(instance),
            Node::EnumConst(v) => Ok(v.validate(instance)),
            Node::Pattern(v) => v.validate(instance),
        }
    }
}
