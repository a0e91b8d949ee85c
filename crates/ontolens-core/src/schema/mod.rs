//! Function schema input and identifier parsing.
//!
//! Schemas arrive as loosely-typed JSON and are parsed once, at the boundary,
//! into a [`FunctionSchema`] record. Lenses only ever see that record.

mod name;
mod parser;

pub use name::{
    action_type_for, purpose_for, tokenize, verb_and_noun, ParsedName, DEFAULT_ACTION_TYPE,
    DEFAULT_PURPOSE,
};
pub use parser::{FunctionSchema, Parameter, ParameterSpec, ParametersSpec, UNKNOWN_TYPE};
