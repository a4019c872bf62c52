//! Template instantiation event categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Category of a template instantiation event.
///
/// The variant names double as the wire tokens: Templight writes them into
/// `<Kind>` and the JSON displayer writes them into the `kind` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InstantiationKind {
    TemplateInstantiation,
    DefaultTemplateArgumentInstantiation,
    DefaultFunctionArgumentInstantiation,
    ExplicitTemplateArgumentSubstitution,
    DeducedTemplateArgumentSubstitution,
    PriorTemplateArgumentSubstitution,
    DefaultTemplateArgumentChecking,
    ExceptionSpecInstantiation,
    Memoization,
    /// Sentinel for entities that are not template instantiations.
    /// Never produced by a trace.
    NonTemplateType,
}

impl InstantiationKind {
    pub const ALL: [Self; 10] = [
        Self::TemplateInstantiation,
        Self::DefaultTemplateArgumentInstantiation,
        Self::DefaultFunctionArgumentInstantiation,
        Self::ExplicitTemplateArgumentSubstitution,
        Self::DeducedTemplateArgumentSubstitution,
        Self::PriorTemplateArgumentSubstitution,
        Self::DefaultTemplateArgumentChecking,
        Self::ExceptionSpecInstantiation,
        Self::Memoization,
        Self::NonTemplateType,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::TemplateInstantiation => "TemplateInstantiation",
            Self::DefaultTemplateArgumentInstantiation => "DefaultTemplateArgumentInstantiation",
            Self::DefaultFunctionArgumentInstantiation => "DefaultFunctionArgumentInstantiation",
            Self::ExplicitTemplateArgumentSubstitution => "ExplicitTemplateArgumentSubstitution",
            Self::DeducedTemplateArgumentSubstitution => "DeducedTemplateArgumentSubstitution",
            Self::PriorTemplateArgumentSubstitution => "PriorTemplateArgumentSubstitution",
            Self::DefaultTemplateArgumentChecking => "DefaultTemplateArgumentChecking",
            Self::ExceptionSpecInstantiation => "ExceptionSpecInstantiation",
            Self::Memoization => "Memoization",
            Self::NonTemplateType => "NonTemplateType",
        }
    }

    /// Decode a `<Kind>` token of a Templight trace.
    ///
    /// Unlike [`FromStr`], rejects `NonTemplateType`: it is not a trace event.
    pub fn from_templight(token: &str) -> Result<Self, ParseError> {
        match token.parse()? {
            Self::NonTemplateType => Err(ParseError::UnknownInstantiationKind(token.to_owned())),
            kind => Ok(kind),
        }
    }
}

impl FromStr for InstantiationKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ParseError::UnknownInstantiationKind(s.to_owned()))
    }
}

impl fmt::Display for InstantiationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
