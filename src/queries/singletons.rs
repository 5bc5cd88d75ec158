use super::ReportLine;
use crate::core::{ClassDecl, CompilationUnit, EnumDecl, TypeDecl};
use std::fmt;

const INSTANCE: &str = "INSTANCE";
const GET_INSTANCE: &str = "getInstance";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// `public static T INSTANCE`
    PublicField,
    /// `public static T getInstance()`
    StaticFactory,
    /// `enum T { INSTANCE }`
    SingletonEnum,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Classification::PublicField => "publicField",
            Classification::StaticFactory => "staticFactory",
            Classification::SingletonEnum => "singletonEnum",
        };
        f.write_str(label)
    }
}

/// Singleton implementations among all types. The threshold is accepted for a
/// uniform query signature and has no effect.
pub fn singletons(units: &[CompilationUnit], _threshold: usize) -> Vec<ReportLine> {
    units
        .iter()
        .flat_map(|unit| unit.types())
        .filter_map(|decl| {
            classify(decl).map(|label| ReportLine::label(decl.qualified_name(), label))
        })
        .collect()
}

/// At most one classification per type; checks run in order and the first hit wins.
pub fn classify(decl: &TypeDecl) -> Option<Classification> {
    match decl {
        TypeDecl::Class(class) => classify_class(class),
        TypeDecl::Enum(decl) => classify_enum(decl),
    }
}

fn classify_class(class: &ClassDecl) -> Option<Classification> {
    if class
        .static_field(INSTANCE)
        .is_some_and(|field| field.visibility.is_public_or_package())
    {
        return Some(Classification::PublicField);
    }

    let has_factory = class
        .static_methods(GET_INSTANCE)
        .any(|method| method.visibility.is_public_or_package());
    has_factory.then_some(Classification::StaticFactory)
}

fn classify_enum(decl: &EnumDecl) -> Option<Classification> {
    match decl.entries() {
        [only] if only == INSTANCE => Some(Classification::SingletonEnum),
        _ => None,
    }
}
