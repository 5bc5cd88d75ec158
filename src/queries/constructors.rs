use super::ReportLine;
use crate::core::{ClassDecl, CompilationUnit};

fn classes(units: &[CompilationUnit]) -> impl Iterator<Item = &ClassDecl> {
    units
        .iter()
        .flat_map(|unit| unit.types())
        .filter_map(|decl| decl.as_class())
}

/// Classes declaring at least `threshold` non-private constructors.
pub fn many_constructors(units: &[CompilationUnit], threshold: usize) -> Vec<ReportLine> {
    classes(units)
        .map(|class| {
            (
                class.members.qualified_name.as_str(),
                class.non_private_constructors().count(),
            )
        })
        .filter(|(_, count)| *count >= threshold)
        .map(|(name, count)| ReportLine::count(name, count))
        .collect()
}

/// Non-private constructors taking at least `threshold` parameters.
pub fn many_constructor_parameters(units: &[CompilationUnit], threshold: usize) -> Vec<ReportLine> {
    classes(units)
        .flat_map(|class| {
            class.non_private_constructors().filter_map(move |ctor| {
                let count = ctor.parameter_count();
                (count >= threshold).then(|| {
                    ReportLine::count(
                        format!("{}.{}", class.members.qualified_name, ctor.signature()),
                        count,
                    )
                })
            })
        })
        .collect()
}
