pub mod ast;

pub use ast::{
    ClassDecl, ClassFlavor, CompilationUnit, Constructor, EnumDecl, Field, Members, Method,
    Parameter, TypeDecl, TypeKind, Visibility,
};
