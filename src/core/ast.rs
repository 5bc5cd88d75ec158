//! Declaration model extracted from Java compilation units.
//!
//! A [`CompilationUnit`] owns every [`TypeDecl`] of one source file, member
//! types included, in pre-order.
//! Class-or-interface and enum declarations are distinct variants, each with
//! its own capabilities, so queries match on the variant instead of probing
//! node kinds at runtime.

use std::fmt;
use std::path::{Path, PathBuf};

/// Parsed form of one source file. Immutable once produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompilationUnit {
    pub path: PathBuf,
    pub package: Option<String>,
    pub types: Vec<TypeDecl>,
}

impl CompilationUnit {
    pub fn new(path: impl Into<PathBuf>, package: Option<String>, types: Vec<TypeDecl>) -> Self {
        Self {
            path: path.into(),
            package,
            types,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn types(&self) -> &[TypeDecl] {
        &self.types
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Class,
    Enum,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeKind::Class => write!(f, "class"),
            TypeKind::Enum => write!(f, "enum"),
        }
    }
}

/// A class-or-interface or an enum declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeDecl {
    Class(ClassDecl),
    Enum(EnumDecl),
}

impl TypeDecl {
    pub fn kind(&self) -> TypeKind {
        match self {
            TypeDecl::Class(_) => TypeKind::Class,
            TypeDecl::Enum(_) => TypeKind::Enum,
        }
    }

    pub fn name(&self) -> &str {
        &self.members().name
    }

    pub fn qualified_name(&self) -> &str {
        &self.members().qualified_name
    }

    pub fn constructors(&self) -> &[Constructor] {
        &self.members().constructors
    }

    pub fn fields(&self) -> &[Field] {
        &self.members().fields
    }

    pub fn methods(&self) -> &[Method] {
        &self.members().methods
    }

    pub fn as_class(&self) -> Option<&ClassDecl> {
        match self {
            TypeDecl::Class(class) => Some(class),
            TypeDecl::Enum(_) => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumDecl> {
        match self {
            TypeDecl::Enum(decl) => Some(decl),
            TypeDecl::Class(_) => None,
        }
    }

    fn members(&self) -> &Members {
        match self {
            TypeDecl::Class(class) => &class.members,
            TypeDecl::Enum(decl) => &decl.members,
        }
    }
}

/// Name and member lists shared by both declaration variants.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Members {
    pub name: String,
    pub qualified_name: String,
    pub constructors: Vec<Constructor>,
    pub fields: Vec<Field>,
    pub methods: Vec<Method>,
}

impl Members {
    /// Builds an empty member set, qualifying `name` with `package` when present.
    pub fn named(name: impl Into<String>, package: Option<&str>) -> Self {
        let name = name.into();
        let qualified_name = match package {
            Some(package) if !package.is_empty() => format!("{package}.{name}"),
            _ => name.clone(),
        };
        Self {
            name,
            qualified_name,
            ..Self::default()
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClassFlavor {
    #[default]
    Class,
    Interface,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassDecl {
    pub flavor: ClassFlavor,
    pub members: Members,
}

impl ClassDecl {
    pub fn is_interface(&self) -> bool {
        self.flavor == ClassFlavor::Interface
    }

    /// Constructors callable from outside the class body.
    pub fn non_private_constructors(&self) -> impl Iterator<Item = &Constructor> {
        self.members
            .constructors
            .iter()
            .filter(|ctor| !ctor.visibility.is_private())
    }

    pub fn static_field(&self, name: &str) -> Option<&Field> {
        self.members
            .fields
            .iter()
            .find(|field| field.is_static && field.name == name)
    }

    /// Static methods named `name`; overloads may yield several.
    pub fn static_methods<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Method> {
        self.members
            .methods
            .iter()
            .filter(move |method| method.is_static && method.name == name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumDecl {
    pub entries: Vec<String>,
    pub members: Members,
}

impl EnumDecl {
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Protected,
    #[default]
    Package,
    Private,
}

impl Visibility {
    pub fn is_private(self) -> bool {
        self == Visibility::Private
    }

    /// `public` or no access modifier at all.
    pub fn is_public_or_package(self) -> bool {
        matches!(self, Visibility::Public | Visibility::Package)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parameter {
    pub type_name: String,
    pub name: String,
    pub varargs: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Constructor {
    pub visibility: Visibility,
    pub name: String,
    pub parameters: Vec<Parameter>,
}

impl Constructor {
    pub fn parameter_count(&self) -> usize {
        self.parameters.len()
    }

    /// `Name(T1, T2)`, with a trailing varargs parameter written `T...`.
    pub fn signature(&self) -> String {
        let params = self
            .parameters
            .iter()
            .map(|p| {
                if p.varargs {
                    format!("{}...", p.type_name)
                } else {
                    p.type_name.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}({})", self.name, params)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub visibility: Visibility,
    pub is_static: bool,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Method {
    pub visibility: Visibility,
    pub is_static: bool,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(type_name: &str, varargs: bool) -> Parameter {
        Parameter {
            type_name: type_name.to_string(),
            name: "p".to_string(),
            varargs,
        }
    }

    #[test]
    fn test_qualified_name_uses_package() {
        assert_eq!(Members::named("Foo", Some("com.acme")).qualified_name, "com.acme.Foo");
        assert_eq!(Members::named("Foo", None).qualified_name, "Foo");
    }

    #[test]
    fn test_signature_renders_varargs() {
        let ctor = Constructor {
            visibility: Visibility::Public,
            name: "Foo".to_string(),
            parameters: vec![param("int", false), param("String", true)],
        };
        assert_eq!(ctor.signature(), "Foo(int, String...)");
        assert_eq!(ctor.parameter_count(), 2);
    }

    #[test]
    fn test_signature_without_parameters() {
        let ctor = Constructor {
            visibility: Visibility::Private,
            name: "Foo".to_string(),
            parameters: vec![],
        };
        assert_eq!(ctor.signature(), "Foo()");
    }

    #[test]
    fn test_capability_accessors_follow_variant() {
        let decl = TypeDecl::Enum(EnumDecl {
            entries: vec!["INSTANCE".to_string()],
            members: Members::named("Solo", None),
        });
        assert_eq!(decl.kind(), TypeKind::Enum);
        assert!(decl.as_class().is_none());
        assert_eq!(decl.as_enum().map(|e| e.entries().len()), Some(1));
    }

    #[test]
    fn test_visibility_predicates() {
        assert!(Visibility::Public.is_public_or_package());
        assert!(Visibility::Package.is_public_or_package());
        assert!(!Visibility::Protected.is_public_or_package());
        assert!(Visibility::Private.is_private());
    }
}
