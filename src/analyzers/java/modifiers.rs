use crate::core::Visibility;
use tree_sitter::Node;

/// Kind of body a member is declared in; drives Java's implicit modifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemberContext {
    Class,
    Interface,
    Enum,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub visibility: Option<Visibility>,
    pub is_static: bool,
}

impl Modifiers {
    /// Reads the `modifiers` child of a declaration, if any.
    pub fn of(decl: Node) -> Self {
        let mut modifiers = Self::default();
        let mut cursor = decl.walk();
        let Some(node) = decl
            .named_children(&mut cursor)
            .find(|child| child.kind() == "modifiers")
        else {
            return modifiers;
        };

        let mut cursor = node.walk();
        for keyword in node.children(&mut cursor) {
            match keyword.kind() {
                "public" => modifiers.visibility = Some(Visibility::Public),
                "protected" => modifiers.visibility = Some(Visibility::Protected),
                "private" => modifiers.visibility = Some(Visibility::Private),
                "static" => modifiers.is_static = true,
                _ => {}
            }
        }
        modifiers
    }

    pub fn member_visibility(&self, context: MemberContext) -> Visibility {
        self.visibility.unwrap_or(match context {
            MemberContext::Interface => Visibility::Public,
            MemberContext::Class | MemberContext::Enum => Visibility::Package,
        })
    }

    /// Enum constructors are private whatever they declare.
    pub fn constructor_visibility(&self, context: MemberContext) -> Visibility {
        match context {
            MemberContext::Enum => Visibility::Private,
            _ => self.member_visibility(context),
        }
    }

    /// Interface fields are constants, hence static.
    pub fn field_is_static(&self, context: MemberContext) -> bool {
        self.is_static || context == MemberContext::Interface
    }
}
