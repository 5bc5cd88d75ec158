use super::modifiers::{MemberContext, Modifiers};
use crate::core::{
    ClassDecl, ClassFlavor, Constructor, EnumDecl, Field, Members, Method, Parameter, TypeDecl,
};
use tree_sitter::Node;

pub fn extract_package(root: Node, source: &str) -> Option<String> {
    let mut cursor = root.walk();
    let package = root
        .named_children(&mut cursor)
        .find(|child| child.kind() == "package_declaration")?;

    let mut cursor = package.walk();
    let name = package
        .named_children(&mut cursor)
        .find(|child| matches!(child.kind(), "scoped_identifier" | "identifier"))?;
    Some(normalized_text(name, source))
}

/// Class, interface and enum declarations in pre-order: each type is followed
/// by its member types, qualified as `pkg.Outer.Inner`.
pub fn extract_types(root: Node, source: &str, package: Option<&str>) -> Vec<TypeDecl> {
    let mut types = Vec::new();
    let mut cursor = root.walk();
    for child in root.named_children(&mut cursor) {
        extract_type(child, source, package, &mut types);
    }
    types
}

fn extract_type(node: Node, source: &str, qualifier: Option<&str>, types: &mut Vec<TypeDecl>) {
    let (flavor, context) = match node.kind() {
        "class_declaration" => (Some(ClassFlavor::Class), MemberContext::Class),
        "interface_declaration" => (Some(ClassFlavor::Interface), MemberContext::Interface),
        "enum_declaration" => (None, MemberContext::Enum),
        _ => return,
    };
    let Some(members) = declared_name(node, source).map(|name| Members::named(name, qualifier))
    else {
        return;
    };
    let outer = members.qualified_name.clone();

    let mut body = Body {
        members,
        entries: Vec::new(),
        nested: Vec::new(),
    };
    if let Some(node) = node.child_by_field_name("body") {
        match flavor {
            Some(_) => collect_members(node, source, context, &mut body),
            None => collect_enum_body(node, source, &mut body),
        }
    }

    types.push(match flavor {
        Some(flavor) => TypeDecl::Class(ClassDecl {
            flavor,
            members: body.members,
        }),
        None => TypeDecl::Enum(EnumDecl {
            entries: body.entries,
            members: body.members,
        }),
    });

    for nested in body.nested {
        extract_type(nested, source, Some(&outer), types);
    }
}

/// Members of one declaration body, plus member type nodes still to be visited.
struct Body<'tree> {
    members: Members,
    entries: Vec<String>,
    nested: Vec<Node<'tree>>,
}

fn collect_enum_body<'tree>(node: Node<'tree>, source: &str, body: &mut Body<'tree>) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "enum_constant" => {
                if let Some(name) = declared_name(child, source) {
                    body.entries.push(name);
                }
            }
            "enum_body_declarations" => {
                collect_members(child, source, MemberContext::Enum, body);
            }
            _ => {}
        }
    }
}

fn collect_members<'tree>(
    node: Node<'tree>,
    source: &str,
    context: MemberContext,
    body: &mut Body<'tree>,
) {
    let members = &mut body.members;
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "constructor_declaration" => {
                if let Some(ctor) = extract_constructor(child, source, context) {
                    members.constructors.push(ctor);
                }
            }
            // interface fields parse as constant declarations
            "field_declaration" | "constant_declaration" => {
                members.fields.extend(extract_fields(child, source, context));
            }
            "method_declaration" => {
                if let Some(method) = extract_method(child, source, context) {
                    members.methods.push(method);
                }
            }
            "class_declaration" | "interface_declaration" | "enum_declaration" => {
                body.nested.push(child);
            }
            _ => {}
        }
    }
}

fn extract_constructor(node: Node, source: &str, context: MemberContext) -> Option<Constructor> {
    let modifiers = Modifiers::of(node);
    let parameters = node
        .child_by_field_name("parameters")
        .map(|params| extract_parameters(params, source))
        .unwrap_or_default();

    Some(Constructor {
        visibility: modifiers.constructor_visibility(context),
        name: declared_name(node, source)?,
        parameters,
    })
}

fn extract_parameters(params: Node, source: &str) -> Vec<Parameter> {
    let mut cursor = params.walk();
    params
        .named_children(&mut cursor)
        .filter_map(|param| match param.kind() {
            "formal_parameter" => formal_parameter(param, source),
            "spread_parameter" => spread_parameter(param, source),
            // `Foo this` receivers are not real parameters
            _ => None,
        })
        .collect()
}

fn formal_parameter(node: Node, source: &str) -> Option<Parameter> {
    let mut type_name = normalized_text(node.child_by_field_name("type")?, source);
    if let Some(dims) = node.child_by_field_name("dimensions") {
        type_name.push_str(&normalized_text(dims, source));
    }
    Some(Parameter {
        type_name,
        name: declared_name(node, source).unwrap_or_default(),
        varargs: false,
    })
}

fn spread_parameter(node: Node, source: &str) -> Option<Parameter> {
    let mut cursor = node.walk();
    let children: Vec<Node> = node.named_children(&mut cursor).collect();

    let type_node = node.child_by_field_name("type").or_else(|| {
        children
            .iter()
            .copied()
            .find(|child| !matches!(child.kind(), "modifiers" | "variable_declarator"))
    })?;
    let name = children
        .iter()
        .find(|child| child.kind() == "variable_declarator")
        .and_then(|declarator| declared_name(*declarator, source))
        .or_else(|| declared_name(node, source))
        .unwrap_or_default();

    Some(Parameter {
        type_name: normalized_text(type_node, source),
        name,
        varargs: true,
    })
}

fn extract_fields(node: Node, source: &str, context: MemberContext) -> Vec<Field> {
    let modifiers = Modifiers::of(node);
    let visibility = modifiers.member_visibility(context);
    let is_static = modifiers.field_is_static(context);

    let mut cursor = node.walk();
    node.children_by_field_name("declarator", &mut cursor)
        .filter_map(|declarator| declared_name(declarator, source))
        .map(|name| Field {
            visibility,
            is_static,
            name,
        })
        .collect()
}

fn extract_method(node: Node, source: &str, context: MemberContext) -> Option<Method> {
    let modifiers = Modifiers::of(node);
    Some(Method {
        visibility: modifiers.member_visibility(context),
        is_static: modifiers.is_static,
        name: declared_name(node, source)?,
    })
}

fn declared_name(node: Node, source: &str) -> Option<String> {
    node.child_by_field_name("name")
        .and_then(|name| name.utf8_text(source.as_bytes()).ok())
        .map(str::to_string)
}

/// Node text with whitespace runs collapsed, so `Map<K,\n V>` reads `Map<K, V>`.
fn normalized_text(node: Node, source: &str) -> String {
    node.utf8_text(source.as_bytes())
        .map(|text| text.split_whitespace().collect::<Vec<_>>().join(" "))
        .unwrap_or_default()
}
