use super::classify::NodeClass;
use super::record::DeclKind;
use crate::frontend::{Clang, DeclData, Node};

/// Fallback where Clang could not attach a usable type.
const INVALID_TYPE: &str = "<invalid-type>";
/// Placeholder name for anonymous records and enums.
const ANONYMOUS: &str = "<anonymous>";

/// Render the canonical one-line signature for a classified node.
///
/// Pure: the same node always renders to byte-identical text. Type text is
/// Clang's pretty-printed declared type, taken verbatim from the dump and
/// never desugared or resolved locally.
pub fn render_signature(
    class: &NodeClass<'_>,
    node: &Node,
) -> String {
    match class {
        NodeClass::Decl { kind, data } => match kind {
            DeclKind::Function => function_signature(data, node),
            DeclKind::Variable | DeclKind::Field => {
                format!("{} {};", declared_type(data), data.name().unwrap_or_default())
            }
            DeclKind::Typedef => {
                format!(
                    "typedef {} {};",
                    declared_type(data),
                    data.name().unwrap_or_default()
                )
            }
            DeclKind::Record => {
                format!("{} {};", record_keyword(data), named_or_anonymous(data))
            }
            DeclKind::Enum => format!("enum {};", named_or_anonymous(data)),
            DeclKind::EnumConstant => enum_constant_signature(data, node),
            DeclKind::Other => unreachable!("generic declarations classify as NodeClass::Other"),
        },
        NodeClass::Other { kind_name, name, .. } => format!("{kind_name}: {name}"),
    }
}

/// `<return-type> <name>(<params>);` with parameters gathered from the
/// node's own parameter children. An empty list renders as the literal
/// parameter `void`.
fn function_signature(
    data: &DeclData,
    node: &Node,
) -> String {
    let name = data.name().unwrap_or_default();
    let ret = data.qual_type().map(return_type).unwrap_or(INVALID_TYPE);

    let mut params: Vec<String> = Vec::new();
    for child in &node.inner {
        if let Clang::ParmVarDecl(param) = &child.kind {
            let ty = param.qual_type().unwrap_or(INVALID_TYPE);
            match param.name() {
                Some(n) if !n.is_empty() => params.push(format!("{ty} {n}")),
                _ => params.push(ty.to_string()),
            }
        }
    }

    let params = if params.is_empty() {
        "void".to_string()
    } else {
        params.join(", ")
    };
    format!("{ret} {name}({params});")
}

/// Bare enumerator name, with a fixed `= <value>` marker when an
/// initializer expression hangs off the node. The initializer is never
/// evaluated; only its presence is reported.
fn enum_constant_signature(
    data: &DeclData,
    node: &Node,
) -> String {
    let name = data.name().unwrap_or_default();
    if node.inner.is_empty() {
        name.to_string()
    } else {
        format!("{name} = <value>")
    }
}

/// The declared-function type reads `"<ret> (<params>)"`; everything before
/// the parameter list is the return type.
fn return_type(qual_type: &str) -> &str {
    qual_type
        .split_once('(')
        .map(|(head, _)| head.trim_end())
        .unwrap_or(qual_type)
}

fn declared_type(data: &DeclData) -> &str {
    data.qual_type().unwrap_or(INVALID_TYPE)
}

fn named_or_anonymous(data: &DeclData) -> &str {
    data.name().filter(|n| !n.is_empty()).unwrap_or(ANONYMOUS)
}

fn record_keyword(data: &DeclData) -> &str {
    match data.tag() {
        Some("struct") => "struct",
        Some("union") => "union",
        _ => "class",
    }
}

#[cfg(test)]
#[path = "../../tests/src/extract/signature_tests.rs"]
mod tests;
