use clang_ast::SourceLocation;

use super::record::DeclKind;
use crate::frontend::{Clang, DeclData};

/// Classification of one semantic-tree node.
pub enum NodeClass<'a> {
    /// A declaration in the closed dispatch set.
    Decl { kind: DeclKind, data: &'a DeclData },
    /// A named declaration kind outside the closed set, carrying its raw
    /// structural category name.
    Other {
        kind_name: String,
        name: &'a str,
        loc: Option<&'a SourceLocation>,
        implicit: bool,
    },
}

/// Closed dispatch from node shape to a kind tag.
///
/// Returns `None` for nodes that are not declarations at all (statements,
/// expressions, types) and for unnamed foreign declaration kinds; the
/// walker still descends into their children either way.
pub fn classify(node_kind: &Clang) -> Option<NodeClass<'_>> {
    use DeclKind::*;

    let (kind, data) = match node_kind {
        Clang::FunctionDecl(d)
        | Clang::CXXMethodDecl(d)
        | Clang::CXXConstructorDecl(d)
        | Clang::CXXDestructorDecl(d)
        | Clang::CXXConversionDecl(d) => (Function, d),
        Clang::VarDecl(d) | Clang::ParmVarDecl(d) => (Variable, d),
        Clang::TypedefDecl(d) | Clang::TypeAliasDecl(d) => (Typedef, d),
        Clang::RecordDecl(d) | Clang::CXXRecordDecl(d) => (Record, d),
        Clang::EnumDecl(d) => (Enum, d),
        Clang::FieldDecl(d) => (Field, d),
        Clang::EnumConstantDecl(d) => (EnumConstant, d),
        Clang::Other {
            kind,
            name,
            loc,
            is_implicit,
            ..
        } => {
            let kind_name = format!("{kind:?}");
            if !kind_name.ends_with("Decl") {
                return None;
            }
            let name = name.as_deref().filter(|n| !n.is_empty())?;
            return Some(NodeClass::Other {
                kind_name,
                name,
                loc: loc.as_ref(),
                implicit: is_implicit.unwrap_or(false),
            });
        }
    };
    Some(NodeClass::Decl { kind, data })
}
