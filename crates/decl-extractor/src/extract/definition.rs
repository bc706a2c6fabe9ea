use clang_ast::Kind;

use crate::frontend::{Clang, Node};

/// Per-occurrence defining-instance predicate.
///
/// True only when *this* node carries the defining body or member list, not
/// when a definition merely exists elsewhere in the tree. Kinds without a
/// declaration/definition split are always plain declarations.
pub fn is_defining_occurrence(node: &Node) -> bool {
    match &node.kind {
        Clang::FunctionDecl(_)
        | Clang::CXXMethodDecl(_)
        | Clang::CXXConstructorDecl(_)
        | Clang::CXXDestructorDecl(_)
        | Clang::CXXConversionDecl(_) => has_body(node),
        Clang::RecordDecl(d) | Clang::CXXRecordDecl(d) => {
            d.is_complete_definition() || node.inner.iter().any(is_member_decl)
        }
        Clang::EnumDecl(d) => {
            d.is_complete_definition()
                || node
                    .inner
                    .iter()
                    .any(|c| matches!(c.kind, Clang::EnumConstantDecl(_)))
        }
        _ => false,
    }
}

/// A function occurrence is a definition when a body statement hangs off it.
fn has_body(node: &Node) -> bool {
    node.inner
        .iter()
        .any(|c| matches!(c.kind, Clang::Other { kind: Kind::CompoundStmt, .. }))
}

/// Member-list children that mark a tag occurrence as the defining one, for
/// dumps that omit the `completeDefinition` flag.
fn is_member_decl(node: &Node) -> bool {
    matches!(
        node.kind,
        Clang::FieldDecl(_) | Clang::RecordDecl(_) | Clang::CXXRecordDecl(_) | Clang::EnumDecl(_)
    )
}
