use clang_ast::{Kind, SourceLocation};
use serde::Deserialize;

pub type Node = clang_ast::Node<Clang>;

/// Typed representation of the Clang AST node kinds the extractor inspects.
///
/// Each variant corresponds to a Clang AST node `"kind"` value. Everything
/// else lands in `Other`, which keeps the raw kind so named declaration
/// kinds outside the closed set can still be reported generically.
#[derive(Deserialize)]
pub enum Clang {
    // --- Function-like declarations ---
    FunctionDecl(DeclData),
    CXXMethodDecl(DeclData),
    CXXConstructorDecl(DeclData),
    CXXDestructorDecl(DeclData),
    CXXConversionDecl(DeclData),

    // --- Value declarations ---
    VarDecl(DeclData),
    ParmVarDecl(DeclData),
    FieldDecl(DeclData),
    EnumConstantDecl(DeclData),

    // --- Type declarations ---
    TypedefDecl(DeclData),
    TypeAliasDecl(DeclData),
    RecordDecl(DeclData),
    CXXRecordDecl(DeclData),
    EnumDecl(DeclData),

    // --- Catch-all ---
    // The `loc` and `range` fields MUST be deserialized even for unrecognized
    // node kinds. The `clang-ast` crate tracks "current file" state across the
    // deserialization stream via `SourceLocation`; if we skip locations for
    // nodes that set the file path, all subsequent nodes inherit an empty
    // file.
    #[allow(dead_code)]
    Other {
        kind: Kind,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        loc: Option<SourceLocation>,
        #[serde(default)]
        range: Option<clang_ast::SourceRange>,
        #[serde(default, rename = "isImplicit")]
        is_implicit: Option<bool>,
    },
}

/// Common data for the declaration nodes in the closed dispatch set.
///
/// The `ty` field captures Clang's `type.qualType` string, the
/// pretty-printed declared type: `"int (void)"` for functions,
/// `"struct buffer *"` for variables.
#[derive(Deserialize, Debug)]
pub struct DeclData {
    pub name: Option<String>,
    pub loc: Option<SourceLocation>,
    #[serde(rename = "isImplicit")]
    pub is_implicit: Option<bool>,
    /// Set by Clang on the tag occurrence that carries the member list
    /// (`struct`/`union`/`class`/`enum` definitions).
    #[serde(rename = "completeDefinition")]
    pub complete_definition: Option<bool>,
    /// `struct`, `union` or `class`, as written at this occurrence.
    #[serde(rename = "tagUsed")]
    pub tag_used: Option<String>,
    #[serde(rename = "type")]
    pub ty: Option<QualType>,
}

/// Clang's qualified type representation.
#[derive(Deserialize, Debug)]
pub struct QualType {
    #[serde(rename = "qualType")]
    pub qual_type: Option<String>,
}

impl DeclData {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_implicit(&self) -> bool {
        self.is_implicit.unwrap_or(false)
    }

    pub fn is_complete_definition(&self) -> bool {
        self.complete_definition.unwrap_or(false)
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag_used.as_deref()
    }

    pub fn qual_type(&self) -> Option<&str> {
        self.ty.as_ref().and_then(|t| t.qual_type.as_deref())
    }
}
