use tracing::debug;

use super::classify::{NodeClass, classify};
use super::definition::is_defining_occurrence;
use super::record::{DeclKind, DeclRecord};
use super::signature::render_signature;
use crate::frontend::{MainFile, Node};

/// Depth-first, pre-order traversal of the semantic tree.
///
/// Every declaration node reachable from the translation-unit root is
/// visited, however deeply nested: fields independently of their enclosing
/// record, parameters independently of their function. Traversal order is
/// the output order; nothing downstream re-sorts the records.
pub fn collect_records(
    root: &Node,
    main_file: &MainFile,
) -> Vec<DeclRecord> {
    let mut walker = Walker {
        main_file,
        records: Vec::new(),
    };
    walker.visit(root);
    debug!(
        "collected {} declaration record(s) from {}",
        walker.records.len(),
        main_file.display()
    );
    walker.records
}

struct Walker<'a> {
    main_file: &'a MainFile,
    records: Vec<DeclRecord>,
}

impl Walker<'_> {
    fn visit(&mut self, node: &Node) {
        if let Some(class) = classify(&node.kind) {
            match &class {
                NodeClass::Decl { kind, data } => {
                    // Compiler-synthesized declarations have no spelling in
                    // the source; skip them subtree and all, as the
                    // front-end's own visitors do.
                    if data.is_implicit() {
                        return;
                    }
                    if let Some(pos) = self.main_file.position_of(data.loc.as_ref()) {
                        self.records.push(DeclRecord {
                            kind: *kind,
                            signature: render_signature(&class, node),
                            is_definition: is_defining_occurrence(node),
                            line: pos.line,
                            column: pos.column,
                        });
                    }
                }
                NodeClass::Other { loc, implicit, .. } => {
                    if *implicit {
                        return;
                    }
                    if let Some(pos) = self.main_file.position_of(*loc) {
                        self.records.push(DeclRecord {
                            kind: DeclKind::Other,
                            signature: render_signature(&class, node),
                            is_definition: false,
                            line: pos.line,
                            column: pos.column,
                        });
                    }
                }
            }
        }

        for child in &node.inner {
            self.visit(child);
        }
    }
}
