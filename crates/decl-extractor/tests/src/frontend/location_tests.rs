use super::*;

use crate::frontend::{Clang, Node};

fn var_decl_loc(json: &str) -> Option<SourceLocation> {
    let node: Node = serde_json::from_str(json).expect("valid node json");
    match node.kind {
        Clang::VarDecl(d) => d.loc,
        _ => panic!("expected a VarDecl node"),
    }
}

#[test]
fn position_of_uses_bare_location() {
    let loc = var_decl_loc(
        r#"{"id":"0x1","kind":"VarDecl",
            "loc":{"offset":10,"file":"demo/app.c","line":4,"col":5,"tokLen":7},
            "name":"counter","type":{"qualType":"int"}}"#,
    );
    let main = MainFile::new(Path::new("demo/app.c"));

    let pos = main.position_of(loc.as_ref()).expect("eligible location");
    assert_eq!(pos, SourcePos { line: 4, column: 5 });
}

#[test]
fn position_of_prefers_spelling_over_expansion() {
    let loc = var_decl_loc(
        r#"{"id":"0x1","kind":"VarDecl",
            "loc":{
              "spellingLoc":{"offset":25,"file":"demo/app.c","line":2,"col":25,"tokLen":10},
              "expansionLoc":{"offset":120,"file":"demo/app.c","line":9,"col":1,"tokLen":10}},
            "name":"debug_flag","type":{"qualType":"int"}}"#,
    );
    let main = MainFile::new(Path::new("demo/app.c"));

    let pos = main.position_of(loc.as_ref()).expect("eligible location");
    assert_eq!(pos, SourcePos { line: 2, column: 25 });
}

#[test]
fn position_of_rejects_locations_in_other_files() {
    let loc = var_decl_loc(
        r#"{"id":"0x1","kind":"VarDecl",
            "loc":{"offset":3,"file":"include/util.h","line":1,"col":5,"tokLen":1},
            "name":"g","type":{"qualType":"int"}}"#,
    );
    let main = MainFile::new(Path::new("demo/app.c"));

    assert_eq!(main.position_of(loc.as_ref()), None);
}

#[test]
fn position_of_rejects_absent_location() {
    let loc = var_decl_loc(r#"{"id":"0x1","kind":"VarDecl","name":"g","type":{"qualType":"int"}}"#);
    let main = MainFile::new(Path::new("demo/app.c"));

    assert_eq!(main.position_of(loc.as_ref()), None);
}

#[test]
fn contains_matches_verbatim_and_lexically_normalized_paths() {
    let main = MainFile::new(Path::new("/work/src/./app.c"));

    assert!(main.contains("/work/src/app.c"));
    assert!(main.contains("/work/src/../src/app.c"));
    assert!(!main.contains("/work/other/app.c"));
}

#[test]
fn contains_rejects_same_basename_in_other_directory() {
    let main = MainFile::new(Path::new("/project/a/util.c"));

    assert!(!main.contains("/project/b/util.c"));
}

#[test]
fn system_header_detection() {
    assert!(is_system_header(""));
    assert!(is_system_header("<built-in>"));
    assert!(is_system_header("/usr/include/stdio.h"));
    assert!(is_system_header("/usr/lib/clang/17/include/stddef.h"));
    assert!(!is_system_header("demo/app.c"));
    assert!(!is_system_header("include/util.h"));
}
