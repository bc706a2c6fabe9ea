use super::*;

use std::path::PathBuf;

fn unique_temp_dir(name: &str) -> PathBuf {
    let nonce = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("valid clock")
        .as_nanos();
    std::env::temp_dir().join(format!(
        "decl-extractor-{name}-{}-{nonce}",
        std::process::id(),
    ))
}

#[test]
fn build_dump_args_requests_json_ast_before_anything_else() {
    let options = FrontendOptions::default();
    let args = build_dump_args(Path::new("demo/app.c"), &options);

    assert_eq!(&args[..2], ["-Xclang", "-ast-dump=json"]);
    assert!(args.contains(&"-fsyntax-only".to_string()));
    assert!(args.contains(&"-ferror-limit=0".to_string()));
    assert!(args.contains(&"-Wno-everything".to_string()));
    assert_eq!(args.last().map(String::as_str), Some("demo/app.c"));
}

#[test]
fn build_dump_args_orders_config_before_passthrough() {
    let options = FrontendOptions {
        binary: "clang".to_string(),
        include_paths: vec!["include".to_string()],
        extra_flags: vec!["-std=c11".to_string()],
        passthrough_args: vec!["-DFOO=1".to_string()],
    };
    let args = build_dump_args(Path::new("demo/app.c"), &options);

    let include_flag = args.iter().position(|a| a == "-I").expect("-I flag");
    assert_eq!(args[include_flag + 1], "include");

    let std_flag = args.iter().position(|a| a == "-std=c11").expect("config flag");
    let define = args.iter().position(|a| a == "-DFOO=1").expect("passthrough");
    assert!(std_flag < define, "pass-through args must come last so they win");
    assert!(define < args.len() - 1, "source path stays last");
}

#[test]
fn run_ast_dump_missing_file_aborts() {
    let source = Path::new("no/such/translation_unit.c");
    let err = run_ast_dump(source, &FrontendOptions::default()).unwrap_err();

    assert!(matches!(err, ExtractError::MissingFile(_)), "got: {err}");
}

#[test]
fn run_ast_dump_unlaunchable_binary_aborts() {
    let temp_dir = unique_temp_dir("unlaunchable");
    std::fs::create_dir_all(&temp_dir).expect("temp dir");
    let source = temp_dir.join("empty.c");
    std::fs::write(&source, "int x;\n").expect("write source");

    let options = FrontendOptions {
        binary: "decl-extractor-no-such-frontend".to_string(),
        ..FrontendOptions::default()
    };
    let err = run_ast_dump(&source, &options).unwrap_err();

    assert!(
        matches!(err, ExtractError::FrontendUnavailable { .. }),
        "got: {err}"
    );

    let _ = std::fs::remove_file(&source);
    let _ = std::fs::remove_dir(&temp_dir);
}
