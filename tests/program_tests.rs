//! Program loading from disk: ordering, declaration-file filtering, and read failures.

use std::fs;
use std::path::PathBuf;

use ts2dart::{Program, TranslateConfig, Ts2DartError, translate_files};

/// A scratch directory unique to one test.
struct Scratch {
    dir: PathBuf,
}

impl Scratch {
    fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("ts2dart_{}_{}", std::process::id(), name));
        fs::create_dir_all(&dir).unwrap();
        Self { dir }
    }

    fn file(&self, name: &str, text: &str) -> PathBuf {
        let path = self.dir.join(name);
        fs::write(&path, text).unwrap();
        path
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.dir);
    }
}

#[test]
fn files_are_translated_in_order() {
    let scratch = Scratch::new("order");
    let a = scratch.file("a.ts", "var a: number = 1;");
    let b = scratch.file("b.ts", "class B {}");

    let dart = translate_files(&[b, a], &TranslateConfig::default()).unwrap();
    assert_eq!(dart, " class B {\n }\n num a = 1 ;\n");
}

#[test]
fn declaration_files_are_skipped_by_default() {
    let scratch = Scratch::new("skip");
    // Would fail to translate if it were visited.
    let decl = scratch.file("lib.d.ts", "declare var x: any;");
    let main = scratch.file("main.ts", "var a;");

    let program = Program::load(&[decl.clone(), main.clone()], &TranslateConfig::default()).unwrap();
    assert_eq!(program.files.len(), 1);

    let dart = translate_files(&[decl, main], &TranslateConfig::default()).unwrap();
    assert_eq!(dart, " var a ;\n");
}

#[test]
fn declaration_files_can_be_included() {
    let scratch = Scratch::new("include");
    let decl = scratch.file("lib.d.ts", "var x: number;");
    let main = scratch.file("main.ts", "var a;");

    let config = TranslateConfig::default().with_skip_declaration_files(false);
    let dart = translate_files(&[decl, main], &config).unwrap();
    assert_eq!(dart, " num x ;\n var a ;\n");
}

#[test]
fn missing_file_is_an_io_error() {
    let scratch = Scratch::new("missing");
    let path = scratch.dir.join("nope.ts");
    let err = translate_files(&[path], &TranslateConfig::default()).unwrap_err();
    assert!(matches!(err, Ts2DartError::Io { .. }), "got: {:?}", err);
    assert!(err.to_string().contains("nope.ts"));
}

#[test]
fn oversized_file_is_rejected_before_reading() {
    let scratch = Scratch::new("large");
    let path = scratch.file("big.ts", "var a = 1;");

    let config = TranslateConfig::default().with_max_source_size(4);
    match translate_files(&[path], &config) {
        Err(Ts2DartError::TooLarge { size, max, .. }) => {
            assert_eq!(size, 10);
            assert_eq!(max, 4);
        }
        other => panic!("expected TooLarge, got {:?}", other),
    }
}

#[test]
fn syntax_error_names_the_file() {
    let scratch = Scratch::new("syntax");
    let path = scratch.file("broken.ts", "class {");
    let err = translate_files(&[path], &TranslateConfig::default()).unwrap_err();
    assert!(matches!(err, Ts2DartError::Syntax(_)), "got: {:?}", err);
    assert!(err.to_string().contains("broken.ts:1:7"), "got: {}", err);
}
