mod common;

use std::fs;

use protodef_compiler::{render_proto_to_file, ProtoDefError, ProtoDefWriter, RenderOptions};
use protodef_schema::*;

#[test]
fn test_writes_rendered_text() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("example.proto");
    let options = RenderOptions::default().with_indent_width(4);

    render_proto_to_file(&common::example_proto(), &options, &path).unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        include_str!("testdata/example.proto")
    );
}

#[test]
fn test_truncates_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("small.proto");
    fs::write(&path, "x".repeat(4096)).unwrap();

    render_proto_to_file(&Proto::new("pkg"), &RenderOptions::default(), &path).unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "syntax = \"proto3\";\n\npackage pkg;\n\n"
    );
}

#[test]
fn test_invalid_tree_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.proto");
    let proto = Proto::new("pkg").with_enum(Enum::new("E", vec![EnumConstant::new("A", 1)]));

    let err = render_proto_to_file(&proto, &RenderOptions::default(), &path).unwrap_err();
    assert!(matches!(err, ProtoDefError::FirstConstantNotZero { .. }));
    assert!(!path.exists());
}

#[test]
fn test_write_failure_carries_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.proto");

    match render_proto_to_file(&Proto::new("pkg"), &RenderOptions::default(), &path) {
        Err(ProtoDefError::WriteFailed { path: failed, source }) => {
            assert_eq!(failed, path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected WriteFailed, got {:?}", other),
    }
}

#[test]
fn test_writer_trait() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trait.proto");
    let proto = common::example_proto();
    let options = RenderOptions::default();

    let text = proto.to_proto_def(&options).unwrap();
    proto.write_proto_def(&options, &path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), text);
}
