use newsdeck_engine::{ensure_data_dir, AtomicFileWriter, PersistError};

#[test]
fn writer_creates_and_overwrites_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let writer = AtomicFileWriter::new(dir.path().to_path_buf());

    let path = writer.write("favs.json", "[]").expect("first write");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");

    writer
        .write("favs.json", r#"[{"url":"a"}]"#)
        .expect("second write");
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        r#"[{"url":"a"}]"#
    );
}

#[test]
fn writer_creates_missing_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let nested = dir.path().join("deck").join("data");
    let writer = AtomicFileWriter::new(nested.clone());

    writer.write("favs.json", "[]").expect("write");
    assert!(nested.join("favs.json").exists());
}

#[test]
fn ensure_data_dir_rejects_file_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file_path = dir.path().join("not-a-dir");
    std::fs::write(&file_path, "x").unwrap();

    let err = ensure_data_dir(&file_path).unwrap_err();
    assert!(matches!(err, PersistError::DataDir(_)));
}
