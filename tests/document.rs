#![cfg(feature = "document")]
use base64::{engine::general_purpose::STANDARD, Engine};
use jmendian::document::{
    convert_directory, find_map_files, ConvertOptions, DocumentErrorKind, MapDocument, MapSummary,
};
use jmendian::zlib;
use rstest::*;
use std::fs;
use std::path::Path;

const TILES: [u8; 8] = [0x01, 0x00, 0x02, 0x00, 0x03, 0x00, 0x04, 0x00];
const FLIPPED: [u8; 8] = [0x00, 0x01, 0x00, 0x02, 0x00, 0x03, 0x00, 0x04];

fn write_map(path: &Path, tiles: &[u8]) {
    let data = STANDARD.encode(zlib::encode(tiles).unwrap());
    let doc = format!(
        r#"{{"width":2,"height":2,"dict":[{{"ground":"grass"}}],"data":"{}"}}"#,
        data
    );
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, doc).unwrap();
}

fn read_tiles(path: &Path) -> Vec<u8> {
    let doc = MapDocument::from_slice(&fs::read(path).unwrap()).unwrap();
    zlib::decode(&doc.envelope().unwrap()).unwrap()
}

#[rstest]
#[case(true)]
#[case(false)]
fn test_convert_directory(#[case] parallel: bool) {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    write_map(&input.path().join("forest.jm"), &TILES);
    write_map(&input.path().join("dungeons/cave.jm"), &TILES);
    fs::write(input.path().join("notes.txt"), "not a map").unwrap();

    let options = ConvertOptions::new().with_parallel(parallel);
    let reports = convert_directory(input.path(), output.path(), &options).unwrap();
    assert_eq!(reports.len(), 2);
    assert!(reports.iter().all(|x| x.is_ok()));

    let expected = MapSummary {
        width: 2,
        height: 2,
        dict_len: 1,
        data_len: 8,
    };
    assert_eq!(reports[0].result().unwrap(), &expected);

    assert_eq!(read_tiles(&output.path().join("forest.jm")), FLIPPED);
    assert_eq!(read_tiles(&output.path().join("cave.jm")), FLIPPED);
    assert!(!output.path().join("notes.jm").exists());

    // inputs are never touched
    assert_eq!(read_tiles(&input.path().join("forest.jm")), TILES);
}

#[test]
fn test_failures_are_isolated() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();

    write_map(&input.path().join("a.jm"), &TILES);
    write_map(&input.path().join("odd.jm"), &[0x01, 0x02, 0x03]);
    fs::write(input.path().join("broken.jm"), "{").unwrap();
    write_map(&input.path().join("sub/a.jm"), &FLIPPED);
    write_map(&input.path().join("sub/z.jm"), &TILES);

    let reports = convert_directory(input.path(), output.path(), &ConvertOptions::new()).unwrap();
    let names: Vec<_> = reports
        .iter()
        .map(|x| x.input().strip_prefix(input.path()).unwrap().to_path_buf())
        .collect();
    assert_eq!(
        names,
        [
            Path::new("a.jm"),
            Path::new("broken.jm"),
            Path::new("odd.jm"),
            Path::new("sub/a.jm"),
            Path::new("sub/z.jm"),
        ]
    );

    assert!(reports[0].is_ok());

    let err = reports[1].result().unwrap_err();
    assert!(matches!(err.kind(), DocumentErrorKind::Json(_)));
    assert_eq!(err.path(), Some(reports[1].input()));

    let err = reports[2].result().unwrap_err();
    assert!(matches!(err.kind(), DocumentErrorKind::Codec(_)));
    assert!(!output.path().join("odd.jm").exists());

    let err = reports[3].result().unwrap_err();
    let DocumentErrorKind::DuplicateOutput { first } = err.kind() else {
        panic!("expected duplicate output: {:?}", err);
    };
    assert_eq!(first, reports[0].input());

    assert!(reports[4].is_ok());

    // the first document claiming an output name wins
    assert_eq!(read_tiles(&output.path().join("a.jm")), FLIPPED);
    assert_eq!(read_tiles(&output.path().join("z.jm")), FLIPPED);
}

#[test]
fn test_find_map_files() {
    let input = tempfile::tempdir().unwrap();
    write_map(&input.path().join("b.jm"), &TILES);
    write_map(&input.path().join("a.jm"), &TILES);
    write_map(&input.path().join("deep/deeper/c.jm"), &TILES);
    write_map(&input.path().join("d.json"), &TILES);

    let all = find_map_files(input.path(), &ConvertOptions::new()).unwrap();
    assert_eq!(
        all,
        [
            input.path().join("a.jm"),
            input.path().join("b.jm"),
            input.path().join("deep/deeper/c.jm"),
        ]
    );

    let options = ConvertOptions::new().with_recursive(false);
    let top = find_map_files(input.path(), &options).unwrap();
    assert_eq!(top, [input.path().join("a.jm"), input.path().join("b.jm")]);

    let options = ConvertOptions::new().with_extension("json");
    let json = find_map_files(input.path(), &options).unwrap();
    assert_eq!(json, [input.path().join("d.json")]);
}

#[test]
fn test_missing_output_directory() {
    let input = tempfile::tempdir().unwrap();
    let missing = input.path().join("missing");
    let err = convert_directory(input.path(), &missing, &ConvertOptions::new()).unwrap_err();
    assert!(matches!(err.kind(), DocumentErrorKind::NotADirectory));
    assert_eq!(err.path(), Some(missing.as_path()));
}

#[test]
fn test_empty_directory() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let reports = convert_directory(input.path(), output.path(), &ConvertOptions::new()).unwrap();
    assert!(reports.is_empty());
}
