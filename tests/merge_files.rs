use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use rust_genops::merge::merge;
use rust_genops::output::Sink;
use rust_genops::reader::ingest_all;
use rust_genops::report::LogReporter;
use rust_genops::types::RecordFormat;
use rust_genops::{GenopsError, SnifferRegistry};
use tempfile::TempDir;

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if name.ends_with(".gz") {
        let mut writer = niffler::to_path(
            &path,
            niffler::compression::Format::Gzip,
            niffler::Level::Six,
        )
        .unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    } else {
        fs::write(&path, content).unwrap();
    }
    path
}

#[test]
fn merges_all_three_conventions_to_file() {
    let dir = TempDir::new().unwrap();
    let inputs = vec![
        write(dir.path(), "calls.txt", "VAR\tGENO\nchr1:100\t0/1\nchr1:150\t1/1\nchr2:200\t0/0\n"),
        write(
            dir.path(),
            "annot.txt.gz",
            "chrom\tstart\tend\tgene\nchr1\t99\t100\tBRCA2\nchr2\t199\t200\tTP53\n",
        ),
        write(dir.path(), "depth.txt", "chr\tpos\tdepth\nchr2\t200\t17\nchr1\t100\t42\n"),
    ];

    let mut reporter = LogReporter::default();
    let datasets = ingest_all(&SnifferRegistry::default(), &inputs, &mut reporter).unwrap();
    let formats: Vec<_> = datasets.iter().map(|d| d.format()).collect();
    assert_eq!(
        formats,
        vec![
            RecordFormat::ColonForm,
            RecordFormat::RangeTable,
            RecordFormat::TwoColumn
        ]
    );

    let merged = merge(&datasets, &mut reporter).unwrap();
    let out = dir.path().join("merged.tsv");
    Sink::Path(out.clone()).write(&merged).unwrap();
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "CHR\tPOS\tGENO\tgene\tdepth\n1\t100\t0/1\tBRCA2\t42\n2\t200\t0/0\tTP53\t17\n"
    );
}

#[test]
fn unrecognized_files_are_skipped() {
    let dir = TempDir::new().unwrap();
    let inputs = vec![
        write(dir.path(), "a.txt", "chr\tpos\tdepth\nchr3\t500\t42\n"),
        write(dir.path(), "notes.txt", "sample notes\nnothing positional here\n"),
        write(dir.path(), "b.txt", "chr3:500\tx\n"),
    ];
    let mut reporter = LogReporter::default();
    let datasets = ingest_all(&SnifferRegistry::default(), &inputs, &mut reporter).unwrap();
    assert_eq!(datasets.len(), 2);
    assert_eq!(reporter.skipped_paths(), &[inputs[1].clone()]);

    let merged = merge(&datasets, &mut reporter).unwrap();
    assert_eq!(merged.header_line(), "CHR\tPOS\tdepth\tNA");
    assert_eq!(merged.records()[0].to_string(), "3\t500\t42\tx");
}

#[test]
fn schema_violation_stops_before_output() {
    let dir = TempDir::new().unwrap();
    let inputs = vec![
        write(dir.path(), "a.txt", "chr1\t100\tx\ty\nchr1\t101\tx\ty\tz\n"),
        write(dir.path(), "b.txt", "chr1\t100\tw\n"),
    ];
    let mut reporter = LogReporter::default();
    let err = ingest_all(&SnifferRegistry::default(), &inputs, &mut reporter).unwrap_err();
    match err {
        GenopsError::Ingest { path, line, source } => {
            assert_eq!(path, inputs[0]);
            assert_eq!(line, 2);
            assert!(matches!(
                *source,
                GenopsError::FieldCountMismatch {
                    expected: 2,
                    actual: 3
                }
            ));
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn nothing_recognized_is_an_error_at_merge() {
    let dir = TempDir::new().unwrap();
    let inputs = vec![write(dir.path(), "notes.txt", "free text only\n")];
    let mut reporter = LogReporter::default();
    let datasets = ingest_all(&SnifferRegistry::default(), &inputs, &mut reporter).unwrap();
    assert!(datasets.is_empty());
    assert!(matches!(
        merge(&datasets, &mut reporter),
        Err(GenopsError::NoDatasets)
    ));
}
