use std::fs;
use std::path::Path;

use row_truncator::ingestion::{truncate_file, TruncateOptions, TruncationStats, WriteMode};
use row_truncator::TruncateError;
use tempfile::TempDir;

const EXPECTED_PRODUCTS: &str = "\
sku;name;brand;category;subcategory;price;currency;stock;weight_kg;width_cm;height_cm;depth_cm;color;material;origin;barcode;rating
1001;Kettle;Arzum;Kitchen;Small Appliances;19.90;EUR;120;1.2;22;25;18;white;steel;TR;8690000000011;4.5
1002;Toaster;Tefal;Kitchen;Small Appliances;24.50;EUR;40

1003;Desk Lamp;Ikea;Home;Lighting;12.00;EUR;300;0.8;15;45;15;black;aluminium;SE;7300000000022;4.1
1004;Blender;Philips;Kitchen;Small Appliances;49.00;EUR;12;2.1;20;40;20;grey;plastic;NL;8710000000033;4.7
";

fn opts(mode: WriteMode) -> TruncateOptions {
    TruncateOptions {
        mode,
        ..Default::default()
    }
}

fn run_on(input: &str, mode: WriteMode) -> (String, TruncationStats) {
    let (out, stats) = run_on_bytes(input.as_bytes(), mode);
    (String::from_utf8(out).unwrap(), stats)
}

fn run_on_bytes(input: &[u8], mode: WriteMode) -> (Vec<u8>, TruncationStats) {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("in.csv");
    let dst = dir.path().join("out.csv");
    fs::write(&src, input).unwrap();
    let stats = truncate_file(&src, &dst, &opts(mode)).unwrap();
    (fs::read(&dst).unwrap(), stats)
}

const BOTH_MODES: [WriteMode; 2] = [WriteMode::Buffered, WriteMode::Streaming];

fn line_of(n: usize) -> String {
    (1..=n).map(|i| format!("v{i}")).collect::<Vec<_>>().join(";")
}

#[test]
fn truncate_products_fixture_buffered() {
    let dir = TempDir::new().unwrap();
    let dst = dir.path().join("productDatabase_clean.csv");

    let stats = truncate_file("tests/fixtures/products.csv", &dst, &TruncateOptions::default()).unwrap();

    assert_eq!(fs::read_to_string(&dst).unwrap(), EXPECTED_PRODUCTS);
    assert_eq!(
        stats,
        TruncationStats {
            rows: 6,
            truncated_rows: 3,
            short_rows: 2,
            widest_row: 20,
            first_truncated_line: Some(1),
        }
    );
}

#[test]
fn streaming_output_is_byte_identical_to_buffered() {
    let input = fs::read_to_string("tests/fixtures/products.csv").unwrap();
    let (buffered, buffered_stats) = run_on(&input, WriteMode::Buffered);
    let (streamed, streamed_stats) = run_on(&input, WriteMode::Streaming);

    assert_eq!(buffered, streamed);
    assert_eq!(buffered_stats, streamed_stats);
}

#[test]
fn short_line_is_unchanged() {
    for mode in [WriteMode::Buffered, WriteMode::Streaming] {
        let (out, _) = run_on("A;B;C;D\n", mode);
        assert_eq!(out, "A;B;C;D\n");
    }
}

#[test]
fn excess_fields_are_dropped_not_an_error() {
    for mode in [WriteMode::Buffered, WriteMode::Streaming] {
        let (out, stats) = run_on(&line_of(20), mode);
        assert_eq!(out, format!("{}\n", line_of(17)));
        assert_eq!(stats.truncated_rows, 1);
    }
}

#[test]
fn empty_source_gives_empty_destination() {
    let dir = TempDir::new().unwrap();
    let dst = dir.path().join("out.csv");

    let stats = truncate_file("tests/fixtures/empty.csv", &dst, &TruncateOptions::default()).unwrap();

    assert!(dst.exists());
    assert_eq!(fs::read_to_string(&dst).unwrap(), "");
    assert_eq!(stats.rows, 0);
}

#[test]
fn empty_line_stays_empty() {
    let (out, stats) = run_on("\n", WriteMode::Buffered);
    assert_eq!(out, "\n");
    assert_eq!(stats.rows, 1);
}

#[test]
fn row_count_and_prefixes_are_preserved() {
    let input = format!("{}\n\n  padded;x  \n{}\r\nlast", line_of(30), line_of(17));
    let (out, _) = run_on(&input, WriteMode::Buffered);

    let in_lines: Vec<&str> = input.lines().collect();
    let out_lines: Vec<&str> = out.lines().collect();
    assert_eq!(in_lines.len(), out_lines.len());

    for (before, after) in in_lines.iter().zip(out_lines.iter()) {
        let before: Vec<&str> = before.trim().split(';').collect();
        let after: Vec<&str> = after.split(';').collect();
        let kept = before.len().min(17);
        assert_eq!(after.len(), kept);
        assert_eq!(after[..], before[..kept]);
    }
    assert!(out.ends_with("last\n"));
}

#[test]
fn rerunning_on_own_output_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let once = dir.path().join("once.csv");
    let twice = dir.path().join("twice.csv");

    truncate_file("tests/fixtures/products.csv", &once, &TruncateOptions::default()).unwrap();
    truncate_file(&once, &twice, &TruncateOptions::default()).unwrap();

    assert_eq!(fs::read(&once).unwrap(), fs::read(&twice).unwrap());
}

#[test]
fn in_place_streaming_falls_back_to_buffered() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.csv");
    fs::write(&path, format!("{}\nA;B\n", line_of(20))).unwrap();

    let stats = truncate_file(&path, &path, &opts(WriteMode::Streaming)).unwrap();

    assert_eq!(stats.rows, 2);
    assert_eq!(fs::read_to_string(&path).unwrap(), format!("{}\nA;B\n", line_of(17)));
}

#[test]
fn custom_delimiter_and_cap() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("in.tsv");
    let dst = dir.path().join("out.tsv");
    fs::write(&src, "a\tb\tc\nd\n").unwrap();

    let options = TruncateOptions {
        delimiter: '\t',
        max_fields: 2,
        ..Default::default()
    };
    truncate_file(&src, &dst, &options).unwrap();

    assert_eq!(fs::read_to_string(&dst).unwrap(), "a\tb\nd\n");
}

#[test]
fn missing_source_is_a_read_error_and_creates_nothing_when_buffered() {
    let dir = TempDir::new().unwrap();
    let dst = dir.path().join("out.csv");

    let err = truncate_file("tests/fixtures/does_not_exist.csv", &dst, &TruncateOptions::default()).unwrap_err();

    assert!(matches!(err, TruncateError::Read { .. }));
    assert_eq!(err.io_error().kind(), std::io::ErrorKind::NotFound);
    assert!(!Path::new(&dst).exists());
}

#[test]
fn unwritable_destination_is_a_write_error() {
    let dir = TempDir::new().unwrap();
    let dst = dir.path().join("no_such_dir").join("out.csv");

    for mode in [WriteMode::Buffered, WriteMode::Streaming] {
        let err = truncate_file("tests/fixtures/products.csv", &dst, &opts(mode)).unwrap_err();
        assert!(matches!(err, TruncateError::Write { .. }), "mode={mode:?}");
    }
}

#[test]
fn invalid_utf8_source_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("in.csv");
    let dst = dir.path().join("out.csv");
    fs::write(&src, [b'a', b';', 0xff, b'\n']).unwrap();

    for mode in [WriteMode::Buffered, WriteMode::Streaming] {
        let err = truncate_file(&src, &dst, &opts(mode)).unwrap_err();
        assert!(matches!(err, TruncateError::Read { .. }), "mode={mode:?}");
        assert_eq!(err.io_error().kind(), std::io::ErrorKind::InvalidData);
    }
}

#[test]
fn lone_carriage_return_ends_a_row() {
    for mode in BOTH_MODES {
        let (out, stats) = run_on_bytes(b"a;b\rc;d\n x\x1fy\x1f \n", mode);
        assert_eq!(out, b"a;b\nc;d\nx\x1fy\n", "mode={mode:?}");
        assert_eq!(stats.rows, 3, "mode={mode:?}");
    }
}

#[test]
fn mixed_terminators_each_count_as_one_row() {
    let input = "h1;h2\r\nr1\r\rr3\n\nr5\r";
    for mode in BOTH_MODES {
        let (out, stats) = run_on(input, mode);
        assert_eq!(out, "h1;h2\nr1\n\nr3\n\nr5\n", "mode={mode:?}");
        assert_eq!(stats.rows, 6, "mode={mode:?}");
    }
}

#[test]
fn final_line_without_terminator_is_kept() {
    let input = format!("A;B\n{}", line_of(19));
    for mode in BOTH_MODES {
        let (out, stats) = run_on(&input, mode);
        assert_eq!(out, format!("A;B\n{}\n", line_of(17)), "mode={mode:?}");
        assert_eq!(stats.rows, 2, "mode={mode:?}");
    }
}

#[test]
fn separator_controls_at_line_edges_are_stripped() {
    for mode in BOTH_MODES {
        let (out, _) = run_on("\x1c\x1dkey;value\x1e\x1f\n\x1f\n", mode);
        assert_eq!(out, "key;value\n\n", "mode={mode:?}");
    }
}
