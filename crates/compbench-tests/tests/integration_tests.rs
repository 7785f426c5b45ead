//! Integration tests for compbench
//!
//! These tests drive the whole pipeline: read a file, resolve a selection,
//! benchmark, write payloads and build the report.

use compbench_compression::{
    resolve, BenchmarkRunner, OutputMode, OutputWriter, Registry, Report, RunOptions,
};
use compbench_config::ConfigBuilder;
use compbench_tests::test_utils::{create_test_file, generate_test_data, TestDataPattern};
use compbench_types::LevelHint;
use proptest::prelude::*;
use rstest::rstest;
use tempfile::TempDir;

#[tokio::test]
async fn test_hello_world_pipeline() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let input = create_test_file(&temp_dir, "hello.txt", b"hello world");

    let data = tokio::fs::read(&input).await?;
    let registry = Registry::standard();
    let selection = resolve("gzip,zstd", &registry.supported_identifiers());
    let results = BenchmarkRunner::new(&registry).run(&data, &selection);

    assert_eq!(results.len(), 2);
    for id in ["gzip", "zstd"] {
        let result = results.get(id).unwrap();
        assert_eq!(result.original_size, 11);
        assert!(result.compressed_size > 0);
        let expected = result.compressed_size as f64 / 11.0 * 100.0;
        assert!((result.compression_ratio - expected).abs() < 1e-9);
    }

    let report = Report::build("hello.txt", data.len() as u64, &results, &registry);
    let ids: Vec<_> = report.rows.iter().map(|r| r.algorithm.as_str()).collect();
    assert_eq!(ids, ["gzip", "zstd"]);

    let text = report.render(false);
    assert!(text.starts_with("Compression comparison - file: hello.txt (original size: 11 B)"));
    assert!(!text.contains("Unsupported algorithms:"));

    Ok(())
}

#[tokio::test]
async fn test_written_payloads_decompress_to_input() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let data = generate_test_data(32 * 1024, TestDataPattern::Text);
    let input = create_test_file(&temp_dir, "corpus.txt", &data);

    let registry = Registry::standard();
    let selection = resolve("all", &registry.supported_identifiers());
    let results = BenchmarkRunner::new(&registry).run(&data, &selection);
    assert_eq!(results.len(), registry.supported_identifiers().len());

    let summary = OutputWriter::new(&input, OutputMode::PerAlgorithm)
        .write_all(&results, &registry)
        .await;
    assert!(summary.is_success());
    assert_eq!(summary.written.len(), results.len());

    for (id, path) in &summary.written {
        let descriptor = registry.lookup(id).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_string_lossy(),
            format!("corpus{}", descriptor.extension)
        );
        let payload = tokio::fs::read(path).await?;
        assert_eq!(descriptor.codec.decompress(&payload)?, data);
    }

    Ok(())
}

#[tokio::test]
async fn test_single_output_keeps_last_registry_entry() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let data = generate_test_data(4096, TestDataPattern::Mixed);
    let input = create_test_file(&temp_dir, "mixed.bin", &data);
    let target = temp_dir.path().join("out.bin");

    let registry = Registry::standard();
    // Requested out of registry order; snappy still runs last
    let selection = resolve("snappy,gzip", &registry.supported_identifiers());
    let results = BenchmarkRunner::new(&registry).run(&data, &selection);

    let summary = OutputWriter::new(&input, OutputMode::Single(target.clone()))
        .write_all(&results, &registry)
        .await;
    assert_eq!(summary.written.len(), 2);

    let on_disk = tokio::fs::read(&target).await?;
    assert_eq!(on_disk, results.get("snappy").unwrap().payload);

    Ok(())
}

#[tokio::test]
async fn test_split_output_keeps_every_payload() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let data = generate_test_data(4096, TestDataPattern::Text);
    let input = create_test_file(&temp_dir, "doc.txt", &data);

    let registry = Registry::standard();
    let selection = resolve("br,lz4", &registry.supported_identifiers());
    let results = BenchmarkRunner::new(&registry).run(&data, &selection);

    let summary = OutputWriter::new(&input, OutputMode::Split(temp_dir.path().join("packed.out")))
        .write_all(&results, &registry)
        .await;

    assert!(summary.is_success());
    assert!(temp_dir.path().join("packed.br.out").exists());
    assert!(temp_dir.path().join("packed.lz4.out").exists());

    Ok(())
}

#[test]
fn test_empty_input_reports_zero_ratio() {
    let registry = Registry::standard();
    let selection = resolve("all", &registry.supported_identifiers());
    let results = BenchmarkRunner::new(&registry).run(&[], &selection);

    let report = Report::build("empty", 0, &results, &registry);
    for row in &report.rows {
        assert_eq!(row.compression_ratio, 0.0);
        assert_eq!(row.saved_percent, 0.0);
    }
}

#[test]
fn test_nothing_selected_still_reports() {
    let registry = Registry::standard();
    let selection = resolve("bogus, ,zip", &registry.supported_identifiers());
    assert!(selection.is_empty());
    assert_eq!(selection.rejected(), ["bogus", "zip"]);

    let results = BenchmarkRunner::new(&registry).run(b"payload", &selection);
    let report = Report::build("payload.txt", 7, &results, &registry);

    assert!(report.rows.is_empty());
    let text = report.render(true);
    assert!(text.contains("Algorithm"));
    assert!(text.contains("  - lzo1x (LZO1x)"));
}

#[test]
fn test_report_json_shape() {
    let registry = Registry::standard();
    let data = generate_test_data(2048, TestDataPattern::Zeros);
    let selection = resolve("zlib", &registry.supported_identifiers());
    let results = BenchmarkRunner::new(&registry).run(&data, &selection);
    let report = Report::build("zeros.bin", data.len() as u64, &results, &registry);

    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["rows"][0]["algorithm"], "zlib");
    assert_eq!(value["rows"][0]["display_name"], "Zlib");
    assert!(value["rows"][0]["saved_bytes"].as_i64().unwrap() > 0);
    assert_eq!(value["unsupported"].as_array().unwrap().len(), 6);
}

#[rstest]
#[case(LevelHint::new(0))]
#[case(LevelHint::new(9))]
#[case(LevelHint::new(100))]
#[case(LevelHint::default())]
fn test_levels_roundtrip_with_verify(#[case] level: LevelHint) {
    let registry = Registry::standard();
    let data = generate_test_data(16 * 1024, TestDataPattern::Mixed);
    let selection = resolve("all", &registry.supported_identifiers());

    let results = BenchmarkRunner::new(&registry)
        .with_options(RunOptions {
            level,
            verify: true,
        })
        .run(&data, &selection);

    assert_eq!(results.len(), selection.len());
}

#[test]
fn test_config_drives_selection() {
    let config = ConfigBuilder::new().add_defaults().build().unwrap();
    let registry = Registry::standard();

    let selection = resolve(&config.benchmark.algorithms, &registry.supported_identifiers());
    assert_eq!(selection.selected().len(), registry.supported_identifiers().len());
}

#[test]
fn test_higher_levels_do_not_grow_text() {
    let registry = Registry::standard();
    let data = generate_test_data(64 * 1024, TestDataPattern::Text);
    let selection = resolve("zstd", &registry.supported_identifiers());

    let size_at = |level: i32| {
        BenchmarkRunner::new(&registry)
            .with_options(RunOptions {
                level: LevelHint::new(level),
                verify: false,
            })
            .run(&data, &selection)
            .get("zstd")
            .unwrap()
            .compressed_size
    };

    assert!(size_at(19) <= size_at(1));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_every_supported_codec_survives_verify(data in prop::collection::vec(any::<u8>(), 0..4096)) {
        let registry = Registry::standard();
        let selection = resolve("all", &registry.supported_identifiers());
        let results = BenchmarkRunner::new(&registry)
            .with_options(RunOptions { level: LevelHint::default(), verify: true })
            .run(&data, &selection);

        prop_assert_eq!(results.len(), selection.len());
        for (_, result) in results.ordered(&registry) {
            prop_assert_eq!(result.original_size, data.len() as u64);
        }
    }
}
