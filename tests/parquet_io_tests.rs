//! Tests for the Arrow-backed Parquet adapters

#[cfg(feature = "parquet")]
use std::io::Cursor;

#[cfg(feature = "parquet")]
use dataslot_core::config::{Compression, ParquetConfig};
#[cfg(feature = "parquet")]
use dataslot_core::schema::{DataType, Field, Schema};
#[cfg(feature = "parquet")]
use dataslot_core::types::{Column, Table};
#[cfg(feature = "parquet")]
use dataslot_io::error::Error;
#[cfg(feature = "parquet")]
use dataslot_io::readers::parquet::{parquet_buffer_collection_reader, parquet_buffer_reader};
#[cfg(feature = "parquet")]
use dataslot_io::writers::parquet::{parquet_buffer_writer, parquet_buffer_writer_with_config};
#[cfg(feature = "parquet")]
use test_data_gen::{generate_table, mixed_table, sample_table, with_captured_logs};

#[cfg(feature = "parquet")]
fn write_to_buffer(table: &Table) -> Cursor<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    parquet_buffer_writer(&mut buf, table).expect("Failed to write Parquet");
    buf
}

#[test]
fn test_parquet_media_type() {
    assert_eq!(dataslot_io::PARQUET_MEDIA_TYPE, "application/vnd.apache.parquet");
}

#[cfg(feature = "parquet")]
#[test]
fn test_parquet_round_trip() {
    let table = sample_table();
    let mut buf = write_to_buffer(&table);

    let result = parquet_buffer_reader(&mut buf)
        .expect("Failed to read Parquet")
        .expect("Expected a table but got None");
    assert_eq!(result, table);
    assert_eq!(result.column_names(), vec!["a", "b"]);
}

#[cfg(feature = "parquet")]
#[test]
fn test_parquet_round_trip_all_types_with_nulls() {
    let table = mixed_table();
    let mut buf = write_to_buffer(&table);

    let result = parquet_buffer_reader(&mut buf)
        .expect("Failed to read Parquet")
        .expect("Expected a table but got None");
    assert_eq!(result.schema(), table.schema());
    assert_eq!(result, table);
}

#[cfg(feature = "parquet")]
#[test]
fn test_parquet_writer_seeks_to_zero() {
    let table = Table::new(vec![Column::int64("x", [1])]).expect("Failed to build table");
    let buf = write_to_buffer(&table);
    assert_eq!(buf.position(), 0);
    assert!(!buf.get_ref().is_empty());
}

#[cfg(feature = "parquet")]
#[test]
fn test_parquet_reader_invalid_data() {
    let mut buf = Cursor::new(b"this is not parquet data".to_vec());
    let result = parquet_buffer_reader(&mut buf).expect("Invalid data must not be an error");
    assert!(result.is_none());
}

#[cfg(feature = "parquet")]
#[test]
fn test_parquet_reader_invalid_data_logs_warning() {
    let mut buf = Cursor::new(b"this is not parquet data".to_vec());
    let (result, logs) = with_captured_logs(|| parquet_buffer_reader(&mut buf));
    assert!(result.expect("Invalid data must not be an error").is_none());
    assert!(logs.contains("WARN"), "missing warning in {logs:?}");
    assert!(logs.contains("invalid parquet buffer"));
}

#[cfg(feature = "parquet")]
#[test]
fn test_parquet_reader_empty_and_truncated_data() {
    let mut empty = Cursor::new(Vec::new());
    assert!(parquet_buffer_reader(&mut empty).expect("Empty buffer").is_none());

    let bytes = write_to_buffer(&sample_table()).into_inner();
    let mut truncated = Cursor::new(bytes[..bytes.len() / 2].to_vec());
    assert!(parquet_buffer_reader(&mut truncated).expect("Truncated buffer").is_none());
}

#[cfg(feature = "parquet")]
#[test]
fn test_parquet_empty_table_keeps_schema() {
    let schema = Schema::new(vec![
        Field::new("id", DataType::Int32, true),
        Field::new("name", DataType::Utf8, true),
    ]);
    let table = Table::empty(&schema);
    let mut buf = write_to_buffer(&table);

    let result = parquet_buffer_reader(&mut buf)
        .expect("Failed to read Parquet")
        .expect("Expected a table but got None");
    assert_eq!(result.num_rows(), 0);
    assert_eq!(result.schema(), schema);
}

#[cfg(feature = "parquet")]
#[test]
fn test_parquet_writer_rejects_table_without_columns() {
    let table = Table::new(vec![]).expect("Failed to build table");
    let mut buf = Cursor::new(Vec::new());
    let err = parquet_buffer_writer(&mut buf, &table)
        .expect_err("A table without columns must be rejected");
    assert!(matches!(err, Error::Schema(_)));
    assert!(buf.get_ref().is_empty());
}

#[cfg(feature = "parquet")]
#[test]
fn test_parquet_compression() {
    let schema = Schema::new(vec![
        Field::new("id", DataType::Int64, true),
        Field::new("label", DataType::Utf8, true),
        Field::new("score", DataType::Float64, true),
    ]);
    let table = generate_table(500, &schema);

    for compression in [
        Compression::Uncompressed,
        Compression::Snappy,
        Compression::Gzip,
        Compression::Zstd,
        Compression::Lz4,
    ] {
        let config = ParquetConfig::default()
            .with_compression(compression)
            .with_max_row_group_size(128);
        let mut buf = Cursor::new(Vec::new());
        parquet_buffer_writer_with_config(&mut buf, &table, &config)
            .expect("Failed to write Parquet");
        assert_eq!(buf.position(), 0);

        let result = parquet_buffer_reader(&mut buf)
            .expect("Failed to read Parquet")
            .expect("Expected a table but got None");
        assert_eq!(result, table, "round trip failed for {:?}", compression);
    }
}

#[cfg(feature = "parquet")]
#[test]
fn test_parquet_writer_rejects_zero_row_groups() {
    let config = ParquetConfig::default().with_max_row_group_size(0);
    let mut buf = Cursor::new(Vec::new());
    let err = parquet_buffer_writer_with_config(&mut buf, &sample_table(), &config)
        .expect_err("Zero-row row groups must be rejected");
    assert!(matches!(err, Error::Core(_)));
}

#[cfg(feature = "parquet")]
#[test]
fn test_parquet_collection_reader_appends_in_order() {
    let first = sample_table();
    let second = Table::new(vec![
        Column::int64("a", [7, 8]),
        Column::float64("b", [9.0, 10.0]),
    ])
    .expect("Failed to build table");
    let mut buffers = vec![write_to_buffer(&first), write_to_buffer(&second)];

    let result = parquet_buffer_collection_reader(&mut buffers)
        .expect("Failed to read Parquet collection")
        .expect("Expected a table but got None");

    let mut expected = first.clone();
    expected.append(second).expect("Failed to append");
    assert_eq!(result, expected);
    assert_eq!(result.num_rows(), 5);
}

#[cfg(feature = "parquet")]
#[test]
fn test_parquet_collection_reader_invalid_member() {
    let mut buffers = vec![
        write_to_buffer(&sample_table()),
        Cursor::new(b"this is not parquet data".to_vec()),
    ];
    let result = parquet_buffer_collection_reader(&mut buffers)
        .expect("Invalid data must not be an error");
    assert!(result.is_none());
}

#[cfg(feature = "parquet")]
#[test]
fn test_parquet_collection_reader_schema_mismatch() {
    let other = Table::new(vec![Column::utf8("c", ["x"])]).expect("Failed to build table");
    let mut buffers = vec![write_to_buffer(&sample_table()), write_to_buffer(&other)];
    let err = parquet_buffer_collection_reader(&mut buffers)
        .expect_err("Mismatched schemas must fail");
    assert!(matches!(err, Error::Core(_)));
}

#[cfg(feature = "parquet")]
#[test]
fn test_parquet_collection_reader_requires_input() {
    let mut buffers: Vec<Cursor<Vec<u8>>> = Vec::new();
    assert!(parquet_buffer_collection_reader(&mut buffers).is_err());
}
