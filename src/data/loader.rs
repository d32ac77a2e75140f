use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use arrow::array::{
    Array, ArrayRef, AsArray, BooleanArray, Float32Array, Float64Array, Int32Array, Int64Array,
    StringArray,
};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::data::model::{
    LaunchDataset, LaunchRecord, COL_BOOSTER_CATEGORY, COL_CLASS, COL_LAUNCH_SITE,
    COL_PAYLOAD_MASS,
};
use crate::error::DashboardError;

const REQUIRED_COLUMNS: [&str; 4] = [
    COL_LAUNCH_SITE,
    COL_PAYLOAD_MASS,
    COL_CLASS,
    COL_BOOSTER_CATEGORY,
];

/// Number of leading rows echoed to the debug log after a load.
const HEAD_ROWS: usize = 5;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the launch table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with the launch columns (extra columns ignored)
/// * `.json`    – `[{ "Launch Site": ..., "Payload Mass (kg)": ..., ... }, ...]`
/// * `.parquet` – same column names; numeric columns may be int or float
///
/// Any read or validation failure is reported as
/// [`DashboardError::DatasetLoad`].
pub fn load_file(path: &Path) -> crate::error::Result<LaunchDataset> {
    let records = read_records(path)
        .and_then(|records| {
            validate_records(&records)?;
            Ok(records)
        })
        .map_err(|source| DashboardError::DatasetLoad {
            path: path.to_path_buf(),
            source,
        })?;

    let dataset = LaunchDataset::from_records(records);
    log::info!(
        "Loaded {} launch records from {} (payload {}..={} kg)",
        dataset.len(),
        path.display(),
        dataset.min_payload,
        dataset.max_payload
    );
    log::info!("Launch sites: {:?}", dataset.sites);
    if log::log_enabled!(log::Level::Debug) {
        match head_table(&dataset.records) {
            Ok(table) => log::debug!("First rows:\n{table}"),
            Err(e) => log::debug!("Could not render first rows: {e:#}"),
        }
    }

    Ok(dataset)
}

fn read_records(path: &Path) -> Result<Vec<LaunchRecord>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

/// Text table of the first [`HEAD_ROWS`] records.
fn head_table(records: &[LaunchRecord]) -> Result<String> {
    let head = &records[..records.len().min(HEAD_ROWS)];
    let batch = records_to_batch(head)?;
    let table = pretty_format_batches(&[batch]).context("formatting record batch")?;
    Ok(table.to_string())
}

/// Arrow batch with the four launch columns (`class` as Int64).
pub fn records_to_batch(records: &[LaunchRecord]) -> Result<RecordBatch> {
    let schema = Arc::new(Schema::new(vec![
        Field::new(COL_LAUNCH_SITE, DataType::Utf8, false),
        Field::new(COL_PAYLOAD_MASS, DataType::Float64, false),
        Field::new(COL_CLASS, DataType::Int64, false),
        Field::new(COL_BOOSTER_CATEGORY, DataType::Utf8, false),
    ]));

    let sites = records.iter().map(|r| r.launch_site.as_str());
    let payloads = records.iter().map(|r| r.payload_mass_kg);
    let classes = records.iter().map(|r| i64::from(r.class));
    let categories = records.iter().map(|r| r.booster_version_category.as_str());

    RecordBatch::try_new(
        schema,
        vec![
            Arc::new(StringArray::from_iter_values(sites)),
            Arc::new(Float64Array::from_iter_values(payloads)),
            Arc::new(Int64Array::from_iter_values(classes)),
            Arc::new(StringArray::from_iter_values(categories)),
        ],
    )
    .context("building record batch")
}

/// Reject rows the filters and charts cannot handle.
fn validate_records(records: &[LaunchRecord]) -> Result<()> {
    if records.is_empty() {
        bail!("dataset contains no launch records");
    }
    for (row, rec) in records.iter().enumerate() {
        if rec.launch_site.trim().is_empty() {
            bail!("Row {row}: empty '{COL_LAUNCH_SITE}'");
        }
        if !rec.payload_mass_kg.is_finite() || rec.payload_mass_kg < 0.0 {
            bail!(
                "Row {row}: '{COL_PAYLOAD_MASS}' must be a non-negative number, got {}",
                rec.payload_mass_kg
            );
        }
        if rec.class > 1 {
            bail!("Row {row}: '{COL_CLASS}' must be 0 or 1, got {}", rec.class);
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Vec<LaunchRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .context("opening CSV")?;

    let headers = reader.headers().context("reading CSV headers")?.clone();
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            bail!("CSV missing '{col}' column");
        }
    }

    reader
        .deserialize::<LaunchRecord>()
        .enumerate()
        .map(|(row_no, result)| result.with_context(|| format!("CSV row {row_no}")))
        .collect()
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the default `df.to_json(orient='records')`:
///
/// ```json
/// [
///   { "Launch Site": "CCAFS LC-40", "Payload Mass (kg)": 0.0,
///     "class": 0, "Booster Version Category": "v1.0" },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Vec<LaunchRecord>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    serde_json::from_str(&text).context("parsing JSON launch records")
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with the launch columns.
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`): payload may be stored as float or int,
/// `class` as int or bool.
fn load_parquet(path: &Path) -> Result<Vec<LaunchRecord>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;

        let site_col = column(&batch, COL_LAUNCH_SITE)?;
        let payload_col = column(&batch, COL_PAYLOAD_MASS)?;
        let class_col = column(&batch, COL_CLASS)?;
        let category_col = column(&batch, COL_BOOSTER_CATEGORY)?;

        for row in 0..batch.num_rows() {
            let offset = records.len();
            let failed = |col: &str| format!("Row {offset}: failed to read '{col}'");
            let record = LaunchRecord {
                launch_site: extract_string(site_col, row)
                    .with_context(|| failed(COL_LAUNCH_SITE))?,
                payload_mass_kg: extract_f64(payload_col, row)
                    .with_context(|| failed(COL_PAYLOAD_MASS))?,
                class: extract_class(class_col, row)
                    .with_context(|| failed(COL_CLASS))?,
                booster_version_category: extract_string(category_col, row)
                    .with_context(|| failed(COL_BOOSTER_CATEGORY))?,
            };
            records.push(record);
        }
    }

    Ok(records)
}

// -- Parquet / Arrow helpers --

fn column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a ArrayRef> {
    let idx = batch
        .schema()
        .index_of(name)
        .map_err(|_| anyhow::anyhow!("Parquet file missing '{name}' column"))?;
    Ok(batch.column(idx))
}

fn extract_string(col: &ArrayRef, row: usize) -> Result<String> {
    if col.is_null(row) {
        bail!("null value");
    }
    match col.data_type() {
        DataType::Utf8 => {
            let arr = col
                .as_any()
                .downcast_ref::<StringArray>()
                .context("expected StringArray")?;
            Ok(arr.value(row).to_string())
        }
        DataType::LargeUtf8 => Ok(col.as_string::<i64>().value(row).to_string()),
        other => bail!("Expected Utf8 column, got {other:?}"),
    }
}

fn extract_f64(col: &ArrayRef, row: usize) -> Result<f64> {
    if col.is_null(row) {
        bail!("null value");
    }
    match col.data_type() {
        DataType::Float64 => Ok(downcast::<Float64Array>(col)?.value(row)),
        DataType::Float32 => Ok(downcast::<Float32Array>(col)?.value(row) as f64),
        DataType::Int64 => Ok(downcast::<Int64Array>(col)?.value(row) as f64),
        DataType::Int32 => Ok(downcast::<Int32Array>(col)?.value(row) as f64),
        other => bail!("Expected numeric column, got {other:?}"),
    }
}

/// Outcome stored as int (0/1) or bool.  Out-of-range integers are reported
/// here; the 0/1 check itself happens in `validate_records`.
fn extract_class(col: &ArrayRef, row: usize) -> Result<u8> {
    if col.is_null(row) {
        bail!("null value");
    }
    let value: i64 = match col.data_type() {
        DataType::Boolean => i64::from(downcast::<BooleanArray>(col)?.value(row)),
        DataType::Int64 => downcast::<Int64Array>(col)?.value(row),
        DataType::Int32 => i64::from(downcast::<Int32Array>(col)?.value(row)),
        other => bail!("Expected integer or boolean column, got {other:?}"),
    };
    u8::try_from(value).with_context(|| format!("outcome {value} out of range"))
}

fn downcast<T: 'static>(col: &ArrayRef) -> Result<&T> {
    col.as_any()
        .downcast_ref::<T>()
        .with_context(|| format!("unexpected array type {:?}", col.data_type()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use parquet::arrow::ArrowWriter;

    use super::*;

    /// Error message with its cause chain, as `main` logs it.
    fn load_error_chain(path: &Path) -> String {
        format!("{:#}", anyhow::Error::new(load_file(path).unwrap_err()))
    }

    fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_csv_ignoring_extra_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "spacex_launch_dash.csv",
            "Unnamed: 0,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category\n\
             0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0\n\
             1,2,CCAFS LC-40,0,0.0,F9 v1.0  B0004,v1.0\n\
             2,3,VAFB SLC-4E,1,500.0,F9 v1.1  B1003,v1.1\n\
             3,4,KSC LC-39A,1,2490.0,F9 FT B1031.1,FT\n",
        );

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.sites, vec!["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A"]);
        assert_eq!(ds.min_payload, 0.0);
        assert_eq!(ds.max_payload, 2490.0);
        assert_eq!(ds.records[2].booster_version_category, "v1.1");
        assert!(ds.records[3].is_success());
    }

    #[test]
    fn csv_missing_column_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "bad.csv", "Launch Site,class\nKSC LC-39A,1\n");

        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, DashboardError::DatasetLoad { .. }));
        let chain = load_error_chain(&path);
        assert!(chain.contains("Payload Mass (kg)"), "{chain}");
    }

    #[test]
    fn csv_class_outside_zero_one_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "bad_class.csv",
            "Launch Site,Payload Mass (kg),class,Booster Version Category\n\
             KSC LC-39A,100,1,FT\n\
             KSC LC-39A,200,2,FT\n",
        );

        let err = load_error_chain(&path);
        assert!(err.contains("Row 1"), "{err}");
        assert!(err.contains("must be 0 or 1"), "{err}");
    }

    #[test]
    fn negative_payload_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "neg.csv",
            "Launch Site,Payload Mass (kg),class,Booster Version Category\n\
             KSC LC-39A,-5,1,FT\n",
        );
        assert!(load_file(&path).is_err());
    }

    #[test]
    fn empty_table_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "empty.csv",
            "Launch Site,Payload Mass (kg),class,Booster Version Category\n",
        );
        let err = load_error_chain(&path);
        assert!(err.contains("no launch records"), "{err}");
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let err = load_file(Path::new("/definitely/not/here.csv")).unwrap_err();
        match err {
            DashboardError::DatasetLoad { path, .. } => {
                assert_eq!(path, Path::new("/definitely/not/here.csv"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unsupported_extension_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "launches.xlsx", "");
        let err = load_error_chain(&path);
        assert!(err.contains("Unsupported file extension: .xlsx"), "{err}");
    }

    #[test]
    fn head_table_renders_first_rows() {
        let records: Vec<LaunchRecord> = (0..8u8)
            .map(|i| LaunchRecord {
                launch_site: format!("SITE-{i}"),
                payload_mass_kg: f64::from(i) * 100.0,
                class: i % 2,
                booster_version_category: "FT".to_string(),
            })
            .collect();

        let table = head_table(&records).unwrap();
        assert!(table.contains(COL_PAYLOAD_MASS), "{table}");
        assert!(table.contains(COL_BOOSTER_CATEGORY), "{table}");
        assert!(table.contains("SITE-4"), "{table}");
        assert!(!table.contains("SITE-5"), "{table}");
        assert!(head_table(&[]).is_ok());
    }

    #[test]
    fn loads_json_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "launches.json",
            r#"[
                {"Flight Number": 1, "Launch Site": "CCAFS LC-40", "class": 0,
                 "Payload Mass (kg)": 0.0, "Booster Version Category": "v1.0"},
                {"Flight Number": 2, "Launch Site": "KSC LC-39A", "class": 1,
                 "Payload Mass (kg)": 5300, "Booster Version Category": "FT"}
            ]"#,
        );

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[1].payload_mass_kg, 5300.0);
        assert_eq!(ds.booster_categories, vec!["v1.0", "FT"]);
    }

    #[test]
    fn loads_parquet_with_int_payload_and_bool_class() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("launches.parquet");

        let schema = Arc::new(Schema::new(vec![
            Field::new(COL_LAUNCH_SITE, DataType::Utf8, false),
            Field::new(COL_PAYLOAD_MASS, DataType::Int64, false),
            Field::new(COL_CLASS, DataType::Boolean, false),
            Field::new(COL_BOOSTER_CATEGORY, DataType::Utf8, false),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(StringArray::from(vec!["VAFB SLC-4E", "CCAFS SLC-40"])),
                Arc::new(Int64Array::from(vec![9600, 3600])),
                Arc::new(BooleanArray::from(vec![true, false])),
                Arc::new(StringArray::from(vec!["B4", "FT"])),
            ],
        )
        .unwrap();
        let file = std::fs::File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].payload_mass_kg, 9600.0);
        assert_eq!(ds.records[0].class, 1);
        assert_eq!(ds.records[1].class, 0);
        assert_eq!(ds.max_payload, 9600.0);
    }
}
