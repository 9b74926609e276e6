use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use arrow::array::{
    ArrayRef, Float64Array, Int32Array, StringArray, TimestampMillisecondArray, UInt32Array,
};
use arrow::datatypes::{DataType, Field, Schema, TimeUnit};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

use super::model::Record;
use crate::error::{DashboardError, Result};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Write records to a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.parquet` / `.pq` – one record batch, typed columns
/// * `.json`            – records-oriented array (`[{ "Order Date": …, … }]`)
/// * `.csv`             – header row with the original column names
pub fn write_file(path: &Path, records: &[&Record]) -> Result<()> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "parquet" | "pq" => write_parquet(path, records),
        "json" => write_json(path, records),
        "csv" => write_csv(path, records),
        other => Err(DashboardError::UnsupportedFormat(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// JSON writer
// ---------------------------------------------------------------------------

fn write_json(path: &Path, records: &[&Record]) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut out, records)?;
    out.flush()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// CSV writer
// ---------------------------------------------------------------------------

fn write_csv(path: &Path, records: &[&Record]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for rec in records {
        writer.serialize(rec)?;
    }
    writer.flush()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Parquet writer
// ---------------------------------------------------------------------------

/// Arrow schema of the exported table, in display column order.
pub fn arrow_schema() -> Schema {
    Schema::new(vec![
        Field::new("Order Date", DataType::Timestamp(TimeUnit::Millisecond, None), false),
        Field::new("Category", DataType::Utf8, false),
        Field::new("Sub-Category", DataType::Utf8, false),
        Field::new("Region", DataType::Utf8, false),
        Field::new("Segment", DataType::Utf8, false),
        Field::new("Product", DataType::Utf8, false),
        Field::new("Sales", DataType::Float64, false),
        Field::new("Quantity", DataType::UInt32, false),
        Field::new("Discount", DataType::Float64, false),
        Field::new("Profit", DataType::Float64, false),
        Field::new("Revenue", DataType::Float64, false),
        Field::new("Year", DataType::Int32, false),
        Field::new("Month", DataType::Utf8, false),
        Field::new("MonthName", DataType::Utf8, false),
    ])
}

/// Build a single record batch holding `records`.
pub fn to_record_batch(records: &[&Record]) -> Result<RecordBatch> {
    let text = |f: fn(&Record) -> &str| -> ArrayRef {
        Arc::new(StringArray::from(
            records.iter().map(|r| f(r)).collect::<Vec<_>>(),
        ))
    };
    let float = |f: fn(&Record) -> f64| -> ArrayRef {
        Arc::new(Float64Array::from(
            records.iter().map(|r| f(r)).collect::<Vec<_>>(),
        ))
    };

    let columns: Vec<ArrayRef> = vec![
        Arc::new(TimestampMillisecondArray::from(
            records
                .iter()
                .map(|r| r.order_date.and_utc().timestamp_millis())
                .collect::<Vec<_>>(),
        )),
        text(|r| r.category),
        text(|r| r.sub_category),
        text(|r| r.region),
        text(|r| r.segment),
        text(|r| r.product),
        float(|r| r.sales),
        Arc::new(UInt32Array::from(
            records.iter().map(|r| r.quantity).collect::<Vec<_>>(),
        )),
        float(|r| r.discount),
        float(|r| r.profit),
        float(|r| r.revenue),
        Arc::new(Int32Array::from(
            records.iter().map(|r| r.year).collect::<Vec<_>>(),
        )),
        text(|r| r.month.as_str()),
        text(|r| r.month_name.as_str()),
    ];

    Ok(RecordBatch::try_new(Arc::new(arrow_schema()), columns)?)
}

fn write_parquet(path: &Path, records: &[&Record]) -> Result<()> {
    let batch = to_record_batch(records)?;
    let file = File::create(path)?;
    let mut writer = ArrowWriter::try_new(file, batch.schema(), None)?;
    writer.write(&batch)?;
    writer.close()?;
    Ok(())
}
