// src/convert/mod.rs
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Map, Serializer, Value};
use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};
use tracing::{debug, info};

/// One data row, keyed by column name in header order.
pub type Record = Map<String, Value>;

#[derive(Debug)]
pub struct Table {
    /// Column names from the first row of the file, left to right.
    pub headers: Vec<String>,
    /// Each data row as an ordered name → value mapping.
    pub records: Vec<Record>,
}

/// Read `path` as headered CSV and collect every data row into a [`Record`].
///
/// The first row is always the header. Rows shorter than the header are
/// padded with empty strings; fields beyond the header are dropped. A
/// repeated header name keeps its first position and takes the value of the
/// last column bearing it.
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<Table> {
    let file =
        File::open(&path).with_context(|| format!("Failed to open CSV file: {:?}", path.as_ref()))?;
    let mut rdr = ReaderBuilder::new()
        .flexible(true) // field-count mismatches are data, not parse errors
        .from_reader(BufReader::new(file));

    let headers: Vec<String> = rdr
        .headers()
        .with_context(|| format!("Failed to read CSV header from {:?}", path.as_ref()))?
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut records = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result
            .with_context(|| format!("CSV parse error in {:?} at record {}", path.as_ref(), idx))?;
        let mut row = Record::with_capacity(headers.len());
        for (i, name) in headers.iter().enumerate() {
            let value = record.get(i).unwrap_or_default();
            row.insert(name.clone(), Value::String(value.to_string()));
        }
        records.push(row);
    }

    debug!(
        rows = records.len(),
        columns = headers.len(),
        "loaded CSV table"
    );
    Ok(Table { headers, records })
}

/// Serialize `records` as a JSON array indented with 4 spaces and write it to
/// `path`, overwriting any existing file there.
pub fn write_json<P: AsRef<Path>>(records: &[Record], path: P) -> Result<()> {
    let file = File::create(&path)
        .with_context(|| format!("Failed to create JSON file: {:?}", path.as_ref()))?;
    let mut out = BufWriter::new(file);

    {
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = Serializer::with_formatter(&mut out, formatter);
        records
            .serialize(&mut ser)
            .with_context(|| format!("Failed to serialize JSON to {:?}", path.as_ref()))?;
    }
    out.write_all(b"\n")?;
    out.flush()
        .with_context(|| format!("Failed to write JSON to {:?}", path.as_ref()))?;
    Ok(())
}

/// Convert the CSV file at `source` into a JSON array of objects at `dest`.
/// Returns the number of data rows written.
#[tracing::instrument(
    level = "info",
    skip(source, dest),
    fields(source = %source.as_ref().display(), dest = %dest.as_ref().display())
)]
pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(source: P, dest: Q) -> Result<usize> {
    let table = read_table(&source)?;
    write_json(&table.records, &dest)?;
    info!(rows = table.records.len(), "wrote JSON document");
    Ok(table.records.len())
}
