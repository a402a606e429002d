//! Output rendering for the FinBrain CLI.

use anyhow::Result;
use finbrain_client::Payload;
use finbrain_types::DataTable;
use polars::prelude::DataFrame;
use serde_json::Value;

/// Print JSON, pretty-printed.
pub(crate) fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a payload as JSON or as a table.
pub(crate) fn print_payload(payload: Payload) -> Result<()> {
    match payload {
        Payload::Json(value) => print_json(&value),
        Payload::Table(table) => {
            print_table(&table);
            Ok(())
        }
    }
}

fn print_table(table: &DataTable) {
    let frame: &DataFrame = table.data();
    if table.is_empty() {
        eprintln!("No rows");
        return;
    }
    println!("{}", frame);
    eprintln!("{} rows x {} columns", frame.height(), table.columns().len());
}
