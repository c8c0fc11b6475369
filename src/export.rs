use crate::types::{CategoryCode, ThematicTable};
use anyhow::{Context, Result};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

pub fn write_table<W: Write>(table: &ThematicTable, format: OutputFormat, out: W) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(table, out),
        OutputFormat::Csv => write_csv(table, out),
    }
}

fn write_json<W: Write>(table: &ThematicTable, mut out: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, table).context("Failed to serialize thematic table")?;
    writeln!(out)?;
    Ok(())
}

/// One row per area: `area_id,name,totalarea,l01..l24`. Missing name/total are blank.
fn write_csv<W: Write>(table: &ThematicTable, out: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);

    let mut header = vec!["area_id".to_string(), "name".to_string(), "totalarea".to_string()];
    header.extend(CategoryCode::all().map(CategoryCode::key));
    wtr.write_record(&header)?;

    for (id, area) in table.iter() {
        let mut row = vec![
            id.clone(),
            area.name.clone().unwrap_or_default(),
            area.total_area.map(|t| t.to_string()).unwrap_or_default(),
        ];
        row.extend(area.values.iter().map(|(_, v)| v.to_string()));
        wtr.write_record(&row)?;
    }

    wtr.flush().context("Failed to write CSV")?;
    Ok(())
}
