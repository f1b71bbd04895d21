use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use tracing::debug;

use crate::classify::engine::{ClassifiedColumn, ColumnClassifier};
use crate::classify::filter::parse_type_filters;
use crate::cli::{Cli, OutputFormat};
use crate::parsing::fasta::read_alignment;

/// Execute the classification run.
///
/// # Errors
///
/// Returns an error if a `--types` entry is malformed, the alignment cannot
/// be read or is structurally invalid, or the output cannot be written.
pub fn run(args: &Cli) -> anyhow::Result<()> {
    // Validate the filter before touching any input.
    let accepted = match args.types.as_deref() {
        Some(entries) if !entries.is_empty() => Some(parse_type_filters(entries)?),
        _ => None,
    };

    let alignment = read_alignment(&args.alignment).with_context(|| {
        format!(
            "failed to read alignment from '{}'",
            args.alignment.display()
        )
    })?;

    debug!(
        "loaded alignment: {} rows x {} positions",
        alignment.row_count(),
        alignment.len()
    );

    let mut classifier = ColumnClassifier::new();
    let columns = classifier.classify(&alignment, accepted.as_ref());

    let mut writer = open_output(&args.classified_alignment_positions)?;
    match args.format {
        OutputFormat::Tsv => write_tsv(&mut writer, &columns)?,
        OutputFormat::Json => write_json(&mut writer, &columns)?,
    }
    writer.flush()?;

    Ok(())
}

fn open_output(path: &Path) -> anyhow::Result<Box<dyn Write>> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(io::stdout().lock()));
    }

    let file = File::create(path)
        .with_context(|| format!("failed to create output file '{}'", path.display()))?;
    Ok(Box::new(BufWriter::new(file)))
}

fn write_tsv(writer: &mut impl Write, columns: &[ClassifiedColumn]) -> io::Result<()> {
    writeln!(writer, "position\tcolumn_type\tbases")?;
    for column in columns {
        writeln!(
            writer,
            "{}\t{}\t{}",
            column.position, column.column_type, column.signature
        )?;
    }
    Ok(())
}

fn write_json(writer: &mut impl Write, columns: &[ClassifiedColumn]) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, columns)?;
    writeln!(writer)?;
    Ok(())
}
