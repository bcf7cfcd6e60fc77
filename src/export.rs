// src/export.rs
// =============================================================================
// CSV export of scan results.
//
// The report format is deliberately small: a "Broken URL" header followed by
// one row per 404, so the file can be handed straight to whoever fixes the
// links. Pages that scanned clean or failed to fetch are not listed.
// =============================================================================

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::report::ScanReport;

/// Writes the report's broken links to a CSV file at `path`.
///
/// The file always gets the header row, even when no broken links were
/// found, so downstream tooling can rely on the column being present.
pub fn export_csv<P: AsRef<Path>>(report: &ScanReport, path: P) -> io::Result<()> {
    let file = File::create(path)?;
    write_csv(report, file)
}

fn write_csv<W: Write>(report: &ScanReport, writer: W) -> io::Result<()> {
    let mut writer = csv::Writer::from_writer(writer);

    writer.write_record(["Broken URL"])?;
    for result in report.broken_links() {
        writer.write_record([result.url.as_str()])?;
    }

    writer.flush()?;
    Ok(())
}
