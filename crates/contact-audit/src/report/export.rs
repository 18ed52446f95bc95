//! Flat table exports.
//!
//! Every writer takes the upstream result as-is: field order and values
//! are emitted exactly as computed, nothing is re-validated here.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{AuditError, Result};
use crate::transform::DryRun;
use crate::validation::{ContactHit, DuplicateGroup, MalformedRow};

/// Write `(line, facilityId, contactName)` rows.
pub fn write_contact_hits<W: Write>(writer: W, hits: &[ContactHit]) -> Result<()> {
    let mut csv = csv_writer(writer);
    csv.write_record(["line", "facilityId", "contactName"])?;
    for hit in hits {
        csv.write_record([
            hit.line.to_string().as_str(),
            hit.facility_id.as_str(),
            hit.contact_name.as_str(),
        ])?;
    }
    flush(csv)
}

/// Write `(facilityId, contactName, count)` rows.
pub fn write_duplicates<W: Write>(writer: W, groups: &[DuplicateGroup]) -> Result<()> {
    let mut csv = csv_writer(writer);
    csv.write_record(["facilityId", "contactName", "count"])?;
    for group in groups {
        csv.write_record([
            group.facility_id.as_str(),
            group.contact_name.as_str(),
            group.count.to_string().as_str(),
        ])?;
    }
    flush(csv)
}

/// Write `(line, cols, raw)` rows, `raw` being the fields joined with `|`.
pub fn write_malformed<W: Write>(writer: W, rows: &[MalformedRow]) -> Result<()> {
    let mut csv = csv_writer(writer);
    csv.write_record(["line", "cols", "raw"])?;
    for row in rows {
        csv.write_record([row.line.to_string(), row.cols().to_string(), row.raw()])?;
    }
    flush(csv)
}

/// Write changed rows side by side: `line`, `orig_*` columns, `prop_*` columns.
pub fn write_before_after<W: Write>(writer: W, dry_run: &DryRun) -> Result<()> {
    let mut csv = csv_writer(writer);

    let mut header = vec!["line".to_string()];
    header.extend(dry_run.header.names().iter().map(|n| format!("orig_{}", n)));
    header.extend(
        dry_run
            .proposed_header
            .names()
            .iter()
            .map(|n| format!("prop_{}", n)),
    );
    csv.write_record(&header)?;

    for row in dry_run.changed() {
        let mut record = Vec::with_capacity(1 + row.original.len() + row.values.len());
        record.push(row.line.to_string());
        record.extend(row.original.iter().cloned());
        record.extend(row.values.iter().cloned());
        csv.write_record(&record)?;
    }
    flush(csv)
}

/// Write every proposed row under the extended header.
pub fn write_proposed<W: Write>(writer: W, dry_run: &DryRun) -> Result<()> {
    let mut csv = csv_writer(writer);
    csv.write_record(dry_run.proposed_header.names())?;
    for row in &dry_run.rows {
        csv.write_record(&row.values)?;
    }
    flush(csv)
}

/// Create `path` (and its parent directory) and hand a buffered writer to `write`.
pub fn to_file<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(BufWriter<File>) -> Result<()>,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| AuditError::io(parent, e))?;
        }
    }

    let file = File::create(path).map_err(|e| AuditError::io(path, e))?;
    write(BufWriter::new(file))
}

fn csv_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer)
}

fn flush<W: Write>(mut csv: csv::Writer<W>) -> Result<()> {
    csv.flush().map_err(|e| AuditError::Csv(e.into()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::RawRow;
    use crate::schema::Header;
    use crate::transform::TransformEngine;

    fn render<F: FnOnce(&mut Vec<u8>) -> Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_contact_hits_table() {
        let hits = vec![ContactHit {
            line: 2,
            facility_id: "10".into(),
            contact_name: "jane@x.com".into(),
        }];

        let out = render(|w| write_contact_hits(w, &hits));
        assert_eq!(out, "line,facilityId,contactName\n2,10,jane@x.com\n");
    }

    #[test]
    fn test_malformed_table_quotes_when_needed() {
        let rows = vec![MalformedRow {
            line: 5,
            fields: vec!["a,b".into(), "c".into()],
        }];

        let out = render(|w| write_malformed(w, &rows));
        assert_eq!(out, "line,cols,raw\n5,2,\"a,b|c\"\n");
    }

    #[test]
    fn test_duplicates_table() {
        let groups = vec![DuplicateGroup {
            facility_id: "10".into(),
            contact_name: "Jane".into(),
            count: 2,
            lines: vec![3, 5],
        }];

        let out = render(|w| write_duplicates(w, &groups));
        assert_eq!(out, "facilityId,contactName,count\n10,Jane,2\n");
    }

    #[test]
    fn test_before_after_only_changed_rows() {
        let engine = TransformEngine::new(Header::new(vec![
            "facilityId".into(),
            "contactName".into(),
        ]));
        let dry_run = engine.run(&[
            RawRow::new(2, vec!["F1".into(), "a@b.com".into()]),
            RawRow::new(3, vec!["F2".into(), "Bob".into()]),
        ]);

        let out = render(|w| write_before_after(w, &dry_run));
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(
            lines[0],
            "line,orig_facilityId,orig_contactName,prop_facilityId,prop_contactName,prop_contactEmail,prop_needsReview"
        );
        assert_eq!(lines[1], "2,F1,a@b.com,F1,,a@b.com,movedEmailFromName");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_proposed_has_every_row() {
        let engine = TransformEngine::new(Header::new(vec![
            "facilityId".into(),
            "contactName".into(),
        ]));
        let dry_run = engine.run(&[
            RawRow::new(2, vec!["F1".into(), "a@b.com".into()]),
            RawRow::new(3, vec!["F2".into(), "Bob".into()]),
        ]);

        let out = render(|w| write_proposed(w, &dry_run));
        assert_eq!(
            out,
            "facilityId,contactName,contactEmail,needsReview\nF1,,a@b.com,movedEmailFromName\nF2,Bob,,\n"
        );
    }
}
