//! Plain-text audit summary.

use std::fmt::Write;
use std::io;

use serde::{Deserialize, Serialize};

use crate::validation::Classification;

/// How many entries each summary list shows. Table exports are never capped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    pub email_cap: usize,
    pub numeric_cap: usize,
    pub malformed_cap: usize,
    pub duplicate_cap: usize,
    pub shifted_cap: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            email_cap: 50,
            numeric_cap: 50,
            malformed_cap: 20,
            duplicate_cap: 50,
            shifted_cap: 50,
        }
    }
}

/// Renders a [`Classification`] as the human-readable summary file.
pub struct SummaryReport;

impl SummaryReport {
    /// Render the summary text.
    pub fn render(result: &Classification, config: &ReportConfig) -> String {
        let mut out = String::new();
        Self::write_to(&mut out, result, config).expect("writing to a String cannot fail");
        out
    }

    /// Render the summary straight into a writer.
    pub fn write<W: io::Write>(
        mut writer: W,
        result: &Classification,
        config: &ReportConfig,
    ) -> io::Result<()> {
        writer.write_all(Self::render(result, config).as_bytes())?;
        writer.flush()
    }

    fn write_to(
        out: &mut String,
        result: &Classification,
        config: &ReportConfig,
    ) -> std::fmt::Result {
        writeln!(out, "Total rows (excluding header): {}", result.total_rows)?;
        writeln!(out, "Column counts distribution (including header line):")?;
        for (cols, lines) in &result.column_counts {
            writeln!(out, "  columns={}: lines={}", cols, lines)?;
        }
        writeln!(out)?;

        writeln!(
            out,
            "Rows where contactName appears to be an email: {}",
            result.email_in_contact_name.len()
        )?;
        for hit in result.email_in_contact_name.iter().take(config.email_cap) {
            writeln!(
                out,
                "  line {}: facilityId={} contactName={}",
                hit.line, hit.facility_id, hit.contact_name
            )?;
        }
        writeln!(out)?;

        writeln!(
            out,
            "Rows where facilityId is numeric only: {}",
            result.numeric_facility_id.len()
        )?;
        for hit in result.numeric_facility_id.iter().take(config.numeric_cap) {
            writeln!(
                out,
                "  line {}: facilityId={} contactName={}",
                hit.line, hit.facility_id, hit.contact_name
            )?;
        }
        writeln!(out)?;

        writeln!(out, "Malformed / short rows: {}", result.malformed_rows.len())?;
        for row in result.malformed_rows.iter().take(config.malformed_cap) {
            writeln!(out, "  line {}: cols={} raw={}", row.line, row.cols(), row.raw())?;
        }
        writeln!(out)?;

        writeln!(
            out,
            "Duplicate (facilityId, contactName) groups: {}",
            result.duplicates.len()
        )?;
        for group in result.duplicates.iter().take(config.duplicate_cap) {
            writeln!(
                out,
                "  {} | {} : {} occurrences",
                group.facility_id, group.contact_name, group.count
            )?;
        }

        if !result.shifted_email_rows.is_empty() {
            writeln!(out)?;
            writeln!(
                out,
                "Rows with an email past the expected columns (possible shifted createdBy): {}",
                result.shifted_email_rows.len()
            )?;
            for line in result.shifted_email_rows.iter().take(config.shifted_cap) {
                writeln!(out, "  line {}", line)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{ContactHit, DuplicateGroup, MalformedRow};

    fn hit(line: usize) -> ContactHit {
        ContactHit {
            line,
            facility_id: line.to_string(),
            contact_name: format!("user{}@x.com", line),
        }
    }

    #[test]
    fn test_render_sections() {
        let mut result = Classification {
            total_rows: 3,
            ..Classification::default()
        };
        result.column_counts.insert(3, 4);
        result.email_in_contact_name.push(hit(2));
        result.malformed_rows.push(MalformedRow {
            line: 4,
            fields: vec!["a".into(), "b".into()],
        });
        result.duplicates.push(DuplicateGroup {
            facility_id: "10".into(),
            contact_name: "Jane".into(),
            count: 2,
            lines: vec![2, 3],
        });

        let text = SummaryReport::render(&result, &ReportConfig::default());

        assert!(text.starts_with("Total rows (excluding header): 3\n"));
        assert!(text.contains("  columns=3: lines=4\n"));
        assert!(text.contains("Rows where contactName appears to be an email: 1\n"));
        assert!(text.contains("  line 2: facilityId=2 contactName=user2@x.com\n"));
        assert!(text.contains("Rows where facilityId is numeric only: 0\n"));
        assert!(text.contains("  line 4: cols=2 raw=a|b\n"));
        assert!(text.contains("  10 | Jane : 2 occurrences\n"));
        assert!(!text.contains("shifted"));
    }

    #[test]
    fn test_lists_are_capped_but_counts_are_not() {
        let mut result = Classification::default();
        for line in 2..80 {
            result.numeric_facility_id.push(hit(line));
        }

        let text = SummaryReport::render(&result, &ReportConfig::default());

        assert!(text.contains("Rows where facilityId is numeric only: 78\n"));
        assert!(text.contains("  line 51: "));
        assert!(!text.contains("  line 52: "));
    }

    #[test]
    fn test_write_matches_render() {
        let mut result = Classification {
            total_rows: 1,
            ..Classification::default()
        };
        result.numeric_facility_id.push(hit(2));
        result.shifted_email_rows.push(2);

        let mut buf = Vec::new();
        SummaryReport::write(&mut buf, &result, &ReportConfig::default()).unwrap();

        let rendered = SummaryReport::render(&result, &ReportConfig::default());
        assert_eq!(String::from_utf8(buf).unwrap(), rendered);
        assert!(rendered.ends_with("  line 2\n"));
    }

    #[test]
    fn test_malformed_cap_is_twenty() {
        let mut result = Classification::default();
        for line in 2..40 {
            result.malformed_rows.push(MalformedRow {
                line,
                fields: vec![String::new()],
            });
        }

        let text = SummaryReport::render(&result, &ReportConfig::default());
        let listed = text.lines().filter(|l| l.contains("cols=1")).count();

        assert_eq!(listed, 20);
    }
}
