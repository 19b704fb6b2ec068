//! Text and JSON rendering of assembly reports.

use std::io::{self, Write};

use crate::stats::engine::{AssemblyReport, ScaffoldSummary};
use crate::stats::percentile::SizeReport;

/// Which sequences a table describes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeClass {
    Scaffold,
    Contig,
}

impl SizeClass {
    fn noun(self) -> &'static str {
        match self {
            Self::Scaffold => "scaffold",
            Self::Contig => "contig",
        }
    }
}

/// Write the scaffold table, the contig table, and the per-scaffold table if present.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_text<W: Write>(out: &mut W, report: &AssemblyReport) -> io::Result<()> {
    write_table(out, SizeClass::Scaffold, &report.scaffolds)?;
    write_table(out, SizeClass::Contig, &report.contigs)?;
    if let Some(summaries) = &report.per_scaffold {
        write_scaffold_summaries(out, summaries)?;
    }
    Ok(())
}

/// Write one percentile table with its comment header.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_table<W: Write>(out: &mut W, class: SizeClass, report: &SizeReport) -> io::Result<()> {
    let noun = class.noun();
    writeln!(out, "# {noun}s")?;
    writeln!(out, "# total bp size: {}", report.total_size)?;
    writeln!(out, "# order by {noun}-size (descending)")?;
    writeln!(out, "# %\t(accumulated_size)\t{noun}_number\tcritical_size")?;
    for row in &report.rows {
        writeln!(
            out,
            "{:.2}\t({})\t{}\t{}",
            row.percentile, row.cumulative_size, row.rank, row.critical_size
        )?;
    }
    Ok(())
}

fn write_scaffold_summaries<W: Write>(out: &mut W, summaries: &[ScaffoldSummary]) -> io::Result<()> {
    writeln!(out, "# per scaffold")?;
    writeln!(out, "# name\tlength\tcontig_number\tgap_size")?;
    for s in summaries {
        writeln!(out, "{}\t{}\t{}\t{}", s.name, s.length, s.contig_count, s.gap_size)?;
    }
    Ok(())
}

/// Write the report as pretty-printed JSON followed by a newline.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_json<W: Write>(out: &mut W, report: &AssemblyReport) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::fasta::FastaReader;
    use crate::stats::engine::Assembly;
    use crate::stats::percentile::Thresholds;
    use std::io::Cursor;

    fn report_for(input: &str, step: u32, per_scaffold: bool) -> AssemblyReport {
        let mut reader = FastaReader::new(Cursor::new(input.as_bytes()));
        Assembly::from_reader(&mut reader, None)
            .unwrap()
            .report(&Thresholds::with_step(step).unwrap(), per_scaffold)
    }

    fn render_text(report: &AssemblyReport) -> String {
        let mut out = Vec::new();
        write_text(&mut out, report).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_tables() {
        let text = render_text(&report_for(">s1\nACGTNNNNACGT\n>s2\nACGT\n", 50, false));
        let expected = "\
# scaffolds
# total bp size: 16
# order by scaffold-size (descending)
# %\t(accumulated_size)\tscaffold_number\tcritical_size
0.50\t(12)\t0\t12
1.00\t(16)\t2\t4
# contigs
# total bp size: 12
# order by contig-size (descending)
# %\t(accumulated_size)\tcontig_number\tcritical_size
0.50\t(8)\t1\t4
1.00\t(12)\t3\t4
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_text_empty_input_has_headers_only() {
        let text = render_text(&report_for("", 5, false));
        assert_eq!(text.lines().count(), 8);
        assert!(text.lines().all(|l| l.starts_with('#')));
        assert!(text.contains("# total bp size: 0\n"));
    }

    #[test]
    fn test_text_per_scaffold() {
        let text = render_text(&report_for(">a\nACNNA\n>b\nNN\n", 100, true));
        assert!(text.ends_with("# per scaffold\n# name\tlength\tcontig_number\tgap_size\na\t5\t2\t2\nb\t2\t1\t2\n"));
    }

    #[test]
    fn test_json() {
        let report = report_for(">s\nNNNN\n", 5, true);
        let mut out = Vec::new();
        write_json(&mut out, &report).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["scaffolds"]["total_size"], 4);
        assert_eq!(value["scaffolds"]["count"], 1);
        assert_eq!(value["contigs"]["total_size"], 0);
        assert_eq!(value["contigs"]["rows"][0]["rank"], 1);
        assert_eq!(value["contigs"]["rows"][0]["percentile"], 1.0);
        assert_eq!(value["per_scaffold"][0]["gap_size"], 4);
    }

    #[test]
    fn test_json_omits_per_scaffold_when_not_requested() {
        let report = report_for(">s\nACGT\n", 5, false);
        let mut out = Vec::new();
        write_json(&mut out, &report).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert!(value.get("per_scaffold").is_none());
        assert_eq!(value["scaffolds"]["rows"].as_array().unwrap().len(), 20);
    }
}
