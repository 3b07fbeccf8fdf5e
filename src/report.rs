/*!
 * Report formatting for dirclip
 *
 * Turns scanned file entries into the text blocks that get copied to the
 * clipboard, and renders an optional summary of the scan using the tabled
 * library.
 */

use std::fmt::Write as _;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::types::{FileContent, FileEntry};

/// Line that closes every block
pub const SEPARATOR: &str = "----------------------------------------";

/// Ordered file entries of one scan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    entries: Vec<FileEntry>,
}

impl Report {
    /// Append an entry in traversal order
    pub fn push(&mut self, entry: FileEntry) {
        self.entries.push(entry);
    }

    /// Entries in the order they were discovered
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    /// Number of blocks the report renders
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Concatenate all blocks into the report text
    pub fn render(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            write_block(&mut out, entry);
        }
        out
    }

    /// Count files, failures, lines and characters
    pub fn summary(&self) -> ScanSummary {
        let mut summary = ScanSummary {
            files: self.entries.len(),
            ..ScanSummary::default()
        };

        for entry in &self.entries {
            match &entry.content {
                FileContent::Text(text) => {
                    summary.lines += text.lines().count();
                    summary.chars += text.chars().count();
                }
                FileContent::Unreadable(_) => summary.unreadable += 1,
            }
        }

        summary
    }
}

/// Format one entry as a block
///
/// ```text
/// File: <relative path>
/// Content:
/// <content>
/// ----------------------------------------
/// ```
///
/// An unreadable file gets a single failure line instead of the marker
/// and content.
pub fn format_block(entry: &FileEntry) -> String {
    let mut out = String::new();
    write_block(&mut out, entry);
    out
}

fn write_block(out: &mut String, entry: &FileEntry) {
    // Writing into a String cannot fail
    let _ = writeln!(out, "File: {}", entry.display_path());
    match &entry.content {
        FileContent::Text(text) => {
            out.push_str("Content:\n");
            out.push_str(text);
            out.push('\n');
        }
        FileContent::Unreadable(reason) => {
            let _ = writeln!(out, "Failed to read file: {}", reason);
        }
    }
    out.push_str(SEPARATOR);
    out.push('\n');
}

/// Totals for one scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Number of files reported
    pub files: usize,
    /// Files whose content could not be read
    pub unreadable: usize,
    /// Lines of readable content
    pub lines: usize,
    /// Characters of readable content
    pub chars: usize,
}

impl ScanSummary {
    /// Rough LLM token estimate, four characters per token
    pub fn estimated_tokens(&self) -> usize {
        self.chars / 4
    }
}

/// Format a number with human-readable units
fn format_number(num: usize) -> String {
    if num >= 1_000_000 {
        format!("{:.1}M", num as f64 / 1_000_000.0)
    } else if num >= 1_000 {
        format!("{:.1}K", num as f64 / 1_000.0)
    } else {
        num.to_string()
    }
}

/// Render the summary as a rounded console table
pub fn summary_table(summary: &ScanSummary) -> String {
    #[derive(Tabled)]
    struct SummaryRow {
        #[tabled(rename = "Metric")]
        key: &'static str,

        #[tabled(rename = "Value")]
        value: String,
    }

    let rows = vec![
        SummaryRow {
            key: "Files",
            value: format_number(summary.files),
        },
        SummaryRow {
            key: "Unreadable",
            value: format_number(summary.unreadable),
        },
        SummaryRow {
            key: "Lines",
            value: format_number(summary.lines),
        },
        SummaryRow {
            key: "Characters",
            value: format_number(summary.chars),
        },
        SummaryRow {
            key: "LLM Tokens",
            value: format!("{} (estimated)", format_number(summary.estimated_tokens())),
        },
    ];

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Padding::new(1, 1, 0, 0))
        .with(Modify::new(Columns::new(..)).with(Alignment::left()));

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_is_forty_dashes() {
        assert_eq!(SEPARATOR.len(), 40);
        assert!(SEPARATOR.chars().all(|c| c == '-'));
    }

    #[test]
    fn text_block_layout() {
        let entry = FileEntry::new("a.txt", FileContent::Text("hello".into()));
        assert_eq!(
            format_block(&entry),
            format!("File: a.txt\nContent:\nhello\n{}\n", SEPARATOR)
        );
    }

    #[test]
    fn unreadable_block_replaces_content() {
        let entry = FileEntry::new(
            "img.png",
            FileContent::Unreadable("content is not valid UTF-8".into()),
        );
        let block = format_block(&entry);

        assert_eq!(
            block,
            format!(
                "File: img.png\nFailed to read file: content is not valid UTF-8\n{}\n",
                SEPARATOR
            )
        );
        assert!(!block.contains("Content:"));
    }

    #[test]
    fn empty_report_renders_nothing() {
        let report = Report::default();
        assert!(report.is_empty());
        assert_eq!(report.render(), "");
    }

    #[test]
    fn render_keeps_insertion_order() {
        let mut report = Report::default();
        report.push(FileEntry::new("z.txt", FileContent::Text("last".into())));
        report.push(FileEntry::new("a.txt", FileContent::Text("first".into())));

        let text = report.render();
        let z = text.find("File: z.txt").unwrap();
        let a = text.find("File: a.txt").unwrap();
        assert!(z < a);
    }

    #[test]
    fn summary_counts_text_and_failures() {
        let mut report = Report::default();
        report.push(FileEntry::new("a", FileContent::Text("one\ntwo\n".into())));
        report.push(FileEntry::new("b", FileContent::Unreadable("denied".into())));

        let summary = report.summary();
        assert_eq!(summary.files, 2);
        assert_eq!(summary.unreadable, 1);
        assert_eq!(summary.lines, 2);
        assert_eq!(summary.chars, 8);
        assert_eq!(summary.estimated_tokens(), 2);
    }

    #[test]
    fn summary_table_lists_metrics() {
        let summary = ScanSummary {
            files: 1500,
            unreadable: 3,
            lines: 42,
            chars: 2_000_000,
        };
        let table = summary_table(&summary);

        assert!(table.contains("Metric"));
        assert!(table.contains("1.5K"));
        assert!(table.contains("2.0M"));
        assert!(table.contains("500.0K (estimated)"));
    }
}
