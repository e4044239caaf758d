use roster_core::application::{RosterRow, RosterSnapshot};
use roster_core::domain::SortDirection;
use roster_core::ports::{Result, RosterRenderer};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

/// Markdown renderer adapter implementation
pub struct MarkdownRosterRenderer {
    output_file: Option<PathBuf>,
}

impl MarkdownRosterRenderer {
    /// Writes to `output_file`, or to stdout when it is `None`
    pub fn new(output_file: Option<PathBuf>) -> Self {
        Self { output_file }
    }

    /// Escapes characters that would break a markdown table cell
    fn escape_cell(text: &str) -> String {
        text.chars()
            .flat_map(|c| match c {
                '|' => vec!['\\', '|'],
                '\n' | '\r' => vec![' '],
                c => vec![c],
            })
            .collect::<String>()
            .trim()
            .to_string()
    }

    fn arrow(direction: SortDirection) -> &'static str {
        match direction {
            SortDirection::Ascending => " ▲",
            SortDirection::Descending => " ▼",
        }
    }

    /// Formats the whole roster page: table, footer and grouped listing
    pub fn render_markdown(&self, snapshot: &RosterSnapshot) -> String {
        let mut output = String::new();
        output.push_str("# Employees\n\n");

        // Header row, with the arrow on the active column
        let mut header = String::from("|");
        for column in &snapshot.headers {
            let arrow = column.indicator.map(Self::arrow).unwrap_or("");
            header.push_str(&format!(" {}{} |", column.title, arrow));
        }
        header.push_str(" Actions |\n");
        output.push_str(&header);
        output.push_str("|---|---|---:|---:|---|\n");

        for row in &snapshot.rows {
            output.push_str(&format!(
                "| {} | {} | {} | {} | `remove:{}` `raise:{}` |\n",
                Self::escape_cell(&row.name),
                row.birth_date,
                row.salary,
                Self::escape_cell(&row.job_function),
                row.id,
                row.id,
            ));
        }

        output.push_str(&format!(
            "| | | | | **Total: {}** |\n\n",
            snapshot.total_salary
        ));

        if snapshot.rows.is_empty() {
            output.push_str("*[No employees]*\n\n");
        }

        // Grouped listing
        for group in &snapshot.groups {
            output.push_str(&format!("## {}\n\n", group.job_function));
            for member in &group.members {
                output.push_str(&Self::format_member(member));
            }
            output.push('\n');
        }

        output
    }

    fn format_member(member: &RosterRow) -> String {
        format!(
            "- {} — {} — {}\n",
            member.name, member.salary, member.birth_date
        )
    }
}

impl RosterRenderer for MarkdownRosterRenderer {
    fn render(&self, snapshot: &RosterSnapshot) -> Result<()> {
        let markdown = self.render_markdown(snapshot);

        match &self.output_file {
            Some(path) => {
                // Create the parent directory if it doesn't exist
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent)?;
                }
                fs::write(path, markdown)?;
                debug!(path = %path.display(), "wrote roster markdown");
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(markdown.as_bytes())?;
                stdout.flush()?;
            }
        }

        Ok(())
    }
}
