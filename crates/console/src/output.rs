use std::io::{self, Write};

/// Plain aligned-column table for list output.
pub struct Table {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&'static str]) -> Self {
        Self {
            headers: headers.to_vec(),
            rows: Vec::new(),
        }
    }

    pub fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.len()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() && cell.len() > widths[i] {
                    widths[i] = cell.len();
                }
            }
        }

        let mut out = String::new();
        for (i, header) in self.headers.iter().enumerate() {
            out.push_str(&format!("{:<width$}  ", header, width = widths[i]));
        }
        out.push('\n');
        for (i, _) in self.headers.iter().enumerate() {
            out.push_str(&"-".repeat(widths[i]));
            out.push_str("  ");
        }
        out.push('\n');
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                out.push_str(&format!("{:<width$}  ", cell, width = widths[i]));
            }
            out.push('\n');
        }
        out.push_str(&format!("({} rows)\n", self.rows.len()));
        out
    }

    pub fn print(&self) {
        print!("{}", self.render());
    }
}

/// Interactive yes/no prompt for destructive actions. `assume_yes` (the
/// `--yes` flag) skips the prompt.
pub fn confirm_or(assume_yes: bool, prompt: &str) -> io::Result<bool> {
    if assume_yes {
        return Ok(true);
    }

    print!("{prompt} [y/N] ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_aligns_columns_and_counts_rows() {
        let mut table = Table::new(&["ID", "Name"]);
        table.row(vec!["1".to_string(), "Ana Quispe".to_string()]);
        table.row(vec!["12".to_string(), "Luis".to_string()]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "ID  Name        ");
        assert_eq!(lines[2], "1   Ana Quispe  ");
        assert_eq!(lines[3], "12  Luis        ");
        assert_eq!(lines[4], "(2 rows)");
    }

    #[test]
    fn empty_table_still_renders_headers() {
        let table = Table::new(&["ID"]);
        let rendered = table.render();
        assert!(rendered.contains("ID"));
        assert!(rendered.contains("(0 rows)"));
    }

    #[test]
    fn assume_yes_skips_the_prompt() {
        assert!(confirm_or(true, "Delete?").unwrap());
    }
}
