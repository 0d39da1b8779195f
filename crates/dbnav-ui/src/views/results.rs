//! Result table rendering.

use dbnav_core::display_value;
use serde_json::Value;

use super::html_escape;

/// Display-ready result set.
///
/// Cells hold the display form of each value; column and row order is the
/// order the server sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultTable {
    pub row_count: u64,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Turns a tabular outcome into a `ResultTable`.
///
/// No sorting, filtering or type coercion happens here.
pub struct ResultRenderer;

impl ResultRenderer {
    pub fn render(columns: &[String], rows: &[Vec<Value>], row_count: u64) -> ResultTable {
        ResultTable {
            row_count,
            columns: columns.to_vec(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(display_value).collect())
                .collect(),
        }
    }
}

impl ResultTable {
    pub fn heading(&self) -> String {
        format!("Results ({})", self.row_count)
    }

    /// Markup for the results area. Every column name and cell is escaped.
    pub fn to_html(&self) -> String {
        let mut html = format!("<h3>{}</h3>", self.heading());
        html.push_str(r#"<table class="table table-striped table-hover text-center"><tbody>"#);

        html.push_str("<tr>");
        for name in &self.columns {
            html.push_str(&format!("<th>{}</th>", html_escape(name)));
        }
        html.push_str("</tr>");

        for row in &self.rows {
            html.push_str("<tr>");
            for cell in row {
                html.push_str(&format!("<td>{}</td>", html_escape(cell)));
            }
            html.push_str("</tr>");
        }

        html.push_str("</tbody></table>");
        html
    }

    /// Aligned plain-text rendering for terminals.
    pub fn to_text(&self) -> String {
        let width_count = self
            .rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.columns.len()))
            .max()
            .unwrap_or(0);

        let mut widths = vec![0usize; width_count];
        for line in std::iter::once(&self.columns).chain(self.rows.iter()) {
            for (i, cell) in line.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }

        let format_line = |cells: &[String]| -> String {
            cells
                .iter()
                .enumerate()
                .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
                .collect::<Vec<_>>()
                .join(" | ")
                .trim_end()
                .to_string()
        };

        let mut lines = vec![self.heading(), format_line(self.columns.as_slice())];
        lines.push(
            widths
                .iter()
                .map(|w| "-".repeat(*w))
                .collect::<Vec<_>>()
                .join("-+-"),
        );
        lines.extend(self.rows.iter().map(|row| format_line(row.as_slice())));
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_render_preserves_order() {
        let table = ResultRenderer::render(
            &columns(&["x", "y"]),
            &[vec![json!("a"), json!(1)]],
            1,
        );

        assert_eq!(table.heading(), "Results (1)");
        assert_eq!(table.columns, vec!["x", "y"]);
        assert_eq!(table.rows, vec![vec!["a".to_string(), "1".to_string()]]);
    }

    #[test]
    fn test_row_count_is_taken_as_given() {
        let table = ResultRenderer::render(&columns(&["n"]), &[vec![json!(1)]], 40);
        assert_eq!(table.heading(), "Results (40)");
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn test_html() {
        let table = ResultRenderer::render(
            &columns(&["x", "y"]),
            &[vec![json!("a"), json!(1)]],
            1,
        );
        insta::assert_snapshot!(
            table.to_html(),
            @r#"<h3>Results (1)</h3><table class="table table-striped table-hover text-center"><tbody><tr><th>x</th><th>y</th></tr><tr><td>a</td><td>1</td></tr></tbody></table>"#
        );
    }

    #[test]
    fn test_html_escapes_server_data() {
        let table = ResultRenderer::render(
            &columns(&["<b>name</b>"]),
            &[vec![json!("<script>alert(1)</script>")]],
            1,
        );
        let html = table.to_html();

        assert!(!html.contains("<script>"));
        assert!(html.contains("<th>&lt;b&gt;name&lt;/b&gt;</th>"));
        assert!(html.contains("<td>&lt;script&gt;alert(1)&lt;/script&gt;</td>"));
    }

    #[test]
    fn test_null_cells_are_blank() {
        let table = ResultRenderer::render(&columns(&["name"]), &[vec![Value::Null]], 1);
        assert_eq!(table.rows[0][0], "");
        assert!(table.to_html().contains("<td></td>"));
    }

    #[test]
    fn test_text() {
        let table = ResultRenderer::render(
            &columns(&["id", "name"]),
            &[
                vec![json!(1), json!("alice")],
                vec![json!(22), Value::Null],
            ],
            2,
        );
        let expected = "\
Results (2)
id | name
---+------
1  | alice
22 |";
        assert_eq!(table.to_text(), expected);
    }
}
