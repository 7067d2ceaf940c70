//! Table rendering.

use tracing::warn;

use crate::EntryRenderer;
use crate::node::{Align, Cell, Table};

impl Table {
    /// Table with left-aligned columns and no caption.
    #[must_use]
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let aligns = vec![Align::Left; columns.len()];
        Self {
            caption: None,
            columns,
            aligns,
            rows,
        }
    }
}

impl EntryRenderer {
    /// Render a table as a GFM pipe table.
    ///
    /// The divider row always has one cell per column. Rows are padded or
    /// truncated to the column count; both record a warning.
    pub(crate) fn render_table(&mut self, table: &Table, depth: usize) -> String {
        let width = table.columns.len();
        if width == 0 {
            if !table.rows.is_empty() {
                self.warn("table has rows but no columns".to_owned());
            }
            return String::new();
        }

        let mut lines = Vec::with_capacity(table.rows.len() + 4);
        if let Some(caption) = &table.caption {
            lines.push(format!("**{}**", self.text(caption).trim()));
            lines.push(String::new());
        }

        let header: Vec<String> = table
            .columns
            .iter()
            .map(|label| escape_cell(self.text(label).trim()))
            .collect();
        lines.push(row_line(&header));

        let divider: Vec<String> = (0..width)
            .map(|i| {
                table
                    .aligns
                    .get(i)
                    .copied()
                    .unwrap_or_default()
                    .divider()
                    .to_owned()
            })
            .collect();
        lines.push(row_line(&divider));

        for (index, row) in table.rows.iter().enumerate() {
            let mut cells: Vec<String> = row.iter().map(|c| self.render_cell(c, depth)).collect();
            if cells.len() != width {
                warn!(
                    row = index + 1,
                    cells = cells.len(),
                    expected = width,
                    "Table row does not match column count"
                );
                self.warn(format!(
                    "table row {} has {} cells, expected {width}",
                    index + 1,
                    cells.len()
                ));
                cells.resize(width, String::new());
            }
            lines.push(row_line(&cells));
        }

        lines.join("\n")
    }

    fn render_cell(&mut self, cell: &Cell, depth: usize) -> String {
        match cell {
            Cell::Text(s) => escape_cell(self.text(s).trim()),
            Cell::Number(n) | Cell::Exact(n) => n.to_string(),
            Cell::Range { min, max: Some(max) } => format!("{min}\u{2013}{max}"),
            Cell::Range { min, max: None } => format!("{min}+"),
            Cell::Entry(node) => {
                let text = self.render(node, depth);
                let joined = text
                    .lines()
                    .map(str::trim)
                    .filter(|l| !l.is_empty())
                    .collect::<Vec<_>>()
                    .join("<br>");
                escape_cell(&joined)
            }
        }
    }
}

fn row_line(cells: &[String]) -> String {
    format!("| {} |", cells.join(" | "))
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use lw_tags::TagContext;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    use crate::{EntryNode, EntryRenderer, render_value};

    use super::*;

    fn render(value: &Value) -> crate::RenderResult {
        render_value(value, TagContext::default(), 1)
    }

    #[test]
    fn test_simple_table() {
        let result = render(&json!({
            "type": "table",
            "colLabels": ["Roll", "Effect"],
            "rows": [[1, "A"], [2, "B"]]
        }));
        assert_eq!(
            result.text,
            "| Roll | Effect |\n| :-- | :-- |\n| 1 | A |\n| 2 | B |"
        );
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_caption_and_alignment() {
        let result = render(&json!({
            "type": "table",
            "caption": "Trinkets",
            "colLabels": ["d100", "Trinket", "Value"],
            "colStyles": ["col-2 text-center", "col-8", "col-2 text-right"],
            "rows": [[{"type": "cell", "roll": {"min": 1, "max": 4}}, "A {@item rope}", "1 gp"]]
        }));
        assert_eq!(
            result.text,
            "**Trinkets**\n\n| d100 | Trinket | Value |\n| :-: | :-- | --: |\n| 1\u{2013}4 | A [[Rope]] | 1 gp |"
        );
    }

    #[test]
    fn test_divider_matches_columns_for_any_row_shape() {
        let rows = [json!([]), json!([["a"]]), json!([["a", "b", "c", "d"], ["x"]])];
        for rows in rows {
            let result = render(&json!({"type": "table", "colLabels": ["A", "B", "C"], "rows": rows}));
            let divider = result.text.lines().nth(1).unwrap_or_default();
            assert_eq!(divider, "| :-- | :-- | :-- |");
            for line in result.text.lines() {
                assert_eq!(line.matches(" | ").count(), 2, "{line}");
            }
        }
    }

    #[test]
    fn test_short_and_long_rows_warn() {
        let result = render(&json!({
            "type": "table",
            "colLabels": ["A", "B"],
            "rows": [["only"], ["1", "2", "3"]]
        }));
        assert_eq!(result.text, "| A | B |\n| :-- | :-- |\n| only |  |\n| 1 | 2 |");
        assert_eq!(
            result.warnings,
            vec!["table row 1 has 1 cells, expected 2", "table row 2 has 3 cells, expected 2"]
        );
    }

    #[test]
    fn test_pipes_are_escaped() {
        let result = render(&json!({
            "type": "table",
            "colLabels": ["Creature"],
            "rows": [["{@creature goblin|mm|goblins}"]]
        }));
        assert_eq!(result.text, "| Creature |\n| :-- |\n| [[Goblin\\|goblins]] |");
    }

    #[test]
    fn test_entry_cells_join_paragraphs() {
        let result = render(&json!({
            "type": "table",
            "colLabels": ["Effect"],
            "rows": [[{"type": "entries", "entries": ["First.", "Second."]}]]
        }));
        assert_eq!(result.text, "| Effect |\n| :-- |\n| First.<br>Second. |");
    }

    #[test]
    fn test_table_new() {
        let table = Table::new(
            vec!["Level".to_owned(), "Feature".to_owned()],
            vec![vec![Cell::Text("1st".to_owned()), Cell::Text("Rage".to_owned())]],
        );
        let text = EntryRenderer::new(TagContext::default())
            .render_document(&EntryNode::Table(table), 1)
            .text;
        assert_eq!(text, "| Level | Feature |\n| :-- | :-- |\n| 1st | Rage |");
    }

    #[test]
    fn test_table_is_valid_gfm() {
        use pulldown_cmark::{Event, Options, Parser, Tag};

        let result = render(&json!({
            "type": "table",
            "colLabels": ["Roll", "Effect"],
            "rows": [[1, "A | B"], [2, "{@spell fireball}"]]
        }));
        let events: Vec<Event> = Parser::new_ext(&result.text, Options::ENABLE_TABLES).collect();
        let cells = events
            .iter()
            .filter(|e| matches!(e, Event::Start(Tag::TableCell)))
            .count();
        assert_eq!(cells, 6, "{}", result.text);
    }
}
