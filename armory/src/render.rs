//! Presentation sinks for the CLI: HTML page, terminal text, JSON.

use std::str::FromStr;

use armorylib::{ArmoryError, CellValue, ItemTable, TableSink};
use console::{measure_text_width, pad_str, Alignment, Style};
use serde::Serialize;
use tera::{Context, Tera};

/// Include template at compile time
const PAGE_TEMPLATE: &str = include_str!("../templates/page.html");

/// Template name; the `.html` suffix turns on auto-escaping
const PAGE_TEMPLATE_NAME: &str = "page.html";

/// Gap between text columns
const COLUMN_GAP: &str = "  ";

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Html,
    Text,
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 3] = ["html", "text", "json"];
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "html" => Ok(OutputFormat::Html),
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

/// Cell data for template rendering
#[derive(Debug, Serialize)]
struct TemplateCell {
    text: String,
    /// Right-aligned in the page
    numeric: bool,
}

/// Table data for template rendering
#[derive(Debug, Serialize)]
struct TemplateTable {
    title: String,
    headers: Vec<String>,
    rows: Vec<Vec<TemplateCell>>,
}

/// Data context for the page template
#[derive(Debug, Serialize)]
struct PageContext<'a> {
    title: &'a str,
    tables: &'a [TemplateTable],
}

fn is_right_aligned(cell: &CellValue) -> bool {
    matches!(cell, CellValue::Number(_) | CellValue::Missing)
}

fn to_template_table(table: &ItemTable) -> TemplateTable {
    TemplateTable {
        title: table.title.clone(),
        headers: table.headers.clone(),
        rows: table
            .rows
            .iter()
            .map(|row| {
                row.cells
                    .iter()
                    .map(|cell| TemplateCell {
                        text: cell.to_string(),
                        numeric: is_right_aligned(cell),
                    })
                    .collect()
            })
            .collect(),
    }
}

/// A single HTML document that tables are appended to.
#[derive(Debug)]
pub struct HtmlPage {
    title: String,
    tables: Vec<TemplateTable>,
}

impl HtmlPage {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tables: Vec::new(),
        }
    }

    /// Render the whole document.
    pub fn render(&self) -> Result<String, ArmoryError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html"]);
        tera.add_raw_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)
            .map_err(|e| ArmoryError::Render(e.to_string()))?;

        let context = Context::from_serialize(PageContext {
            title: &self.title,
            tables: &self.tables,
        })
        .map_err(|e| ArmoryError::Render(e.to_string()))?;

        tera.render(PAGE_TEMPLATE_NAME, &context)
            .map_err(|e| ArmoryError::Render(e.to_string()))
    }
}

impl TableSink for HtmlPage {
    fn append(&mut self, table: &ItemTable) -> armorylib::Result<()> {
        self.tables.push(to_template_table(table));
        Ok(())
    }
}

/// Column-aligned terminal text.
#[derive(Debug, Default)]
pub struct TextTables {
    output: String,
    styled: bool,
}

impl TextTables {
    /// `styled` turns on bold titles and headers.
    pub fn new(styled: bool) -> Self {
        Self {
            output: String::new(),
            styled,
        }
    }

    pub fn finish(self) -> String {
        self.output
    }

    fn push_table(&mut self, table: &ItemTable) {
        let bold = Style::new().bold().force_styling(self.styled);
        let cells: Vec<Vec<String>> = table
            .rows
            .iter()
            .map(|r| r.cells.iter().map(|c| c.to_string()).collect())
            .collect();

        let widths: Vec<usize> = table
            .headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                cells
                    .iter()
                    .map(|row| measure_text_width(&row[i]))
                    .chain(std::iter::once(measure_text_width(h)))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        if !self.output.is_empty() {
            self.output.push('\n');
        }
        self.output.push_str(&format!("{}\n", bold.apply_to(&table.title)));

        let header_line: Vec<String> = table
            .headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| {
                let padded = pad_str(h, *w, Alignment::Left, None);
                bold.apply_to(padded).to_string()
            })
            .collect();
        self.output.push_str(header_line.join(COLUMN_GAP).trim_end());
        self.output.push('\n');

        let total_width =
            widths.iter().sum::<usize>() + COLUMN_GAP.len() * widths.len().saturating_sub(1);
        self.output.push_str(&"-".repeat(total_width));
        self.output.push('\n');

        for (row, texts) in table.rows.iter().zip(&cells) {
            let line: Vec<String> = row
                .cells
                .iter()
                .zip(texts)
                .zip(&widths)
                .map(|((cell, text), w)| {
                    let align = if is_right_aligned(cell) {
                        Alignment::Right
                    } else {
                        Alignment::Left
                    };
                    pad_str(text, *w, align, None).into_owned()
                })
                .collect();
            self.output.push_str(line.join(COLUMN_GAP).trim_end());
            self.output.push('\n');
        }
    }
}

impl TableSink for TextTables {
    fn append(&mut self, table: &ItemTable) -> armorylib::Result<()> {
        self.push_table(table);
        Ok(())
    }
}

/// Any of the three sinks, chosen by output format.
pub enum Presenter {
    Html(HtmlPage),
    Text(TextTables),
    Json(Vec<ItemTable>),
}

impl Presenter {
    pub fn new(format: OutputFormat, styled: bool) -> Self {
        match format {
            OutputFormat::Html => Presenter::Html(HtmlPage::new("Item Tables")),
            OutputFormat::Text => Presenter::Text(TextTables::new(styled)),
            OutputFormat::Json => Presenter::Json(Vec::new()),
        }
    }

    pub fn sink(&mut self) -> &mut dyn TableSink {
        match self {
            Presenter::Html(page) => page,
            Presenter::Text(text) => text,
            Presenter::Json(tables) => tables,
        }
    }

    /// Produce the final document.
    pub fn finish(self) -> Result<String, ArmoryError> {
        match self {
            Presenter::Html(page) => page.render(),
            Presenter::Text(text) => Ok(text.finish()),
            Presenter::Json(tables) => {
                let mut json = serde_json::to_string_pretty(&tables)
                    .map_err(|e| ArmoryError::Render(e.to_string()))?;
                json.push('\n');
                Ok(json)
            }
        }
    }
}
