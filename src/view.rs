#![cfg(feature = "web")]
use crate::mapping::ColumnMapping;
use crate::record::Record;
use handlebars::{Handlebars, RenderError, TemplateError, handlebars_helper};
use serde::Serialize;

const INDEX_TEMPLATE: &str = "index";

handlebars_helper!(is_link: |value: str| {
    value.starts_with("http://") || value.starts_with("https://")
});

#[derive(Serialize)]
struct IndexContext<'a> {
    labels: Vec<&'static str>,
    rows: Vec<Vec<&'a str>>,
    count: usize,
    column_count: usize,
}

/// Handlebars registry holding the dashboard page.
pub struct View {
    registry: Handlebars<'static>,
}

impl View {
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_helper("is_link", Box::new(is_link));
        registry.register_template_string(INDEX_TEMPLATE, include_str!("./static/index.hbs"))?;
        Ok(View { registry })
    }

    /// Render the record table.
    ///
    /// Rows are passed to the template as value arrays so cells line up with
    /// the label header regardless of map ordering. An empty slice renders
    /// the header and a "No records" row.
    pub fn render_index(
        &self,
        mapping: &ColumnMapping,
        records: &[Record],
    ) -> Result<String, RenderError> {
        let context = IndexContext {
            labels: mapping.labels(),
            rows: records.iter().map(|r| r.values().collect()).collect(),
            count: records.len(),
            column_count: mapping.len(),
        };
        self.registry.render(INDEX_TEMPLATE, &context)
    }
}
