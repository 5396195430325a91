//! HTML rendering of panel views through `tera`

use crate::config::AppConfig;
use crate::core::DashboardError;
use crate::host::view::View;
use tera::{Context, Tera};

const PANEL_TEMPLATE: &str = "panel.html";

const PANEL_SOURCE: &str = r#"<div class="p-4 bg-white rounded-lg shadow" data-component="{{ view.component }}">
  <h2 class="text-xl font-bold mb-4" style="color: {{ primary_color }}">{{ view.title }}</h2>
{%- if view.description %}
  <p class="text-gray-600">{{ view.description }}</p>
{%- endif %}
{%- if view.columns | length > 0 %}
  <table class="w-full">
    <thead>
      <tr>
{%- for column in view.columns %}
        <th>{{ column }}</th>
{%- endfor %}
      </tr>
    </thead>
    <tbody>
{%- for row in view.rows %}
      <tr data-key="{{ row.key }}">
{%- for cell in row.cells %}
{%- if cell.kind == "button" %}
        <td><button data-row="{{ row.key }}" class="text-white font-bold py-2 px-4 rounded" style="background-color: {{ primary_color }}">{{ cell.label }}</button></td>
{%- elif cell.kind == "select" %}
        <td><select data-row="{{ row.key }}" class="border rounded p-1">
{%- for option in cell.options %}
          <option value="{{ option }}"{% if option == cell.value %} selected{% endif %}>{{ option }}</option>
{%- endfor %}
        </select></td>
{%- else %}
        <td>{{ cell.text }}</td>
{%- endif %}
{%- endfor %}
      </tr>
{%- endfor %}
    </tbody>
  </table>
{%- endif %}
</div>
"#;

/// Renders [`View`]s to HTML fragments in the dashboard's branding colors
#[derive(Debug)]
pub struct HtmlRenderer {
    tera: Tera,
}

impl HtmlRenderer {
    pub fn new() -> Result<Self, DashboardError> {
        let mut tera = Tera::default();
        tera.add_raw_template(PANEL_TEMPLATE, PANEL_SOURCE)
            .map_err(|e| render_error("template", e))?;
        Ok(Self { tera })
    }

    /// Render one panel
    ///
    /// Text coming from records is HTML-escaped.
    pub fn render(&self, view: &View, config: &AppConfig) -> Result<String, DashboardError> {
        let mut context = Context::new();
        context.insert("view", view);
        context.insert("primary_color", &config.primary_color);
        context.insert("secondary_color", &config.secondary_color);

        self.tera
            .render(PANEL_TEMPLATE, &context)
            .map_err(|e| render_error(&view.component, e))
    }
}

fn render_error(component: &str, error: tera::Error) -> DashboardError {
    // tera nests the useful message in the source chain
    let mut message = error.to_string();
    let mut source = std::error::Error::source(&error);
    while let Some(inner) = source {
        message = format!("{}: {}", message, inner);
        source = inner.source();
    }

    DashboardError::Render {
        component: component.to_string(),
        message,
    }
}
