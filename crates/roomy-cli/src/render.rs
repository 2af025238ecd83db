//! Template rendering for command output.

use console::Style;
use minijinja::{Environment, Error, Value};
use serde::Serialize;

use crate::cli::OutputMode;

pub const CLASSIFY_TEMPLATE: &str = r#"{% for row in rows %}
{{ row.label | style("width") }}  {{ row.tiers | join(" ") | style("tier") }}
{% endfor %}"#;

pub const VISIBILITY_TEMPLATE: &str = r#"container {{ width }}  {{ tiers | join(" ") | style("tier") }}
  --cem  {{ (cem or "unset") | style("value") }}
  color  {{ (color or "unset") | style("value") }}
{% for label in labels %}
  {{ label.name | style("label") }}  {{ label.display | style("visible" if label.visible else "hidden") }}
{% endfor %}"#;

fn named_style(name: &str) -> Option<Style> {
    let style = match name {
        "width" => Style::new().dim(),
        "tier" => Style::new().cyan().bold(),
        "value" => Style::new().yellow(),
        "label" => Style::new().bold(),
        "visible" => Style::new().green(),
        "hidden" => Style::new().red().dim(),
        _ => return None,
    };
    Some(style.force_styling(true))
}

/// Renders command output with the `style` filter bound to `mode`.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new(mode: OutputMode) -> Self {
        let use_color = mode.should_use_color();
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.add_filter("style", move |value: Value, name: String| -> String {
            let text = value.to_string();
            match named_style(&name) {
                Some(style) if use_color => style.apply_to(text).to_string(),
                _ => text,
            }
        });
        Self { env }
    }

    pub fn render<T: Serialize>(&self, template: &str, data: &T) -> Result<String, Error> {
        self.env.render_str(template, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_template_plain() {
        let renderer = Renderer::new(OutputMode::Text);
        let out = renderer
            .render(
                CLASSIFY_TEMPLATE,
                &json!({ "rows": [
                    { "label": "0px", "tiers": ["XS"] },
                    { "label": "400px", "tiers": ["XS", "SM"] },
                ]}),
            )
            .unwrap();
        assert_eq!(out, "0px  XS\n400px  XS SM\n");
    }

    #[test]
    fn test_style_filter_colors_in_term_mode() {
        let renderer = Renderer::new(OutputMode::Term);
        let out = renderer
            .render(r#"{{ "MD" | style("tier") }}"#, &json!({}))
            .unwrap();
        assert!(out.contains("\x1b["));
        assert!(out.contains("MD"));
    }

    #[test]
    fn test_unknown_style_passes_through() {
        let renderer = Renderer::new(OutputMode::Term);
        let out = renderer
            .render(r#"{{ "x" | style("nope") }}"#, &json!({}))
            .unwrap();
        assert_eq!(out, "x");
    }
}
