use notify_defs::{NotificationFields, TemplateError};
use notify_utils::format_error_chain;
use tera::{Context, Tera};

// Stored templates are strict JSON, so they cannot carry `{{`, `}}` or backticks directly.
pub const VAR_BEGIN_MARKER: &str = "<varbegin>";
pub const VAR_END_MARKER: &str = "<varend>";
pub const BACKQUOTE_MARKER: &str = "<backquote>";

// Not ending in .html/.xml, so tera does not autoescape the output
const TEMPLATE_NAME: &str = "chat_message.json";

/// Renders a stored message template with `fields`.
///
/// Expressions are written as `<varbegin>.ServiceName<varend>`: markers are
/// swapped for tera delimiters and the leading dot of the field path is
/// dropped, since every field lives at the root of the context. With
/// `dequote`, every `<backquote>` in the output becomes a literal backtick.
pub fn render(
    template: &str,
    fields: &NotificationFields,
    dequote: bool,
) -> Result<String, TemplateError> {
    let source = remap_markers(template);

    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, &source)
        .map_err(|e| TemplateError::Syntax(format_error_chain(&e)))?;

    let context = Context::from_serialize(fields)
        .map_err(|e| TemplateError::Execution(format_error_chain(&e)))?;
    let rendered = tera
        .render(TEMPLATE_NAME, &context)
        .map_err(|e| TemplateError::Execution(format_error_chain(&e)))?;

    if dequote {
        Ok(rendered.replace(BACKQUOTE_MARKER, "`"))
    } else {
        Ok(rendered)
    }
}

fn remap_markers(template: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(pos) = rest.find(VAR_BEGIN_MARKER) {
        push_literal(&mut out, &rest[..pos]);
        out.push_str("{{ ");
        let expr = rest[pos + VAR_BEGIN_MARKER.len()..].trim_start();
        let expr = expr.strip_prefix('.').unwrap_or(expr);
        match expr.find(VAR_END_MARKER) {
            Some(end) => {
                out.push_str(&expr[..end]);
                out.push_str(" }}");
                rest = &expr[end + VAR_END_MARKER.len()..];
            }
            None => {
                // Left unterminated so tera reports the syntax error
                out.push_str(expr);
                rest = "";
            }
        }
    }
    push_literal(&mut out, rest);
    out
}

// Message text may contain `{{`, `{%` or `{#`; emit the brace as a string
// expression so tera never sees a delimiter outside the markers.
fn push_literal(out: &mut String, text: &str) {
    let text = text.replace(VAR_END_MARKER, " }}");
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '{' && matches!(chars.peek(), Some('{' | '%' | '#')) {
            out.push_str(r#"{{ "{" }}"#);
        } else {
            out.push(c);
        }
    }
}
