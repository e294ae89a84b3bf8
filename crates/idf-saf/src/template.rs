//! Minimal mustache-style rendering for SAF command templates.
//!
//! Supports `{{key}}` substitution and `{{#escape}}...{{/escape}}` blocks.
//! Block contents are rendered first, then passed through the escape
//! function. Unknown placeholders render as empty text.

/// Double every single quote, the SAF quoted-literal escaping convention.
pub fn escape_single_quotes(value: &str) -> String {
    value.replace('\'', "''")
}

/// Render a template against `vars`, applying `escape` inside escape blocks.
pub fn render_template(template: &str, vars: &[(&str, &str)], escape: fn(&str) -> String) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        if let Some(block) = after.strip_prefix("#escape}}") {
            match block.find("{{/escape}}") {
                Some(end) => {
                    let inner = render_template(&block[..end], vars, escape);
                    out.push_str(&escape(&inner));
                    rest = &block[end + "{{/escape}}".len()..];
                }
                None => {
                    // Unterminated block, keep the delimiter as literal text.
                    out.push_str("{{");
                    rest = after;
                }
            }
        } else if let Some(end) = after.find("}}") {
            let key = after[..end].trim();
            if let Some((_, value)) = vars.iter().find(|(name, _)| *name == key) {
                out.push_str(value);
            }
            rest = &after[end + 2..];
        } else {
            out.push_str("{{");
            rest = after;
        }
    }

    out.push_str(rest);
    out
}
