//! Markup helpers for the fragments the portal writes into the page.

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Formats a number the way the page prints it: whole values carry no
/// fractional part.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

pub fn loading_spinner() -> String {
    r#"<div class="text-center"><div class="spinner-border" role="status"></div></div>"#.to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Danger,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            AlertKind::Info => "alert-info",
            AlertKind::Danger => "alert-danger",
        }
    }
}

/// Inline banner. `message` is escaped.
pub fn alert_banner(kind: AlertKind, message: &str) -> String {
    format!(r#"<div class="alert {}">{}</div>"#, kind.class(), escape(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_and_quotes() {
        assert_eq!(
            escape(r#"<script>alert('x')</script> & "y""#),
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt; &amp; &quot;y&quot;"
        );
    }

    #[test]
    fn plain_text_is_untouched() {
        assert_eq!(escape("Dr. Jane Roe"), "Dr. Jane Roe");
    }

    #[test]
    fn whole_numbers_drop_fraction() {
        assert_eq!(format_number(150.0), "150");
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(99.5), "99.5");
    }

    #[test]
    fn banner_carries_kind_class() {
        assert_eq!(
            alert_banner(AlertKind::Info, "No doctors found"),
            r#"<div class="alert alert-info">No doctors found</div>"#
        );
    }
}
