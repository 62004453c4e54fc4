//! HTML report formatter
//!
//! The stock [`Formatter`] implementation: a self-contained HTML document
//! per report, one list item per match. Hosts with their own presentation
//! (other markup, localization) implement [`Formatter`] themselves; the
//! drivers never inspect the returned text.

use kinship_core::{Formatter, Template};

/// Formatter producing a standalone HTML document
///
/// Scalar arguments (ids, dates, surnames) are HTML-escaped. The `names`
/// argument of [`Template::PersonRow`] is inserted verbatim: it is this
/// formatter's own output, assembled by the driver from `NamePrimary` and
/// `NameAlias` fragments.
#[derive(Debug, Clone, Default)]
pub struct HtmlFormatter;

impl HtmlFormatter {
    /// Create the formatter
    pub fn new() -> Self {
        Self
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

fn arg<'a>(args: &'a [&'a str], index: usize) -> &'a str {
    args.get(index).copied().unwrap_or("")
}

fn header(title: &str, heading: &str) -> String {
    format!(
        "<html><head><title>{}</title></head><body>\n<h1>{}</h1>\n<ul>\n",
        title, heading
    )
}

impl Formatter for HtmlFormatter {
    fn format(&self, template: Template, args: &[&str]) -> String {
        match template {
            Template::HeaderAlive => header(
                "Dates report",
                &format!("Individuals alive during {}", escape(arg(args, 0))),
            ),
            Template::HeaderDied => header(
                "Dates report",
                &format!("Individuals who died in {} or later", escape(arg(args, 0))),
            ),
            Template::HeaderSurname => header(
                "Surnames report",
                &format!("Individuals carrying the surname {}", escape(arg(args, 0))),
            ),
            Template::HeaderMarriages => header("Marriages report", "Marriages"),
            Template::NamePrimary => format!("<b>{}</b>", escape(arg(args, 0))),
            Template::NameAlias => format!(", also {}", escape(arg(args, 0))),
            Template::PersonRow => format!(
                "<li>[{}] {}, born {}, died {}</li>\n",
                escape(arg(args, 0)),
                arg(args, 1),
                escape(arg(args, 2)),
                escape(arg(args, 3)),
            ),
            Template::SurnameRow => format!(
                "<li>[{}] {}</li>\n",
                escape(arg(args, 0)),
                escape(arg(args, 1)),
            ),
            Template::MarriageRow => format!(
                "<li>[{}] {}</li>\n",
                escape(arg(args, 0)),
                escape(arg(args, 1)),
            ),
            Template::Footer => "</ul>\n</body></html>\n".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_carries_query_value() {
        let fmt = HtmlFormatter::new();
        let text = fmt.format(Template::HeaderAlive, &["1950"]);
        assert!(text.contains("alive during 1950"));
        assert!(text.starts_with("<html>"));
    }

    #[test]
    fn test_rows_escape_markup() {
        let fmt = HtmlFormatter::new();
        let row = fmt.format(Template::SurnameRow, &["I<1>", "O'Brien & Co"]);
        assert!(row.contains("I&lt;1&gt;"));
        assert!(row.contains("O'Brien &amp; Co"));
    }

    #[test]
    fn test_person_row_keeps_name_fragment_verbatim() {
        let fmt = HtmlFormatter::new();
        let names = fmt.format(Template::NamePrimary, &["Mary Jones"]);
        let row = fmt.format(
            Template::PersonRow,
            &["I001", &names, "1900", "(unknown)"],
        );
        assert!(row.contains("<b>Mary Jones</b>"));
        assert!(row.contains("died (unknown)"));
    }

    #[test]
    fn test_alias_fragment() {
        let fmt = HtmlFormatter::new();
        assert_eq!(
            fmt.format(Template::NameAlias, &["Mary Smith"]),
            ", also Mary Smith"
        );
    }

    #[test]
    fn test_footer_closes_document() {
        let fmt = HtmlFormatter::new();
        let footer = fmt.format(Template::Footer, &[]);
        assert!(footer.contains("</body></html>"));
    }

    #[test]
    fn test_missing_args_render_empty() {
        let fmt = HtmlFormatter::new();
        let row = fmt.format(Template::MarriageRow, &["F001"]);
        assert!(row.contains("[F001]"));
    }
}
