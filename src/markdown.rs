// SPDX-FileCopyrightText: 2026 Arturo Morgadanes Fontanería
// SPDX-License-Identifier: Apache-2.0

//! Line-oriented renderer for the markdown subset used in service and city
//! descriptions.
//!
//! The content files only ever use `##`/`###` headings, `-` list items
//! (optionally with a leading `**bold**` term) and plain paragraphs, so
//! each line maps to exactly one HTML element. This is a fixed contract
//! with the content catalog, not a general markdown implementation.

use regex::Regex;
use std::sync::LazyLock;

static BOLD_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^- \*\*(.+?)\*\*:?\s*(.*)$").expect("bold item pattern"));

/// Render a markdown-subset description to HTML, one element per line.
pub fn render(input: &str) -> String {
    input
        .split('\n')
        .map(render_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_line(line: &str) -> String {
    if let Some(rest) = line.strip_prefix("## ") {
        return format!("<h2>{rest}</h2>");
    }
    if let Some(rest) = line.strip_prefix("### ") {
        return format!("<h3>{rest}</h3>");
    }
    if line.starts_with("- **") {
        if let Some(caps) = BOLD_ITEM.captures(line) {
            let term = &caps[1];
            let rest = &caps[2];
            return if rest.is_empty() {
                format!("<li><strong>{term}</strong></li>")
            } else {
                format!("<li><strong>{term}</strong>: {rest}</li>")
            };
        }
    }
    if let Some(rest) = line.strip_prefix("- ") {
        return format!("<li>{rest}</li>");
    }
    if line.trim().is_empty() {
        return String::new();
    }
    format!("<p>{line}</p>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings() {
        assert_eq!(render("## Título"), "<h2>Título</h2>");
        assert_eq!(render("### Subtítulo"), "<h3>Subtítulo</h3>");
    }

    #[test]
    fn bold_list_items() {
        assert_eq!(
            render("- **Diagnóstico inicial** con cámara de inspección"),
            "<li><strong>Diagnóstico inicial</strong>: con cámara de inspección</li>"
        );
        assert_eq!(
            render("- **Garantía**: incluida"),
            "<li><strong>Garantía</strong>: incluida</li>"
        );
        assert_eq!(render("- **Solo el término**"), "<li><strong>Solo el término</strong></li>");
    }

    #[test]
    fn plain_list_items_and_paragraphs() {
        assert_eq!(render("- Fregaderos y lavabos"), "<li>Fregaderos y lavabos</li>");
        assert_eq!(render("Texto normal."), "<p>Texto normal.</p>");
    }

    #[test]
    fn blank_lines_become_empty_strings() {
        assert_eq!(render("## A\n\nB"), "<h2>A</h2>\n\n<p>B</p>");
        assert_eq!(render("   "), "");
    }

    #[test]
    fn renders_a_realistic_description() {
        let md = "## Servicio de Desatascos\n\nUtilizo equipos de alta presión.\n\n### Qué incluye\n\n- **Diagnóstico** con cámara\n- Limpieza completa";
        let html = render(md);
        assert!(html.contains("<h2>Servicio de Desatascos</h2>"));
        assert!(html.contains("<h3>Qué incluye</h3>"));
        assert!(html.contains("<li><strong>Diagnóstico</strong>: con cámara</li>"));
        assert!(html.contains("<li>Limpieza completa</li>"));
        assert!(html.contains("<p>Utilizo equipos de alta presión.</p>"));
    }
}
