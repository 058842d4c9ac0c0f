use std::fmt::Write;

use anyhow::Result;
use ee9_shared::{
    glossary::{filter_glossary, glossary_categories, group_by_letter},
    ContentStore,
};

use crate::cli::OutputFormat;

/// Matching glossary terms, grouped A-Z in table form.
pub fn render(
    store: &ContentStore,
    search: &str,
    category: Option<&str>,
    format: OutputFormat,
) -> Result<String> {
    if let Some(wanted) = category {
        let known = glossary_categories(store.glossary());
        if !known.contains(&wanted) {
            tracing::warn!("unknown glossary section `{wanted}`, expected one of {known:?}");
        }
    }

    let terms = filter_glossary(store.glossary(), search, category);
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(&terms)?);
    }
    if terms.is_empty() {
        return Ok("No terms found.\n".to_string());
    }

    let mut out = String::new();
    for (letter, group) in group_by_letter(terms) {
        writeln!(out, "{letter}")?;
        for term in group {
            match &term.full_name {
                Some(full_name) => writeln!(out, "  {} ({full_name}) [{}]", term.term, term.category)?,
                None => writeln!(out, "  {} [{}]", term.term, term.category)?,
            }
            writeln!(out, "    {}", term.definition)?;
            if !term.related_terms.is_empty() {
                writeln!(out, "    See also: {}", term.related_terms.join(", "))?;
            }
        }
    }
    Ok(out)
}
