//! Cobertura XML format parser

use anyhow::{Context, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs;
use std::path::Path;

use super::CoverageRates;

/// Parse a Cobertura XML file
pub fn parse_cobertura(path: &Path) -> Result<CoverageRates> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read coverage report: {}", path.display()))?;
    parse_cobertura_string(&content)
        .with_context(|| format!("Failed to parse coverage report: {}", path.display()))
}

/// Parse Cobertura XML content from a string.
///
/// Only the root element is consulted. A missing `line-rate` or
/// `branch-rate` attribute reads as `0.0`; a present but non-numeric one is
/// an error. The whole document is still scanned: a truncated report, an
/// unbalanced tag, or content after the root element is an error.
pub fn parse_cobertura_string(content: &str) -> Result<CoverageRates> {
    let mut reader = Reader::from_str(content);
    reader.trim_text(true);

    let mut rates: Option<CoverageRates> = None;
    let mut depth = 0usize;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                visit_element(e, depth, &mut rates, reader.buffer_position())?;
                depth += 1;
            }
            Ok(Event::Empty(ref e)) => {
                visit_element(e, depth, &mut rates, reader.buffer_position())?;
            }
            Ok(Event::End(_)) => {
                depth = depth
                    .checked_sub(1)
                    .context("Cobertura XML has an unmatched closing tag")?;
            }
            Ok(Event::Text(ref t)) if depth == 0 && !t.iter().all(u8::is_ascii_whitespace) => {
                anyhow::bail!(
                    "Cobertura XML has text outside the root element at position {}",
                    reader.buffer_position()
                );
            }
            Ok(Event::Eof) => break,
            Err(e) => anyhow::bail!(
                "Error parsing Cobertura XML at position {}: {}",
                reader.buffer_position(),
                e
            ),
            _ => {}
        }
        buf.clear();
    }

    if depth != 0 {
        anyhow::bail!("Cobertura XML is truncated: {} element(s) left open", depth);
    }

    rates.context("Cobertura XML has no root element")
}

/// Read rates from the root element; any second top-level element is an error.
fn visit_element(
    e: &BytesStart,
    depth: usize,
    rates: &mut Option<CoverageRates>,
    position: usize,
) -> Result<()> {
    if depth > 0 {
        return Ok(());
    }
    if rates.is_some() {
        anyhow::bail!(
            "Cobertura XML has content after the root element at position {}",
            position
        );
    }
    *rates = Some(read_root_rates(e)?);
    Ok(())
}

fn read_root_rates(root: &BytesStart) -> Result<CoverageRates> {
    let mut rates = CoverageRates::default();

    for attr in root.attributes() {
        let attr = attr.context("Malformed attribute on root element")?;
        let target = match attr.key.as_ref() {
            b"line-rate" => &mut rates.line_rate,
            b"branch-rate" => &mut rates.branch_rate,
            _ => continue,
        };

        let value = attr.unescape_value()?;
        *target = value.trim().parse::<f64>().with_context(|| {
            format!(
                "Invalid {} value: {:?}",
                String::from_utf8_lossy(attr.key.as_ref()),
                value
            )
        })?;
    }

    Ok(rates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cobertura() {
        let xml = r#"<?xml version="1.0"?>
<coverage line-rate="0.8" branch-rate="0.5" lines-covered="80" lines-valid="100">
    <packages>
        <package name="src" line-rate="0.1" branch-rate="0.1">
            <classes>
                <class name="main" filename="src/main.rs" line-rate="0.75" branch-rate="0.5">
                    <lines>
                        <line number="1" hits="1"/>
                        <line number="2" hits="0"/>
                    </lines>
                </class>
            </classes>
        </package>
    </packages>
</coverage>"#;

        let rates = parse_cobertura_string(xml).unwrap();

        assert_eq!(rates.line_rate, 0.8);
        assert_eq!(rates.branch_rate, 0.5);
        assert!((rates.line_percentage() - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_self_closing_root() {
        let rates = parse_cobertura_string(r#"<coverage line-rate="0.9" branch-rate="0.8"/>"#).unwrap();
        assert_eq!(rates, CoverageRates { line_rate: 0.9, branch_rate: 0.8 });
    }

    #[test]
    fn test_missing_attributes_default_to_zero() {
        let rates = parse_cobertura_string("<coverage><packages/></coverage>").unwrap();
        assert_eq!(rates, CoverageRates::default());

        let rates = parse_cobertura_string(r#"<coverage branch-rate="0.4"/>"#).unwrap();
        assert_eq!(rates.line_rate, 0.0);
        assert_eq!(rates.branch_rate, 0.4);
    }

    #[test]
    fn test_root_name_is_not_checked() {
        let rates = parse_cobertura_string(r#"<report line-rate="1"/>"#).unwrap();
        assert_eq!(rates.line_rate, 1.0);
    }

    #[test]
    fn test_non_numeric_rate_is_an_error() {
        let err = parse_cobertura_string(r#"<coverage line-rate="high"/>"#).unwrap_err();
        assert!(err.to_string().contains("line-rate"));
    }

    #[test]
    fn test_malformed_xml_is_an_error() {
        assert!(parse_cobertura_string(r#"<coverage line-rate="0.5"><packages></coverage>"#).is_err());
        assert!(parse_cobertura_string("").is_err());
    }

    #[test]
    fn test_truncated_xml_is_an_error() {
        let xml = r#"<?xml version="1.0"?><coverage line-rate="0.95" branch-rate="0.5"><packages><package name="a">"#;
        let err = parse_cobertura_string(xml).unwrap_err();
        assert!(err.to_string().contains("truncated"));
    }

    #[test]
    fn test_second_root_is_an_error() {
        let xml = r#"<coverage line-rate="0.95"/><other line-rate="0.1"/>"#;
        let err = parse_cobertura_string(xml).unwrap_err();
        assert!(err.to_string().contains("after the root element"));
    }

    #[test]
    fn test_text_after_root_is_an_error() {
        assert!(parse_cobertura_string(r#"<coverage line-rate="0.95"/>garbage"#).is_err());
    }

    #[test]
    fn test_surrounding_whitespace_is_accepted() {
        let xml = "<?xml version=\"1.0\"?>\n<coverage line-rate=\"0.5\">\n  <packages/>\n</coverage>\n\n";
        assert_eq!(parse_cobertura_string(xml).unwrap().line_rate, 0.5);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = parse_cobertura(Path::new("/nonexistent/coverage.xml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/coverage.xml"));
    }
}
