use regex::Regex;
use regioncheck_core::{
    error::{Error, ParseError, Result},
    types::{Region, dedup_regions},
};
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

const TABLE_SELECTOR: &str = "table";
const ROW_SELECTOR: &str = "tr";
const CELL_SELECTOR: &str = "th, td";
const SLUG_PATTERN: &str = r"^[a-z]{3}[0-9]$";

/// Row of the availability matrix that marks where object storage is offered.
const SPACES_ROW: &str = "spaces";

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|_| {
        Error::from(ParseError::InvalidSelector {
            selector: css.to_string(),
        })
    })
}

fn row_cells(row: ElementRef<'_>, cell_selector: &Selector) -> Vec<String> {
    row.select(cell_selector)
        .map(|cell| cell.text().collect::<String>().trim().to_string())
        .collect()
}

/// Reads the Spaces regions from the availability matrix.
///
/// The first row of a table holds the datacenter columns (`NYC3`, `AMS3`,
/// ...). A column is a region when its cell in the `Spaces` row is not
/// empty. Column headers are lower-cased before they are matched against
/// the slug pattern.
pub(crate) fn parse_regions(html: &str, url: &str) -> Result<Vec<Region>> {
    let table_selector = selector(TABLE_SELECTOR)?;
    let row_selector = selector(ROW_SELECTOR)?;
    let cell_selector = selector(CELL_SELECTOR)?;
    let slug_pattern = Regex::new(SLUG_PATTERN).map_err(|error| ParseError::InvalidPattern {
        pattern: SLUG_PATTERN.to_string(),
        reason: error.to_string(),
    })?;

    let document = Html::parse_document(html);
    let mut slugs: Vec<String> = Vec::new();

    for table in document.select(&table_selector) {
        let rows: Vec<Vec<String>> = table
            .select(&row_selector)
            .map(|row| row_cells(row, &cell_selector))
            .collect();

        let Some((header, body)) = rows.split_first() else {
            continue;
        };
        let Some(spaces) = body.iter().find(|row| {
            row.first()
                .is_some_and(|label| label.eq_ignore_ascii_case(SPACES_ROW))
        }) else {
            continue;
        };

        for (column, label) in header.iter().enumerate().skip(1) {
            let slug = label.to_lowercase();
            if !slug_pattern.is_match(&slug) {
                continue;
            }
            if spaces.get(column).is_some_and(|mark| !mark.is_empty()) {
                slugs.push(slug);
            }
        }
    }
    debug!(columns = slugs.len(), "read Spaces availability");

    let regions = dedup_regions(slugs);
    if regions.is_empty() {
        return Err(ParseError::NoRegionsFound {
            url: url.to_string(),
        }
        .into());
    }
    Ok(regions)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <p>Datacenters such as ams2 are listed below.</p>
          <table>
            <thead><tr><th>Product</th><th>NYC1</th><th>NYC3</th><th>AMS3</th><th>TOR1</th></tr></thead>
            <tbody>
              <tr><td>Droplets</td><td>✓</td><td>✓</td><td>✓</td><td>✓</td></tr>
              <tr><td>Spaces</td><td></td><td>✓</td><td>✓</td><td> </td></tr>
            </tbody>
          </table>
          <table>
            <tr><th>Product</th><th>SGP1</th><th>NYC3</th></tr>
            <tr><td>Spaces</td><td>✓</td><td>✓</td></tr>
          </table>
        </body></html>
    "#;

    #[test]
    fn test_keeps_columns_marked_in_spaces_row() {
        let regions = parse_regions(PAGE, "https://docs.example/").unwrap();
        let ids: Vec<&str> = regions.iter().map(Region::as_str).collect();
        assert_eq!(ids, ["nyc3", "ams3", "sgp1"]);
    }

    #[test]
    fn test_droplet_only_columns_are_not_regions() {
        let regions = parse_regions(PAGE, "https://docs.example/").unwrap();
        assert!(!regions.iter().any(|region| region == "nyc1"));
        assert!(!regions.iter().any(|region| region == "tor1"));
        assert!(!regions.iter().any(|region| region == "ams2"));
    }

    #[test]
    fn test_table_without_spaces_row_is_no_regions() {
        let page = "<table><tr><th>Product</th><th>NYC3</th></tr>\
                    <tr><td>Droplets</td><td>✓</td></tr></table>";
        let error = parse_regions(page, "https://docs.example/").unwrap_err();
        assert!(matches!(
            error,
            Error::Parse(ParseError::NoRegionsFound { .. })
        ));
    }

    #[test]
    fn test_headers_that_are_not_slugs_are_skipped() {
        let page = "<table><tr><th>Product</th><th>nyc</th><th>NYC33</th><th>2024</th></tr>\
                    <tr><td>Spaces</td><td>✓</td><td>✓</td><td>✓</td></tr></table>";
        assert!(parse_regions(page, "https://docs.example/").is_err());
    }
}
