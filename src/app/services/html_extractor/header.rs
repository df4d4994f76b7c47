//! Employee header extraction

use scraper::{ElementRef, Html, Selector};

use super::selectors::RosterSelectors;
use crate::app::models::EmployeeHeader;
use crate::error::{Result, RosterError};

/// Extract the employee name and personnel number
///
/// Both fields are required; a missing element is fatal for the run.
pub fn extract_header(document: &Html, selectors: &RosterSelectors) -> Result<EmployeeHeader> {
    let name = required_text(document, &selectors.user_name, "user-name")?;
    let personnel_number =
        required_text(document, &selectors.personnel_number, "personnel-number")?;

    Ok(EmployeeHeader {
        name,
        personnel_number,
    })
}

fn required_text(document: &Html, selector: &Selector, field: &str) -> Result<String> {
    document
        .select(selector)
        .next()
        .map(element_text)
        .ok_or_else(|| RosterError::missing_header_field(field))
}

/// Concatenated, trimmed text content of an element
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_for(html: &str) -> Result<EmployeeHeader> {
        let selectors = RosterSelectors::new().unwrap();
        extract_header(&Html::parse_document(html), &selectors)
    }

    #[test]
    fn test_extract_header() {
        let header = header_for(
            r#"<div><span class="user-name">  Ana García </span>
               <span class="personnel-number">004512</span></div>"#,
        )
        .unwrap();

        assert_eq!(header.name, "Ana García");
        assert_eq!(header.personnel_number, "004512");
    }

    #[test]
    fn test_missing_user_name() {
        let err = header_for(r#"<span class="personnel-number">1</span>"#).unwrap_err();
        match err {
            RosterError::MissingHeaderField { field } => assert_eq!(field, "user-name"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_personnel_number() {
        let err = header_for(r#"<span class="user-name">Ana</span>"#).unwrap_err();
        assert!(err.to_string().contains("personnel-number"));
    }

    #[test]
    fn test_nested_markup_text() {
        let header = header_for(
            r#"<span class="user-name"><b>Ana</b> Garcia</span>
               <span class="personnel-number">7</span>"#,
        )
        .unwrap();
        assert_eq!(header.name, "Ana Garcia");
    }
}
