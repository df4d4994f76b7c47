//! Compiled CSS selectors for the roster export markup

use scraper::Selector;

use crate::constants::selectors;
use crate::error::{Result, RosterError};

/// Every selector the extractor needs, compiled once per document
#[derive(Debug, Clone)]
pub struct RosterSelectors {
    pub user_name: Selector,
    pub personnel_number: Selector,
    pub day_cell: Selector,
    pub date: Selector,
    pub duty_number: Selector,
    pub allocation_name: Selector,
    pub time_begin: Selector,
    pub time_end: Selector,
}

impl RosterSelectors {
    pub fn new() -> Result<Self> {
        Ok(Self {
            user_name: compile(selectors::USER_NAME)?,
            personnel_number: compile(selectors::PERSONNEL_NUMBER)?,
            day_cell: compile(selectors::DAY_CELL)?,
            date: compile(selectors::DATE)?,
            duty_number: compile(selectors::DUTY_NUMBER)?,
            allocation_name: compile(selectors::ALLOCATION_NAME)?,
            time_begin: compile(selectors::TIME_BEGIN)?,
            time_end: compile(selectors::TIME_END)?,
        })
    }
}

fn compile(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| RosterError::invalid_selector(css, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_selectors_compile() {
        assert!(RosterSelectors::new().is_ok());
    }

    #[test]
    fn test_invalid_selector_is_reported() {
        let err = compile("td..day").unwrap_err();
        assert!(matches!(err, RosterError::InvalidSelector { .. }));
        assert!(err.to_string().contains("td..day"));
    }
}
