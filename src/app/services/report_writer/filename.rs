//! Output filename construction

use regex::Regex;
use std::sync::LazyLock;

use crate::app::models::Roster;
use crate::constants::UNKNOWN_DATE;

static NAME_DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid name pattern"));
static TOKEN_DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w-]").expect("valid token pattern"));

/// `<name>_<personnel>_duties_from_<first>_to_<last>.txt`
pub fn report_filename(roster: &Roster) -> String {
    let first = roster.first_date().unwrap_or(UNKNOWN_DATE);
    let last = roster.last_date().unwrap_or(UNKNOWN_DATE);

    format!(
        "{}_{}_duties_from_{}_to_{}.txt",
        sanitize_name(&roster.header.name),
        sanitize_token(&roster.header.personnel_number),
        sanitize_token(first),
        sanitize_token(last)
    )
}

/// Drop everything but word characters and whitespace, then spaces become underscores
pub fn sanitize_name(name: &str) -> String {
    NAME_DISALLOWED.replace_all(name, "").replace(' ', "_")
}

/// Replace anything outside word characters and hyphens with an underscore
pub fn sanitize_token(value: &str) -> String {
    TOKEN_DISALLOWED.replace_all(value, "_").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{DayRecord, EmployeeHeader};

    fn roster(name: &str, personnel: &str, days: Vec<DayRecord>) -> Roster {
        Roster {
            header: EmployeeHeader {
                name: name.to_string(),
                personnel_number: personnel.to_string(),
            },
            days,
        }
    }

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("Ana García-López"), "Ana_GarcíaLópez");
        assert_eq!(sanitize_name("J. R. Smith"), "J_R_Smith");
    }

    #[test]
    fn test_sanitize_token() {
        assert_eq!(sanitize_token("01/01/2024"), "01_01_2024");
        assert_eq!(sanitize_token("Mon 01-01"), "Mon_01-01");
    }

    #[test]
    fn test_report_filename() {
        let roster = roster(
            "Ana Garcia",
            "12345",
            vec![
                DayRecord::new(Some("01/01"), None, None, None),
                DayRecord::new(Some("31/01"), None, None, None),
            ],
        );
        assert_eq!(
            report_filename(&roster),
            "Ana_Garcia_12345_duties_from_01_01_to_31_01.txt"
        );
    }

    #[test]
    fn test_report_filename_without_days() {
        let roster = roster("Ana", "1", Vec::new());
        assert_eq!(
            report_filename(&roster),
            "Ana_1_duties_from_unknown_to_unknown.txt"
        );
    }
}
