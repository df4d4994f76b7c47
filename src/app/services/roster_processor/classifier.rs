//! Duty-code classification
//!
//! Maps a duty code onto rest day, working shift or empty. Unrecognised codes
//! are never an error: they become shifts without a destination.

use crate::app::models::{Destination, DutyCategory};
use crate::constants::{
    DESTINATION_PREFIXES, EMPTY_SENTINEL, REST_DAY_CODES, TALLIED_REST_DAYS,
};

/// Classify a duty code, `None` meaning no duty was recorded for the day
///
/// The export's `----` placeholder is also an empty day, never a shift.
pub fn classify_duty(duty: Option<&str>) -> DutyCategory {
    let Some(code) = duty.filter(|code| *code != EMPTY_SENTINEL) else {
        return DutyCategory::Empty;
    };

    if is_rest_day_code(code) {
        let tallied = TALLIED_REST_DAYS
            .iter()
            .find(|(rest_code, _)| *rest_code == code)
            .map(|(_, rest_type)| *rest_type);
        return DutyCategory::Rest { tallied };
    }

    DutyCategory::Shift {
        destination: destination_for(code),
    }
}

/// Check whether a code is one of the rest-day codes
pub fn is_rest_day_code(code: &str) -> bool {
    REST_DAY_CODES.contains(&code)
}

/// First destination whose prefix starts the code, in table order
pub fn destination_for(code: &str) -> Option<Destination> {
    DESTINATION_PREFIXES
        .iter()
        .find(|(prefix, _)| code.starts_with(prefix))
        .map(|(_, destination)| *destination)
}
