//! US state options offered by the creation form.

/// A selectable state: display name and two-letter abbreviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UsState {
    /// Full name, e.g. "New York".
    pub name: &'static str,
    /// Postal abbreviation stored in records, e.g. "NY".
    pub abbreviation: &'static str,
}

const fn state(name: &'static str, abbreviation: &'static str) -> UsState {
    UsState { name, abbreviation }
}

/// All options, alphabetical by name.
pub const STATES: &[UsState] = &[
    state("Alabama", "AL"),
    state("Alaska", "AK"),
    state("Arizona", "AZ"),
    state("Arkansas", "AR"),
    state("California", "CA"),
    state("Colorado", "CO"),
    state("Connecticut", "CT"),
    state("Delaware", "DE"),
    state("District Of Columbia", "DC"),
    state("Florida", "FL"),
    state("Georgia", "GA"),
    state("Hawaii", "HI"),
    state("Idaho", "ID"),
    state("Illinois", "IL"),
    state("Indiana", "IN"),
    state("Iowa", "IA"),
    state("Kansas", "KS"),
    state("Kentucky", "KY"),
    state("Louisiana", "LA"),
    state("Maine", "ME"),
    state("Maryland", "MD"),
    state("Massachusetts", "MA"),
    state("Michigan", "MI"),
    state("Minnesota", "MN"),
    state("Mississippi", "MS"),
    state("Missouri", "MO"),
    state("Montana", "MT"),
    state("Nebraska", "NE"),
    state("Nevada", "NV"),
    state("New Hampshire", "NH"),
    state("New Jersey", "NJ"),
    state("New Mexico", "NM"),
    state("New York", "NY"),
    state("North Carolina", "NC"),
    state("North Dakota", "ND"),
    state("Ohio", "OH"),
    state("Oklahoma", "OK"),
    state("Oregon", "OR"),
    state("Pennsylvania", "PA"),
    state("Rhode Island", "RI"),
    state("South Carolina", "SC"),
    state("South Dakota", "SD"),
    state("Tennessee", "TN"),
    state("Texas", "TX"),
    state("Utah", "UT"),
    state("Vermont", "VT"),
    state("Virginia", "VA"),
    state("Washington", "WA"),
    state("West Virginia", "WV"),
    state("Wisconsin", "WI"),
    state("Wyoming", "WY"),
];

/// Look up a state by abbreviation or full name, ignoring ASCII case.
#[must_use]
pub fn find(code_or_name: &str) -> Option<&'static UsState> {
    let wanted = code_or_name.trim();
    STATES.iter().find(|s| {
        s.abbreviation.eq_ignore_ascii_case(wanted) || s.name.eq_ignore_ascii_case(wanted)
    })
}
