use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MonthName {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl MonthName {
    pub const ALL: [MonthName; 12] = [
        MonthName::January,
        MonthName::February,
        MonthName::March,
        MonthName::April,
        MonthName::May,
        MonthName::June,
        MonthName::July,
        MonthName::August,
        MonthName::September,
        MonthName::October,
        MonthName::November,
        MonthName::December,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            MonthName::January => "January",
            MonthName::February => "February",
            MonthName::March => "March",
            MonthName::April => "April",
            MonthName::May => "May",
            MonthName::June => "June",
            MonthName::July => "July",
            MonthName::August => "August",
            MonthName::September => "September",
            MonthName::October => "October",
            MonthName::November => "November",
            MonthName::December => "December",
        }
    }

    /// 1-based month number.
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }

    /// Exact, case-sensitive match against the full English name (DB values).
    pub fn from_exact(s: &str) -> Option<Self> {
        MonthName::ALL.iter().copied().find(|m| m.name() == s)
    }

    /// Helper: lenient match for user input (any case, surrounding spaces).
    pub fn from_input(s: &str) -> Option<Self> {
        let s = s.trim();
        MonthName::ALL
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(s))
    }

    pub fn from_number(n: u32) -> Option<Self> {
        if (1..=12).contains(&n) {
            Some(MonthName::ALL[n as usize - 1])
        } else {
            None
        }
    }
}
