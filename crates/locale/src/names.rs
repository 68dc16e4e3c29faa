//! Month and weekday names.

use sambat_calendar::CalendarType;

/// Script used for month names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Script {
    /// English names and transliterations.
    #[default]
    Latin,
    /// Nepali names in Devanagari.
    Devanagari,
}

const BS_MONTHS_LATIN: [&str; 12] = [
    "Baishakh", "Jestha", "Ashadh", "Shrawan", "Bhadra", "Ashwin", "Kartik", "Mangsir", "Poush",
    "Magh", "Falgun", "Chaitra",
];

const BS_MONTHS_DEVANAGARI: [&str; 12] = [
    "बैशाख", "जेठ", "असार", "साउन", "भदौ", "असोज", "कार्तिक", "मंसिर", "पुष", "माघ", "फागुन", "चैत",
];

const AD_MONTHS_LATIN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

const AD_MONTHS_DEVANAGARI: [&str; 12] = [
    "जनवरी", "फेब्रुअरी", "मार्च", "अप्रिल", "मे", "जुन", "जुलाई", "अगस्ट", "सेप्टेम्बर", "अक्टोबर",
    "नोभेम्बर", "डिसेम्बर",
];

/// Name of a 0-indexed month, or `None` past month 11.
pub fn month_name(calendar: CalendarType, month: u32, script: Script) -> Option<&'static str> {
    let names = match (calendar, script) {
        (CalendarType::Bs, Script::Latin) => &BS_MONTHS_LATIN,
        (CalendarType::Bs, Script::Devanagari) => &BS_MONTHS_DEVANAGARI,
        (CalendarType::Ad, Script::Latin) => &AD_MONTHS_LATIN,
        (CalendarType::Ad, Script::Devanagari) => &AD_MONTHS_DEVANAGARI,
    };
    names.get(month as usize).copied()
}

/// Sunday-first column headers for a month grid.
pub fn weekday_labels(calendar: CalendarType) -> [&'static str; 7] {
    match calendar {
        CalendarType::Bs => ["आ", "सो", "मं", "बु", "बि", "शु", "श"],
        CalendarType::Ad => ["S", "M", "T", "W", "T", "F", "S"],
    }
}
