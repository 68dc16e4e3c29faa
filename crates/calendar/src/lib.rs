//! # sambat-calendar
//!
//! Table-driven conversion between the Bikram Sambat (BS) and Gregorian (AD)
//! calendars.
//!
//! BS month boundaries have no closed-form rule, so every conversion goes
//! through a curated [`ReferenceTable`] of `(BS year, BS month) -> [start,
//! end]` Gregorian spans. Dates outside the table are unsupported and come
//! back as `None`.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["JSON table"] -->|"ReferenceTable::from_json_str()"| B["ReferenceTable"]
//!     B -->|"lookup()"| C["BsMonthRange"]
//!     C -->|".days()"| D["days_in_bs_month()"]
//!     B -->|"Converter::new()"| E["Converter"]
//!     E -->|".bs_to_ad()"| F["CalendarDate (AD)"]
//!     E -->|".ad_to_bs()"| G["CalendarDate (BS)"]
//!     E -->|"month_grid()"| H["MonthGrid"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use sambat_calendar::{CalendarDate, Converter, ReferenceTable, days_in_bs_month};
//!
//! let table = ReferenceTable::builtin();
//! let converter = Converter::new(table);
//!
//! // Months are 0-indexed: 0 = Baishakh, 3 = April.
//! assert_eq!(converter.bs_to_ad(2082, 0, 1), Some(CalendarDate::ad(2025, 3, 14)));
//! assert_eq!(converter.ad_to_bs(2025, 3, 14), Some(CalendarDate::bs(2082, 0, 1)));
//! assert_eq!(days_in_bs_month(table, 2082, 0), 31);
//! assert_eq!(converter.bs_to_ad(2099, 0, 1), None);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `table` | Reference table, built-in data and validation |
//! | `json` | JSON table file format |
//! | `range` | Gregorian span of one BS month |
//! | `month_length` | Days in BS and AD months |
//! | `convert` | BS <-> AD converter |
//! | `date` | Calendar-tagged date values |
//! | `grid` | Month stepping and grid layout |
//! | `error` | Error types |

mod convert;
mod date;
mod error;
mod grid;
mod json;
mod month_length;
mod range;
mod table;
mod validate;

pub use convert::Converter;
pub use date::{CalendarDate, CalendarType, gregorian_date};
pub use error::CalendarError;
pub use grid::{MonthGrid, month_grid, shift_month};
pub use month_length::{
    BS_FALLBACK_MONTH_DAYS, days_in_ad_month, days_in_bs_month, try_days_in_bs_month,
};
pub use range::BsMonthRange;
pub use table::{ReferenceTable, TableEntry};
