//! # firstday-week
//!
//! First day of the week (Monday or Sunday) containing a chrono date or
//! date-time.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["&str"] -->|"parse()"| B["DateValue"]
//!     S["SystemTime / DateTime / NaiveDate"] -->|"into()"| B
//!     B -->|"first_day_of_week_from()"| C["DateValue at 00:00"]
//!     D["T: CalendarInstant"] -->|"first_day_of_week()"| E["T at 00:00"]
//!     D -->|".calendar_date()"| F["NaiveDate"]
//!     F -->|"week_start_date()"| F
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use chrono::NaiveDate;
//! use firstday_week::{DateValue, WeekBasis, first_day_of_week, first_day_of_week_from};
//!
//! // Typed: any chrono date or date-time
//! let friday = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
//! let monday = first_day_of_week(&friday, WeekBasis::Monday).unwrap(); // 2020-12-28
//! let sunday = first_day_of_week(&friday, WeekBasis::Sunday).unwrap(); // 2020-12-27
//!
//! // Loosely typed: parsed text and a free-form basis string
//! let value: DateValue = "2021-01-01T10:30:00+02:00".parse().unwrap();
//! let start = first_day_of_week_from(Some(value), Some("Sunday")).unwrap();
//! assert_eq!(start.to_string(), "2020-12-27T00:00:00+02:00");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `basis` | Week-start convention and its string adapter |
//! | `week` | Date-only week-start arithmetic |
//! | `instant` | `CalendarInstant` trait and start-of-day resolution |
//! | `value` | Tagged union of accepted date representations |
//! | `error` | Error types |

mod basis;
mod error;
mod instant;
mod value;
mod week;

pub use basis::WeekBasis;
pub use error::WeekError;
pub use instant::{CalendarInstant, first_day_of_week};
pub use value::{DateValue, first_day_of_week_from};
pub use week::week_start_date;
