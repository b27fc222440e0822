mod day;
mod hours;
mod minutes;
mod month;
mod now;
mod seconds;
mod temporal;
mod timezone;
mod tz;
mod year;

pub use day::DayRdfOp;
pub use hours::HoursRdfOp;
pub use minutes::MinutesRdfOp;
pub use month::MonthRdfOp;
pub use now::NowRdfOp;
pub use seconds::SecondsRdfOp;
pub use temporal::{evaluate_temporal_chain, is_temporal_operand};
pub use timezone::TimezoneRdfOp;
pub use tz::TzRdfOp;
pub use year::YearRdfOp;
