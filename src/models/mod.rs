//! Fleet domain models.
//!
//! Input records (`Unit`, `Route`, `Schedule`, `OperationalParameters`) are
//! produced by the surrounding CRUD layer and treated as immutable during a
//! run. Output records (`Assignment`, `UnservedSchedule`, `DailyPlan`) are
//! created only by the assignment loop.
//!
//! # Domain Mappings
//!
//! | u-fleet | Bus operator | Freight | Shuttle service |
//! |---------|--------------|---------|-----------------|
//! | Unit | Bus | Truck | Van |
//! | Route | Line | Lane | Loop |
//! | Schedule | Timetabled trip | Dispatch slot | Shuttle run |
//! | DailyPlan | Duty roster | Load plan | Day sheet |

mod clock;
mod parameters;
mod plan;
mod route;
mod schedule;
mod unit;

pub use clock::{format_clock, hhmm, parse_clock, TimeWindow, MINUTES_PER_DAY};
pub use parameters::{OperationalParameters, ScoringWeights};
pub use plan::{Assignment, DailyPlan, Highlight, UnservedSchedule};
pub use route::Route;
pub use schedule::{Schedule, ALL_DAYS};
pub use unit::{Unit, UnitStatus};
