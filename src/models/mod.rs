pub mod allocation;
pub mod daily_entry;
pub mod employee;
pub mod output_row;
pub mod policy;
pub mod schedule;
pub mod segment;
pub mod task_type;
pub mod time_entry;

pub use allocation::{Allocation, CategoryHours, CostCategory};
pub use daily_entry::DailyTimeEntry;
pub use employee::{Employee, Project};
pub use output_row::{HoursType, OutputRow};
pub use policy::OvertimePolicy;
pub use schedule::ScheduleDay;
pub use segment::{DayStatus, DayTimeline, ScheduleIndicator, Segment, SegmentKind};
pub use task_type::{TaskType, TaskTypeCodeMap};
pub use time_entry::TimeEntry;
