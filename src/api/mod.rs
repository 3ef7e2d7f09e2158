//! HTTP API module for the attendance engine.
//!
//! Stateless computation endpoints: callers post clock times, an employee
//! directory and a snapshot of shift records, and receive hours, period
//! summaries or grouped attendance reports.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    EmployeeRequest, HoursRequest, ReportRequest, ShiftRecordRequest, SummaryRequest,
};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
