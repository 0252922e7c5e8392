//! Shared application state for all routes.

use crate::config::AbsentRecordMode;
use crate::service::StudentService;

#[derive(Clone)]
pub struct AppState {
    pub students: StudentService,
    pub absent_records: AbsentRecordMode,
}

impl AppState {
    pub fn new(students: StudentService, absent_records: AbsentRecordMode) -> Self {
        Self {
            students,
            absent_records,
        }
    }
}
