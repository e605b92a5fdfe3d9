//! The map and reduce code of each job.
//!
//! A [`Workload`] pins down where a job finds its key and value in an input
//! row; the per-job modules read their field positions from it.

pub mod activity;
pub mod course_users;

/// Static description of a job's input layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Workload {
    /// Job name, attached to log events.
    pub name: &'static str,
    pub input_delimiter: char,
    pub key_field: usize,
    pub value_field: usize,
}

pub const ACTIVITY: Workload = Workload {
    name: "activity",
    input_delimiter: ',',
    key_field: 1,
    value_field: 3,
};

pub const COURSE_USERS: Workload = Workload {
    name: "course-users",
    input_delimiter: ',',
    key_field: 0,
    value_field: 1,
};
