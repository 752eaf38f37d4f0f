//! Record store over the `employees` and `attendance` tables.

pub mod attendance;
pub mod employee;
