//! Reliability scoring: share of an employee's logs marked `Present`.

use serde::Serialize;
use strum::{AsRefStr, Display};
use utoipa::ToSchema;

use crate::model::attendance::{AttendanceRecord, AttendanceStatus};

const GOOD_ABOVE: u32 = 85;
const WARNING_ABOVE: u32 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema, AsRefStr, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Band {
    Good,
    Warning,
    Critical,
    NoData,
}

/// Present and total log counts for one employee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub present: u32,
    pub total: u32,
}

impl Tally {
    pub fn of(employee_id: &str, attendance: &[AttendanceRecord]) -> Self {
        attendance
            .iter()
            .filter(|r| r.employee_id == employee_id)
            .fold(Tally::default(), |mut t, r| {
                t.record(r);
                t
            })
    }

    /// Count one more log, whatever employee it belongs to.
    pub fn record(&mut self, log: &AttendanceRecord) {
        self.total += 1;
        if log.status == AttendanceStatus::Present {
            self.present += 1;
        }
    }

    /// Percentage rounded half up, or `None` when there are no logs.
    pub fn score(&self) -> Option<u32> {
        if self.total == 0 {
            return None;
        }
        let (present, total) = (u64::from(self.present), u64::from(self.total));
        let percent = (200 * present + total) / (2 * total);
        // present <= total, so the percentage fits back into u32
        Some(percent as u32)
    }
}

/// Reliability percentage of `employee_id` over the full attendance list.
/// `None` is the no-data sentinel for an employee without any logs.
pub fn reliability(employee_id: &str, attendance: &[AttendanceRecord]) -> Option<u32> {
    Tally::of(employee_id, attendance).score()
}

pub fn band(score: Option<u32>) -> Band {
    match score {
        None => Band::NoData,
        Some(s) if s > GOOD_ABOVE => Band::Good,
        Some(s) if s > WARNING_ABOVE => Band::Warning,
        Some(_) => Band::Critical,
    }
}

/// True when a log for the same employee and date is already present.
pub fn already_marked(
    attendance: &[AttendanceRecord],
    employee_id: &str,
    date: chrono::NaiveDate,
) -> bool {
    attendance
        .iter()
        .any(|r| r.employee_id == employee_id && r.date == date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::attendance::AttendanceStatus::{Absent, Present};
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn logs(employee_id: &str, statuses: &[AttendanceStatus]) -> Vec<AttendanceRecord> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        statuses
            .iter()
            .enumerate()
            .map(|(i, status)| AttendanceRecord {
                employee_id: employee_id.into(),
                full_name: "Ann".into(),
                date: start + chrono::Duration::days(i as i64),
                status: *status,
                remarks: None,
            })
            .collect()
    }

    #[test]
    fn three_of_four_present_is_75() {
        let attendance = logs("E1", &[Present, Present, Absent, Present]);
        assert_eq!(reliability("E1", &attendance), Some(75));
        assert_eq!(band(Some(75)), Band::Warning);
    }

    #[test]
    fn no_logs_is_the_no_data_sentinel() {
        let attendance = logs("E2", &[Present]);
        assert_eq!(reliability("E1", &attendance), None);
        assert_eq!(reliability("E1", &[]), None);
        assert_eq!(band(None), Band::NoData);
    }

    #[test]
    fn only_the_target_employee_counts() {
        let mut attendance = logs("E1", &[Present, Absent]);
        attendance.extend(logs("E2", &[Absent, Absent, Absent]));
        assert_eq!(reliability("E1", &attendance), Some(50));
        assert_eq!(reliability("E2", &attendance), Some(0));
    }

    #[test]
    fn rounds_half_up() {
        // 2/3 = 66.67, 1/3 = 33.33, 1/8 = 12.5
        assert_eq!(Tally { present: 2, total: 3 }.score(), Some(67));
        assert_eq!(Tally { present: 1, total: 3 }.score(), Some(33));
        assert_eq!(Tally { present: 1, total: 8 }.score(), Some(13));
    }

    #[test]
    fn large_counts_do_not_overflow() {
        let all = Tally { present: 30_000_000, total: 30_000_000 };
        assert_eq!(all.score(), Some(100));
        let max = Tally { present: u32::MAX, total: u32::MAX };
        assert_eq!(max.score(), Some(100));
        let half = Tally { present: u32::MAX / 2, total: u32::MAX - 1 };
        assert_eq!(half.score(), Some(50));
    }

    #[test]
    fn recording_counts_any_employee() {
        let mut attendance = logs("E1", &[Present, Absent]);
        attendance.extend(logs("E2", &[Present]));

        let mut tally = Tally::default();
        for log in &attendance {
            tally.record(log);
        }
        assert_eq!(tally, Tally { present: 2, total: 3 });
        assert_eq!(Tally::of("E1", &attendance), Tally { present: 1, total: 2 });
    }

    #[test]
    fn band_thresholds_are_exclusive() {
        assert_eq!(band(Some(100)), Band::Good);
        assert_eq!(band(Some(86)), Band::Good);
        assert_eq!(band(Some(85)), Band::Warning);
        assert_eq!(band(Some(71)), Band::Warning);
        assert_eq!(band(Some(70)), Band::Critical);
        assert_eq!(band(Some(0)), Band::Critical);
        assert_eq!(Band::NoData.as_ref(), "no-data");
    }

    #[test]
    fn duplicate_date_is_per_employee() {
        let attendance = logs("E1", &[Present]);
        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(already_marked(&attendance, "E1", day));
        assert!(!already_marked(&attendance, "E2", day));
        assert!(!already_marked(&attendance, "E1", day.succ_opt().unwrap()));
    }

    proptest! {
        #[test]
        fn score_is_a_percentage(present in 0u32..500, absent in 0u32..500) {
            let score = Tally { present, total: present + absent }.score();
            if present + absent == 0 {
                prop_assert_eq!(score, None);
            } else {
                let s = score.unwrap();
                prop_assert!(s <= 100);
                if absent == 0 {
                    prop_assert_eq!(s, 100);
                }
                if present == 0 {
                    prop_assert_eq!(s, 0);
                }
            }
        }
    }
}
