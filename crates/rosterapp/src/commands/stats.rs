use std::collections::HashSet;

use crate::commands::{CmdResult, RosterStats};
use crate::error::Result;
use crate::model::Student;
use crate::store::backend::StorageBackend;
use crate::store::student_store::StudentStore;

pub fn run<B: StorageBackend>(store: &StudentStore<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_stats(compute(&store.get_all())))
}

pub fn compute(students: &[Student]) -> RosterStats {
    if students.is_empty() {
        return RosterStats::default();
    }
    let total = students.len();
    let sum: f64 = students.iter().map(|s| s.gpa).sum();
    let max_gpa = students.iter().map(|s| s.gpa).fold(f64::MIN, f64::max);
    let majors: HashSet<&str> = students.iter().map(|s| s.major.as_str()).collect();

    RosterStats {
        total,
        average_gpa: sum / total as f64,
        max_gpa,
        major_count: majors.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{three_students, StoreFixture};

    #[test]
    fn empty_roster_is_zeroed() {
        assert_eq!(compute(&[]), RosterStats::default());
    }

    #[test]
    fn figures_for_three() {
        let stats = compute(&three_students());
        assert_eq!(stats.total, 3);
        assert!((stats.average_gpa - (3.78 + 3.45 + 3.89) / 3.0).abs() < 1e-9);
        assert_eq!(stats.max_gpa, 3.89);
        assert_eq!(stats.major_count, 2);
    }

    #[test]
    fn run_reports_stats() {
        let fx = StoreFixture::new().with_three();
        let stats = run(&fx.store).unwrap().stats.unwrap();
        assert_eq!(stats.total, 3);
    }
}
