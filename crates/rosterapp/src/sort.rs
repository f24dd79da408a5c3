//! # Sort Library
//!
//! Five interchangeable sorting algorithms. Each one is a pure function: it takes a
//! slice, clones it into a fresh `Vec`, sorts that copy and returns it. Inputs are
//! never touched.
//!
//! | Method    | Best       | Average    | Worst      | Stable |
//! |-----------|------------|------------|------------|--------|
//! | insertion | O(n)       | O(n²)      | O(n²)      | yes    |
//! | selection | O(n²)      | O(n²)      | O(n²)      | yes    |
//! | bubble    | O(n)       | O(n²)      | O(n²)      | yes    |
//! | merge     | O(n log n) | O(n log n) | O(n log n) | yes    |
//! | shell     | O(n log n) | O(n log n) | O(n²)      | no     |
//!
//! Selection sort moves the minimum into place by rotating the unsorted prefix
//! instead of swapping, which keeps equal elements in input order.
//!
//! ## Descending Order
//!
//! There is no descending comparator. [`SortOrder::Desc`] is always "sort
//! ascending, then reverse", so ties come out in reverse input order.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::collation::compare;
use crate::error::{Result, RosterError};
use crate::model::{FieldKey, Student};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMethod {
    Insertion,
    Selection,
    Bubble,
    Merge,
    Shell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Best/average/worst-case running time of an algorithm, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Complexity {
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
}

impl SortMethod {
    pub fn all() -> &'static [SortMethod] {
        &[
            SortMethod::Insertion,
            SortMethod::Selection,
            SortMethod::Bubble,
            SortMethod::Merge,
            SortMethod::Shell,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMethod::Insertion => "insertion",
            SortMethod::Selection => "selection",
            SortMethod::Bubble => "bubble",
            SortMethod::Merge => "merge",
            SortMethod::Shell => "shell",
        }
    }

    pub fn is_stable(&self) -> bool {
        !matches!(self, SortMethod::Shell)
    }

    pub fn complexity(&self) -> Complexity {
        match self {
            SortMethod::Insertion | SortMethod::Bubble => Complexity {
                best: "O(n)",
                average: "O(n²)",
                worst: "O(n²)",
            },
            SortMethod::Selection => Complexity {
                best: "O(n²)",
                average: "O(n²)",
                worst: "O(n²)",
            },
            SortMethod::Merge => Complexity {
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n log n)",
            },
            SortMethod::Shell => Complexity {
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n²)",
            },
        }
    }

    /// Sorts `items` with this algorithm using an arbitrary comparator.
    pub fn sort_by<T, F>(&self, items: &[T], cmp: F) -> Vec<T>
    where
        T: Clone,
        F: Fn(&T, &T) -> Ordering,
    {
        match self {
            SortMethod::Insertion => insertion_sort(items, cmp),
            SortMethod::Selection => selection_sort(items, cmp),
            SortMethod::Bubble => bubble_sort(items, cmp),
            SortMethod::Merge => merge_sort(items, &cmp),
            SortMethod::Shell => shell_sort(items, cmp),
        }
    }

    /// Sorts students by `key`, then applies `order`.
    pub fn sort(&self, students: &[Student], key: FieldKey, order: SortOrder) -> Vec<Student> {
        let mut sorted = self.sort_by(students, |a, b| compare(a, b, key));
        if order == SortOrder::Desc {
            sorted.reverse();
        }
        sorted
    }
}

impl fmt::Display for SortMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMethod {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "insertion" => Ok(SortMethod::Insertion),
            "selection" => Ok(SortMethod::Selection),
            "bubble" => Ok(SortMethod::Bubble),
            "merge" => Ok(SortMethod::Merge),
            "shell" => Ok(SortMethod::Shell),
            other => Err(RosterError::Format(format!("unknown sort method: {}", other))),
        }
    }
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(RosterError::Format(format!("unknown sort order: {}", other))),
        }
    }
}

pub fn insertion_sort<T: Clone, F: Fn(&T, &T) -> Ordering>(items: &[T], cmp: F) -> Vec<T> {
    let mut a = items.to_vec();
    for i in 1..a.len() {
        let mut j = i;
        while j > 0 && cmp(&a[j - 1], &a[j]) == Ordering::Greater {
            a.swap(j - 1, j);
            j -= 1;
        }
    }
    a
}

pub fn selection_sort<T: Clone, F: Fn(&T, &T) -> Ordering>(items: &[T], cmp: F) -> Vec<T> {
    let mut a = items.to_vec();
    let n = a.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;
        for j in (i + 1)..n {
            if cmp(&a[j], &a[min_idx]) == Ordering::Less {
                min_idx = j;
            }
        }
        a[i..=min_idx].rotate_right(1);
    }
    a
}

pub fn bubble_sort<T: Clone, F: Fn(&T, &T) -> Ordering>(items: &[T], cmp: F) -> Vec<T> {
    let mut a = items.to_vec();
    let mut swapped = true;
    while swapped {
        swapped = false;
        for i in 1..a.len() {
            if cmp(&a[i - 1], &a[i]) == Ordering::Greater {
                a.swap(i - 1, i);
                swapped = true;
            }
        }
    }
    a
}

pub fn merge_sort<T: Clone, F: Fn(&T, &T) -> Ordering>(items: &[T], cmp: &F) -> Vec<T> {
    if items.len() <= 1 {
        return items.to_vec();
    }
    let mid = items.len() / 2;
    let left = merge_sort(&items[..mid], cmp);
    let right = merge_sort(&items[mid..], cmp);
    merge(left, right, cmp)
}

fn merge<T, F: Fn(&T, &T) -> Ordering>(left: Vec<T>, right: Vec<T>, cmp: &F) -> Vec<T> {
    let mut result = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        // Ties take from the left run.
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => cmp(l, r) != Ordering::Greater,
            _ => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        result.extend(next);
    }
    result.extend(left);
    result.extend(right);
    result
}

pub fn shell_sort<T: Clone, F: Fn(&T, &T) -> Ordering>(items: &[T], cmp: F) -> Vec<T> {
    let mut a = items.to_vec();
    let mut gap = a.len() / 2;
    while gap > 0 {
        for i in gap..a.len() {
            let mut j = i;
            while j >= gap && cmp(&a[j - gap], &a[j]) == Ordering::Greater {
                a.swap(j - gap, j);
                j -= gap;
            }
        }
        gap /= 2;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn three() -> Vec<Student> {
        vec![
            Student::new("241011400248", "Dimas", "dimas@unpam.ac.id", "TI", 3.78),
            Student::new("241011402051", "Afdal Laia", "afdal.laia@unpam.ac.id", "TI", 3.45),
            Student::new("241011400231", "Rozi", "rozi@unpam.ac.id", "TI", 3.89),
        ]
    }

    fn gpas(students: &[Student]) -> Vec<f64> {
        students.iter().map(|s| s.gpa).collect()
    }

    #[test]
    fn test_every_method_sorts_gpa_ascending() {
        for method in SortMethod::all() {
            let sorted = method.sort(&three(), FieldKey::Gpa, SortOrder::Asc);
            assert_eq!(gpas(&sorted), vec![3.45, 3.78, 3.89], "{method}");
        }
    }

    #[test]
    fn test_every_method_sorts_gpa_descending() {
        for method in SortMethod::all() {
            let sorted = method.sort(&three(), FieldKey::Gpa, SortOrder::Desc);
            assert_eq!(gpas(&sorted), vec![3.89, 3.78, 3.45], "{method}");
        }
    }

    #[test]
    fn test_sort_by_name() {
        let sorted = SortMethod::Merge.sort(&three(), FieldKey::Name, SortOrder::Asc);
        let names: Vec<_> = sorted.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Afdal Laia", "Dimas", "Rozi"]);
    }

    #[test]
    fn test_input_not_mutated() {
        let input = three();
        let before = input.clone();
        for method in SortMethod::all() {
            let _ = method.sort(&input, FieldKey::Id, SortOrder::Desc);
        }
        assert_eq!(input, before);
    }

    #[test]
    fn test_empty_and_single() {
        for method in SortMethod::all() {
            assert!(method.sort(&[], FieldKey::Id, SortOrder::Asc).is_empty());
            let one = vec![three().remove(0)];
            assert_eq!(method.sort(&one, FieldKey::Id, SortOrder::Asc), one);
        }
    }

    #[test]
    fn test_descending_reverses_ties() {
        let students = vec![
            Student::new("1", "Aldo", "a@x.id", "TI", 3.45),
            Student::new("2", "Afdal", "b@x.id", "TI", 3.45),
        ];
        let desc = SortMethod::Insertion.sort(&students, FieldKey::Gpa, SortOrder::Desc);
        let ids: Vec<_> = desc.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn test_selection_sort_is_stable_where_swap_would_not_be() {
        // A swap-based selection sort would move "a" behind "b" here.
        let items = vec![(2, "a"), (2, "b"), (1, "c")];
        let sorted = selection_sort(&items, |x, y| x.0.cmp(&y.0));
        assert_eq!(sorted, vec![(1, "c"), (2, "a"), (2, "b")]);
    }

    #[test]
    fn test_parse_method_and_order() {
        assert_eq!("Shell".parse::<SortMethod>().unwrap(), SortMethod::Shell);
        assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Desc);
        assert!("quick".parse::<SortMethod>().is_err());
        assert!("up".parse::<SortOrder>().is_err());
    }

    fn students_strategy() -> impl Strategy<Value = Vec<Student>> {
        // Small alphabets so that ties are common.
        let entry = (
            prop::sample::select(vec!["Aldo", "aldo", "Bayu", "José", "Jose", "Rozi"]),
            prop::sample::select(vec!["TI", "SI", "ti"]),
            prop::sample::select(vec![3.45, 3.5, 3.78, 4.0, 0.0]),
        );
        prop::collection::vec(entry, 0..24).prop_map(|entries| {
            entries
                .into_iter()
                .enumerate()
                .map(|(i, (name, major, gpa))| {
                    Student::new(i.to_string(), name, format!("s{i}@x.id"), major, gpa)
                })
                .collect()
        })
    }

    fn position(s: &Student) -> usize {
        s.id.parse().unwrap()
    }

    proptest! {
        #[test]
        fn prop_sorted_output_is_ordered_permutation(students in students_strategy()) {
            for method in SortMethod::all() {
                for key in FieldKey::all() {
                    let asc = method.sort(&students, *key, SortOrder::Asc);
                    for w in asc.windows(2) {
                        prop_assert_ne!(compare(&w[0], &w[1], *key), Ordering::Greater);
                    }

                    let desc = method.sort(&students, *key, SortOrder::Desc);
                    for w in desc.windows(2) {
                        prop_assert_ne!(compare(&w[0], &w[1], *key), Ordering::Less);
                    }

                    let mut ids: Vec<usize> = asc.iter().map(position).collect();
                    ids.sort_unstable();
                    prop_assert_eq!(ids, (0..students.len()).collect::<Vec<_>>());
                }
            }
        }

        #[test]
        fn prop_stable_methods_keep_tie_order(students in students_strategy()) {
            for method in SortMethod::all().iter().filter(|m| m.is_stable()) {
                for key in [FieldKey::Gpa, FieldKey::Major] {
                    let asc = method.sort(&students, key, SortOrder::Asc);
                    for w in asc.windows(2) {
                        if compare(&w[0], &w[1], key) == Ordering::Equal {
                            prop_assert!(position(&w[0]) < position(&w[1]));
                        }
                    }
                }
            }
        }
    }
}
