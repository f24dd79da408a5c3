//! # Rendering
//!
//! Turns `CmdResult` data into terminal text. Every function returns a `String` so
//! output can be checked in tests; `commands.rs` does the printing.
//!
//! ## Table Layout
//!
//! The student table has a row number followed by id, name, email, major and GPA.
//! Column widths follow the widest cell (display width, so accented names line up),
//! capped at [`MAX_COL_WIDTH`]; longer cells are truncated with `…`.

use colored::Colorize;
use rosterapp::commands::{AlgorithmInfo, CmdMessage, MessageLevel, RosterStats};
use rosterapp::model::Student;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const MAX_COL_WIDTH: usize = 32;
const COL_GAP: &str = "  ";

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&line.to_string());
        out.push('\n');
    }
    out
}

pub fn render_students(students: &[Student]) -> String {
    if students.is_empty() {
        return String::new();
    }

    let header = ["#", "ID", "Name", "Email", "Major", "GPA"];
    let rows: Vec<[String; 6]> = students
        .iter()
        .enumerate()
        .map(|(i, s)| {
            [
                format!("{}.", i + 1),
                s.id.clone(),
                s.name.clone(),
                s.email.clone(),
                s.major.clone(),
                format_gpa(s.gpa),
            ]
        })
        .collect();

    let mut widths = header.map(|h| h.width());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.width()).min(MAX_COL_WIDTH);
        }
    }

    let mut out = String::new();
    let header_line = join_row(header.iter().map(|h| h.to_string()), &widths);
    out.push_str(&header_line.bold().to_string());
    out.push('\n');
    for row in rows {
        out.push_str(&join_row(row.into_iter(), &widths));
        out.push('\n');
    }
    out
}

/// Key/value block for a single student.
pub fn render_student(student: &Student) -> String {
    let fields = [
        ("ID", student.id.clone()),
        ("Name", student.name.clone()),
        ("Email", student.email.clone()),
        ("Major", student.major.clone()),
        ("GPA", format_gpa(student.gpa)),
    ];
    let mut out = String::new();
    for (label, value) in fields {
        let label = format!("{:<6}", format!("{}:", label));
        out.push_str(&format!("{} {}\n", label.dimmed(), value));
    }
    out
}

pub fn render_stats(stats: &RosterStats) -> String {
    format!(
        "{:<13} {}\n{:<13} {}\n{:<13} {}\n{:<13} {}\n",
        "Students:",
        stats.total,
        "Average GPA:",
        format_gpa(stats.average_gpa),
        "Highest GPA:",
        format_gpa(stats.max_gpa),
        "Majors:",
        stats.major_count
    )
}

pub fn render_algorithms(algorithms: &[AlgorithmInfo]) -> String {
    let header = ["Algorithm", "Best", "Average", "Worst"];
    let rows: Vec<[String; 4]> = algorithms
        .iter()
        .map(|a| {
            [
                a.name.clone(),
                a.complexity.best.to_string(),
                a.complexity.average.to_string(),
                a.complexity.worst.to_string(),
            ]
        })
        .collect();

    let mut widths = header.map(|h| h.width());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.width());
        }
    }

    let mut out = String::new();
    out.push_str(
        &join_row(header.iter().map(|h| h.to_string()), &widths)
            .bold()
            .to_string(),
    );
    out.push('\n');
    for row in rows {
        out.push_str(&join_row(row.into_iter(), &widths));
        out.push('\n');
    }
    out
}

pub fn format_gpa(gpa: f64) -> String {
    format!("{:.2}", gpa)
}

fn join_row(cells: impl Iterator<Item = String>, widths: &[usize]) -> String {
    let line: Vec<String> = cells
        .zip(widths.iter())
        .map(|(cell, &width)| pad_to_width(&truncate_to_width(&cell, width), width))
        .collect();
    line.join(COL_GAP).trim_end().to_string()
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosterapp::commands::algorithms;
    use rosterapp::store::memory::fixtures::three_students;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_students_table_aligns_columns() {
        plain();
        let out = render_students(&three_students());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("#   ID"));
        assert!(lines[2].contains("Afdal Laia"));
        let name_col = lines[0].find("Name").unwrap();
        assert_eq!(lines[1].find("Dimas").unwrap(), name_col);
        assert_eq!(lines[2].find("Afdal Laia").unwrap(), name_col);
        assert!(lines[3].ends_with("3.89"));
    }

    #[test]
    fn test_empty_table_is_blank() {
        assert_eq!(render_students(&[]), "");
    }

    #[test]
    fn test_accented_names_align() {
        plain();
        let students = vec![
            Student::new("1", "José", "j@x.id", "TI", 3.0),
            Student::new("2", "Jose", "k@x.id", "TI", 3.0),
        ];
        let out = render_students(&students);
        let lines: Vec<&str> = out.lines().collect();
        let email_at = |line: &str, needle: &str| line[..line.find(needle).unwrap()].width();
        assert_eq!(email_at(lines[1], "j@x.id"), email_at(lines[2], "k@x.id"));
    }

    #[test]
    fn test_long_cells_truncate() {
        assert_eq!(truncate_to_width("abcdef", 4), "abc…");
        assert_eq!(truncate_to_width("abc", 4), "abc");
    }

    #[test]
    fn test_gpa_has_two_decimals() {
        assert_eq!(format_gpa(3.5), "3.50");
        assert_eq!(format_gpa(0.0), "0.00");
    }

    #[test]
    fn test_stats_block() {
        let out = render_stats(&RosterStats {
            total: 3,
            average_gpa: 3.7066,
            max_gpa: 3.89,
            major_count: 2,
        });
        assert!(out.contains("Students:     3"));
        assert!(out.contains("Average GPA:  3.71"));
        assert!(out.contains("Highest GPA:  3.89"));
    }

    #[test]
    fn test_algorithms_table() {
        plain();
        let out = render_algorithms(&algorithms::run().algorithms);
        assert_eq!(out.lines().count(), 9);
        assert!(out.contains("binary search"));
        assert!(out.contains("O(log n)"));
    }

    #[test]
    fn test_messages_plain() {
        plain();
        let out = render_messages(&[
            CmdMessage::success("Done"),
            CmdMessage::info("Note"),
            CmdMessage::warning("Careful"),
            CmdMessage::error("Failed"),
        ]);
        assert_eq!(out, "Done\nNote\nCareful\nFailed\n");
    }
}
