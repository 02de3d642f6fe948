//! # Rendering
//!
//! Turns `CmdResult` payloads into terminal text. Every function returns a
//! `String` so output can be asserted on without a terminal.
//!
//! Layout (widths, truncation, padding) is computed on plain text first and
//! color is applied afterwards, so escape codes never disturb column widths.

use colored::Colorize;
use std::fmt::Write as _;
use unidb::api::{CmdMessage, MessageLevel, RegistryStats};
use unidb::model::{AnyRecord, Faculty, RecordKind, Student};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

// Column widths include one space of padding on each side.
const STUDENT_COLUMNS: [(&str, usize); 6] = [
    ("ID", 6),
    ("Name", 16),
    ("Level", 12),
    ("Major", 18),
    ("GPA", 6),
    ("Advisor", 9),
];
const FACULTY_COLUMNS: [(&str, usize); 4] = [
    ("ID", 6),
    ("Name", 18),
    ("Level", 22),
    ("Department", 20),
];
const CARD_WIDTH: usize = 42;
const STATS_LABEL_WIDTH: usize = 24;

pub fn banner() -> String {
    let art = [
        r"  _   _       _                    _ _           ____  ____  ",
        r" | | | |_ __ (_)_   _____ _ __ ___(_) |_ _   _  |  _ \| __ ) ",
        r" | | | | '_ \| \ \ / / _ \ '__/ __| | __| | | | | | | |  _ \ ",
        r" | |_| | | | | |\ V /  __/ |  \__ \ | |_| |_| | | |_| | |_) |",
        r"  \___/|_| |_|_| \_/ \___|_|  |___/_|\__|\__, | |____/|____/ ",
        r"                                        |___/               ",
    ];
    let mut out = String::new();
    for line in art {
        let _ = writeln!(out, "{}", line.magenta().bold());
    }
    let _ = writeln!(out, "           Student & Faculty Database\n");
    out
}

pub fn main_menu() -> String {
    const INNER: usize = 62;
    let rows = [
        ("1. Add Student", "6. Add Faculty"),
        ("2. Find Student", "7. Find Faculty"),
        ("3. Delete Student", "8. Delete Faculty"),
        ("4. Display All Students", "9. Display All Faculty"),
        ("5. Student Count", "10. Faculty Count"),
    ];
    let extras = [
        ("11. Load Sample Data", "12. Clear Database"),
        ("13. Database Statistics", "14. Exit"),
    ];

    let rule = "═".repeat(INNER);
    let mut out = String::new();
    let _ = writeln!(out, "\n╔{}╗", rule);
    let _ = writeln!(out, "║{}║", pad("       UNIVERSITY DATABASE SYSTEM", INNER));
    let _ = writeln!(out, "╠{}╣", rule);
    let _ = writeln!(
        out,
        "║  {}{}{}║",
        pad("STUDENTS", 26).cyan(),
        pad("FACULTY", 26).yellow(),
        " ".repeat(INNER - 54)
    );
    for (left, right) in rows {
        let _ = writeln!(out, "║{}║", menu_row(left, right, INNER));
    }
    let _ = writeln!(out, "╠{}╣", rule);
    for (left, right) in extras {
        let _ = writeln!(out, "║{}║", menu_row(left, right, INNER));
    }
    let _ = writeln!(out, "╚{}╝", rule);
    out
}

fn menu_row(left: &str, right: &str, inner: usize) -> String {
    // Two-digit entries shift one column left so the dots line up.
    let indent = |s: &str| if s.find('.') == Some(1) { "  " } else { " " };
    let left = format!("{}{}", indent(left), left);
    let right = format!("{}{}", indent(right), right);
    pad(&format!(" {}{}", pad(&left, 25), right), inner)
}

pub fn messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => format!("✓ {}", message.content).green(),
            MessageLevel::Warning => format!("! {}", message.content).yellow(),
            MessageLevel::Error => format!("✗ {}", message.content).red(),
        };
        let _ = writeln!(out, "{}", line);
    }
    out
}

pub fn heading(title: &str) -> String {
    format!(
        "\n{}\n",
        format!("═══════════════ {} ═══════════════", title).bold()
    )
}

/// Renders a listing of one kind of record as a table.
pub fn record_table(kind: RecordKind, records: &[AnyRecord]) -> String {
    match kind {
        RecordKind::Student => {
            let students: Vec<&Student> = records.iter().filter_map(|r| r.as_student()).collect();
            student_table(&students)
        }
        RecordKind::Faculty => {
            let faculty: Vec<&Faculty> = records.iter().filter_map(|r| r.as_faculty()).collect();
            faculty_table(&faculty)
        }
    }
}

pub fn student_table(students: &[&Student]) -> String {
    let rows: Vec<Vec<String>> = students
        .iter()
        .map(|s| {
            vec![
                s.id.to_string(),
                s.name.clone(),
                s.level.clone(),
                s.major.clone(),
                format!("{:.2}", s.gpa),
                s.advisor_id.to_string(),
            ]
        })
        .collect();
    table("ALL STUDENTS", &STUDENT_COLUMNS, &rows, "No student records.")
}

pub fn faculty_table(faculty: &[&Faculty]) -> String {
    let rows: Vec<Vec<String>> = faculty
        .iter()
        .map(|f| {
            vec![
                f.id.to_string(),
                f.name.clone(),
                f.level.clone(),
                f.department.clone(),
            ]
        })
        .collect();
    table("ALL FACULTY", &FACULTY_COLUMNS, &rows, "No faculty records.")
}

fn table(title: &str, columns: &[(&str, usize)], rows: &[Vec<String>], empty: &str) -> String {
    let mut out = heading(title);
    if rows.is_empty() {
        let _ = writeln!(out, "{}", empty.dimmed());
        return out;
    }

    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = columns.iter().map(|(_, w)| "─".repeat(*w)).collect();
        format!("{}{}{}", left, segments.join(mid), right)
    };

    let _ = writeln!(out, "{}", rule("┌", "┬", "┐"));
    let header: Vec<String> = columns
        .iter()
        .map(|(name, w)| cell(name, *w).bold().to_string())
        .collect();
    let _ = writeln!(out, "│{}│", header.join("│"));
    let _ = writeln!(out, "{}", rule("├", "┼", "┤"));
    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .zip(columns)
            .map(|(value, (_, w))| cell(value, *w))
            .collect();
        let _ = writeln!(out, "│{}│", cells.join("│"));
    }
    let _ = writeln!(out, "{}", rule("└", "┴", "┘"));
    out
}

pub fn record_card(record: &AnyRecord) -> String {
    let fields: Vec<(&str, String)> = match record {
        AnyRecord::Student(s) => vec![
            ("ID", s.id.to_string()),
            ("Name", s.name.clone()),
            ("Level", s.level.clone()),
            ("Major", s.major.clone()),
            ("GPA", format!("{:.2}", s.gpa)),
            ("Advisor ID", s.advisor_id.to_string()),
        ],
        AnyRecord::Faculty(f) => vec![
            ("ID", f.id.to_string()),
            ("Name", f.name.clone()),
            ("Level", f.level.clone()),
            ("Department", f.department.clone()),
        ],
    };

    let mut out = String::new();
    let _ = writeln!(out, "\n{}", format!("✓ {} Found:", record.kind()).green());
    let _ = writeln!(out, "┌{}┐", "─".repeat(CARD_WIDTH));
    for (label, value) in fields {
        let _ = writeln!(out, "│{}│", cell(&format!("{}: {}", label, value), CARD_WIDTH));
    }
    let _ = writeln!(out, "└{}┘", "─".repeat(CARD_WIDTH));
    out
}

pub fn count_line(kind: RecordKind, count: usize) -> String {
    let label = format!("Total {}:", kind.plural());
    let label = match kind {
        RecordKind::Student => label.cyan(),
        RecordKind::Faculty => label.yellow(),
    };
    format!("\n{} {}\n", label, count)
}

pub fn stats(stats: &RegistryStats) -> String {
    let mut out = heading("DATABASE STATISTICS");
    let line = |out: &mut String, label: &str, value: String| {
        let _ = writeln!(out, "  {}{}", pad(label, STATS_LABEL_WIDTH), value);
    };

    line(&mut out, "Students in Database:", stats.student_count.to_string());
    line(&mut out, "Faculty in Database:", stats.faculty_count.to_string());
    line(
        &mut out,
        "Average GPA:",
        stats
            .average_gpa
            .map(|gpa| format!("{:.2}", gpa))
            .unwrap_or_else(|| "n/a".to_string()),
    );

    if !stats.students_by_level.is_empty() {
        let _ = writeln!(out, "\n  {}", "Students by level".cyan());
        for (level, n) in &stats.students_by_level {
            line(&mut out, &format!("  {}", level), n.to_string());
        }
    }
    if !stats.students_by_major.is_empty() {
        let _ = writeln!(out, "\n  {}", "Students by major".cyan());
        for (major, n) in &stats.students_by_major {
            line(&mut out, &format!("  {}", major), n.to_string());
        }
    }
    if !stats.advisees.is_empty() {
        let _ = writeln!(out, "\n  {}", "Advisees per faculty".yellow());
        for advisee in &stats.advisees {
            line(
                &mut out,
                &format!("  {} {}", advisee.faculty_id, advisee.faculty_name),
                advisee.students.to_string(),
            );
        }
    }
    if stats.unassigned_students > 0 {
        let _ = writeln!(
            out,
            "\n  {}",
            format!(
                "{} student(s) reference an advisor not on file.",
                stats.unassigned_students
            )
            .dimmed()
        );
    }
    out
}

/// One table cell: a space, the value fitted to `width - 2`, a space.
fn cell(value: &str, width: usize) -> String {
    let inner = width.saturating_sub(2);
    format!(" {} ", pad(&truncate_to_width(value, inner), inner))
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
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
