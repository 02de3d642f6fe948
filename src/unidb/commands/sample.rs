use crate::commands::{CmdMessage, CmdResult};
use crate::model::{Faculty, Student};
use crate::registry::Registry;
use crate::store::Backend;
use once_cell::sync::Lazy;

pub static SAMPLE_STUDENTS: Lazy<Vec<Student>> = Lazy::new(|| {
    vec![
        Student::new(1, "Alice", "Senior", "Computer Science", 3.9, 101),
        Student::new(2, "Bob", "Junior", "Mathematics", 3.5, 102),
        Student::new(3, "Charlie", "Sophomore", "Computer Science", 3.8, 101),
        Student::new(4, "David", "Freshman", "Mathematics", 3.2, 102),
        Student::new(5, "Eve", "Senior", "Computer Science", 3.6, 101),
        Student::new(6, "Frank", "Sophomore", "Mathematics", 3.4, 102),
        Student::new(7, "Grace", "Freshman", "Computer Science", 3.7, 101),
        Student::new(8, "Henry", "Junior", "Mathematics", 3.3, 102),
    ]
});

pub static SAMPLE_FACULTY: Lazy<Vec<Faculty>> = Lazy::new(|| {
    vec![
        Faculty::new(101, "Dr. Smith", "Professor", "Computer Science"),
        Faculty::new(102, "Dr. Johnson", "Associate Professor", "Mathematics"),
        Faculty::new(103, "Dr. Williams", "Assistant Professor", "Computer Science"),
        Faculty::new(104, "Dr. Brown", "Associate Professor", "Mathematics"),
    ]
});

/// Appends the sample roster to whatever is already in the registry.
pub fn run<B: Backend>(registry: &mut Registry<B>) -> CmdResult {
    let clashes = SAMPLE_STUDENTS
        .iter()
        .filter(|s| registry.find_student(s.id).is_some())
        .count()
        + SAMPLE_FACULTY
            .iter()
            .filter(|f| registry.find_faculty(f.id).is_some())
            .count();

    for student in SAMPLE_STUDENTS.iter() {
        registry.add_student(student.clone());
    }
    for faculty in SAMPLE_FACULTY.iter() {
        registry.add_faculty(faculty.clone());
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Loaded {} students and {} faculty members.",
        SAMPLE_STUDENTS.len(),
        SAMPLE_FACULTY.len()
    )));
    if clashes > 0 {
        result.add_message(CmdMessage::warning(format!(
            "{} sample IDs were already in use; existing records still win lookups.",
            clashes
        )));
    }
    result
}
