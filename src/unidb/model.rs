use std::fmt;

/// Caller-assigned identifier of a record within its collection.
pub type RecordId = i32;

/// The two collections the registry keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Student,
    Faculty,
}

impl RecordKind {
    /// Label used in headings and totals ("Students", "Faculty").
    pub fn plural(&self) -> &'static str {
        match self {
            RecordKind::Student => "Students",
            RecordKind::Faculty => "Faculty",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Student => write!(f, "Student"),
            RecordKind::Faculty => write!(f, "Faculty"),
        }
    }
}

/// Anything the registry can hold: addressable by id, shown by name.
pub trait Record: Clone + fmt::Debug + 'static {
    const KIND: RecordKind;

    fn id(&self) -> RecordId;

    fn name(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: RecordId,
    pub name: String,
    // Free text; Freshman/Sophomore/Junior/Senior/Graduate by convention
    pub level: String,
    pub major: String,
    pub gpa: f64,
    /// Informational pointer to a faculty id, never validated.
    pub advisor_id: RecordId,
}

impl Student {
    pub fn new(
        id: RecordId,
        name: impl Into<String>,
        level: impl Into<String>,
        major: impl Into<String>,
        gpa: f64,
        advisor_id: RecordId,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            level: level.into(),
            major: major.into(),
            gpa,
            advisor_id,
        }
    }
}

impl Record for Student {
    const KIND: RecordKind = RecordKind::Student;

    fn id(&self) -> RecordId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Faculty {
    pub id: RecordId,
    pub name: String,
    pub level: String,
    pub department: String,
}

impl Faculty {
    pub fn new(
        id: RecordId,
        name: impl Into<String>,
        level: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            level: level.into(),
            department: department.into(),
        }
    }
}

impl Record for Faculty {
    const KIND: RecordKind = RecordKind::Faculty;

    fn id(&self) -> RecordId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Either kind of record, for results that may carry both.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyRecord {
    Student(Student),
    Faculty(Faculty),
}

impl AnyRecord {
    pub fn kind(&self) -> RecordKind {
        match self {
            AnyRecord::Student(_) => RecordKind::Student,
            AnyRecord::Faculty(_) => RecordKind::Faculty,
        }
    }

    pub fn id(&self) -> RecordId {
        match self {
            AnyRecord::Student(s) => s.id,
            AnyRecord::Faculty(f) => f.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            AnyRecord::Student(s) => &s.name,
            AnyRecord::Faculty(f) => &f.name,
        }
    }

    pub fn as_student(&self) -> Option<&Student> {
        match self {
            AnyRecord::Student(s) => Some(s),
            AnyRecord::Faculty(_) => None,
        }
    }

    pub fn as_faculty(&self) -> Option<&Faculty> {
        match self {
            AnyRecord::Faculty(f) => Some(f),
            AnyRecord::Student(_) => None,
        }
    }
}

impl From<Student> for AnyRecord {
    fn from(student: Student) -> Self {
        AnyRecord::Student(student)
    }
}

impl From<Faculty> for AnyRecord {
    fn from(faculty: Faculty) -> Self {
        AnyRecord::Faculty(faculty)
    }
}
