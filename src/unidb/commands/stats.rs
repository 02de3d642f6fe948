use crate::commands::CmdResult;
use crate::model::RecordId;
use crate::registry::Registry;
use crate::store::Backend;
use std::collections::BTreeMap;

/// Aggregate view of the registry for the statistics screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegistryStats {
    pub student_count: usize,
    pub faculty_count: usize,
    /// Mean GPA over all students; `None` when there are none.
    pub average_gpa: Option<f64>,
    pub students_by_level: BTreeMap<String, usize>,
    pub students_by_major: BTreeMap<String, usize>,
    /// Faculty in insertion order with the number of students naming them as advisor.
    pub advisees: Vec<AdviseeCount>,
    /// Students whose advisor id matches no faculty record.
    pub unassigned_students: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdviseeCount {
    pub faculty_id: RecordId,
    pub faculty_name: String,
    pub students: usize,
}

pub fn run<B: Backend>(registry: &Registry<B>) -> CmdResult {
    CmdResult::default().with_stats(collect(registry))
}

pub fn collect<B: Backend>(registry: &Registry<B>) -> RegistryStats {
    let mut stats = RegistryStats {
        student_count: registry.student_count(),
        faculty_count: registry.faculty_count(),
        ..Default::default()
    };

    let mut advisor_tally: BTreeMap<RecordId, usize> = BTreeMap::new();
    let mut gpa_total = 0.0;
    for student in registry.students() {
        gpa_total += student.gpa;
        *stats
            .students_by_level
            .entry(student.level.clone())
            .or_default() += 1;
        *stats
            .students_by_major
            .entry(student.major.clone())
            .or_default() += 1;
        *advisor_tally.entry(student.advisor_id).or_default() += 1;
        if registry.find_faculty(student.advisor_id).is_none() {
            stats.unassigned_students += 1;
        }
    }
    if stats.student_count > 0 {
        stats.average_gpa = Some(gpa_total / stats.student_count as f64);
    }

    stats.advisees = registry
        .faculty()
        .map(|f| AdviseeCount {
            faculty_id: f.id,
            faculty_name: f.name.clone(),
            students: advisor_tally.get(&f.id).copied().unwrap_or(0),
        })
        .collect();

    stats
}
