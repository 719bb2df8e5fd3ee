// 🏛️ University Registry - Process-scoped collection of known students
//
// One `University` value is constructed at startup and passed explicitly to
// whatever code needs it (dependency injection), instead of being reached
// through ambient global state. Observable behavior matches the classic
// singleton: one roster for the process, monotonic growth, teardown implicit
// at process exit.

use crate::student::SharedStudent;
use std::sync::RwLock;

/// Registry of all known students.
///
/// Holds shared handles (the registry is one of potentially many owners of
/// each student). Insertion order is preserved and nothing is deduplicated;
/// there is no removal operation. The interior lock keeps the container
/// sound if callers ever share the registry across threads, though the
/// current entry sequence is single-threaded.
pub struct University {
    students: RwLock<Vec<SharedStudent>>,
}

impl University {
    /// Create a new empty registry.
    pub fn new() -> Self {
        University {
            students: RwLock::new(Vec::new()),
        }
    }

    /// Append a student to the roster. No duplicate check, no capacity limit.
    pub fn add_student(&self, student: SharedStudent) {
        let mut students = self.students.write().unwrap();
        students.push(student);
    }

    /// Snapshot of the current roster, in insertion order.
    ///
    /// Returns a copy: later additions never retroactively affect a
    /// previously returned snapshot.
    pub fn students(&self) -> Vec<SharedStudent> {
        let students = self.students.read().unwrap();
        students.clone()
    }

    /// Number of students currently registered.
    pub fn count(&self) -> usize {
        let students = self.students.read().unwrap();
        students.len()
    }
}

impl Default for University {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::BasicStudentBuilder;
    use crate::decorator::TutoringSupport;
    use crate::factory::{BasicStudentFactory, StudentFactory};
    use std::sync::Arc;

    #[test]
    fn test_registry_starts_empty() {
        let university = University::new();

        assert_eq!(university.count(), 0);
        assert!(university.students().is_empty());
    }

    #[test]
    fn test_registry_preserves_insertion_order() {
        let university = University::new();
        let factory = BasicStudentFactory;

        for name in ["Math", "Physics", "Art"] {
            university.add_student(factory.create_student(vec![name.to_string()], false));
        }

        let roster = university.students();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster[0].categories(), ["Math"]);
        assert_eq!(roster[1].categories(), ["Physics"]);
        assert_eq!(roster[2].categories(), ["Art"]);
    }

    #[test]
    fn test_registry_does_not_deduplicate() {
        let university = University::new();
        let student = BasicStudentFactory.create_student(vec![], false);

        university.add_student(Arc::clone(&student));
        university.add_student(student);

        assert_eq!(university.count(), 2);
    }

    #[test]
    fn test_snapshots_are_not_retroactive() {
        let university = University::new();
        let factory = BasicStudentFactory;

        university.add_student(factory.create_student(vec!["Math".to_string()], false));
        let snapshot = university.students();

        university.add_student(factory.create_student(vec!["Physics".to_string()], false));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(university.count(), 2);
    }

    #[test]
    fn test_end_to_end_tutored_student() {
        let university = University::new();
        let factory = BasicStudentFactory;

        let student = factory.create_student(
            vec!["Math".to_string(), "Physics".to_string()],
            true,
        );
        let tutored: SharedStudent = Arc::new(TutoringSupport::new(student));

        university.add_student(Arc::clone(&tutored));

        assert_eq!(university.students().len(), 1);
        assert!(tutored.can_take_course("Advanced Quantum Mechanics"));
    }

    #[test]
    fn test_registry_accepts_built_students() {
        let university = University::new();
        let mut builder = BasicStudentBuilder::new();

        university.add_student(
            builder
                .set_categories(vec!["Chemistry".to_string()])
                .build(),
        );

        assert_eq!(university.students()[0].categories(), ["Chemistry"]);
    }
}
