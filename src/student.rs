// 🎓 Student Model - Polymorphic contract and concrete prototype
//
// "Student UUID is IDENTITY (never changes), categories and the skip-level
// flag are VALUES (fixed at construction)"
//
// Problem solved:
// - One contract for base students and decorated students (uniform treatment)
// - Prototype cloning: copies are value-identical but independently owned
// - Read-only views over internal state (no external mutation path)

use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ============================================================================
// SHARED HANDLE
// ============================================================================

/// Shared handle to any student variant.
///
/// Decorators and the university registry each hold one of potentially many
/// owners of the same student. The delegation chain is one-directional, so
/// no ownership cycles can form.
pub type SharedStudent = Arc<dyn Student>;

// ============================================================================
// STUDENT CONTRACT
// ============================================================================

/// Polymorphic student contract.
///
/// Every operation is total and read-only; none signals failure.
/// `clone_student` is the prototype operation: it returns a new,
/// independently owned copy with identical attribute values, never an
/// aliased handle to shared mutable backing storage.
pub trait Student: Send + Sync {
    /// Produce an independent copy of this student.
    ///
    /// Mutating (or rebuilding from) the copy never affects the original.
    fn clone_student(&self) -> SharedStudent;

    /// Course eligibility predicate.
    ///
    /// Placeholder policy: no real rule is evaluated. Any course name is
    /// accepted without validation, including the empty string.
    fn can_take_course(&self, course: &str) -> bool;

    /// The stored skip-level-test flag, verbatim.
    fn has_skip_level_test(&self) -> bool;

    /// The stored category list, verbatim: insertion order preserved,
    /// duplicates allowed. Borrowed view, so callers cannot mutate the
    /// student's internal state through it.
    fn categories(&self) -> &[String];
}

// ============================================================================
// BASIC STUDENT
// ============================================================================

/// Concrete student holding the actual data.
///
/// Immutable once constructed: there are no setters, and every copy made via
/// `clone_student` (or plain `Clone`) owns its own category storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasicStudent {
    /// Stable identity (UUID) - copied verbatim by `clone_student`
    pub id: String,

    /// Category names in insertion order (duplicates allowed)
    pub categories: Vec<String>,

    /// Whether the student has taken the test permitting level skipping
    pub skip_level_test: bool,
}

impl BasicStudent {
    /// Create a new student with the given attributes, verbatim.
    ///
    /// No validation: an empty category list and either flag value are
    /// accepted without rejection.
    pub fn new(categories: Vec<String>, skip_level_test: bool) -> Self {
        BasicStudent {
            id: uuid::Uuid::new_v4().to_string(),
            categories,
            skip_level_test,
        }
    }
}

impl Student for BasicStudent {
    fn clone_student(&self) -> SharedStudent {
        Arc::new(self.clone())
    }

    fn can_take_course(&self, _course: &str) -> bool {
        // Simplified eligibility for demonstration
        true
    }

    fn has_skip_level_test(&self) -> bool {
        self.skip_level_test
    }

    fn categories(&self) -> &[String] {
        &self.categories
    }
}

// ============================================================================
// TESTS
// ============================================================================
