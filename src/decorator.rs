// 🎁 Student Decorators - Compose behavior without modifying the wrapped object
//
// A decorator conforms to the same `Student` contract as the object it wraps,
// so callers treat plain and decorated students uniformly. Each decorator
// owns exactly one wrapped handle, fixed at construction (no re-wrapping),
// and delegates every operation it does not explicitly override. Wrapping
// never mutates the wrapped student's own state.
//
// ⚠️ Clone asymmetry: `clone_student` on a decorator delegates straight
// through to the wrapped student, so the decoration layer is NOT reproduced.
// Cloning a decorated student yields an undecorated copy. This is observed
// behavior carried over deliberately; callers relying on clones must re-wrap
// them if the decoration should persist.

use crate::student::{SharedStudent, Student};

// ============================================================================
// PASS-THROUGH DECORATOR
// ============================================================================

/// Neutral decorator: forwards all four operations unchanged.
///
/// Serves as the base variant of the decoration chain; concrete variants
/// override a strict subset of operations and fall through for the rest.
pub struct StudentDecorator {
    inner: SharedStudent,
}

impl StudentDecorator {
    pub fn new(inner: SharedStudent) -> Self {
        StudentDecorator { inner }
    }
}

impl Student for StudentDecorator {
    /// Delegates to the wrapped student's clone (decoration layer is lost,
    /// see module docs).
    fn clone_student(&self) -> SharedStudent {
        self.inner.clone_student()
    }

    fn can_take_course(&self, course: &str) -> bool {
        self.inner.can_take_course(course)
    }

    fn has_skip_level_test(&self) -> bool {
        self.inner.has_skip_level_test()
    }

    fn categories(&self) -> &[String] {
        self.inner.categories()
    }
}

// ============================================================================
// TUTORING SUPPORT
// ============================================================================

/// Enhancement decorator: tutoring support makes any course eligible.
///
/// Overrides only `can_take_course`, ignoring both the course name and the
/// wrapped student's own answer. Everything else delegates unchanged. No
/// state beyond the wrapped handle, no side effects.
pub struct TutoringSupport {
    inner: SharedStudent,
}

impl TutoringSupport {
    pub fn new(inner: SharedStudent) -> Self {
        TutoringSupport { inner }
    }
}

impl Student for TutoringSupport {
    /// Delegates to the wrapped student's clone (decoration layer is lost,
    /// see module docs).
    fn clone_student(&self) -> SharedStudent {
        self.inner.clone_student()
    }

    fn can_take_course(&self, _course: &str) -> bool {
        // Tutoring support enhances course-taking ability
        true
    }

    fn has_skip_level_test(&self) -> bool {
        self.inner.has_skip_level_test()
    }

    fn categories(&self) -> &[String] {
        self.inner.categories()
    }
}

// ============================================================================
// TESTS
// ============================================================================
