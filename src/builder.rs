// 🔨 Student Builder - Accumulate attributes through chained calls

use crate::student::{BasicStudent, SharedStudent};
use std::sync::Arc;

/// Mutable accumulator for `BasicStudent` attributes.
///
/// Setters return `&mut Self` so calls chain. `build` constructs a fresh,
/// independent student from whatever state is accumulated at that moment.
/// The builder does NOT reset between builds: calling `build` repeatedly
/// reuses the accumulated state, and later setter calls never touch students
/// already built. Callers depend on this reuse contract.
#[derive(Debug, Default)]
pub struct BasicStudentBuilder {
    categories: Vec<String>,
    skip_level_test: bool,
}

impl BasicStudentBuilder {
    /// Start with defaults: no categories, flag = false.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_categories(&mut self, categories: Vec<String>) -> &mut Self {
        self.categories = categories;
        self
    }

    pub fn set_skip_level_test(&mut self, skip_level_test: bool) -> &mut Self {
        self.skip_level_test = skip_level_test;
        self
    }

    /// Construct a student from the currently accumulated state.
    pub fn build(&self) -> SharedStudent {
        Arc::new(BasicStudent::new(
            self.categories.clone(),
            self.skip_level_test,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let student = BasicStudentBuilder::new().build();

        assert!(student.categories().is_empty());
        assert!(!student.has_skip_level_test());
    }

    #[test]
    fn test_builder_chaining() {
        let mut builder = BasicStudentBuilder::new();
        let student = builder
            .set_categories(vec!["Math".to_string(), "Physics".to_string()])
            .set_skip_level_test(true)
            .build();

        assert_eq!(student.categories(), ["Math", "Physics"]);
        assert!(student.has_skip_level_test());
    }

    #[test]
    fn test_builder_reuse_without_reset() {
        let mut builder = BasicStudentBuilder::new();

        let first = builder.set_categories(vec!["Math".to_string()]).build();
        let second = builder.set_categories(vec!["Physics".to_string()]).build();

        // Two independent students; the first is unaffected by the second call
        assert_eq!(first.categories(), ["Math"]);
        assert_eq!(second.categories(), ["Physics"]);
    }

    #[test]
    fn test_builder_keeps_state_across_builds() {
        let mut builder = BasicStudentBuilder::new();
        builder.set_skip_level_test(true);

        // No reset between builds: the flag persists
        let a = builder.build();
        let b = builder.build();

        assert!(a.has_skip_level_test());
        assert!(b.has_skip_level_test());
        assert!(!Arc::ptr_eq(&a, &b));
    }
}
