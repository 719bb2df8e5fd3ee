// 🏭 Student Factory - Construct base students from raw attributes

use crate::student::{BasicStudent, SharedStudent};

/// Factory contract for producing students behind the shared handle.
pub trait StudentFactory {
    /// Construct a new base student with the given attributes, verbatim.
    ///
    /// No validation and no error path: any category sequence (including
    /// empty) and either flag value are accepted.
    fn create_student(
        &self,
        categories: Vec<String>,
        skip_level_test: bool,
    ) -> SharedStudent;
}

/// Concrete factory producing `BasicStudent` instances.
pub struct BasicStudentFactory;

impl StudentFactory for BasicStudentFactory {
    fn create_student(
        &self,
        categories: Vec<String>,
        skip_level_test: bool,
    ) -> SharedStudent {
        std::sync::Arc::new(BasicStudent::new(categories, skip_level_test))
    }
}
