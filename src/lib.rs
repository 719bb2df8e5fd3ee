// Student Registry - Core Library
// Exposes the student model and its composition rules for the demo binary and tests

pub mod student;
pub mod decorator;
pub mod factory;
pub mod builder;
pub mod university;

// Re-export commonly used types
pub use student::{BasicStudent, SharedStudent, Student};
pub use decorator::{StudentDecorator, TutoringSupport};
pub use factory::{BasicStudentFactory, StudentFactory};
pub use builder::BasicStudentBuilder;
pub use university::University;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
