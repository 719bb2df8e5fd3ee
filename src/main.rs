use anyhow::Result;
use std::sync::Arc;

// Use library instead of local modules
use student_registry::{
    BasicStudentBuilder, BasicStudentFactory, SharedStudent, Student, StudentFactory,
    TutoringSupport, University,
};

fn main() -> Result<()> {
    println!("🎓 Student Registry - Pattern Walkthrough");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // The registry is created once here and passed explicitly to every step
    let university = University::new();

    // 1. Factory
    println!("\n🏭 Factory Pattern: creating a BasicStudent via BasicStudentFactory...");
    let factory = BasicStudentFactory;
    let student = factory.create_student(vec!["Math".to_string(), "Physics".to_string()], true);
    println!(
        "✓ Created student with categories {:?}, skip-level test = {}",
        student.categories(),
        student.has_skip_level_test()
    );

    // 2. Prototype
    println!("\n📋 Prototype Pattern: cloning the student...");
    let copy = student.clone_student();
    println!(
        "✓ Clone owns its own copy of categories {:?}",
        copy.categories()
    );

    // 3. Decorator
    println!("\n🎁 Decorator Pattern: enhancing the student with TutoringSupport...");
    let tutored: SharedStudent = Arc::new(TutoringSupport::new(Arc::clone(&student)));
    println!("✓ Wrapped without touching the original student");

    // 4. Registry
    println!("\n🏛️ Registry: adding the tutored student to the University...");
    university.add_student(Arc::clone(&tutored));
    println!("✓ University now has {} students", university.count());

    // 5. Builder
    println!("\n🔨 Builder Pattern: assembling a student via BasicStudentBuilder...");
    let mut builder = BasicStudentBuilder::new();
    let built = builder
        .set_categories(vec!["Chemistry".to_string()])
        .set_skip_level_test(false)
        .build();
    println!("✓ Built student with categories {:?}", built.categories());
    university.add_student(built);

    // 6. Eligibility check through the decorator
    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!(
        "Checking enhanced capabilities due to Decorator: can the tutored student take 'Advanced Quantum Mechanics'? {}",
        tutored.can_take_course("Advanced Quantum Mechanics")
    );

    let snapshot = serde_json::json!({
        "students": university.count(),
    });
    println!("📊 Roster snapshot: {}", snapshot);

    Ok(())
}
