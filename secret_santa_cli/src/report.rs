use secret_santa_entities::prelude::Assignment;

pub fn display_assignments(assignments: &[Assignment]) {
    if assignments.is_empty() {
        println!("No assignments to display.");
        return;
    }

    println!("\nSecret Santa Assignments:");
    for assignment in assignments.iter() {
        println!("{}", assignment);
    }
}
