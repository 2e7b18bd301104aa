use std::path::Path;

use serde::{Deserialize, Serialize};

use secret_santa_entities::prelude::{Assignment, Participant};

/// Flat row format of the output file. Field order is the column order.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AssignmentRecord {
    pub employee_name: String,
    pub employee_email: String,
    pub secret_santa_name: String,
    pub secret_santa_email: String,
}

impl From<&Assignment> for AssignmentRecord {
    fn from(assignment: &Assignment) -> AssignmentRecord {
        AssignmentRecord {
            employee_name: assignment.giver.name.clone(),
            employee_email: assignment.giver.email.clone(),
            secret_santa_name: assignment.receiver.name.clone(),
            secret_santa_email: assignment.receiver.email.clone(),
        }
    }
}

impl From<AssignmentRecord> for Assignment {
    fn from(record: AssignmentRecord) -> Assignment {
        Assignment {
            giver: Participant {
                name: record.employee_name,
                email: record.employee_email,
            },
            receiver: Participant {
                name: record.secret_santa_name,
                email: record.secret_santa_email,
            },
        }
    }
}

/// Writes one row per assignment. An empty draw writes no file at all.
pub fn save_assignments(assignments: &[Assignment], path: &Path) -> Result<(), anyhow::Error> {
    if assignments.is_empty() {
        println!("No assignments to save.");
        return Ok(());
    }

    let mut writer = csv::Writer::from_path(path)?;
    for assignment in assignments.iter() {
        writer.serialize(AssignmentRecord::from(assignment))?;
    }
    writer.flush()?;

    println!("Assignments saved to {}.", path.display());

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    fn example_assignments() -> Vec<Assignment> {
        let alice = Participant {
            name: "Alice".into(),
            email: "alice@example.com".into(),
        };
        let bob = Participant {
            name: "Bob".into(),
            email: "bob@example.com".into(),
        };

        vec![
            Assignment {
                giver: alice.clone(),
                receiver: bob.clone(),
            },
            Assignment {
                giver: bob,
                receiver: alice,
            },
        ]
    }

    #[test]
    fn test_header_matches_output_format() -> Result<(), anyhow::Error> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("secret_santas.csv");

        save_assignments(&example_assignments(), &path)?;

        let content = std::fs::read_to_string(&path)?;
        assert_eq!(
            content.lines().next(),
            Some("employee_name,employee_email,secret_santa_name,secret_santa_email")
        );
        assert_eq!(content.lines().count(), 3);

        Ok(())
    }

    #[test]
    fn test_saved_assignments_can_be_read_back() -> Result<(), anyhow::Error> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("secret_santas.csv");
        let assignments = example_assignments();

        save_assignments(&assignments, &path)?;

        let mut reader = csv::Reader::from_path(&path)?;
        let restored = reader
            .deserialize::<AssignmentRecord>()
            .map_ok(Assignment::from)
            .collect::<Result<Vec<_>, _>>()?;

        assert_eq!(restored, assignments);

        Ok(())
    }

    #[test]
    fn test_empty_assignments_write_no_file() -> Result<(), anyhow::Error> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("secret_santas.csv");

        save_assignments(&[], &path)?;

        assert!(!path.exists());

        Ok(())
    }
}
