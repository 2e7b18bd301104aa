use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use super::participant::Participant;

/// One giver/receiver pairing produced by a draw.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct Assignment {
    pub giver: Participant,
    pub receiver: Participant,
}

impl Assignment {
    pub fn is_self_assignment(&self) -> bool {
        self.giver == self.receiver
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) -> {} ({})",
            self.giver.name, self.giver.email, self.receiver.name, self.receiver.email
        )
    }
}

#[test]
fn test_display_shows_giver_and_receiver() {
    let assignment = Assignment {
        giver: Participant {
            name: "Alice".into(),
            email: "a@x.com".into(),
        },
        receiver: Participant {
            name: "Bob".into(),
            email: "b@x.com".into(),
        },
    };

    assert_eq!(
        assignment.to_string(),
        "Alice (a@x.com) -> Bob (b@x.com)"
    );
}

#[test]
fn test_self_assignment_requires_full_match() {
    let giver = Participant {
        name: "Alice".into(),
        email: "a@x.com".into(),
    };

    let to_self = Assignment {
        giver: giver.clone(),
        receiver: giver.clone(),
    };
    let to_namesake = Assignment {
        giver,
        receiver: Participant {
            name: "Alice".into(),
            email: "alice@elsewhere.com".into(),
        },
    };

    assert!(to_self.is_self_assignment());
    assert!(!to_namesake.is_self_assignment());
}
