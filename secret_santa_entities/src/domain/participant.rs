use serde::{Deserialize, Serialize};

/// A member of the gift exchange. Two participants are the same person only
/// when name and email both match.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone)]
pub struct Participant {
    pub name: String,
    pub email: String,
}

#[test]
fn test_equality_requires_both_fields() {
    let alice = Participant {
        name: "Alice".into(),
        email: "a@x.com".into(),
    };
    let alice_other_address = Participant {
        name: "Alice".into(),
        email: "alice@elsewhere.com".into(),
    };
    let alice_again = Participant {
        name: "Alice".into(),
        email: "a@x.com".into(),
    };

    assert_eq!(alice, alice_again);
    assert_ne!(alice, alice_other_address);
}

#[test]
fn test_shared_name_is_not_the_same_participant() {
    let first = Participant {
        name: "Kim".into(),
        email: "kim.a@x.com".into(),
    };
    let second = Participant {
        name: "Kim".into(),
        email: "kim.b@x.com".into(),
    };

    assert_ne!(first, second);
}
