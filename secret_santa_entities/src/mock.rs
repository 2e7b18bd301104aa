use itertools::Itertools;

use faker_rand::en_us::internet::Email;
use faker_rand::en_us::names::FullName;

use crate::domain::participant::Participant;

#[derive(Debug)]
pub struct MockRosterOptions {
    pub size: usize,
    pub use_random_names: bool,
}

impl Default for MockRosterOptions {
    fn default() -> Self {
        Self {
            size: 9,
            use_random_names: false,
        }
    }
}

pub fn make_mock_roster() -> Vec<Participant> {
    make_mock_roster_with_options(Default::default())
}

pub fn make_mock_roster_with_options(options: MockRosterOptions) -> Vec<Participant> {
    (0..options.size)
        .map(|i| {
            if options.use_random_names {
                Participant {
                    name: rand::random::<FullName>().to_string(),
                    email: rand::random::<Email>().to_string(),
                }
            } else {
                Participant {
                    name: format!("Participant {}", i),
                    email: format!("participant_{}@example.com", i),
                }
            }
        })
        .collect_vec()
}
