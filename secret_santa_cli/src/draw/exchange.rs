use rand::seq::SliceRandom;
use rand::Rng;

use thiserror::Error;

use itertools::Itertools;

use secret_santa_entities::prelude::{Assignment, Participant};

pub struct ExchangeDrawGenerator {
    pub max_attempts: usize,
}

impl Default for ExchangeDrawGenerator {
    fn default() -> Self {
        ExchangeDrawGenerator { max_attempts: 100 }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DrawError {
    #[error("Not enough participants to assign Secret Santas.")]
    NotEnoughParticipants(usize),
    #[error("Failed to assign Secret Santas without conflicts.")]
    ConflictResolutionExhausted { attempts: usize },
}

impl ExchangeDrawGenerator {
    /// Pairs every participant with a receiver by reshuffling until no one
    /// draws themselves. Givers keep their roster order. A roster with
    /// duplicate entries may admit no clash-free pairing, so the number of
    /// shuffles is bounded.
    pub fn generate<R>(
        &self,
        participants: &[Participant],
        rng: &mut R,
    ) -> Result<Vec<Assignment>, DrawError>
    where
        R: Rng,
    {
        if participants.len() < 2 {
            return Err(DrawError::NotEnoughParticipants(participants.len()));
        }

        let mut receivers = participants.iter().collect_vec();

        for _ in 0..self.max_attempts {
            receivers.shuffle(rng);

            let clash_free = participants
                .iter()
                .zip(receivers.iter())
                .all(|(giver, receiver)| giver != *receiver);

            if clash_free {
                return Ok(participants
                    .iter()
                    .zip(receivers.iter())
                    .map(|(giver, receiver)| Assignment {
                        giver: giver.clone(),
                        receiver: (*receiver).clone(),
                    })
                    .collect_vec());
            }
        }

        Err(DrawError::ConflictResolutionExhausted {
            attempts: self.max_attempts,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{rngs::StdRng, thread_rng, SeedableRng};
    use secret_santa_entities::mock::make_mock_roster;

    #[test]
    fn test_two_participants_always_swap() -> Result<(), anyhow::Error> {
        let alice = Participant {
            name: "Alice".into(),
            email: "alice@example.com".into(),
        };
        let bob = Participant {
            name: "Bob".into(),
            email: "bob@example.com".into(),
        };

        let assignments = ExchangeDrawGenerator::default()
            .generate(&[alice.clone(), bob.clone()], &mut thread_rng())?;

        assert_eq!(
            assignments,
            vec![
                Assignment {
                    giver: alice.clone(),
                    receiver: bob.clone()
                },
                Assignment {
                    giver: bob,
                    receiver: alice
                },
            ]
        );

        Ok(())
    }

    #[test]
    fn test_draw_has_no_self_assignments() -> Result<(), anyhow::Error> {
        let roster = make_mock_roster();

        let assignments =
            ExchangeDrawGenerator::default().generate(&roster, &mut thread_rng())?;

        assert!(assignments.iter().all(|a| !a.is_self_assignment()));

        Ok(())
    }

    #[test]
    fn test_draw_pairs_everyone_exactly_once() -> Result<(), anyhow::Error> {
        let roster = make_mock_roster();

        let assignments =
            ExchangeDrawGenerator::default().generate(&roster, &mut thread_rng())?;

        assert_eq!(
            assignments.iter().map(|a| a.giver.clone()).collect_vec(),
            roster
        );
        assert_eq!(
            assignments
                .iter()
                .map(|a| &a.receiver.email)
                .sorted()
                .collect_vec(),
            roster.iter().map(|p| &p.email).sorted().collect_vec()
        );

        Ok(())
    }

    #[test]
    fn test_five_participants_draw_fully() -> Result<(), anyhow::Error> {
        let roster = (0..5)
            .map(|i| Participant {
                name: format!("Person {}", i),
                email: format!("person_{}@example.com", i),
            })
            .collect_vec();

        let assignments =
            ExchangeDrawGenerator::default().generate(&roster, &mut thread_rng())?;

        assert_eq!(assignments.len(), 5);
        assert!(assignments.iter().all(|a| !a.is_self_assignment()));
        assert_eq!(
            assignments.iter().map(|a| a.giver.clone()).collect_vec(),
            roster
        );
        assert_eq!(
            assignments
                .iter()
                .map(|a| &a.receiver.email)
                .sorted()
                .collect_vec(),
            roster.iter().map(|p| &p.email).sorted().collect_vec()
        );

        Ok(())
    }

    #[test]
    fn test_draw_is_reproducible_with_seeded_rng() -> Result<(), anyhow::Error> {
        let roster = make_mock_roster();
        let generator = ExchangeDrawGenerator::default();

        let mut rng: StdRng = SeedableRng::from_seed([0; 32]);
        let first = generator.generate(&roster, &mut rng)?;

        let mut rng: StdRng = SeedableRng::from_seed([0; 32]);
        let second = generator.generate(&roster, &mut rng)?;

        assert_eq!(first, second);

        Ok(())
    }

    #[test]
    fn test_empty_roster_is_rejected() {
        let result = ExchangeDrawGenerator::default().generate(&[], &mut thread_rng());

        assert_eq!(result, Err(DrawError::NotEnoughParticipants(0)));
    }

    #[test]
    fn test_single_participant_is_rejected() {
        let roster = vec![Participant {
            name: "Alice".into(),
            email: "alice@example.com".into(),
        }];

        let result = ExchangeDrawGenerator::default().generate(&roster, &mut thread_rng());

        assert_eq!(result, Err(DrawError::NotEnoughParticipants(1)));
    }

    #[test]
    fn test_duplicate_only_roster_exhausts_attempts() {
        let alice = Participant {
            name: "Alice".into(),
            email: "alice@example.com".into(),
        };
        let roster = vec![alice.clone(), alice];

        let result = ExchangeDrawGenerator::default().generate(&roster, &mut thread_rng());

        assert_eq!(
            result,
            Err(DrawError::ConflictResolutionExhausted { attempts: 100 })
        );
    }

    #[test]
    fn test_duplicates_with_distinct_others_can_draw() -> Result<(), anyhow::Error> {
        let alice = Participant {
            name: "Alice".into(),
            email: "alice@example.com".into(),
        };
        let roster = vec![
            alice.clone(),
            alice,
            Participant {
                name: "Bob".into(),
                email: "bob@example.com".into(),
            },
            Participant {
                name: "Carol".into(),
                email: "carol@example.com".into(),
            },
        ];

        let assignments =
            ExchangeDrawGenerator::default().generate(&roster, &mut thread_rng())?;

        assert_eq!(assignments.len(), 4);
        assert!(assignments.iter().all(|a| !a.is_self_assignment()));

        Ok(())
    }

    #[test]
    fn test_attempt_bound_is_configurable() {
        let alice = Participant {
            name: "Alice".into(),
            email: "alice@example.com".into(),
        };
        let roster = vec![alice.clone(), alice];

        let generator = ExchangeDrawGenerator { max_attempts: 1 };
        let result = generator.generate(&roster, &mut thread_rng());

        assert_eq!(
            result,
            Err(DrawError::ConflictResolutionExhausted { attempts: 1 })
        );
    }
}
