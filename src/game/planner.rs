use rand::Rng;
use rand::seq::SliceRandom;

use crate::model::{Difficulty, Topic};

/// Dificultad y tema asignados a una ronda. Se calcula una vez por partida.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundDescriptor {
    pub round_number: usize,
    pub difficulty: Difficulty,
    pub topic: Topic,
}

impl RoundDescriptor {
    pub fn eligible_categories(&self) -> &'static [&'static str] {
        self.topic.categories()
    }
}

/// Elige un tema que no se haya usado en rondas anteriores; si ya se usaron
/// todos, cualquiera de ellos.
pub fn plan_round<R: Rng + ?Sized>(
    round_number: usize,
    prior_topics: &[Topic],
    rng: &mut R,
) -> RoundDescriptor {
    let candidates: Vec<Topic> = Topic::ALL
        .iter()
        .copied()
        .filter(|t| !prior_topics.contains(t))
        .collect();
    let pool: &[Topic] = if candidates.is_empty() { &Topic::ALL } else { &candidates };
    let topic = pool.choose(rng).copied().unwrap_or(Topic::ALL[0]);

    RoundDescriptor {
        round_number,
        difficulty: Difficulty::for_round(round_number),
        topic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn three_rounds_never_repeat_a_topic() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut prior = Vec::new();
            for round in 1..=3 {
                let d = plan_round(round, &prior, &mut rng);
                assert_eq!(d.difficulty, Difficulty::for_round(round));
                prior.push(d.topic);
            }
            let unique: HashSet<_> = prior.iter().collect();
            assert_eq!(unique.len(), 3, "seed {seed}: {prior:?}");
        }
    }

    #[test]
    fn exhausted_topics_fall_back_to_full_set() {
        let mut rng = StdRng::seed_from_u64(7);
        let d = plan_round(4, &Topic::ALL, &mut rng);
        assert!(Topic::ALL.contains(&d.topic));
        assert_eq!(d.difficulty, Difficulty::Hard);
    }

    #[test]
    fn last_remaining_topic_is_forced() {
        let mut rng = StdRng::seed_from_u64(1);
        let d = plan_round(3, &[Topic::Sports, Topic::HistoryGk], &mut rng);
        assert_eq!(d.topic, Topic::HollywoodBollywood);
        assert_eq!(d.eligible_categories(), &["Hollywood", "Bollywood"]);
    }
}
