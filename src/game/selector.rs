use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::data::QuestionBank;
use crate::error::GameError;
use crate::game::planner::RoundDescriptor;
use crate::model::Question;

/// Preguntas barajadas de una ronda y los ids ya mostrados.
#[derive(Debug, Clone)]
pub struct RoundPool {
    questions: Vec<Question>,
    used: HashSet<u32>,
}

impl RoundPool {
    /// Filtra el banco por dificultad y categorías y baraja. Falla si no hay
    /// al menos `needed` preguntas.
    pub fn build<R: Rng + ?Sized>(
        bank: &QuestionBank,
        round: &RoundDescriptor,
        needed: usize,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        if bank.is_empty() {
            return Err(GameError::NoQuestions);
        }
        let mut questions: Vec<Question> = bank
            .filter(round.difficulty, round.eligible_categories())
            .into_iter()
            .cloned()
            .collect();
        if questions.len() < needed {
            return Err(GameError::InsufficientPool {
                round: round.round_number,
                difficulty: round.difficulty,
                topic: round.topic,
                needed,
                available: questions.len(),
            });
        }
        questions.shuffle(rng);
        Ok(Self {
            questions,
            used: HashSet::new(),
        })
    }

    /// Pregunta para la posición `index` de la ronda.
    ///
    /// Dentro del pool devuelve la posición tal cual. Pasado el final, la
    /// primera no usada; si ya se usaron todas, se vacía el registro y se
    /// vuelve a empezar por la primera (puede repetir la última mostrada).
    pub fn next_question(&mut self, index: usize) -> Option<&Question> {
        let pos = if index < self.questions.len() {
            index
        } else if let Some(pos) = self.questions.iter().position(|q| !self.used.contains(&q.id)) {
            pos
        } else {
            self.used.clear();
            0
        };
        let question = self.questions.get(pos)?;
        self.used.insert(question.id);
        Some(question)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn used_count(&self) -> usize {
        self.used.len()
    }

    pub fn is_used(&self, id: u32) -> bool {
        self.used.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::tests::synthetic_bank;
    use crate::model::{Difficulty, Topic};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn round(topic: Topic) -> RoundDescriptor {
        RoundDescriptor {
            round_number: 1,
            difficulty: Difficulty::Easy,
            topic,
        }
    }

    #[test]
    fn four_questions_cannot_fill_a_five_question_round() {
        let bank = synthetic_bank(4);
        let mut rng = StdRng::seed_from_u64(3);
        let err = RoundPool::build(&bank, &round(Topic::Sports), 5, &mut rng).unwrap_err();
        assert_eq!(
            err,
            GameError::InsufficientPool {
                round: 1,
                difficulty: Difficulty::Easy,
                topic: Topic::Sports,
                needed: 5,
                available: 4,
            }
        );
    }

    #[test]
    fn empty_bank_reports_no_questions() {
        let mut rng = StdRng::seed_from_u64(3);
        let err = RoundPool::build(&QuestionBank::default(), &round(Topic::Sports), 5, &mut rng);
        assert_eq!(err.unwrap_err(), GameError::NoQuestions);
    }

    #[test]
    fn pool_only_holds_eligible_questions() {
        let bank = synthetic_bank(3);
        let mut rng = StdRng::seed_from_u64(9);
        let pool = RoundPool::build(&bank, &round(Topic::HollywoodBollywood), 5, &mut rng).unwrap();
        assert_eq!(pool.len(), 6);
        assert!(pool.questions.iter().all(|q| {
            q.difficulty == Difficulty::Easy && (q.category == "Hollywood" || q.category == "Bollywood")
        }));
    }

    #[test]
    fn positional_then_unused_then_recycled() {
        let bank = synthetic_bank(5);
        let mut rng = StdRng::seed_from_u64(11);
        let mut pool = RoundPool::build(&bank, &round(Topic::Sports), 5, &mut rng).unwrap();
        let order: Vec<u32> = pool.questions.iter().map(|q| q.id).collect();

        for (i, id) in order.iter().enumerate() {
            assert_eq!(pool.next_question(i).map(|q| q.id), Some(*id));
        }
        assert_eq!(pool.used_count(), 5);

        // Todas usadas: se recicla desde la primera
        assert_eq!(pool.next_question(5).map(|q| q.id), Some(order[0]));
        assert_eq!(pool.used_count(), 1);
        assert_eq!(pool.next_question(6).map(|q| q.id), Some(order[1]));
        assert!(pool.is_used(order[1]));
    }

    #[test]
    fn past_the_end_picks_first_unused() {
        let bank = synthetic_bank(5);
        let mut rng = StdRng::seed_from_u64(5);
        let mut pool = RoundPool::build(&bank, &round(Topic::HistoryGk), 3, &mut rng).unwrap();
        let order: Vec<u32> = pool.questions.iter().map(|q| q.id).collect();
        pool.next_question(0);
        pool.next_question(2);
        assert_eq!(pool.next_question(9).map(|q| q.id), Some(order[1]));
    }
}
