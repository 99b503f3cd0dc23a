use log::info;

use super::*;
use crate::game::planner::plan_round;
use crate::model::{Topic, normalize_avatar};

impl Game {
    /// Crea el jugador y arranca la ronda 1. Si la primera ronda no puede
    /// empezar, se vuelve a `Setup` sin dejar sesión a medias.
    pub fn start_game(&mut self, name: &str, avatar: &str) -> Result<(), GameError> {
        if self.session.is_some() {
            return Err(GameError::WrongPhase { actual: self.phase() });
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(GameError::EmptyName);
        }

        let player = Player::new(name, normalize_avatar(avatar), &self.rules);
        self.session = Some(Session::new(player));
        if let Err(e) = self.enter_round() {
            self.session = None;
            return Err(e);
        }
        info!("{name} entered the arena");
        Ok(())
    }

    /// Evalúa la opción elegida y aplica las reglas al jugador. No avanza de pregunta.
    pub fn submit_answer(&mut self, selected: usize) -> Result<AnswerOutcome, GameError> {
        let rules = &self.rules;
        let session = self.session.as_mut().ok_or(GameError::WrongPhase { actual: Phase::Setup })?;
        if session.phase != Phase::Playing {
            return Err(GameError::WrongPhase { actual: session.phase });
        }
        let active = session.active.as_mut().ok_or(GameError::NoActiveQuestion)?;
        if active.outcome.is_some() {
            return Err(GameError::AlreadyAnswered);
        }
        let options = active.question.options.len();
        if selected >= options {
            return Err(GameError::OptionOutOfRange { selected, options });
        }
        if session.player.eliminated {
            return Err(GameError::Eliminated);
        }

        let is_correct = active.question.is_correct(selected);
        let effect = if is_correct {
            session.player.apply_correct(rules)
        } else {
            session.player.apply_miss(rules)
        };

        let outcome = AnswerOutcome {
            selected_index: selected,
            is_correct,
            correct_answer: active.question.correct_answer().to_string(),
            effect,
        };
        active.outcome = Some(outcome.clone());
        Ok(outcome)
    }

    /// En `Playing` pasa a la siguiente pregunta (o cierra la ronda);
    /// en `RoundComplete` arranca la ronda siguiente.
    pub fn advance(&mut self) -> Result<(), GameError> {
        let session = self.session.as_mut().ok_or(GameError::WrongPhase { actual: Phase::Setup })?;
        match session.phase {
            Phase::Playing => {
                match session.active.as_ref().map(|a| a.outcome.is_some()) {
                    None => return Err(GameError::NoActiveQuestion),
                    Some(false) => return Err(GameError::NotAnswered),
                    Some(true) => {}
                }
                session.current_question_index += 1;
                session.active = None;

                // La eliminación corta la ronda
                if session.player.eliminated
                    || session.current_question_index >= self.rules.questions_per_round
                {
                    session.phase = Phase::RoundComplete;
                    self.complete_round();
                    Ok(())
                } else {
                    self.load_question()
                }
            }
            Phase::RoundComplete => self.start_next_round(),
            actual => Err(GameError::WrongPhase { actual }),
        }
    }

    pub fn use_heal(&mut self) -> Result<u32, GameError> {
        let rules = &self.rules;
        let session = self.session.as_mut().ok_or(GameError::WrongPhase { actual: Phase::Setup })?;
        if session.phase != Phase::Playing {
            return Err(GameError::WrongPhase { actual: session.phase });
        }
        if session.player.eliminated {
            return Err(GameError::Eliminated);
        }
        session.player.use_heal(rules).ok_or(GameError::NoHealAvailable)
    }

    fn start_next_round(&mut self) -> Result<(), GameError> {
        let session = self.session.as_mut().ok_or(GameError::WrongPhase { actual: Phase::Setup })?;
        session.current_round += 1;
        if let Some(round) = session.rounds.get_mut(&session.current_round) {
            round.pool = None;
        }
        self.enter_round()
    }

    /// Planifica la ronda actual si hace falta, construye su pool y carga la
    /// primera pregunta. Un pool insuficiente deja la ronda sin pregunta activa.
    fn enter_round(&mut self) -> Result<(), GameError> {
        let session = self.session.as_mut().ok_or(GameError::WrongPhase { actual: Phase::Setup })?;
        let round = session.current_round;
        session.phase = Phase::Playing;
        session.current_question_index = 0;
        session.active = None;

        if !session.rounds.contains_key(&round) {
            let prior: Vec<Topic> = session
                .rounds
                .range(..round)
                .map(|(_, r)| r.descriptor.topic)
                .collect();
            let descriptor = plan_round(round, &prior, &mut self.rng);
            session.rounds.insert(round, RoundState { descriptor, pool: None });
        }

        let state = session
            .rounds
            .get_mut(&round)
            .ok_or(GameError::NoActiveQuestion)?;
        if state.pool.is_none() {
            let pool = RoundPool::build(
                &self.bank,
                &state.descriptor,
                self.rules.questions_per_round,
                &mut self.rng,
            )?;
            state.pool = Some(pool);
        }
        info!(
            "round {round}: {} / {}",
            state.descriptor.topic.label(),
            state.descriptor.difficulty.label()
        );

        self.load_question()
    }

    fn load_question(&mut self) -> Result<(), GameError> {
        let session = self.session.as_mut().ok_or(GameError::NoActiveQuestion)?;
        let index = session.current_question_index;
        let pool = session
            .rounds
            .get_mut(&session.current_round)
            .and_then(|r| r.pool.as_mut())
            .ok_or(GameError::NoActiveQuestion)?;
        let question = pool.next_question(index).cloned().ok_or(GameError::NoQuestions)?;
        session.active = Some(ActiveQuestion {
            question,
            outcome: None,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::tests::synthetic_bank;
    use crate::game::tests::{right_option, test_game, wrong_option};
    use crate::model::Difficulty;

    fn started(per_category: usize) -> (Game, tempfile::TempDir) {
        let (mut game, dir) = test_game(per_category);
        game.start_game("Ana", "⚡").unwrap();
        (game, dir)
    }

    #[test]
    fn start_requires_a_name() {
        let (mut game, _dir) = test_game(5);
        assert_eq!(game.start_game("   ", "⚡"), Err(GameError::EmptyName));
        assert_eq!(game.phase(), Phase::Setup);
    }

    #[test]
    fn start_enters_round_one_with_a_question() {
        let (game, _dir) = started(5);
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.current_round(), 1);
        assert_eq!(game.current_question_index(), 0);
        let round = game.current_descriptor().unwrap();
        assert_eq!(round.difficulty, Difficulty::Easy);
        let q = game.current_question().unwrap();
        assert_eq!(q.difficulty, Difficulty::Easy);
        assert!(round.eligible_categories().contains(&q.category.as_str()));
    }

    #[test]
    fn start_twice_is_rejected() {
        let (mut game, _dir) = started(5);
        assert_eq!(
            game.start_game("Bo", "🔥"),
            Err(GameError::WrongPhase { actual: Phase::Playing })
        );
        assert_eq!(game.player().unwrap().name, "Ana");
    }

    #[test]
    fn insufficient_first_round_blocks_the_start() {
        let (mut game, _dir) = test_game(2);
        let err = game.start_game("Ana", "⚡").unwrap_err();
        match err {
            GameError::InsufficientPool { round, needed, available, .. } => {
                assert_eq!((round, needed), (1, 5));
                assert!(available <= 4);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(game.phase(), Phase::Setup);
        assert!(game.current_question().is_none());
    }

    #[test]
    fn empty_bank_cannot_start() {
        let (_, dir) = test_game(5);
        let rules = GameConfig {
            leaderboard_path: dir.path().join("lb.json"),
            ..GameConfig::default()
        };
        let mut game = Game::with_seed(rules, QuestionBank::default(), 1);
        assert_eq!(game.start_game("Ana", "⚡"), Err(GameError::NoQuestions));
    }

    #[test]
    fn wrong_answer_costs_twenty_hp() {
        let (mut game, _dir) = started(5);
        let choice = wrong_option(&game);
        let outcome = game.submit_answer(choice).unwrap();
        assert!(!outcome.is_correct);
        assert_eq!(outcome.effect, AnswerEffect::Damaged { amount: 20, eliminated: false });
        let p = game.player().unwrap();
        assert_eq!((p.hp, p.streak, p.eliminated), (80, 0, false));
        assert_eq!(outcome.correct_answer, game.current_question().unwrap().correct_answer());
    }

    #[test]
    fn shield_negates_wrong_answer() {
        let (mut game, _dir) = started(5);
        game.session.as_mut().unwrap().player.powerups.shield = 1;
        let choice = wrong_option(&game);
        let outcome = game.submit_answer(choice).unwrap();
        assert_eq!(outcome.effect, AnswerEffect::Shielded);
        let p = game.player().unwrap();
        assert_eq!((p.hp, p.powerups.shield), (100, 0));
    }

    #[test]
    fn three_correct_from_seventy_heals_to_eighty_five() {
        let (mut game, _dir) = started(5);
        game.session.as_mut().unwrap().player.hp = 70;
        for _ in 0..3 {
            let choice = right_option(&game);
            game.submit_answer(choice).unwrap();
            game.advance().unwrap();
        }
        let p = game.player().unwrap();
        assert_eq!((p.hp, p.xp, p.streak), (85, 30, 0));
    }

    #[test]
    fn answering_twice_or_out_of_range_changes_nothing() {
        let (mut game, _dir) = started(5);
        assert_eq!(
            game.submit_answer(99),
            Err(GameError::OptionOutOfRange { selected: 99, options: 4 })
        );
        let choice = wrong_option(&game);
        game.submit_answer(choice).unwrap();
        let before = game.player().cloned();
        assert_eq!(game.submit_answer(choice), Err(GameError::AlreadyAnswered));
        assert_eq!(game.player().cloned(), before);
    }

    #[test]
    fn advance_needs_an_answer_first() {
        let (mut game, _dir) = started(5);
        assert_eq!(game.advance(), Err(GameError::NotAnswered));
        assert_eq!(game.current_question_index(), 0);
    }

    #[test]
    fn last_answer_closes_the_round_with_a_bonus() {
        let (mut game, _dir) = started(5);
        for _ in 0..5 {
            let choice = wrong_option(&game);
            game.submit_answer(choice).unwrap();
            if game.player().unwrap().eliminated {
                break;
            }
            game.advance().unwrap();
        }
        // 5 fallos: 100 → 0
        assert!(game.player().unwrap().eliminated);

        let (mut game, _dir) = started(5);
        for i in 0..5 {
            let choice = if i < 4 { right_option(&game) } else { wrong_option(&game) };
            game.submit_answer(choice).unwrap();
            game.advance().unwrap();
        }
        assert_eq!(game.phase(), Phase::RoundComplete);
        let p = game.player().unwrap();
        assert_eq!(p.powerups, PowerUps { shield: 1, heal: 1 });
        assert!(game.current_question().is_none());
    }

    #[test]
    fn rounds_escalate_and_never_repeat_topics() {
        let (mut game, _dir) = started(5);
        let mut topics = Vec::new();
        while game.phase() != Phase::Finished {
            if game.phase() == Phase::Playing {
                if game.current_question_index() == 0 && game.current_question().is_some() {
                    let round = game.current_descriptor().unwrap();
                    assert_eq!(round.difficulty, Difficulty::for_round(round.round_number));
                    topics.push(round.topic);
                }
                let choice = right_option(&game);
                game.submit_answer(choice).unwrap();
            }
            game.advance().unwrap();
        }
        topics.sort();
        topics.dedup();
        assert_eq!(topics.len(), 3);
    }

    #[test]
    fn later_round_without_questions_stays_blocked() {
        let easy_only: Vec<_> = synthetic_bank(5)
            .questions()
            .iter()
            .filter(|q| q.difficulty == Difficulty::Easy)
            .cloned()
            .collect();
        let (_, dir) = test_game(5);
        let rules = GameConfig {
            leaderboard_path: dir.path().join("lb.json"),
            ..GameConfig::default()
        };
        let bank = QuestionBank::from_questions(easy_only).unwrap();
        let mut game = Game::with_seed(rules, bank, 3);
        game.start_game("Ana", "⚡").unwrap();
        for _ in 0..5 {
            let choice = right_option(&game);
            game.submit_answer(choice).unwrap();
            game.advance().unwrap();
        }
        assert_eq!(game.phase(), Phase::RoundComplete);
        let err = game.advance().unwrap_err();
        assert!(matches!(err, GameError::InsufficientPool { round: 2, available: 0, .. }));
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.submit_answer(0), Err(GameError::NoActiveQuestion));
        assert_eq!(game.advance(), Err(GameError::NoActiveQuestion));
    }

    #[test]
    fn heal_powerup_needs_stock() {
        let (mut game, _dir) = started(5);
        assert_eq!(game.use_heal(), Err(GameError::NoHealAvailable));
        {
            let p = &mut game.session.as_mut().unwrap().player;
            p.powerups.heal = 1;
            p.hp = 50;
        }
        assert_eq!(game.use_heal(), Ok(20));
        assert_eq!(game.player().unwrap().hp, 70);
    }
}
