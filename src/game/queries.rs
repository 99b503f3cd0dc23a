use super::*;

impl Game {
    pub fn phase(&self) -> Phase {
        self.session.as_ref().map(|s| s.phase).unwrap_or(Phase::Setup)
    }

    pub fn player(&self) -> Option<&Player> {
        self.session.as_ref().map(|s| &s.player)
    }

    pub fn current_round(&self) -> usize {
        self.session.as_ref().map(|s| s.current_round).unwrap_or(1)
    }

    pub fn current_question_index(&self) -> usize {
        self.session
            .as_ref()
            .map(|s| s.current_question_index)
            .unwrap_or(0)
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.session
            .as_ref()?
            .active
            .as_ref()
            .map(|a| &a.question)
    }

    /// Resultado de la respuesta a la pregunta activa, si ya se respondió.
    pub fn last_outcome(&self) -> Option<&AnswerOutcome> {
        self.session.as_ref()?.active.as_ref()?.outcome.as_ref()
    }

    pub fn round_descriptor(&self, round_number: usize) -> Option<&RoundDescriptor> {
        self.session
            .as_ref()?
            .rounds
            .get(&round_number)
            .map(|r| &r.descriptor)
    }

    pub fn current_descriptor(&self) -> Option<&RoundDescriptor> {
        self.round_descriptor(self.current_round())
    }

    pub fn round_pool(&self, round_number: usize) -> Option<&RoundPool> {
        self.session
            .as_ref()?
            .rounds
            .get(&round_number)?
            .pool
            .as_ref()
    }

    pub fn ending(&self) -> Option<&GameEnding> {
        self.session.as_ref()?.ending.as_ref()
    }

    pub fn is_last_round(&self) -> bool {
        self.current_round() >= self.rules.max_rounds
    }
}
