// src/data.rs

use std::collections::HashSet;
use std::path::Path;

use log::{error, info};

use crate::error::QuestionBankError;
use crate::model::{Difficulty, Question};

/// Banco de preguntas validado. Inmutable una vez cargado.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Valida todas las preguntas; basta una inválida para rechazar el banco entero.
    pub fn from_questions(questions: Vec<Question>) -> Result<Self, QuestionBankError> {
        let mut seen = HashSet::new();
        for (i, q) in questions.iter().enumerate() {
            let position = i + 1;
            if q.text.trim().is_empty() {
                return Err(QuestionBankError::EmptyField { position, id: q.id, field: "text" });
            }
            if q.category.trim().is_empty() {
                return Err(QuestionBankError::EmptyField {
                    position,
                    id: q.id,
                    field: "category",
                });
            }
            if q.options.len() < 2 {
                return Err(QuestionBankError::TooFewOptions {
                    position,
                    id: q.id,
                    found: q.options.len(),
                });
            }
            if q.correct_option_index >= q.options.len() {
                return Err(QuestionBankError::InvalidAnswerIndex {
                    position,
                    id: q.id,
                    index: q.correct_option_index,
                    options: q.options.len(),
                });
            }
            if !seen.insert(q.id) {
                return Err(QuestionBankError::DuplicateId(q.id));
            }
        }
        Ok(Self { questions })
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, QuestionBankError> {
        let questions: Vec<Question> = serde_yaml::from_str(text)?;
        Self::from_questions(questions)
    }

    pub fn from_json_str(text: &str) -> Result<Self, QuestionBankError> {
        let questions: Vec<Question> = serde_json::from_str(text)?;
        Self::from_questions(questions)
    }

    /// Carga el banco de preguntas desde el YAML embebido
    pub fn embedded() -> Result<Self, QuestionBankError> {
        Self::from_yaml_str(include_str!("data/questions.yaml"))
    }

    /// Carga desde fichero; el formato se decide por la extensión.
    pub fn load(path: &Path) -> Result<Self, QuestionBankError> {
        let text = std::fs::read_to_string(path).map_err(|source| QuestionBankError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&text),
            Some("yaml") | Some("yml") => Self::from_yaml_str(&text),
            _ => Err(QuestionBankError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Punto de entrada del arranque: con `None` usa el banco embebido.
    pub fn load_from(path: Option<&Path>) -> Result<Self, QuestionBankError> {
        let bank = match path {
            Some(p) => Self::load(p),
            None => Self::embedded(),
        };
        match &bank {
            Ok(b) => info!("question bank loaded: {} questions", b.len()),
            Err(e) => error!("question bank rejected: {e}"),
        }
        bank
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Preguntas con la dificultad dada y categoría dentro de `categories`, en el orden del banco.
    pub fn filter(&self, difficulty: Difficulty, categories: &[&str]) -> Vec<&Question> {
        self.questions
            .iter()
            .filter(|q| q.difficulty == difficulty && categories.contains(&q.category.as_str()))
            .collect()
    }
}
