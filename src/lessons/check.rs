use serde::{Deserialize, Serialize};

use crate::lessons::CheckError;
use crate::model::entity::{FillBlank, Question};

#[derive(Debug, Clone, PartialEq, Deserialize, utoipa::ToSchema)]
#[serde(untagged)]
pub enum UserAnswer {
    Choice(usize),
    Text(String),
    Blanks(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
#[serde(untagged)]
pub enum CorrectAnswer {
    Choice(usize),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnswerResult {
    pub correct: bool,
    pub correct_answer: CorrectAnswer,
    pub explanation: String,
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

pub fn check_answer(question: &Question, answer: &UserAnswer) -> Result<AnswerResult, CheckError> {
    let (correct, correct_answer) = match (question, answer) {
        (Question::MultipleChoice(q), UserAnswer::Choice(index)) => {
            (*index == q.correct_answer, CorrectAnswer::Choice(q.correct_answer))
        }
        (Question::FillBlank(q), UserAnswer::Blanks(given)) => {
            let correct = given.len() == q.blanks.len()
                && q.blanks
                    .iter()
                    .zip(given)
                    .all(|(blank, given)| normalize(given) == normalize(&blank.correct_answer));
            (correct, blanks_display(q))
        }
        // a bare string is accepted for single-blank questions
        (Question::FillBlank(q), UserAnswer::Text(given)) if q.blanks.len() == 1 => {
            let correct = normalize(given) == normalize(&q.blanks[0].correct_answer);
            (correct, blanks_display(q))
        }
        (Question::Translation(q), UserAnswer::Text(given)) => {
            let given = normalize(given);
            let correct = given == normalize(&q.correct_answer)
                || q.acceptable_answers.iter().any(|a| normalize(a) == given);
            (correct, CorrectAnswer::Text(q.correct_answer.clone()))
        }
        (question, _) => return Err(CheckError::AnswerShapeMismatch(question.kind())),
    };

    Ok(AnswerResult {
        correct,
        correct_answer,
        explanation: question.explanation().to_string(),
    })
}

fn blanks_display(q: &FillBlank) -> CorrectAnswer {
    let joined = q
        .blanks
        .iter()
        .map(|b| b.correct_answer.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    CorrectAnswer::Text(joined)
}
