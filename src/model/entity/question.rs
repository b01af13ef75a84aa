use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Question {
    MultipleChoice(MultipleChoice),
    FillBlank(FillBlank),
    Translation(Translation),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    MultipleChoice,
    FillBlank,
    Translation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MultipleChoice {
    #[serde(rename = "question")]
    pub prompt: String,
    pub instruction: String,
    pub choices: Vec<String>,
    pub correct_answer: usize,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FillBlank {
    #[serde(rename = "question")]
    pub prompt: String,
    pub instruction: String,
    pub sentence: String,
    pub blanks: Vec<Blank>,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Blank {
    pub position: usize,
    pub correct_answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    #[serde(rename = "question")]
    pub prompt: String,
    pub instruction: String,
    pub source_text: String,
    pub correct_answer: String,
    #[serde(default)]
    pub acceptable_answers: Vec<String>,
    pub explanation: String,
}

impl Question {
    pub fn multiple_choice(
        prompt: &str,
        instruction: &str,
        choices: &[&str],
        correct_answer: usize,
        explanation: &str,
    ) -> Self {
        Self::MultipleChoice(MultipleChoice {
            prompt: prompt.to_string(),
            instruction: instruction.to_string(),
            choices: choices.iter().map(|c| c.to_string()).collect(),
            correct_answer,
            explanation: explanation.to_string(),
        })
    }

    pub fn fill_blank(
        prompt: &str,
        instruction: &str,
        sentence: &str,
        answer: &str,
        explanation: &str,
    ) -> Self {
        Self::FillBlank(FillBlank {
            prompt: prompt.to_string(),
            instruction: instruction.to_string(),
            sentence: sentence.to_string(),
            blanks: vec![Blank {
                position: 0,
                correct_answer: answer.to_string(),
            }],
            explanation: explanation.to_string(),
        })
    }

    pub fn translation(
        prompt: &str,
        instruction: &str,
        source_text: &str,
        correct_answer: &str,
        acceptable_answers: &[&str],
        explanation: &str,
    ) -> Self {
        Self::Translation(Translation {
            prompt: prompt.to_string(),
            instruction: instruction.to_string(),
            source_text: source_text.to_string(),
            correct_answer: correct_answer.to_string(),
            acceptable_answers: acceptable_answers.iter().map(|a| a.to_string()).collect(),
            explanation: explanation.to_string(),
        })
    }

    pub fn kind(&self) -> QuestionKind {
        match self {
            Self::MultipleChoice(_) => QuestionKind::MultipleChoice,
            Self::FillBlank(_) => QuestionKind::FillBlank,
            Self::Translation(_) => QuestionKind::Translation,
        }
    }

    pub fn prompt(&self) -> &str {
        match self {
            Self::MultipleChoice(q) => &q.prompt,
            Self::FillBlank(q) => &q.prompt,
            Self::Translation(q) => &q.prompt,
        }
    }

    pub fn explanation(&self) -> &str {
        match self {
            Self::MultipleChoice(q) => &q.explanation,
            Self::FillBlank(q) => &q.explanation,
            Self::Translation(q) => &q.explanation,
        }
    }

    pub fn is_well_formed(&self) -> bool {
        if self.prompt().trim().is_empty() || self.explanation().trim().is_empty() {
            return false;
        }

        match self {
            Self::MultipleChoice(q) => q.choices.len() >= 2 && q.correct_answer < q.choices.len(),
            Self::FillBlank(q) => {
                !q.blanks.is_empty() && q.blanks.iter().all(|b| !b.correct_answer.trim().is_empty())
            }
            Self::Translation(q) => {
                !q.source_text.trim().is_empty() && !q.correct_answer.trim().is_empty()
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_tagged_json() {
        let raw = json!([
            {
                "type": "multiple_choice",
                "question": "What does 'Hola' mean?",
                "instruction": "Select the correct translation",
                "choices": ["Hello", "Goodbye", "Thank you", "Please"],
                "correctAnswer": 0,
                "explanation": "'Hola' means 'Hello'."
            },
            {
                "type": "fill_blank",
                "question": "Complete the sentence",
                "instruction": "Fill in the missing word(s)",
                "sentence": "Buenos _____, ¿cómo estás?",
                "blanks": [{ "position": 0, "correctAnswer": "días" }],
                "explanation": "'Buenos días' means 'Good morning'."
            },
            {
                "type": "translation",
                "question": "Translate this phrase",
                "instruction": "Translate to Spanish",
                "sourceText": "Hello, how are you?",
                "correctAnswer": "Hola, ¿cómo estás?",
                "acceptableAnswers": ["Hola, como estas?"],
                "explanation": "A common greeting."
            }
        ]);

        let questions: Vec<Question> = serde_json::from_value(raw).unwrap();
        let kinds: Vec<QuestionKind> = questions.iter().map(Question::kind).collect();
        assert_eq!(
            kinds,
            vec![QuestionKind::MultipleChoice, QuestionKind::FillBlank, QuestionKind::Translation]
        );
        assert!(questions.iter().all(Question::is_well_formed));
        assert_eq!(questions[0].prompt(), "What does 'Hola' mean?");
    }

    #[test]
    fn serializes_prompt_as_question() {
        let q = Question::translation("Translate", "Write it", "Good evening", "Bonsoir", &[], "x");
        let value = serde_json::to_value(&q).unwrap();
        assert_eq!(value["type"], "translation");
        assert_eq!(value["question"], "Translate");
        assert_eq!(value["sourceText"], "Good evening");
        assert_eq!(value["acceptableAnswers"], json!([]));
    }

    #[test]
    fn unknown_type_rejected() {
        let raw = json!({ "type": "essay", "question": "q", "instruction": "i", "explanation": "e" });
        assert!(serde_json::from_value::<Question>(raw).is_err());
    }

    #[test]
    fn malformed_questions_detected() {
        let out_of_range = Question::multiple_choice("q", "i", &["a", "b"], 2, "e");
        assert!(!out_of_range.is_well_formed());

        let no_explanation = Question::fill_blank("q", "i", "a _____", "b", "  ");
        assert!(!no_explanation.is_well_formed());

        let empty_answer = Question::translation("q", "i", "src", "", &[], "e");
        assert!(!empty_answer.is_well_formed());
    }
}
