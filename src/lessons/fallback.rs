use std::collections::HashMap;

use crate::model::entity::{Language, Question};

#[derive(Debug, Clone)]
pub struct FallbackCatalog {
    tables: HashMap<Language, Vec<Question>>,
    default: Vec<Question>,
}

impl Default for FallbackCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FallbackCatalog {
    pub fn builtin() -> Self {
        let tables: HashMap<Language, Vec<Question>> = Language::ALL
            .into_iter()
            .map(|lang| (lang, builtin_lesson(lang)))
            .collect();

        Self {
            tables,
            default: builtin_lesson(Language::DEFAULT),
        }
    }

    pub fn without(mut self, language: Language) -> Self {
        self.tables.remove(&language);
        self
    }

    pub fn has(&self, language: Language) -> bool {
        self.tables.contains_key(&language)
    }

    pub fn questions(&self, language: Language) -> &[Question] {
        match self.tables.get(&language) {
            Some(table) => table,
            None => {
                tracing::debug!(%language, "no fallback lesson, using {}", Language::DEFAULT);
                &self.default
            }
        }
    }
}

fn builtin_lesson(language: Language) -> Vec<Question> {
    match language {
        Language::Spanish => spanish(),
        Language::French => french(),
        Language::Japanese => japanese(),
        Language::German => german(),
        Language::Korean => korean(),
        Language::English => english(),
    }
}

fn spanish() -> Vec<Question> {
    vec![
        Question::multiple_choice(
            "What does 'Hola' mean?",
            "Select the correct translation",
            &["Hello", "Goodbye", "Thank you", "Please"],
            0,
            "'Hola' is the most common greeting in Spanish, meaning 'Hello'.",
        ),
        Question::multiple_choice(
            "How do you say 'Thank you' in Spanish?",
            "Choose the correct answer",
            &["Por favor", "Gracias", "Adiós", "Perdón"],
            1,
            "'Gracias' means 'Thank you' in Spanish.",
        ),
        Question::fill_blank(
            "Complete the greeting",
            "Fill in the missing word",
            "Buenos _____",
            "días",
            "'Buenos días' means 'Good morning' in Spanish.",
        ),
        Question::fill_blank(
            "Complete: '¿Cómo _____ llamas?'",
            "Fill in the blank",
            "¿Cómo _____ llamas?",
            "te",
            "'¿Cómo te llamas?' means 'What is your name?' in Spanish.",
        ),
        Question::translation(
            "Translate to Spanish",
            "Write the translation",
            "Good morning",
            "Buenos días",
            &["buenos dias", "Buenos dias"],
            "'Buenos días' is how you say 'Good morning' in Spanish.",
        ),
    ]
}

fn french() -> Vec<Question> {
    vec![
        Question::multiple_choice(
            "What does 'Bonjour' mean?",
            "Select the correct translation",
            &["Goodbye", "Hello", "Thank you", "Please"],
            1,
            "'Bonjour' means 'Hello' or 'Good day' in French.",
        ),
        Question::multiple_choice(
            "How do you say 'Thank you' in French?",
            "Choose the correct answer",
            &["S'il vous plaît", "Merci", "Au revoir", "Pardon"],
            1,
            "'Merci' means 'Thank you' in French.",
        ),
        Question::fill_blank(
            "Complete the greeting",
            "Fill in the missing word",
            "Bonne _____",
            "journée",
            "'Bonne journée' means 'Have a good day' in French.",
        ),
        Question::fill_blank(
            "Complete: 'Comment _____ -vous?'",
            "Fill in the blank",
            "Comment _____ -vous?",
            "allez",
            "'Comment allez-vous?' means 'How are you?' in French.",
        ),
        Question::translation(
            "Translate to French",
            "Write the translation",
            "Good evening",
            "Bonsoir",
            &["bonsoir"],
            "'Bonsoir' is how you say 'Good evening' in French.",
        ),
    ]
}

fn japanese() -> Vec<Question> {
    vec![
        Question::multiple_choice(
            "What does 'こんにちは' (Konnichiwa) mean?",
            "Select the correct translation",
            &["Goodbye", "Thank you", "Hello", "Please"],
            2,
            "'こんにちは' (Konnichiwa) means 'Hello' in Japanese.",
        ),
        Question::multiple_choice(
            "How do you say 'Thank you' in Japanese?",
            "Choose the correct answer",
            &["すみません", "ありがとう", "さようなら", "おはよう"],
            1,
            "'ありがとう' (Arigatou) means 'Thank you' in Japanese.",
        ),
        Question::fill_blank(
            "Complete the greeting",
            "Fill in the missing hiragana",
            "おはよう_____",
            "ございます",
            "'おはようございます' (Ohayou gozaimasu) means 'Good morning' in Japanese.",
        ),
        Question::fill_blank(
            "Complete: 'お元気_____?'",
            "Fill in the blank",
            "お元気_____?",
            "ですか",
            "'お元気ですか?' (Ogenki desu ka?) means 'How are you?' in Japanese.",
        ),
        Question::translation(
            "Translate to Japanese",
            "Write the translation in hiragana or kanji",
            "Good morning",
            "おはようございます",
            &["おはよう", "Ohayou gozaimasu"],
            "'おはようございます' is the polite way to say 'Good morning' in Japanese.",
        ),
    ]
}

fn german() -> Vec<Question> {
    vec![
        Question::multiple_choice(
            "What does 'Guten Tag' mean?",
            "Select the correct translation",
            &["Good morning", "Hello/Good day", "Goodbye", "Good evening"],
            1,
            "'Guten Tag' means 'Hello' or 'Good day' in German.",
        ),
        Question::multiple_choice(
            "How do you say 'Thank you' in German?",
            "Choose the correct answer",
            &["Bitte", "Danke", "Tschüss", "Entschuldigung"],
            1,
            "'Danke' means 'Thank you' in German.",
        ),
        Question::fill_blank(
            "Complete the greeting",
            "Fill in the missing word",
            "Guten _____",
            "Morgen",
            "'Guten Morgen' means 'Good morning' in German.",
        ),
        Question::fill_blank(
            "Complete: 'Wie _____ es dir?'",
            "Fill in the blank",
            "Wie _____ es dir?",
            "geht",
            "'Wie geht es dir?' means 'How are you?' in German.",
        ),
        Question::translation(
            "Translate to German",
            "Write the translation",
            "Good evening",
            "Guten Abend",
            &["guten abend", "Guten abend"],
            "'Guten Abend' is how you say 'Good evening' in German.",
        ),
    ]
}

fn korean() -> Vec<Question> {
    vec![
        Question::multiple_choice(
            "What does '안녕하세요' (Annyeonghaseyo) mean?",
            "Select the correct translation",
            &["Goodbye", "Thank you", "Hello", "Please"],
            2,
            "'안녕하세요' (Annyeonghaseyo) is a polite greeting meaning 'Hello' in Korean.",
        ),
        Question::multiple_choice(
            "How do you say 'Thank you' in Korean?",
            "Choose the correct answer",
            &["미안해요", "감사합니다", "안녕히 가세요", "좋아요"],
            1,
            "'감사합니다' (Gamsahamnida) means 'Thank you' in Korean.",
        ),
        Question::fill_blank(
            "Complete the greeting",
            "Fill in the missing syllable",
            "안녕_____세요",
            "하",
            "'안녕하세요' is the standard polite greeting in Korean.",
        ),
        Question::fill_blank(
            "Complete: '어떻게 _____?'",
            "Fill in the blank",
            "어떻게 _____?",
            "지내요",
            "'어떻게 지내요?' means 'How are you?' in Korean.",
        ),
        Question::translation(
            "Translate to Korean",
            "Write the translation in Hangul",
            "Thank you",
            "감사합니다",
            &["고맙습니다", "Gamsahamnida"],
            "'감사합니다' is the formal way to say 'Thank you' in Korean.",
        ),
    ]
}

fn english() -> Vec<Question> {
    vec![
        Question::multiple_choice(
            "What is the past tense of 'go'?",
            "Select the correct answer",
            &["goed", "went", "gone", "going"],
            1,
            "'Went' is the simple past tense of the verb 'go'.",
        ),
        Question::multiple_choice(
            "Which word is a synonym for 'happy'?",
            "Choose the correct answer",
            &["sad", "joyful", "angry", "tired"],
            1,
            "'Joyful' is a synonym for 'happy', both meaning feeling pleasure or contentment.",
        ),
        Question::fill_blank(
            "Complete the sentence",
            "Fill in the blank with the correct article",
            "She is _____ teacher.",
            "a",
            "We use 'a' before words that start with a consonant sound. 'Teacher' starts with 't'.",
        ),
        Question::fill_blank(
            "Complete: 'I _____ to the store yesterday.'",
            "Fill in the blank with the correct verb form",
            "I _____ to the store yesterday.",
            "went",
            "Since 'yesterday' indicates past time, we use the past tense 'went'.",
        ),
        Question::translation(
            "Rephrase in formal English",
            "Make this sentence more formal",
            "I wanna go home",
            "I would like to go home",
            &["I want to go home", "I wish to go home"],
            "'I would like to' is more formal than 'I wanna', which is very informal.",
        ),
    ]
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::entity::{QUESTIONS_PER_LESSON, QuestionKind};

    #[test]
    fn every_language_has_a_full_lesson() {
        let catalog = FallbackCatalog::builtin();
        for lang in Language::ALL {
            assert!(catalog.has(lang));
            let questions = catalog.questions(lang);
            assert_eq!(questions.len(), QUESTIONS_PER_LESSON, "{lang}");
            assert!(questions.iter().all(Question::is_well_formed), "{lang}");
        }
    }

    #[test]
    fn lessons_mix_question_kinds() {
        let catalog = FallbackCatalog::builtin();
        for lang in Language::ALL {
            let kinds: Vec<QuestionKind> = catalog.questions(lang).iter().map(Question::kind).collect();
            let count = |k: QuestionKind| kinds.iter().filter(|x| **x == k).count();
            assert_eq!(count(QuestionKind::MultipleChoice), 2);
            assert_eq!(count(QuestionKind::FillBlank), 2);
            assert_eq!(count(QuestionKind::Translation), 1);
        }
    }

    #[test]
    fn missing_language_uses_default() {
        let catalog = FallbackCatalog::builtin().without(Language::Korean);
        assert!(!catalog.has(Language::Korean));
        assert_eq!(catalog.questions(Language::Korean), catalog.questions(Language::English));

        // even without an explicit default table
        let bare = FallbackCatalog::builtin().without(Language::English);
        assert_eq!(bare.questions(Language::English).len(), QUESTIONS_PER_LESSON);
    }
}
