mod language;
pub use language::{Language, UnknownLanguage};

mod user;
pub use user::{UserEntity, UserEntityCreate};

mod user_progress;
pub use user_progress::{UserProgress, UserProgressCreate};

mod question;
pub use question::{Blank, FillBlank, MultipleChoice, Question, QuestionKind, Translation};

mod lesson;
pub use lesson::{LESSON_XP_REWARD, LESSONS_PER_LEVEL, Lesson, QUESTIONS_PER_LESSON};
