mod difficulty;
pub use difficulty::Difficulty;

mod fallback;
pub use fallback::FallbackCatalog;

mod generator;
pub use generator::{GeminiGenerator, GenerationRequest, LessonGenerator, parse_questions};

mod resolver;
pub use resolver::LessonResolver;

pub mod check;

mod error;
pub use error::{CheckError, GenerationError, GenerationResult};
