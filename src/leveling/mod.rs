mod xp;
pub use xp::{XP_PER_LEVEL, level_for_xp, xp_for_accuracy};

mod streak;
pub use streak::next_streak;

mod engine;
pub use engine::{CompletionRequest, CompletionSummary, complete};

mod error;
pub use error::{CompletionError, CompletionResult};
