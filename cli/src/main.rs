use chrono::{Duration, Utc};
use clap::{Parser, Subcommand};
use lingo::Config;
use lingo::error::AppResult;
use lingo::lessons::LessonResolver;
use lingo::leveling::{self, CompletionRequest};
use lingo::model::entity::{Language, Lesson, UserProgress};
use lingo::model::{MemoryStore, ModelManager};
use lingo::utils::clock::ManualClock;

const SIMULATED_USER: &str = "cli-user";

#[derive(Parser, Debug)]
#[command(about = "CLI tool for poking at lessons and the leveling rules", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the languages that can be studied
    Languages,

    /// Print a lesson as JSON
    Lesson {
        #[arg(long)]
        language: Language,
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        number: u32,
    },

    /// Complete one lesson per day against a throwaway store
    Simulate {
        #[arg(long)]
        language: Language,
        #[arg(long, default_value_t = 5)]
        correct: u32,
        #[arg(long, default_value_t = 5)]
        total: u32,
        #[arg(long, default_value_t = 7)]
        days: u32,
    },
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let _ = dotenvy::dotenv();
    let args = Cli::parse();

    match args.command {
        Commands::Languages => {
            for language in Language::ALL {
                println!("{language}");
            }
        }

        Commands::Lesson { language, number } => {
            let config = Config::get_or_init(true).await;
            let resolver = LessonResolver::from_config(config)?;
            let lesson = resolver.lesson(language, number).await;
            let json = serde_json::to_string_pretty(&lesson)?;
            println!("{json}");
        }

        Commands::Simulate { language, correct, total, days } => {
            let mm = ModelManager::new(MemoryStore::new());
            let clock = ManualClock::new(Utc::now());

            for day in 0..days {
                if day > 0 {
                    clock.advance(Duration::days(1));
                }
                let lesson_number = day + 1;
                let request = CompletionRequest {
                    user_id: SIMULATED_USER.to_string(),
                    language,
                    level: Lesson::level_for(lesson_number),
                    lesson_number,
                    correct_answers: correct,
                    total_questions: total,
                };
                let summary = leveling::complete(&mm, &request, &clock).await?;
                println!("Day {}: {:?}", day + 1, summary);
            }

            if let Some(progress) = UserProgress::find(&mm, SIMULATED_USER, language).await? {
                println!("Final progress: {:?}", progress);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lesson_number_starts_at_one() {
        let parsed = Cli::try_parse_from(["lingo-cli", "lesson", "--language", "korean", "--number", "3"]);
        assert!(matches!(
            parsed.unwrap().command,
            Commands::Lesson { language: Language::Korean, number: 3 }
        ));

        let zero = Cli::try_parse_from(["lingo-cli", "lesson", "--language", "Korean", "--number", "0"]);
        assert!(zero.is_err());
    }
}
