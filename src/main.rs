use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hirelens::models::{ParsedResume, Question, ScoredAnswer};
use hirelens::{AnswerScorer, Config, InterviewAggregator, ResumeExtractor, Storage};

#[derive(Parser, Debug)]
#[command(name = "hirelens")]
#[command(version = "0.1.0")]
#[command(about = "Parse resume text and score scripted interviews")]
struct Args {
    /// Database path for storing results (defaults to DATABASE_PATH)
    #[arg(long)]
    database: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract structured data from a resume text file
    Parse {
        /// Path to the decoded resume text
        file: String,

        /// Output format (json, text)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Persist the parsed resume under this id
        #[arg(long)]
        save_as: Option<String>,
    },

    /// Score a set of answers against a question file and aggregate
    Interview {
        /// Interview id used for persistence
        #[arg(long)]
        id: String,

        /// JSON file with the question definitions
        #[arg(long)]
        questions: String,

        /// JSON file mapping question id to answer text
        #[arg(long)]
        answers: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("hirelens=info".parse()?),
        )
        .init();

    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = Config::from_env()?;

    let database_path = args
        .database
        .clone()
        .unwrap_or_else(|| config.database_path.clone());
    let storage = Storage::new(&database_path)?;

    match args.command {
        Command::Parse {
            file,
            format,
            save_as,
        } => run_parse(&storage, &file, &format, save_as.as_deref()),
        Command::Interview {
            id,
            questions,
            answers,
        } => run_interview(&storage, &config, &id, &questions, &answers),
    }
}

fn run_parse(
    storage: &Storage,
    file: &str,
    format: &str,
    save_as: Option<&str>,
) -> anyhow::Result<()> {
    let raw_text = std::fs::read_to_string(file)?;

    let extractor = ResumeExtractor::new();
    let parsed = extractor.extract(&raw_text);
    tracing::info!(
        "Extracted {} skills, {} experience entries, {} education entries",
        parsed.skills.len(),
        parsed.experience.len(),
        parsed.education.len()
    );

    if let Some(resume_id) = save_as {
        storage.save_resume(resume_id, Some(file), &parsed)?;
        tracing::info!("Parsed resume saved as: {}", resume_id);
    }

    let output = match format {
        "json" => serde_json::to_string_pretty(&parsed)?,
        _ => format_resume(&parsed),
    };
    println!("{}", output);

    Ok(())
}

fn run_interview(
    storage: &Storage,
    config: &Config,
    interview_id: &str,
    questions_path: &str,
    answers_path: &str,
) -> anyhow::Result<()> {
    let questions: Vec<Question> =
        serde_json::from_str(&std::fs::read_to_string(questions_path)?)?;
    let answers: std::collections::HashMap<String, String> =
        serde_json::from_str(&std::fs::read_to_string(answers_path)?)?;

    for question in &questions {
        question.validate()?;
    }

    storage.start_interview(interview_id)?;

    let scorer = AnswerScorer::new();
    for question in &questions {
        let Some(answer_text) = answers.get(&question.id) else {
            tracing::warn!("No answer for question: {}", question.id);
            continue;
        };

        let score = scorer.score(answer_text, question);
        tracing::info!(
            "Question {} ({}): {:.1}/{:.1}",
            question.id,
            question.category,
            score,
            question.max_score
        );

        storage.save_answer(
            interview_id,
            &ScoredAnswer {
                question_id: question.id.clone(),
                answer_text: answer_text.clone(),
                score,
            },
        )?;
    }

    let responses = storage.get_responses(interview_id)?;
    let aggregator = InterviewAggregator::with_policy(config.category_policy);
    let result = aggregator.aggregate(&questions, &responses);

    storage.complete_interview(interview_id, &result)?;
    tracing::info!("Interview {} completed", interview_id);

    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}

fn format_resume(parsed: &ParsedResume) -> String {
    let mut output = String::new();

    output.push_str("\n=== Parsed Resume ===\n\n");

    if let Some(ref name) = parsed.name {
        output.push_str(&format!("Name: {}\n", name));
    }
    if let Some(ref email) = parsed.email {
        output.push_str(&format!("Email: {}\n", email));
    }
    if let Some(ref phone) = parsed.phone {
        output.push_str(&format!("Phone: {}\n", phone));
    }
    if let Some(ref summary) = parsed.summary {
        output.push_str(&format!("Summary: {}\n", summary));
    }

    if !parsed.skills.is_empty() {
        output.push_str(&format!("\nSkills: {}\n", parsed.skills.join(", ")));
    }

    if !parsed.experience.is_empty() {
        output.push_str("\nExperience:\n");
        for entry in &parsed.experience {
            output.push_str(&format!(
                "  - {}{}{}\n",
                entry.title.as_deref().unwrap_or("(untitled)"),
                entry
                    .company
                    .as_deref()
                    .map(|c| format!(" @ {}", c))
                    .unwrap_or_default(),
                entry
                    .duration
                    .as_deref()
                    .map(|d| format!(" [{}]", d))
                    .unwrap_or_default(),
            ));
            if !entry.description.is_empty() {
                output.push_str(&format!("    {}\n", entry.description));
            }
        }
    }

    if !parsed.education.is_empty() {
        output.push_str("\nEducation:\n");
        for entry in &parsed.education {
            output.push_str(&format!(
                "  - {}{}{}\n",
                entry.degree.as_deref().unwrap_or("(unknown)"),
                entry
                    .institution
                    .as_deref()
                    .map(|i| format!(", {}", i))
                    .unwrap_or_default(),
                entry
                    .year
                    .as_deref()
                    .map(|y| format!(" ({})", y))
                    .unwrap_or_default(),
            ));
        }
    }

    output
}
