//! Interactive clinical intake shell.
//!
//! Thin console adapter over `triage-core`: the two-choice menu loop,
//! free-text prompts, ranked-table rendering, and numeric selections where
//! 0 (or anything unparsable) means skip. All domain flow lives in
//! [`triage_core::intake::run_visit`].

use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use triage_core::intake::{run_visit, SymptomNormalizer, SymptomSuggestion, VisitPrompter};
use triage_core::models::{
    Doctor, MatchResult, NewPatient, UnknownSymptomDecision, VisitOutcome, UNKNOWN_DOCTOR,
};
use triage_core::Database;

/// Number of ranked candidates shown per visit.
const MAX_SUGGESTIONS: usize = 5;

/// Clinical intake and symptom triage console.
///
/// Records patients, matches reported symptoms against the disease catalog,
/// and optionally records a prescription tied to a recommended doctor.
#[derive(Parser)]
#[command(name = "triage", about = "Clinical intake and symptom triage console")]
struct Cli {
    /// Path to the SQLite store.
    #[arg(long, default_value = "triage.db")]
    db: PathBuf,

    /// SQL seed script applied at startup; failure is non-fatal.
    #[arg(long)]
    seed: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Initialize structured logging. Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let db = Database::open(&cli.db)
        .with_context(|| format!("cannot open store at {}", cli.db.display()))?;

    if let Some(seed) = &cli.seed {
        if let Err(e) = db.apply_seed_file(seed) {
            tracing::warn!(error = %e, "seed script failed; continuing with existing store state");
        }
    }

    let mut normalizer = match SymptomNormalizer::from_store(&db) {
        Ok(n) => n,
        Err(e) => {
            tracing::warn!(error = %e, "could not load vocabulary; starting empty");
            SymptomNormalizer::with_vocabulary(HashMap::new())
        }
    };
    if normalizer.is_empty() {
        eprintln!("Warning: the symptom vocabulary is empty. Seed the store or register symptoms as you go.");
    }

    let mut console = Console {
        reader: io::stdin().lock(),
    };

    println!("=== Clinical Intake & Symptom Triage ===");
    loop {
        println!();
        println!("Menu:");
        println!("1) New patient visit");
        println!("2) Exit");

        match console.number("Choice: ") {
            Some(1) => {
                if let Err(e) = new_visit(&db, &mut normalizer, &mut console) {
                    eprintln!("Visit aborted: {}", e);
                }
            }
            Some(2) | None => break,
            _ => continue,
        }
    }
    println!("Goodbye!");
    Ok(())
}

/// Collect one visit's inputs and report its outcome.
fn new_visit<R: BufRead>(
    db: &Database,
    normalizer: &mut SymptomNormalizer,
    console: &mut Console<R>,
) -> anyhow::Result<()> {
    let name = console.line("Patient name: ").unwrap_or_default();
    let age = console.number("Age: ").unwrap_or(0).max(0) as u32;
    let gender = console.line("Gender: ").unwrap_or_default();
    let contact = console.line("Contact: ").unwrap_or_default();

    let patient = NewPatient {
        name,
        age,
        gender,
        contact,
    };

    let symptom_line = console
        .line("Symptoms (comma separated, e.g. fever, cough, headache): ")
        .unwrap_or_default();

    let outcome = run_visit(db, normalizer, console, &patient, &symptom_line)?;

    if let Ok(json) = serde_json::to_string(&outcome) {
        tracing::debug!(outcome = %json, "visit finished");
    }

    println!("Saved patient id = {}", outcome.patient_id());
    match &outcome {
        VisitOutcome::NoValidSymptoms { .. } => {
            println!("No valid symptoms given. Ending visit.");
        }
        VisitOutcome::NoProbableDisease { .. } => {
            println!("No probable disease found for the given symptoms.");
        }
        VisitOutcome::RankedOnly { .. } => {}
        VisitOutcome::PrescriptionRecorded { prescription, .. } => {
            println!("Prescription {} saved.", prescription.prescription_id);
        }
    }
    Ok(())
}

/// Blocking console reader; doubles as the visit's decision prompter.
struct Console<R: BufRead> {
    reader: R,
}

impl<R: BufRead> Console<R> {
    /// Prompt and read one line. None means end of input.
    fn line(&mut self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        io::stdout().flush().ok();

        let mut buf = String::new();
        match self.reader.read_line(&mut buf) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(buf.trim_end_matches(['\n', '\r']).to_string()),
        }
    }

    /// Prompt for a number; unparsable input coerces to 0 (skip).
    fn number(&mut self, prompt: &str) -> Option<i64> {
        self.line(prompt).map(|s| s.trim().parse().unwrap_or(0))
    }
}

impl<R: BufRead> VisitPrompter for Console<R> {
    fn on_unknown_symptom(
        &mut self,
        token: &str,
        suggestions: &[SymptomSuggestion],
    ) -> UnknownSymptomDecision {
        println!("Symptom '{}' is not in the vocabulary.", token);

        if !suggestions.is_empty() {
            println!("Did you mean:");
            for (i, suggestion) in suggestions.iter().enumerate() {
                println!("{}) {}", i + 1, suggestion.name);
            }
            let pick = self.number("Suggestion number (0 to continue): ").unwrap_or(0);
            if pick >= 1 && pick <= suggestions.len() as i64 {
                return UnknownSymptomDecision::UseExisting(
                    suggestions[pick as usize - 1].symptom_id,
                );
            }
        }

        let answer = self
            .line(&format!("Register '{}' as a new symptom? (y/n): ", token))
            .unwrap_or_default();
        if answer.trim().eq_ignore_ascii_case("y") {
            UnknownSymptomDecision::Register
        } else {
            println!("Skipping '{}'.", token);
            UnknownSymptomDecision::Skip
        }
    }

    fn choose_candidate(&mut self, candidates: &[MatchResult]) -> Option<usize> {
        let shown = candidates.len().min(MAX_SUGGESTIONS);
        print_ranked_table(&candidates[..shown]);

        let pick = self
            .number("Disease number to record a prescription (0 to skip): ")
            .unwrap_or(0);
        if pick >= 1 && pick <= shown as i64 {
            Some(pick as usize - 1)
        } else {
            println!("Skipping prescription.");
            None
        }
    }

    fn choose_doctor(&mut self, specialization: &str, doctors: &[Doctor]) -> i64 {
        if doctors.is_empty() {
            println!("No doctors found for specialization '{}'.", specialization);
            return self
                .number("Enter a doctor id (0 = unknown): ")
                .unwrap_or(UNKNOWN_DOCTOR);
        }

        println!("Available doctors for {}:", specialization);
        for (i, doctor) in doctors.iter().enumerate() {
            println!("{}) {} (id {})", i + 1, doctor.name, doctor.doctor_id);
        }

        let pick = self
            .number("Doctor number (0 to enter an id manually): ")
            .unwrap_or(0);
        if pick >= 1 && pick <= doctors.len() as i64 {
            doctors[pick as usize - 1].doctor_id
        } else {
            self.number("Doctor id (0 = unknown): ")
                .unwrap_or(UNKNOWN_DOCTOR)
        }
    }

    fn prescription_notes(&mut self) -> String {
        self.line("Notes/prescription: ").unwrap_or_default()
    }
}

fn print_ranked_table(candidates: &[MatchResult]) {
    println!();
    println!("Probable diseases (ranked by symptom match):");
    println!(
        "{:<5}{:<25}{:<25}{:>8}{:>10}",
        "No.", "Disease", "Specialization", "Score%", "Matches"
    );
    println!("{}", "-".repeat(73));
    for (i, candidate) in candidates.iter().enumerate() {
        println!(
            "{:<5}{:<25}{:<25}{:>8.1}{:>10}",
            i + 1,
            candidate.disease_name,
            candidate.specialization,
            candidate.score,
            candidate.match_count
        );
    }
}
