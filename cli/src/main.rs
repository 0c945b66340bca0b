//! resume-ats CLI - résumé analysis tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::{ColoredString, Colorize};

use resume_ats::render::{to_json, to_text};
use resume_ats::{knowledge, Corpus, JsonFormat, ResumeAnalyzer, ResumeReport, ScoreBand};

#[derive(Parser)]
#[command(name = "resume-ats")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Analyze PDF résumés: contact details, skills, predicted role and ATS score", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a résumé
    Analyze {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,

        /// Output compact JSON
        #[arg(long, requires = "json")]
        compact: bool,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Include the extracted text in the report
        #[arg(long)]
        show_text: bool,

        /// Skip pages whose text cannot be decoded
        #[arg(long)]
        lenient: bool,
    },

    /// List the skill knowledge base
    Skills {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the trained role model and requirement table
    Roles,

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Analyze {
            input,
            json,
            compact,
            output,
            show_text,
            lenient,
        }) => {
            let format = match (json, compact) {
                (false, _) => None,
                (true, false) => Some(JsonFormat::Pretty),
                (true, true) => Some(JsonFormat::Compact),
            };
            cmd_analyze(&input, format, output.as_deref(), show_text, lenient)
        }
        Some(Commands::Skills { json }) => cmd_skills(json),
        Some(Commands::Roles) => cmd_roles(),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: analyze if input is provided
            if let Some(input) = cli.input {
                cmd_analyze(&input, None, None, false, false)
            } else {
                println!("{}", "Usage: resume-ats <FILE>".yellow());
                println!("       resume-ats --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_analyze(
    input: &Path,
    format: Option<JsonFormat>,
    output: Option<&Path>,
    show_text: bool,
    lenient: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    log::debug!("Building analyzer (lenient: {})", lenient);
    let mut builder = ResumeAnalyzer::builder();
    if lenient {
        builder = builder.lenient();
    }
    let analyzer = builder.build()?;
    let report = analyzer
        .analyze_file(input)
        .map_err(|e| describe_analysis_error(input, e))?;

    match (format, output) {
        (Some(format), Some(path)) => {
            fs::write(path, to_json(&report, format)?)?;
            println!("{} {}", "Saved to".green(), path.display());
        }
        (Some(format), None) => println!("{}", to_json(&report, format)?),
        (None, Some(path)) => {
            fs::write(path, to_text(&report, show_text))?;
            println!("{} {}", "Saved to".green(), path.display());
        }
        (None, None) => print_report(&report, show_text),
    }

    Ok(())
}

/// Decode failures name the offending file; everything else passes through.
fn describe_analysis_error(input: &Path, err: resume_ats::Error) -> Box<dyn std::error::Error> {
    if err.is_decode() {
        format!("{} is not a readable PDF ({})", input.display(), err).into()
    } else {
        err.into()
    }
}

fn band_colored(report: &ResumeReport) -> ColoredString {
    let score = format!("{:.2}", report.ats.score);
    match report.band {
        ScoreBand::Low => score.red().bold(),
        ScoreBand::Moderate => score.yellow().bold(),
        ScoreBand::Strong => score.green().bold(),
    }
}

fn print_report(report: &ResumeReport, show_text: bool) {
    if show_text {
        println!("{}", "Extracted Text".cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
        println!("{}", report.text.trim_end());
        println!();
    }

    println!("{}", "Candidate".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Name".bold(), report.name);
    println!("{}: {}", "Email".bold(), report.email);
    println!("{}: {}", "Phone".bold(), report.phone);

    println!();
    println!("{}", "Job Match".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Predicted Role".bold(), report.role);
    println!("{}: {}", "ATS Score".bold(), band_colored(report));
    if !report.ats.matched.is_empty() {
        println!("{}: {}", "Matched".bold(), report.ats.matched.join(", "));
    }
    if !report.ats.missing.is_empty() {
        println!(
            "{}: {}",
            "Missing".bold(),
            report.ats.missing.join(", ").dimmed()
        );
    }

    if !report.skills.is_empty() {
        println!();
        println!("{}", "Skills".cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
        for skill in &report.skills {
            println!("  {} {}", "•".green(), skill);
        }
    }

    if !report.suggestions.is_empty() {
        println!();
        println!("{}", "Suggestions for Skill Improvement".cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
        for resource in &report.suggestions {
            println!("  {}: {}", resource.title.bold(), resource.url.dimmed());
        }
    }
}

fn cmd_skills(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(knowledge::all())?);
        return Ok(());
    }

    println!("{}", "Skill Knowledge Base".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for resource in knowledge::all() {
        println!(
            "{:<18} {} {}",
            resource.skill.bold(),
            resource.title,
            resource.url.dimmed()
        );
    }

    Ok(())
}

fn cmd_roles() -> Result<(), Box<dyn std::error::Error>> {
    let analyzer = ResumeAnalyzer::new()?;
    let model = analyzer.model()?;

    println!("{}", "Role Model".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Labels".bold(), model.labels().len());
    println!("{}: {}", "Vocabulary".bold(), model.vocabulary_len());
    if let Some(accuracy) = model.accuracy(&Corpus::reference()) {
        println!("{}: {:.2}", "Training accuracy".bold(), accuracy);
    }

    println!();
    println!("{}", "Requirements".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for label in model.labels() {
        match analyzer.requirements().get(label) {
            Some(keywords) => println!("{}: {}", label.as_str().bold(), keywords.join(", ")),
            None => println!("{}: {}", label.as_str().bold(), "unscored".dimmed()),
        }
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "resume-ats".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Résumé analysis and ATS scoring tool");
    println!();
    println!("License: MIT");
}
