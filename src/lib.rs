//! # resume-ats
//!
//! Résumé analysis for Rust: PDF text extraction, rule-based entity
//! extraction, job-role classification and ATS keyword scoring.
//!
//! ## Quick Start
//!
//! ```no_run
//! use resume_ats::ResumeAnalyzer;
//!
//! fn main() -> resume_ats::Result<()> {
//!     // Trains the role classifier once, up front
//!     let analyzer = ResumeAnalyzer::new()?;
//!
//!     let report = analyzer.analyze_file("resume.pdf")?;
//!     println!("{} → {} ({:.2}%)", report.name, report.role, report.ats.score);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! raw bytes → [`TextExtractor`] → text → {[`entities`], [`RoleClassifier`]}
//! → {skills, role} → [`scoring::score`] → [`ResumeReport`]
//!
//! Entity extraction and classification are independent and run on the
//! rayon pool side by side unless [`AnalyzerBuilder::sequential`] is set.

pub mod classifier;
pub mod detect;
pub mod entities;
pub mod error;
pub mod knowledge;
pub mod model;
pub mod parser;
pub mod render;
pub mod scoring;

// Re-export commonly used types
pub use classifier::{ClassifierOptions, Corpus, LabeledExample, RoleClassifier, RoleModel};
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_pdf_bytes, PdfFormat};
pub use entities::{extract_contact, extract_entities, Entities, SKILL_VOCABULARY};
pub use error::{DecodeError, Error, Result};
pub use knowledge::SkillResource;
pub use model::{ContactInfo, ResumeReport, RoleLabel, SkillSet};
pub use parser::{ErrorMode, ExtractOptions, PageSource, TextExtractor};
pub use render::JsonFormat;
pub use scoring::{AtsResult, RequirementTable, ScoreBand};

use std::path::Path;

/// Extract the plain text of every page of a PDF, in page order.
///
/// # Example
///
/// ```no_run
/// let data = std::fs::read("resume.pdf").unwrap();
/// let text = resume_ats::extract_text(&data).unwrap();
/// ```
pub fn extract_text(data: &[u8]) -> Result<String> {
    TextExtractor::new().extract(data)
}

/// Extract the plain text of a PDF file on disk.
pub fn extract_text_from_file<P: AsRef<Path>>(path: P) -> Result<String> {
    TextExtractor::new().extract_file(path)
}

/// Analyze PDF bytes with a freshly trained default analyzer.
///
/// Trains the classifier on every call; build a [`ResumeAnalyzer`] once
/// when analyzing more than one document.
pub fn analyze_bytes(data: &[u8]) -> Result<ResumeReport> {
    ResumeAnalyzer::new()?.analyze_bytes(data)
}

/// Analyze a PDF file with a freshly trained default analyzer.
pub fn analyze_file<P: AsRef<Path>>(path: P) -> Result<ResumeReport> {
    ResumeAnalyzer::new()?.analyze_file(path)
}

/// Analyze already-extracted text with a freshly trained default analyzer.
pub fn analyze_text(text: impl Into<String>) -> Result<ResumeReport> {
    ResumeAnalyzer::new()?.analyze_text(text)
}

/// Builder for a [`ResumeAnalyzer`].
///
/// # Example
///
/// ```no_run
/// use resume_ats::{ClassifierOptions, RequirementTable, ResumeAnalyzer};
///
/// let analyzer = ResumeAnalyzer::builder()
///     .lenient()
///     .with_classifier_options(ClassifierOptions::new().with_sublinear_tf(true))
///     .with_requirements(
///         RequirementTable::reference().with_role("Data Scientist", ["Python", "SQL"]),
///     )
///     .sequential()
///     .build()?;
/// # Ok::<(), resume_ats::Error>(())
/// ```
pub struct AnalyzerBuilder {
    extract_options: ExtractOptions,
    classifier_options: ClassifierOptions,
    corpus: Corpus,
    requirements: RequirementTable,
    parallel: bool,
}

impl AnalyzerBuilder {
    /// Create a builder with the reference corpus and requirement table.
    pub fn new() -> Self {
        Self {
            extract_options: ExtractOptions::default(),
            classifier_options: ClassifierOptions::default(),
            corpus: Corpus::reference(),
            requirements: RequirementTable::reference(),
            parallel: true,
        }
    }

    /// Skip pages whose text cannot be decoded instead of failing.
    pub fn lenient(mut self) -> Self {
        self.extract_options = self.extract_options.lenient();
        self
    }

    /// Set text extraction options.
    pub fn with_extract_options(mut self, options: ExtractOptions) -> Self {
        self.extract_options = options;
        self
    }

    /// Set classifier hyperparameters.
    pub fn with_classifier_options(mut self, options: ClassifierOptions) -> Self {
        self.classifier_options = options;
        self
    }

    /// Train on a custom corpus instead of the reference one.
    pub fn with_corpus(mut self, corpus: Corpus) -> Self {
        self.corpus = corpus;
        self
    }

    /// Score against a custom requirement table.
    pub fn with_requirements(mut self, requirements: RequirementTable) -> Self {
        self.requirements = requirements;
        self
    }

    /// Run entity extraction and classification one after the other.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Validate the requirement table and train the classifier.
    ///
    /// Fails with [`Error::Config`] for a malformed requirement table and
    /// [`Error::TrainingData`] for an unusable corpus.
    pub fn build(self) -> Result<ResumeAnalyzer> {
        self.requirements.validate()?;

        let classifier = RoleClassifier::with_options(self.classifier_options);
        classifier.train(&self.corpus)?;

        Ok(ResumeAnalyzer {
            extractor: TextExtractor::with_options(self.extract_options),
            classifier,
            requirements: self.requirements,
            parallel: self.parallel,
        })
    }
}

impl Default for AnalyzerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A trained analysis session.
///
/// Holds the one classifier trained at startup; every analysis only reads it.
pub struct ResumeAnalyzer {
    extractor: TextExtractor,
    classifier: RoleClassifier,
    requirements: RequirementTable,
    parallel: bool,
}

impl ResumeAnalyzer {
    /// Build an analyzer with the reference corpus and requirement table.
    pub fn new() -> Result<Self> {
        AnalyzerBuilder::new().build()
    }

    /// Start configuring an analyzer.
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Analyze raw PDF bytes.
    ///
    /// A decode failure is returned before any entity extraction or
    /// classification takes place.
    pub fn analyze_bytes(&self, data: &[u8]) -> Result<ResumeReport> {
        let text = self.extractor.extract(data)?;
        self.analyze_text(text)
    }

    /// Analyze a PDF file on disk.
    pub fn analyze_file<P: AsRef<Path>>(&self, path: P) -> Result<ResumeReport> {
        let path = path.as_ref();
        log::info!("Analyzing {}", path.display());
        let text = self.extractor.extract_file(path)?;
        self.analyze_text(text)
    }

    /// Analyze already-extracted text.
    pub fn analyze_text(&self, text: impl Into<String>) -> Result<ResumeReport> {
        let text = text.into();

        let ((entities, contact), role) = if self.parallel {
            rayon::join(
                || (extract_entities(&text), extract_contact(&text)),
                || self.classifier.predict(&text),
            )
        } else {
            (
                (extract_entities(&text), extract_contact(&text)),
                self.classifier.predict(&text),
            )
        };
        let role = role?;

        let ats = scoring::score(&entities.skills, &role, &self.requirements)?;
        log::debug!(
            "Predicted '{}' with {} skills, ATS score {:.2}",
            role,
            entities.skills.len(),
            ats.score
        );

        Ok(ResumeReport::new(text, entities, contact, role, ats))
    }

    /// The trained role model.
    pub fn model(&self) -> Result<&RoleModel> {
        self.classifier.model()
    }

    /// The requirement table used for scoring.
    pub fn requirements(&self) -> &RequirementTable {
        &self.requirements
    }
}
