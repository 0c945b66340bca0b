//! Classifier hyperparameters.

use crate::error::{Error, Result};

/// Options for the TF-IDF + multinomial naive Bayes pipeline.
///
/// Defaults reproduce the conventional settings: lowercase tokens of two or
/// more word characters, smoothed IDF, raw term counts, L2-normalized rows,
/// additive smoothing of 1.0 and class priors learned from the data.
#[derive(Debug, Clone)]
pub struct ClassifierOptions {
    /// Additive (Laplace/Lidstone) smoothing for feature likelihoods
    pub alpha: f64,

    /// Add one to document frequencies, as if an extra document contained every term
    pub smooth_idf: bool,

    /// Replace term counts with `1 + ln(count)`
    pub sublinear_tf: bool,

    /// Lowercase text before tokenizing
    pub lowercase: bool,

    /// Learn class priors from label frequencies (uniform otherwise)
    pub fit_prior: bool,
}

impl ClassifierOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set smoothing parameter.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Enable or disable IDF smoothing.
    pub fn with_smooth_idf(mut self, smooth: bool) -> Self {
        self.smooth_idf = smooth;
        self
    }

    /// Enable or disable sublinear term frequency.
    pub fn with_sublinear_tf(mut self, sublinear: bool) -> Self {
        self.sublinear_tf = sublinear;
        self
    }

    /// Enable or disable lowercasing.
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Enable or disable learned class priors.
    pub fn with_fit_prior(mut self, fit_prior: bool) -> Self {
        self.fit_prior = fit_prior;
        self
    }

    /// Reject settings that would produce NaN or infinite log-probabilities.
    pub fn validate(&self) -> Result<()> {
        if !self.alpha.is_finite() || self.alpha <= 0.0 {
            return Err(Error::Config(format!(
                "smoothing alpha must be a positive finite number, got {}",
                self.alpha
            )));
        }
        Ok(())
    }
}

impl Default for ClassifierOptions {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            smooth_idf: true,
            sublinear_tf: false,
            lowercase: true,
            fit_prior: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ClassifierOptions::default();
        assert_eq!(options.alpha, 1.0);
        assert!(options.smooth_idf);
        assert!(!options.sublinear_tf);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_invalid_alpha() {
        assert!(matches!(
            ClassifierOptions::new().with_alpha(0.0).validate(),
            Err(Error::Config(_))
        ));
        assert!(ClassifierOptions::new().with_alpha(f64::NAN).validate().is_err());
    }
}
