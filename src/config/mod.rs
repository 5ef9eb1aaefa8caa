//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.reviewlens.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `REVIEWLENS_BACKEND_URL`,
//!    `REVIEWLENS_APP_ID`, and friends
//! 4. **Command-line arguments** – `--backend-url`/`-b`, `--app-id`/`-a`,
//!    `--review-id`/`-r`
//!
//! # Configuration File
//!
//! Place `.reviewlens.toml` in the current directory, home directory, or
//! XDG config directory with:
//!
//! ```toml
//! backend_url = "http://127.0.0.1:5000"
//! app_id = "315210"
//! ```

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::backend::FetchError;

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Fetch and render the review listing for an application.
    ReviewList,
    /// Fetch and render the sentiment breakdown for one review.
    ReviewDetail,
    /// Fetch the playtime-sentiment summary chart.
    Summary,
}

/// Default backend address when none is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `REVIEWLENS_BACKEND_URL` or `--backend-url`: Analysis backend address
/// - `REVIEWLENS_APP_ID` or `--app-id`: Steam application identifier
/// - `REVIEWLENS_REVIEW_ID` or `--review-id`: Review recommendation identifier
/// - `REVIEWLENS_OUT` or `--out`: File path for the rendered output
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use reviewlens::ReviewlensConfig;
///
/// let config = ReviewlensConfig::load().expect("failed to load configuration");
/// let backend = config.backend_url();
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "REVIEWLENS",
    discovery(
        dotfile_name = ".reviewlens.toml",
        config_file_name = "reviewlens.toml",
        app_name = "reviewlens"
    )
)]
pub struct ReviewlensConfig {
    /// Base URL of the sentiment-analysis backend.
    ///
    /// Can be provided via:
    /// - CLI: `--backend-url <URL>` or `-b <URL>`
    /// - Environment: `REVIEWLENS_BACKEND_URL`
    /// - Config file: `backend_url = "..."`
    #[ortho_config(cli_short = 'b')]
    pub backend_url: Option<String>,

    /// Steam application identifier to analyse.
    ///
    /// Can be provided via:
    /// - CLI: `--app-id <ID>` or `-a <ID>`
    /// - Environment: `REVIEWLENS_APP_ID`
    /// - Config file: `app_id = "..."`
    #[ortho_config(cli_short = 'a')]
    pub app_id: Option<String>,

    /// Review recommendation identifier to break down.
    ///
    /// Supplying a review identifier selects the sentiment-detail flow.
    ///
    /// Can be provided via:
    /// - CLI: `--review-id <ID>` or `-r <ID>`
    /// - Environment: `REVIEWLENS_REVIEW_ID`
    /// - Config file: `review_id = "..."`
    #[ortho_config(cli_short = 'r')]
    pub review_id: Option<String>,

    /// Requests the playtime-sentiment summary chart instead of reviews.
    ///
    /// Can be provided via:
    /// - CLI: `--summary` / `-s`
    /// - Config file: `summary = true`
    ///
    /// Note: environment variable `REVIEWLENS_SUMMARY` is not supported
    /// because `ortho_config` does not load boolean values from the
    /// environment.
    #[ortho_config(cli_short = 's')]
    pub summary: bool,

    /// File path the rendered HTML document is written to.
    ///
    /// When absent, the document is written to standard output.
    ///
    /// Can be provided via:
    /// - CLI: `--out <PATH>` or `-o <PATH>`
    /// - Environment: `REVIEWLENS_OUT`
    /// - Config file: `out = "..."`
    #[ortho_config(cli_short = 'o')]
    pub out: Option<String>,
}

impl ReviewlensConfig {
    /// Resolves the backend address, falling back to the local default.
    #[must_use]
    pub fn backend_url(&self) -> &str {
        self.backend_url.as_deref().unwrap_or(DEFAULT_BACKEND_URL)
    }

    /// Returns the application identifier or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Configuration`] when no identifier is
    /// configured.
    pub fn require_app_id(&self) -> Result<&str, FetchError> {
        self.app_id.as_deref().ok_or_else(|| FetchError::Configuration {
            message: "application identifier is required (use --app-id or -a)".to_owned(),
        })
    }

    /// Returns the review identifier or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Configuration`] when no identifier is
    /// configured.
    pub fn require_review_id(&self) -> Result<&str, FetchError> {
        self.review_id
            .as_deref()
            .ok_or_else(|| FetchError::Configuration {
                message: "review identifier is required (use --review-id or -r)".to_owned(),
            })
    }

    /// Determines the operation mode based on provided configuration.
    ///
    /// Returns `Summary` when the summary flag is set, `ReviewDetail` when a
    /// review identifier is provided, and `ReviewList` otherwise.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.summary {
            OperationMode::Summary
        } else if self.review_id.is_some() {
            OperationMode::ReviewDetail
        } else {
            OperationMode::ReviewList
        }
    }
}
