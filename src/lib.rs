/// Public library interface for the animal registry
///
/// This module exports the application type and the public domain, storage
/// and tool types that front ends and tests build on.

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncWrite, BufReader};

// Internal modules
mod domain;
mod samples;
mod shell;
mod storage;
mod tools;

// Re-export public modules and types
pub use domain::*;
pub use samples::sample_animals;
pub use shell::{MenuCommand, Prompter, Shell, ShellError};
pub use storage::{AnimalStorage, MemoryRegistry};
pub use tools::*;

/// Errors that can occur while running the application
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain validation error: {0}")]
    Domain(#[from] domain::DomainError),

    #[error("Shell error: {0}")]
    Shell(#[from] shell::ShellError),
}

/// Start-up options for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    /// Populate the registry with the sample animals
    pub seed_samples: bool,
    /// How "no" answers to yes/no questions are read
    pub answer_mode: AnswerMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed_samples: true,
            answer_mode: AnswerMode::Strict,
        }
    }
}

/// The animal registry application
///
/// Owns the one registry instance for the process and lends it to the
/// console shell.
pub struct AnimalRegistryApp {
    registry: MemoryRegistry,
    config: AppConfig,
}

impl AnimalRegistryApp {
    /// Create the application, seeding the registry if configured to
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        let registry = if config.seed_samples {
            MemoryRegistry::with_animals(sample_animals()?)
        } else {
            MemoryRegistry::new()
        };

        tracing::info!(
            "Registry initialized with {} animals (answer mode: {:?})",
            registry.len(),
            config.answer_mode
        );

        Ok(Self { registry, config })
    }

    /// Run the interactive menu over stdin/stdout
    ///
    /// This method will block until the user exits or stdin is closed.
    pub async fn run(&mut self) -> Result<(), AppError> {
        let reader = BufReader::new(tokio::io::stdin());
        let writer = tokio::io::stdout();
        self.run_with(reader, writer).await
    }

    /// Run the interactive menu over any line reader and writer
    pub async fn run_with<R, W>(&mut self, reader: R, writer: W) -> Result<(), AppError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let prompter = Prompter::new(reader, writer, self.config.answer_mode);
        Shell::new(&mut self.registry, prompter).run().await?;
        Ok(())
    }

    /// Get a reference to the registry (useful for testing)
    pub fn registry(&self) -> &MemoryRegistry {
        &self.registry
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
