//! End-to-end generation pipeline.
//!
//! Wires the three leaf components together for one request:
//!
//! 1. Prompt builder renders the task description.
//! 2. The injected agent collaborator turns it into response text.
//! 3. The response is composed (memo extraction included) and rendered to
//!    PDF bytes.
//!
//! The pipeline holds no cross-call state; every generation is a pure
//! function of the request, the collaborator's reply, and the wall clock
//! (date stamp and artifact file name).

use crate::agent::IntentDetector;
use crate::config::RenderConfig;
use crate::document::GeneratedDocument;
use crate::error::Result;
use crate::prompt::build_prompt;
use crate::render::DocumentRenderer;
use crate::store::{GenerationRecord, RecordStore};
use crate::task::TaskRequest;
use chrono::Utc;
use std::path::{Path, PathBuf};

/// The outcome of one pipeline run.
#[derive(Debug)]
pub struct Generation {
    /// The composed document (title, date, body, memo, file name).
    pub document: GeneratedDocument,
    /// The prompt that was sent to the agent.
    pub prompt: String,
    /// The raw agent response, verbatim.
    pub response_text: String,
    /// The rendered PDF, suitable for download or base64 embedding.
    pub pdf_bytes: Vec<u8>,
}

/// Document-generation pipeline with injected collaborators.
pub struct Pipeline {
    agent: Box<dyn IntentDetector>,
    store: Option<Box<dyn RecordStore>>,
    renderer: DocumentRenderer,
    session: String,
}

impl Pipeline {
    /// Create a pipeline around an agent collaborator, with default render
    /// configuration and no record store.
    pub fn new(agent: Box<dyn IntentDetector>) -> Self {
        Self {
            agent,
            store: None,
            renderer: DocumentRenderer::with_defaults(),
            session: "taskdoc".to_string(),
        }
    }

    /// Use a specific render configuration.
    pub fn with_render_config(mut self, config: RenderConfig) -> Self {
        self.renderer = DocumentRenderer::new(config);
        self
    }

    /// Append a record to the given store after each generation.
    pub fn with_store(mut self, store: Box<dyn RecordStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Use a specific agent session identifier.
    pub fn with_session(mut self, session: impl Into<String>) -> Self {
        self.session = session.into();
        self
    }

    /// Run the full pipeline for one request and return the PDF bytes
    /// alongside the composed document.
    pub fn generate(&self, request: &TaskRequest) -> Result<Generation> {
        let prompt = build_prompt(request);
        let response_text = self.agent.detect_intent(&self.session, &prompt)?;

        let now = Utc::now();
        let document = GeneratedDocument::compose(request, &prompt, &response_text, now);
        let pdf_bytes = self.renderer.render(&document)?;

        if let Some(store) = &self.store {
            store.append(&GenerationRecord::new(request, &document.file_name, now))?;
        }

        Ok(Generation {
            document,
            prompt,
            response_text,
            pdf_bytes,
        })
    }

    /// Run the pipeline and also write the artifact into `dir`, returning
    /// the generation and the artifact path.
    pub fn generate_to_file(&self, request: &TaskRequest, dir: &Path) -> Result<(Generation, PathBuf)> {
        let generation = self.generate(request)?;
        let path = dir.join(&generation.document.file_name);
        std::fs::write(&path, &generation.pdf_bytes).map_err(|e| {
            crate::error::TaskdocError::Io(format!("failed to write '{}': {}", path.display(), e))
        })?;
        Ok((generation, path))
    }
}
