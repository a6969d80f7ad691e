//! HTTP handler for labor-contract generation

use super::generator::{DocumentGenerator, GeneratedDocument};
use crate::core::error::SiteError;
use crate::core::service::TemplateStore;
use crate::core::validation::ContractPayload;
use axum::extract::State;
use std::sync::Arc;

/// Application state shared across contract handlers
#[derive(Clone)]
pub struct ContractState {
    pub templates: Arc<dyn TemplateStore>,
    pub generator: Arc<DocumentGenerator>,
    /// Name of the labor-contract template in `templates`
    pub template_name: Arc<str>,
}

/// `POST /api/generate-labor-contract`
///
/// The extractor has already rejected invalid payloads with a 400; any
/// failure from here on is a server fault and never yields partial output.
#[tracing::instrument(
    name = "generate_labor_contract",
    skip_all,
    fields(request_id = %uuid::Uuid::new_v4())
)]
pub async fn generate_labor_contract(
    State(state): State<ContractState>,
    ContractPayload(data): ContractPayload,
) -> Result<GeneratedDocument, SiteError> {
    let template = state.templates.fetch(&state.template_name).await?;

    let generator = state.generator.clone();
    let document = tokio::task::spawn_blocking(move || generator.render(&template, &data))
        .await
        .map_err(|e| SiteError::Internal(format!("render task failed: {}", e)))??;

    tracing::info!(
        file_name = %document.file_name,
        size = document.bytes.len(),
        "labor contract generated"
    );
    Ok(document)
}
