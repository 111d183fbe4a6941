use super::config::{BatchFilenames, ExportArtifact, ExportRequest, artifact_filename};
use crate::error::PipelineError;
use log::{debug, info};
use serde_json::Value;
use sheetpress_render_core::DocumentRenderer;
use sheetpress_render_raster::{RasterRenderer, is_valid_scale};
use sheetpress_resource::ResourceProvider;
use sheetpress_source::{ActorData, ActorSource};
use sheetpress_template::{ExportFormat, ResolvedLayout, TemplateDefinition, TemplateRegistry, resolve};
use std::collections::HashMap;
use std::sync::Arc;

/// Resolves templates against actor data and renders the result.
///
/// Built by [`ExportBuilder`](super::ExportBuilder). Exports are
/// synchronous; batch exports process one actor at a time.
pub struct Exporter {
    pub(super) registry: TemplateRegistry,
    pub(super) resources: Arc<dyn ResourceProvider>,
    pub(super) renderers: HashMap<ExportFormat, Arc<dyn DocumentRenderer>>,
    /// The built-in PNG renderer, kept for per-request pixel ratios. `None`
    /// when a custom PNG renderer replaced it.
    pub(super) raster: Option<RasterRenderer>,
}

impl Exporter {
    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    pub fn resources(&self) -> &dyn ResourceProvider {
        self.resources.as_ref()
    }

    pub fn template(&self, id: &str) -> Result<Arc<TemplateDefinition>, PipelineError> {
        self.registry
            .get(id)
            .ok_or_else(|| PipelineError::TemplateNotFound(id.to_string()))
    }

    /// Resolves a template against a raw data context.
    pub fn resolve_layout(&self, template_id: &str, data: &Value) -> Result<ResolvedLayout, PipelineError> {
        let template = self.template(template_id)?;
        Ok(resolve(&template, data))
    }

    /// Resolves a template against an actor, bound as `actor`.
    pub fn resolve_actor(&self, template_id: &str, actor: &ActorData) -> Result<ResolvedLayout, PipelineError> {
        self.resolve_layout(template_id, &actor.to_context()?)
    }

    /// Exports one actor.
    ///
    /// The template and format are checked before anything is resolved or
    /// rendered.
    pub fn export_actor(&self, actor: &ActorData, request: &ExportRequest) -> Result<ExportArtifact, PipelineError> {
        let template = self.template(&request.template_id)?;
        if !template.meta.supports(request.format) {
            return Err(PipelineError::UnsupportedFormat {
                format: request.format,
                template: template.meta.id.clone(),
            });
        }
        let renderer = self.renderer(request)?;

        info!(
            "Exporting '{}' with template '{}' as {}",
            actor.name, template.meta.id, request.format
        );
        let layout = resolve(&template, &actor.to_context()?);
        debug!("Resolved {} element(s)", layout.elements.len());
        let bytes = renderer.render(&layout, self.resources.as_ref())?;

        let filename = request
            .filename
            .clone()
            .unwrap_or_else(|| artifact_filename(&actor.name, &template.meta.id, request.format));
        info!("Produced {} ({} bytes)", filename, bytes.len());
        Ok(ExportArtifact {
            bytes,
            filename,
            mime_type: request.format.mime_type(),
        })
    }

    /// Exports several actors in order, one artifact each. Filenames are
    /// unique across the batch.
    pub fn export_actors(&self, actors: &[ActorData], request: &ExportRequest) -> Result<Vec<ExportArtifact>, PipelineError> {
        let mut names = BatchFilenames::new();
        actors
            .iter()
            .map(|actor| self.export_batch_member(actor, request, &mut names))
            .collect()
    }

    /// Drains `source`, handing each artifact to `sink` as soon as it is
    /// rendered. `should_continue` is asked before every actor; returning
    /// `false` stops the batch with [`PipelineError::Cancelled`].
    ///
    /// Filenames are unique across the batch. Returns the number of artifacts
    /// produced.
    pub fn export_all<S, C>(
        &self,
        source: &mut dyn ActorSource,
        request: &ExportRequest,
        mut sink: S,
        mut should_continue: C,
    ) -> Result<usize, PipelineError>
    where
        S: FnMut(ExportArtifact) -> Result<(), PipelineError>,
        C: FnMut() -> bool,
    {
        let total = source.size_hint();
        let mut names = BatchFilenames::new();
        let mut exported = 0;
        loop {
            if !should_continue() {
                info!("Export cancelled after {} artifact(s)", exported);
                return Err(PipelineError::Cancelled);
            }
            let Some(actor) = source.next() else {
                break;
            };
            match total {
                Some(total) => debug!("Exporting actor {}/{}", exported + 1, total),
                None => debug!("Exporting actor {}", exported + 1),
            }
            sink(self.export_batch_member(&actor, request, &mut names)?)?;
            exported += 1;
        }
        Ok(exported)
    }

    fn export_batch_member(
        &self,
        actor: &ActorData,
        request: &ExportRequest,
        names: &mut BatchFilenames,
    ) -> Result<ExportArtifact, PipelineError> {
        let mut artifact = self.export_actor(actor, request)?;
        let filename = names.claim(&artifact.filename, &actor.id);
        if filename != artifact.filename {
            debug!("Renamed {} to {} to avoid a collision", artifact.filename, filename);
            artifact.filename = filename;
        }
        Ok(artifact)
    }

    fn renderer(&self, request: &ExportRequest) -> Result<Arc<dyn DocumentRenderer>, PipelineError> {
        if let (ExportFormat::Png, Some(ratio)) = (request.format, request.pixel_ratio) {
            if !is_valid_scale(ratio) {
                return Err(PipelineError::Config(format!(
                    "Invalid pixel ratio {}: expected a finite number above zero",
                    ratio
                )));
            }
            if let Some(raster) = &self.raster {
                return Ok(Arc::new(raster.with_pixel_ratio(ratio)));
            }
        }
        self.renderers
            .get(&request.format)
            .cloned()
            .ok_or_else(|| PipelineError::Config(format!("No renderer registered for {}", request.format)))
    }
}
