//! Document Processing Use Case
//!
//! Application service that turns raw document text into a [`DocumentGraph`].
//! Chunking is delegated to a [`DocumentChunker`]; this service then enriches
//! each chunk with keywords and, when enabled, vectorizes the chunk text
//! prefixed with its ancestor titles.

use std::collections::HashSet;
use std::sync::Arc;

use hdg_domain::constants::{CONTENT_SEPARATOR, TITLE_PATH_SEPARATOR};
use hdg_domain::entities::{ChunkIndex, ChunkNode, DocumentGraph};
use hdg_domain::error::{Error, Result};
use hdg_domain::value_objects::{ChunkEmbedding, Embedding, ProcessingOptions};
use regex::Regex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::domain_services::chunking::{ChunkingResult, DocumentChunker};
use crate::ports::providers::{EmbeddingProvider, KeywordExtractor};

/// Output of a processing call
#[derive(Debug, Clone, Default)]
pub struct ProcessedDocument {
    /// Chunks, elements and edges of the document
    pub graph: DocumentGraph,
    /// One entry per chunk when embeddings are enabled, in chunk order
    pub embeddings: Vec<ChunkEmbedding>,
}

impl ProcessedDocument {
    /// Whether the structural graph was built
    pub fn has_structural_graph(&self) -> bool {
        self.graph.has_structural_graph()
    }

    /// Embedding of a chunk by identifier
    pub fn embedding_for(&self, chunk_id: &str) -> Option<&ChunkEmbedding> {
        self.embeddings.iter().find(|e| e.chunk_id == chunk_id)
    }
}

/// Compiled form of a section keyword rule
#[derive(Debug, Clone)]
struct SectionRule {
    pattern: Regex,
    keywords: Vec<String>,
}

/// Builder for [`DocumentProcessingService`]
///
/// All option checks run in [`build`](Self::build), so an invalid
/// configuration never reaches a document.
pub struct DocumentProcessingServiceBuilder {
    chunker: Arc<dyn DocumentChunker>,
    options: ProcessingOptions,
    keyword_extractor: Option<Arc<dyn KeywordExtractor>>,
    embedding_provider: Option<Arc<dyn EmbeddingProvider>>,
}

impl DocumentProcessingServiceBuilder {
    /// Set the processing options
    pub fn options(mut self, options: ProcessingOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the keyword collaborator
    pub fn keyword_extractor(mut self, extractor: Arc<dyn KeywordExtractor>) -> Self {
        self.keyword_extractor = Some(extractor);
        self
    }

    /// Set the embedding collaborator
    pub fn embedding_provider(mut self, provider: Arc<dyn EmbeddingProvider>) -> Self {
        self.embedding_provider = Some(provider);
        self
    }

    /// Validate the options and build the service
    pub fn build(self) -> Result<DocumentProcessingService> {
        self.options.validate()?;

        if self.options.keywords.extract_keywords && self.keyword_extractor.is_none() {
            return Err(Error::configuration(
                "Keyword extraction is enabled but no keyword extractor is configured",
            ));
        }
        if self.options.embeddings && self.embedding_provider.is_none() {
            return Err(Error::configuration(
                "Embeddings are enabled but no embedding provider is configured",
            ));
        }

        let section_rules = self
            .options
            .keywords
            .section_keywords
            .iter()
            .map(|section| {
                Regex::new(&section.pattern)
                    .map(|pattern| SectionRule {
                        pattern,
                        keywords: section.keywords.clone(),
                    })
                    .map_err(|e| Error::configuration_with_source("Invalid section pattern", e))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(DocumentProcessingService {
            chunker: self.chunker,
            options: self.options,
            keyword_extractor: self.keyword_extractor,
            embedding_provider: self.embedding_provider,
            section_rules,
        })
    }
}

/// Document processing service - orchestrates chunking and enrichment
pub struct DocumentProcessingService {
    chunker: Arc<dyn DocumentChunker>,
    options: ProcessingOptions,
    keyword_extractor: Option<Arc<dyn KeywordExtractor>>,
    embedding_provider: Option<Arc<dyn EmbeddingProvider>>,
    section_rules: Vec<SectionRule>,
}

impl DocumentProcessingService {
    /// Start building a service around a chunker
    pub fn builder(chunker: Arc<dyn DocumentChunker>) -> DocumentProcessingServiceBuilder {
        DocumentProcessingServiceBuilder {
            chunker,
            options: ProcessingOptions::default(),
            keyword_extractor: None,
            embedding_provider: None,
        }
    }

    /// Options the service was built with
    pub fn options(&self) -> &ProcessingOptions {
        &self.options
    }

    /// Process a document
    ///
    /// Empty or whitespace-only text yields an empty graph without touching
    /// any collaborator. Cancellation is observed before chunking and once
    /// per chunk during enrichment; a cancelled call returns
    /// [`Error::Cancelled`] and no partial output.
    pub async fn process(
        &self,
        text: &str,
        source_id: &str,
        cancel: &CancellationToken,
    ) -> Result<ProcessedDocument> {
        if text.trim().is_empty() {
            debug!(source_id, "Empty document, nothing to process");
            return Ok(ProcessedDocument {
                graph: DocumentGraph::empty(source_id),
                embeddings: Vec::new(),
            });
        }
        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }

        let ChunkingResult {
            chunks,
            elements,
            edges,
            has_structural_graph,
        } = self
            .chunker
            .chunk_document(text, self.options.constraints.as_ref())?;

        debug!(
            source_id,
            chunks = chunks.len(),
            elements = elements.len(),
            has_structural_graph,
            "Document chunked"
        );

        let (chunks, embeddings) = self.enrich(chunks, cancel).await?;

        info!(
            source_id,
            chunks = chunks.len(),
            embeddings = embeddings.len(),
            "Document processed"
        );

        Ok(ProcessedDocument {
            graph: DocumentGraph::new(source_id, chunks, elements, edges),
            embeddings,
        })
    }

    /// Vectorize a search query
    pub async fn embed_query(&self, query: &str) -> Result<Embedding> {
        let provider = self
            .embedding_provider
            .as_ref()
            .ok_or_else(|| Error::embedding("No embedding provider configured"))?;
        Ok(provider.vectorize(query, true).await)
    }

    async fn enrich(
        &self,
        chunks: Vec<ChunkNode>,
        cancel: &CancellationToken,
    ) -> Result<(Vec<ChunkNode>, Vec<ChunkEmbedding>)> {
        let keywords_active = self.options.keywords.is_active();
        let embedder = if self.options.embeddings {
            self.embedding_provider.as_ref()
        } else {
            None
        };

        if !keywords_active && embedder.is_none() {
            return Ok((chunks, Vec::new()));
        }

        let index = ChunkIndex::new(&chunks);
        let mut enriched = Vec::with_capacity(chunks.len());
        let mut embeddings = Vec::new();

        for chunk in &chunks {
            if cancel.is_cancelled() {
                warn!(
                    processed = enriched.len(),
                    total = chunks.len(),
                    "Processing cancelled during enrichment"
                );
                return Err(Error::Cancelled);
            }

            let titles: Vec<&str> = index.path(chunk.id())
                .into_iter()
                .map(ChunkNode::clean_title)
                .collect();

            if let Some(provider) = embedder {
                let enriched_text = enriched_text(&titles, chunk.content());
                let embedding = provider.vectorize(&enriched_text, false).await;
                embeddings.push(ChunkEmbedding {
                    chunk_id: chunk.id().to_string(),
                    enriched_text,
                    embedding,
                });
            }

            if keywords_active {
                let keywords = self.keywords_for(chunk, &titles).await?;
                enriched.push(chunk.with_keywords(keywords));
            } else {
                enriched.push(chunk.clone());
            }
        }

        Ok((enriched, embeddings))
    }

    /// Extracted keywords (capped), then custom keywords, then section keywords
    async fn keywords_for(&self, chunk: &ChunkNode, titles: &[&str]) -> Result<Vec<String>> {
        let options = &self.options.keywords;
        let mut keywords = Vec::new();

        if options.extract_keywords {
            if let Some(extractor) = &self.keyword_extractor {
                let mut extracted = extractor.extract_keywords(chunk.content()).await?;
                extracted.truncate(options.max_keywords_per_chunk);
                keywords.extend(extracted);
            }
        }

        keywords.extend(options.custom_keywords.iter().cloned());

        for rule in &self.section_rules {
            if titles.iter().any(|title| rule.pattern.is_match(title)) {
                keywords.extend(rule.keywords.iter().cloned());
            }
        }

        Ok(dedupe_keywords(keywords))
    }
}

/// Ancestor titles joined with `" > "`, a blank line, then the content
pub fn enriched_text(titles: &[&str], content: &str) -> String {
    let path = titles
        .iter()
        .filter(|t| !t.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(TITLE_PATH_SEPARATOR);

    match (path.is_empty(), content.is_empty()) {
        (true, _) => content.to_string(),
        (false, true) => path,
        (false, false) => format!("{path}{CONTENT_SEPARATOR}{content}"),
    }
}

// Case-insensitive, first occurrence wins; blank entries dropped
fn dedupe_keywords(keywords: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    keywords
        .into_iter()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty() && seen.insert(k.to_lowercase()))
        .collect()
}
