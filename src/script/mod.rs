//! Script resource loading
//!
//! Scripts are addressed by logical name; how a name resolves to bytes is
//! the host's concern, behind the [`ScriptSource`] trait. The engine only
//! ever needs the decoded text. Both failures here abort loading the
//! scene's dialogue; there is no partial graph.

use crate::graph::DialogueGraph;
use crate::parser;
use crate::types::Sender;
use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Load-time failures for a named script
#[derive(Debug, Error)]
pub enum ScriptError {
    /// The named resource could not be located
    #[error("script '{name}' not found")]
    Missing { name: String },
    /// The resource exists but could not be decoded as text
    #[error("script '{name}' could not be decoded as text")]
    Malformed { name: String },
}

/// Resolves a logical script name to its raw text
#[async_trait]
pub trait ScriptSource {
    async fn load_script_text(&self, name: &str) -> Result<String, ScriptError>;
}

/// File system script source
///
/// Resolves `name` to `<base>/<name>.tsv`.
pub struct FileScriptSource {
    base_path: PathBuf,
}

impl FileScriptSource {
    pub fn new<P: Into<PathBuf>>(base_path: P) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn script_path(&self, name: &str) -> PathBuf {
        self.base_path.join(format!("{name}.tsv"))
    }
}

#[async_trait]
impl ScriptSource for FileScriptSource {
    async fn load_script_text(&self, name: &str) -> Result<String, ScriptError> {
        let path = self.script_path(name);

        let bytes = tokio::fs::read(&path).await.map_err(|err| {
            if err.kind() == io::ErrorKind::NotFound {
                ScriptError::Missing {
                    name: name.to_string(),
                }
            } else {
                log::warn!("reading {} failed: {err}", path.display());
                ScriptError::Malformed {
                    name: name.to_string(),
                }
            }
        })?;

        String::from_utf8(bytes).map_err(|_| ScriptError::Malformed {
            name: name.to_string(),
        })
    }
}

/// In-memory script source, for tests and embedded scripts
#[derive(Default)]
pub struct InMemoryScriptSource {
    scripts: HashMap<String, String>,
}

impl InMemoryScriptSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_script(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.scripts.insert(name.into(), text.into());
    }
}

#[async_trait]
impl ScriptSource for InMemoryScriptSource {
    async fn load_script_text(&self, name: &str) -> Result<String, ScriptError> {
        self.scripts
            .get(name)
            .cloned()
            .ok_or_else(|| ScriptError::Missing {
                name: name.to_string(),
            })
    }
}

/// Load a named script and build its dialogue graph in one call
pub async fn load_dialogue<S>(
    source: &S,
    name: &str,
    sender: &Sender,
) -> Result<DialogueGraph, ScriptError>
where
    S: ScriptSource + ?Sized,
{
    let text = source.load_script_text(name).await?;
    Ok(DialogueGraph::new(parser::parse(&text, sender)))
}
