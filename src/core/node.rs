use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::core::config::Settings;
use crate::core::decode::ImageTensor;
use crate::core::error::NodeError;

/// Host-side type tags for declared inputs and returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Image,
    Text,
    Int,
}

impl ValueKind {
    pub fn as_type_name(&self) -> &'static str {
        match self {
            ValueKind::Image => "IMAGE",
            ValueKind::Text => "STRING",
            ValueKind::Int => "INT",
        }
    }
}

impl Serialize for ValueKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_type_name())
    }
}

/// Widget schema for a single parameter, rendered by the host UI.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParamKind {
    String { default: &'static str },
    Int { default: i64, min: u64, max: u64 },
}

#[derive(Debug, Clone, Serialize)]
pub struct ParamSpec {
    pub name: &'static str,
    #[serde(flatten)]
    pub kind: ParamKind,
    pub tooltip: &'static str,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct InputSpec {
    pub required: Vec<ParamSpec>,
    pub optional: Vec<ParamSpec>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReturnSpec {
    pub kind: ValueKind,
    pub name: &'static str,
}

/// A value handed back to the host, matching the node's declared returns.
#[derive(Debug, Clone)]
pub enum NodeValue {
    Image(ImageTensor),
    Text(String),
}

impl NodeValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            NodeValue::Image(_) => ValueKind::Image,
            NodeValue::Text(_) => ValueKind::Text,
        }
    }

    pub fn as_image(&self) -> Option<&ImageTensor> {
        match self {
            NodeValue::Image(tensor) => Some(tensor),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            NodeValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// A single registered unit of computation in the host's node graph.
///
/// The host discovers nodes through the registry, renders `input_spec` as
/// widgets, and calls `invoke` with the user's parameter values as JSON.
pub trait Node: Send + Sync {
    fn name(&self) -> &'static str;
    fn display_name(&self) -> &'static str;
    fn category(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn input_spec(&self) -> InputSpec;
    fn returns(&self) -> &'static [ReturnSpec];
    fn invoke(&self, host: &HostContext, params: Value) -> Result<Vec<NodeValue>, NodeError>;
}

/// Per-invocation view of the hosting application: its root directory and the
/// base directories user-supplied folder paths are resolved against.
#[derive(Debug, Clone)]
pub struct HostContext {
    base_dir: PathBuf,
    search_bases: Vec<PathBuf>,
}

impl HostContext {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        let search_bases = default_search_bases(&base_dir);
        HostContext {
            base_dir,
            search_bases,
        }
    }

    pub fn with_settings(base_dir: impl Into<PathBuf>, settings: &Settings) -> Self {
        let base_dir = base_dir.into();
        let search_bases = if settings.search_paths.is_empty() {
            default_search_bases(&base_dir)
        } else {
            settings
                .search_paths
                .iter()
                .map(|p| {
                    if p.is_absolute() {
                        p.clone()
                    } else {
                        base_dir.join(p)
                    }
                })
                .collect()
        };
        HostContext {
            base_dir,
            search_bases,
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn search_bases(&self) -> &[PathBuf] {
        &self.search_bases
    }
}

// Matches the classic lookup offsets: the host root itself, its parent, and
// its grandparent. The raw folder path is always tried before any base.
fn default_search_bases(base_dir: &Path) -> Vec<PathBuf> {
    vec![
        base_dir.to_path_buf(),
        base_dir.join(".."),
        base_dir.join("../.."),
    ]
}
