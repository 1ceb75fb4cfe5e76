use std::path::{Path, PathBuf};

use log::info;
use serde_json::Value;

use crate::core::decode;
use crate::core::error::NodeError;
use crate::core::model::{RandomImageParams, DEFAULT_EXTENSIONS, DEFAULT_FOLDER};
use crate::core::node::{
    HostContext, InputSpec, Node, NodeValue, ParamKind, ParamSpec, ReturnSpec, ValueKind,
};
use crate::core::{resolve, scan, select};

/// Picks a random image from a folder and returns it decoded, with the bare
/// filename alongside.
pub struct RandomImageLoader;

/// Picks a random image from a folder and returns only its path.
pub struct RandomImagePath;

fn picker_inputs() -> InputSpec {
    InputSpec {
        required: vec![
            ParamSpec {
                name: "folder_path",
                kind: ParamKind::String {
                    default: DEFAULT_FOLDER,
                },
                tooltip: "Path to a folder of images to pick from, relative to the host root",
            },
            ParamSpec {
                name: "seed",
                kind: ParamKind::Int {
                    default: 0,
                    min: 0,
                    max: u64::MAX,
                },
                tooltip: "Seed for random selection. Use -1 for a fresh random pick.",
            },
        ],
        optional: vec![ParamSpec {
            name: "image_extensions",
            kind: ParamKind::String {
                default: DEFAULT_EXTENSIONS,
            },
            tooltip: "Comma-separated list of allowed image extensions",
        }],
    }
}

struct Picked {
    path: PathBuf,
    candidates: usize,
}

// Shared resolve -> list -> filter -> seed -> select pass.
fn pick_random_image(
    host: &HostContext,
    params: &RandomImageParams,
) -> Result<Picked, NodeError> {
    let folder = resolve::resolve_folder(&params.folder_path, host.search_bases())?;
    let allowed = scan::parse_extensions(&params.image_extensions);
    let files = scan::list_images(&folder, &allowed);
    let seed = select::resolve_seed(params.seed);
    let path = select::pick_one(&files, seed)
        .ok_or_else(|| NodeError::NoMatchingFiles {
            dir: folder.clone(),
            extensions: params.image_extensions.clone(),
        })?
        .to_path_buf();
    Ok(Picked {
        path,
        candidates: files.len(),
    })
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

impl Node for RandomImageLoader {
    fn name(&self) -> &'static str {
        "RandomImageLoader"
    }

    fn display_name(&self) -> &'static str {
        "Random Image Loader"
    }

    fn category(&self) -> &'static str {
        "image/random"
    }

    fn description(&self) -> &'static str {
        "Loads a random image from a folder. Useful for random init images with wildcards."
    }

    fn input_spec(&self) -> InputSpec {
        picker_inputs()
    }

    fn returns(&self) -> &'static [ReturnSpec] {
        &[
            ReturnSpec {
                kind: ValueKind::Image,
                name: "image",
            },
            ReturnSpec {
                kind: ValueKind::Text,
                name: "filename",
            },
        ]
    }

    fn invoke(&self, host: &HostContext, params: Value) -> Result<Vec<NodeValue>, NodeError> {
        let params: RandomImageParams = serde_json::from_value(params)?;
        let picked = pick_random_image(host, &params)?;
        let filename = file_name_of(&picked.path);
        let tensor = decode::load_image_tensor(&picked.path)?;
        info!("selected {} from {} candidates", filename, picked.candidates);
        Ok(vec![NodeValue::Image(tensor), NodeValue::Text(filename)])
    }
}

impl Node for RandomImagePath {
    fn name(&self) -> &'static str {
        "RandomImagePath"
    }

    fn display_name(&self) -> &'static str {
        "Random Image Path"
    }

    fn category(&self) -> &'static str {
        "image/random"
    }

    fn description(&self) -> &'static str {
        "Returns a random image path from a folder. Pair with an image-load node for more control."
    }

    fn input_spec(&self) -> InputSpec {
        picker_inputs()
    }

    fn returns(&self) -> &'static [ReturnSpec] {
        &[ReturnSpec {
            kind: ValueKind::Text,
            name: "image_path",
        }]
    }

    fn invoke(&self, host: &HostContext, params: Value) -> Result<Vec<NodeValue>, NodeError> {
        let params: RandomImageParams = serde_json::from_value(params)?;
        let picked = pick_random_image(host, &params)?;
        info!(
            "selected {} from {} candidates",
            file_name_of(&picked.path),
            picked.candidates
        );
        Ok(vec![NodeValue::Text(
            picked.path.to_string_lossy().into_owned(),
        )])
    }
}
