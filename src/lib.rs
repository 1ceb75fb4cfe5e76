mod core;

pub use crate::core::config::{load_settings, save_settings, Settings};
pub use crate::core::decode::{load_image_tensor, open_oriented, ImageTensor};
pub use crate::core::error::NodeError;
pub use crate::core::model::{RandomImageParams, Seed, DEFAULT_EXTENSIONS, DEFAULT_FOLDER};
pub use crate::core::node::{
    HostContext, InputSpec, Node, NodeValue, ParamKind, ParamSpec, ReturnSpec, ValueKind,
};
pub use crate::core::nodes::{RandomImageLoader, RandomImagePath};
pub use crate::core::registry::{builtin_nodes, register_builtin, NodeRegistry};
