pub mod anim;
pub mod drive;
pub mod glb;
pub mod gltf;
pub mod orbit;
pub mod playlist;
pub mod presets;
pub mod toast;
pub mod tween;

pub use anim::{global_transforms, Clip, NodeTransform};
pub use drive::{DriveFrame, PlaybackDriver};
pub use gltf::{decode_glb, MeshPrimitive, ModelData};
pub use orbit::OrbitCamera;
pub use playlist::{Playback, Playlist, Stop, SLOT_COUNT};
pub use presets::{preset_position, CAMERA_PRESETS};
pub use toast::ToastStore;
pub use tween::{CameraTween, TWEEN_DURATION_MS};

// Shader bundled as a string constant
pub static MODEL_WGSL: &str = include_str!("../../shaders/model.wgsl");
