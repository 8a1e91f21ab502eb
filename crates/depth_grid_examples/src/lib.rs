#![forbid(unsafe_code)]

mod rendering;
mod scene;

pub use rendering::{display_table, init_tracing, render_overlay_to_png, OverlayStyle};
pub use scene::{Room, SceneAnchor, SceneHit, SyntheticFrame, SyntheticSession};
