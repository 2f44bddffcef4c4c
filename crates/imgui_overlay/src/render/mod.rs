//! Overlay rendering
//!
//! Architecture:
//! - mesh: engine vertex layout, clip rectangles and mesh groups
//! - effect: textured effect with forced projection/view
//! - translator: GUI draw batch -> mesh groups
//! - renderer: scissored submission of the mesh to the host device

pub mod effect;
pub mod mesh;
pub mod renderer;
pub mod translator;

pub use effect::TexturedEffect;
pub use mesh::{BlendDepthState, BlendingMode, IndexedPrimitives, Mesh, MeshGroup, OverlayVertex, PrimitiveTopology, Rectangle};
pub use renderer::MeshRenderer;
pub use translator::{translate_draw_data, TranslationStats};
