//! Core-Domänentypen: Puppet-Baum, Nodes, Texturen, Parameter, Kamera.

pub mod blend;
pub mod bounds;
pub mod camera;
/// Nodes des Puppet-Baums
///
/// - Node: reiner Transform-/Gruppierungs-Node
/// - Drawable: zeichenbares Rechteck ohne Textur
/// - Part: texturierter Drawable mit Deckkraft, Blend-Modus und zSort
pub mod node;
pub mod parameter;
pub mod project;
pub mod puppet;
pub mod texture;
pub mod transform;

pub use blend::{BlendMode, SourceBlendMode};
pub use bounds::Bounds;
pub use camera::{Camera2D, Viewport};
pub use node::{Drawable, Node, NodeKind, Part};
pub use parameter::Parameter;
pub use project::Project;
pub use puppet::Puppet;
pub use texture::Texture;
pub use transform::Transform;
