mod node;
mod surface;

pub use node::{Node, Tag};
pub use surface::{Region, RetainedSurface, Surface};
