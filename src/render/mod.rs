//! Cell output rendering.
//!
//! Two stages:
//! - [`get_mime_render`] decides, from document options and per-cell
//!   overrides, whether an executed cell produces output and whether its code
//!   is shown.
//! - [`render_output`] turns one output record into markdown for the target
//!   format.

mod dispatch;
mod markdown;
mod options;


pub use dispatch::{CellStub, MimeRender, get_mime_render};
pub use markdown::{MarimoOutput, OutputKind, render_output};
pub use options::RenderOptions;
