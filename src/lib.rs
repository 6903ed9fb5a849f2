pub mod boundary;
pub mod error;
pub mod filter;
pub mod grid;
pub mod kernel;
pub mod logger;
pub mod render;
pub mod texture;
pub mod texture_blur_lib;

pub use boundary::BoundaryMode;
pub use error::BlurError;
pub use filter::{blur_into, gaussian_blur, BlurMethod, BlurParams};
pub use grid::{reference_input, Grid};
pub use kernel::{sigma_for_radius, GaussianKernel};
pub use render::{render_report, render_text, OutputFormat, RenderOptions};
pub use texture::{Texture, TextureFormat};
pub use texture_blur_lib::{list_files, process_existing_files, BlurConfig};
