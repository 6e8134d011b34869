pub mod app_dirs;
pub mod attachment_loader;

pub use app_dirs::{AppDirs, DirsAppDirs};
pub use attachment_loader::{load_attachment, media_type_for};
