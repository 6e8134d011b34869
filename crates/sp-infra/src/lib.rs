pub mod fs;
pub mod http;
pub mod preview_handles;
pub mod session_store;

pub use http::ScholarshipApiClient;
pub use preview_handles::InMemoryPreviewHandles;
pub use session_store::FileSessionRepository;
