pub mod analysis_handlers;
pub mod auth_handlers;
pub mod generation_handlers;
pub mod resume_handlers;
pub mod system_handlers;

pub use analysis_handlers::*;
pub use auth_handlers::*;
pub use generation_handlers::*;
pub use resume_handlers::*;
pub use system_handlers::*;
