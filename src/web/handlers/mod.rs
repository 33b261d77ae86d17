pub mod auth_handlers;
pub mod export_handlers;
pub mod generate_handlers;
pub mod system_handlers;

pub use auth_handlers::*;
pub use export_handlers::*;
pub use generate_handlers::*;
pub use system_handlers::*;
