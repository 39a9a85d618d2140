pub mod gem_handler;

pub use gem_handler::list_gems;
