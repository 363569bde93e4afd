// Include handlers module directly from handlers.rs
#[path = "handlers.rs"]
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{CheckLinksRun, map_config_from_args, resolve_path, run_check_links};

// Re-export the building blocks from the library crates
pub use painel_core::{
    CheckOptions, ProbeOptions, ReportFormat, StatusReport, StatusResult, broken_links,
    extract_links, write_report,
};
pub use painel_map::MapConfig;
