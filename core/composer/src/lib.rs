pub mod chat;
pub mod report;
pub mod service;
pub mod templates;

pub use chat::ChatEngine;
pub use report::{ReportBuilder, VisualStyle};
pub use service::{build_router, AppState, ServiceConfig, Workspace};
