pub mod classify_service;
pub mod dispatcher;
pub mod file_loader;
pub mod report_service;
