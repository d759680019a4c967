/// State management module
///
/// This module handles all application state, including:
/// - The currently loaded image and its provenance (session.rs)
/// - User-facing conversion options (options.rs)

pub mod options;
pub mod session;
