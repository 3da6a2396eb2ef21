pub mod document_loader;
pub mod search_service;
