// src/integrations/mod.rs
//
// External Integrations Module
//
// Collaborators the core hands finished work to.

pub mod download;

pub use download::{DirectoryDownloader, FileDownloader};

#[cfg(test)]
pub use download::MockFileDownloader;
