// Paperlink: related-paper discovery for scientific literature review
//
// This is the library root. The similarity engine is pure and synchronous;
// corpus, config and output exist to drive it from the command line.

pub mod config;
pub mod corpus;
pub mod models;
pub mod output;
pub mod similarity;
