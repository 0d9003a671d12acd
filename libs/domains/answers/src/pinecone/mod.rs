//! Pinecone vector database integration

mod client;
mod config;

pub use client::PineconeRepository;
pub use config::PineconeConfig;
