// src/lib.rs
//! AI-assisted resume builder: structured resume data, prompt-backed
//! content generation, template rendering, and HTML export behind a
//! small Rocket API.

pub mod auth;
pub mod config;
pub mod export;
pub mod generation;
pub mod guidance;
pub mod render;
pub mod types;
pub mod web;
pub mod wizard;

pub use config::AppConfig;
pub use types::{CareerGuidance, ResumeData, TemplateId};
pub use web::start_web_server;
