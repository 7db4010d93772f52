// GyaanSetu - Gujarati AI tutoring gateway
// Library exports

pub mod config;
pub mod prompt;
pub mod providers;
pub mod rag;
pub mod registry;
pub mod server;
