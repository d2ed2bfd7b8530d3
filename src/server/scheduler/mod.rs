//! Cron jobs that run alongside the HTTP server.

pub mod token_pruning;
