//! FarmConnect terminal client: screens for farmers and farm workers, with
//! every label resolved from one English / Hindi / Gujarati phrase table.
pub mod app;
pub mod auth;
pub mod config;
pub mod i18n;
pub mod market;
pub mod tui;
