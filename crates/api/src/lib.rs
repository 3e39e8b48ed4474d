//! HTTP surface: server, routing, templates, and chart rendering.

pub mod app;
