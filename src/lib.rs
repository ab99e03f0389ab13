//! Orderdesk Library
//!
//! This crate provides the domain core of a field-supply order-management
//! system: order status display metadata, validated order data shapes,
//! role-based view routing, and CSV report export.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod auth;
pub mod config;
pub mod errors;
pub mod export;
pub mod models;

pub use auth::{select_view, ManagementView, UserProfile, UserRole};
pub use errors::ServiceError;
pub use export::{order_report, render_csv, CsvExport, CsvValue, CSV_MIME};
pub use models::{
    parse_status, parse_subdistrict, status_config, OrderFormData, OrderProduct, OrderRequest,
    OrderStatus, Quantity, StatusConfig, Subdistrict, STATUS_ORDER, SUBDISTRICTS,
};
