//! # Catalog Core
//!
//! Core business logic for the product catalog service.
//!
//! This crate contains the request pipeline and its collaborators:
//! - Fetching the remote catalog document ([`source`])
//! - Price and size filtering ([`filter`])
//! - Summary statistics over the filtered set ([`details`])
//! - Keyword highlighting in descriptions ([`highlight`])
//! - Orchestration of the above ([`ProductService`])
//!
//! **No API concerns**: header validation, HTTP routing and OpenAPI documents belong in
//! `api-shared` and `api-rest`.

pub mod config;
pub mod constants;
pub mod criteria;
pub mod details;
pub mod error;
pub mod filter;
pub mod highlight;
pub mod product;
pub mod service;
pub mod source;

pub use config::CatalogConfig;
pub use criteria::{parse_csv_list, FilterCriteria};
pub use error::{CatalogError, CatalogResult};
pub use product::{Product, ProductSearchResult, ProductsDetails};
pub use service::ProductService;
pub use source::{CatalogSource, HttpCatalogSource};

pub use rust_decimal::Decimal;
