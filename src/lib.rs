//! # Smart Inventory
//!
//! Products, categories and guest orders, each owned by its own actor built on
//! [`actor_framework`].
//!
//! The interesting path is checkout. A guest submits parallel lists of product ids and
//! quantities; [`intake::OrderIntake`] validates them and sends one `create` to the Order actor.
//! The order's `on_create` hook reserves every line in a single Product actor transaction, so an
//! order either exists together with all of its stock decrements or not at all, and two
//! concurrent checkouts can never oversell a product.
//!
//! ## Module Tour
//!
//! - [`model`]: plain data for products, categories, orders and their create/update payloads.
//! - [`product_actor`], [`category_actor`], [`order_actor`]: the `ActorEntity` implementations.
//! - [`clients`]: typed wrappers over `ResourceClient` for each actor.
//! - [`catalog`]: admin operations spanning products and categories.
//! - [`intake`]: guest checkout.
//! - [`tracking`]: order summaries with product names, by id or order number.
//! - [`presentation`]: JSON or redirect, depending on how the checkout was posted.
//! - [`config`] and [`lifecycle`]: settings, startup, seeding and shutdown.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=debug cargo run
//! cargo test
//! ```

pub mod catalog;
pub mod category_actor;
pub mod clients;
pub mod config;
pub mod intake;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod presentation;
pub mod product_actor;
pub mod tracking;
