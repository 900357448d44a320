//! Browser application for the Postbox board: a Leptos component tree over
//! the hosted posts database, seeded once at mount and mutated through the
//! `postbox-client` SDK.

pub mod app;

mod components;
mod query;
mod store;
mod validate;
