// ABOUTME: Library root re-exporting server modules for integration testing
// ABOUTME: Enables tests/ to access router, state, session, store, and handler modules
//
// SPDX-License-Identifier: Apache-2.0

pub mod admin;
pub mod config;
pub mod health;
pub mod pages;
pub mod router;
pub mod search;
pub mod session;
pub mod state;
pub mod store;
