//! Binfolio - Main Library
//!
//! Binfolio is a small portfolio backend that keeps all of its data inside a
//! single remote JSON document hosted on a JSONBin-style document store.
//! Projects, shared code snippets, and user accounts live as named
//! collections of that one document; every mutation is a full-document
//! read-modify-write round trip.
//!
//! # Overview
//!
//! This library provides:
//! - An Axum HTTP server exposing CRUD endpoints over the collections
//! - A remote document store client (full-document GET/PUT)
//! - Pure collection operations (ordering, lookup, filtering, pagination)
//! - The read-modify-write coordinator every mutating endpoint goes through
//! - A shared-secret admin gate for protected routes
//!
//! # Module Structure
//!
//! All server-side code lives under the **`backend`** module:
//!
//! - `backend::server` - Configuration, application state, app assembly
//! - `backend::store` - Document model, remote store client, coordinator
//! - `backend::collections` - Pure operations over record sequences
//! - `backend::auth` - Admin gate, signup/login handlers
//! - `backend::routes` - Router assembly and route registration
//! - `backend::error` - API error taxonomy and HTTP conversion
//!
//! # Persistence Model
//!
//! There is no database. The remote store holds one JSON document with
//! top-level keys `projects`, `codes`, and `users`. Every read fetches the
//! whole document and every write overwrites it, so concurrent writers race
//! at whole-document granularity (see `backend::store::coordinator` for the
//! exact semantics).

pub mod backend;
