// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Servicedeck Client — talks to the catalogue API and turns its JSON into the
// domain types defined in `servicedeck-core`.

pub mod catalog_client;

pub use catalog_client::{CatalogClient, decode_categories};
