// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the Servicedeck catalogue.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Identifier of a service, unique within its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(pub i64);

impl std::fmt::Display for ServiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One offered item inside a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub name: String,
    pub description: String,
    /// URL or site-relative path of the card image.
    pub image: String,
}

/// A titled, described grouping of services.
///
/// The title doubles as the render key for the category's section, so it
/// should be unique across a payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCategory {
    pub title: String,
    pub description: String,
    pub services: Vec<Service>,
}

impl ServiceCategory {
    /// Number of services (and therefore cards) in this category.
    pub fn service_count(&self) -> usize {
        self.services.len()
    }
}

/// Total number of services across every category.
pub fn total_services(categories: &[ServiceCategory]) -> usize {
    categories.iter().map(ServiceCategory::service_count).sum()
}

/// Titles that appear on more than one category, in first-seen order.
pub fn duplicate_titles(categories: &[ServiceCategory]) -> Vec<&str> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut dupes = Vec::new();
    for category in categories {
        let count = seen.entry(category.title.as_str()).or_insert(0);
        *count += 1;
        if *count == 2 {
            dupes.push(category.title.as_str());
        }
    }
    dupes
}
