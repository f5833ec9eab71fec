// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// View state for the services page — the last successfully fetched category
// list, held in a Dioxus signal by the page component.

use servicedeck_core::error::Result;
use servicedeck_core::types::{ServiceCategory, duplicate_titles};
use tracing::{error, info, warn};

/// Where the page is in its single load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// No fetch has succeeded yet (including after a failed one).
    #[default]
    NotYetFetched,
    /// A payload has been received and is on screen.
    Displaying,
}

/// The category list that drives rendering.
///
/// Only ever replaced wholesale; a failed load leaves it as it was.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogState {
    categories: Vec<ServiceCategory>,
    phase: LoadPhase,
}

impl CatalogState {
    /// Replace the whole list with a freshly fetched payload.
    pub fn replace(&mut self, categories: Vec<ServiceCategory>) {
        for title in duplicate_titles(&categories) {
            warn!(title, "duplicate category title; section keys will collide");
        }
        info!(categories = categories.len(), "displaying service categories");
        self.categories = categories;
        self.phase = LoadPhase::Displaying;
    }

    pub fn categories(&self) -> &[ServiceCategory] {
        &self.categories
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Settle a load result: the payload to store, or `None` after logging.
///
/// Callers only take write access to the view state for `Some`, so a failed
/// load neither touches the state nor wakes the renderer.
pub fn accept_load(result: Result<Vec<ServiceCategory>>) -> Option<Vec<ServiceCategory>> {
    match result {
        Ok(categories) => Some(categories),
        Err(e) => {
            error!(
                error = %e,
                fetch_failure = e.is_fetch_failure(),
                "error fetching service categories"
            );
            None
        }
    }
}
