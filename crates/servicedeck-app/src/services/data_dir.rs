// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Where Servicedeck looks for its `config.json`.

use std::path::{Path, PathBuf};

const APP_DIR: &str = "servicedeck";

/// `<platform data dir>/servicedeck`, e.g. `~/.local/share/servicedeck`.
///
/// Only resolved, never created: the app reads from here and writes nothing.
/// Falls back to the temp dir on platforms without a data dir.
pub fn data_dir() -> PathBuf {
    let root = dirs::data_dir().unwrap_or_else(std::env::temp_dir);
    app_dir_in(&root)
}

/// The application's own directory under a data root.
pub fn app_dir_in(root: &Path) -> PathBuf {
    root.join(APP_DIR)
}
