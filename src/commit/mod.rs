// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message handling: header parsing and raw message cleanup.

mod header;
mod message;

pub use header::ParsedHeader;
pub use message::{first_line, strip_comments};
