// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-side queries.
//!
//! All functions take a `&mut SqliteConnection` so callers can scope any
//! number of them inside one transaction. Lookups return `Ok(None)`
//! when the row is absent; absence is a domain decision, not a storage
//! error.

pub mod accounts;
pub mod assignments;
pub mod lists;
pub mod quizzes;
