// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Write operations against the database.
//!
//! Mutations are free functions over a `&mut SqliteConnection` so callers
//! can scope several of them inside a single transaction.

pub mod accounts;
pub mod assignments;
pub mod lists;
pub mod quizzes;
