// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Session information stored in the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionData {
    /// The session's canonical identifier.
    pub session_id: i64,
    /// The opaque session token presented by clients.
    pub session_token: String,
    /// The account this session belongs to.
    pub account_id: i64,
    /// When the session was created (ISO 8601).
    pub created_at: String,
    /// When the session expires (ISO 8601).
    pub expires_at: String,
}
