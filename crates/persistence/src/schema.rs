// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

diesel::table! {
    accounts (account_id) {
        account_id -> BigInt,
        name -> Text,
        email -> Text,
        provider_ref -> Text,
        created_at -> Text,
    }
}

diesel::table! {
    sessions (session_id) {
        session_id -> BigInt,
        session_token -> Text,
        account_id -> BigInt,
        created_at -> Text,
        expires_at -> Text,
    }
}

diesel::table! {
    quizzes (quiz_id) {
        quiz_id -> BigInt,
        name -> Text,
        creator_account_id -> BigInt,
        deadline -> BigInt,
        status -> Text,
    }
}

diesel::table! {
    lists (list_id) {
        list_id -> BigInt,
        account_id -> BigInt,
        quiz_id -> BigInt,
        status -> Text,
    }
}

diesel::table! {
    videos (video_id) {
        video_id -> BigInt,
        list_id -> BigInt,
        url -> Text,
        reference_id -> Text,
    }
}

diesel::table! {
    assignments (assignment_id) {
        assignment_id -> BigInt,
        list_id -> BigInt,
        guesser_account_id -> BigInt,
        assignee_account_id -> BigInt,
    }
}

diesel::joinable!(sessions -> accounts (account_id));
diesel::joinable!(quizzes -> accounts (creator_account_id));
diesel::joinable!(lists -> quizzes (quiz_id));
diesel::joinable!(lists -> accounts (account_id));
diesel::joinable!(videos -> lists (list_id));
diesel::joinable!(assignments -> lists (list_id));

diesel::allow_tables_to_appear_in_same_query!(
    accounts,
    sessions,
    quizzes,
    lists,
    videos,
    assignments,
);
