// In-place editing of résumé fields through typed commands.
// Every edit is followed by a fresh layout pass; no pagination state is kept.

pub mod commands;
pub mod handlers;
