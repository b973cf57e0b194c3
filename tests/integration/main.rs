//! Integration tests for ghostwrite

mod cli_test;
mod helpers;
mod playback_test;
