pub mod fetcher;
pub mod fs_util;
pub mod manifest;
pub mod prompt;
pub mod runner;
