//! Host-based tests for the morse codec

#[cfg(test)]
mod timing_tests;
