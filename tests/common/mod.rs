//! Common test utilities for warehouse-mapper.
//!
//! This module provides shared utilities for testing the pipeline and server.

#![allow(dead_code)]

pub mod assertions;
pub mod http_client;
pub mod test_data;
