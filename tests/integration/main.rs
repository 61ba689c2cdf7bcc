//! Integration test harness.

mod helpers;

mod auth_test;
mod availability_test;
