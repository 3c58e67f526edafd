mod support;
mod config_tests;
