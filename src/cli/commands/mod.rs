pub mod generate;
pub mod verify;
pub mod run;
pub mod config;
