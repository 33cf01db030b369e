pub mod bridge;
pub mod clipboard;
pub mod controller;
pub mod translator;
