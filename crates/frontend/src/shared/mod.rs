pub mod api_utils;
pub mod components;
pub mod config;
pub mod icons;
pub mod loadable;
pub mod rest;

#[cfg(test)]
pub mod change_counter;
