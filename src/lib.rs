//! LevelUp API - backend for organizing gaming events
//!
//! This crate provides the REST API for LevelUp, enabling:
//! - Browsing game types and the games gamers bring
//! - Registering games and scheduling events around them
//! - Token authentication for gamers

pub mod auth;
pub mod config;
pub mod db;
pub mod dto;
pub mod entities;
pub mod error;
pub mod routes;
pub mod services;
pub mod state;
pub mod validation;
