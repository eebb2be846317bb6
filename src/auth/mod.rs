//! Token authentication for the gamer-facing endpoints.
//!
//! `register` and `login` hand out signed tokens; [`middleware::AuthUser`] checks them on
//! every request that needs to know who the caller is.

pub mod jwt;
pub mod middleware;
pub mod password;
