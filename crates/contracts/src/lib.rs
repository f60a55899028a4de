//! Wire contract shared by the frontend and the Document Reader backend API.
//!
//! The backend itself is an external HTTP service; this crate only pins the
//! JSON shapes the client exchanges with it.

pub mod domain;
