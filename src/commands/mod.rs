//! Interactive commands for campus

pub mod session;
