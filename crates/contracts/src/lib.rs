//! Wire contracts shared between the wallet front-end and the REST service.

pub mod domain;
pub mod shared;
pub mod system;
