//! Domain layer modules
//!
//! - `template`: template storage, substitution and the service façade

pub mod template;
