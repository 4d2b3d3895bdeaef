pub mod prefill;
pub mod schema;
pub mod services;
pub mod shared;
pub mod submit;
pub mod validate;
