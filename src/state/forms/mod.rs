//! Form schema, validation and the company-details form

mod company;
mod field;
mod schema;

pub use company::*;
pub use field::*;
pub use schema::*;
