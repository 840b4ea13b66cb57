//! Form page rendering

mod company_form;
mod field_renderer;

pub use company_form::draw as draw_company_details;
