pub mod requests;
pub mod response;
pub mod validation;
