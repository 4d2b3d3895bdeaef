pub mod form_input;
pub mod violations;
