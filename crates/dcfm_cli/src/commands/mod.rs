pub mod activate;
pub mod list;
pub mod submit;
