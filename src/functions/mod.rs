pub mod dispatch;
pub mod financial;
pub mod validate;
