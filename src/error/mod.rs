mod app;
mod request;


pub use app::{AppError, AppResult};
pub use request::RequestError;
