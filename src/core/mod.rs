pub mod engine;
pub mod mapper;
pub mod pipeline;
pub mod resolver;

pub use crate::domain::model::{SiteContent, SiteModel};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
