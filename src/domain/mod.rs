pub mod article;
pub mod category;
pub mod date;
pub mod resource;

pub use article::{Article, Source};
pub use category::Category;
pub use date::DateFormatter;
pub use resource::Resource;
