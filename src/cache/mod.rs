pub mod details;

mod macros;

pub use details::DetailsCache;
