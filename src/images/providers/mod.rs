pub mod http;

pub use http::HttpImageProvider;
