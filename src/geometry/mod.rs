pub mod mapper;
pub mod primitives;
