pub mod error;
pub mod handler;
pub mod kedmanee;
pub mod mapper;
pub mod types;

pub use error::SinkError;
pub use handler::{ConvertHandler, ResultSink, VecSink};
pub use mapper::{translate, CharacterMap};
pub use types::Conversion;
