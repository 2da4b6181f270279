pub mod module;

pub use module::{StubDevice, StubModule};
