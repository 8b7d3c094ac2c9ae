pub mod response;

pub use response::{concat_languages, DebugStatusEntry};
