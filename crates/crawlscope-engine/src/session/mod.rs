pub mod fold;
pub mod reconstructor;
pub mod table;
pub mod types;

pub use fold::FoldState;
pub use reconstructor::{Checkpoint, SessionReconstructor};
pub use table::SessionTable;
pub use types::{SessionInterval, SessionSummary};
