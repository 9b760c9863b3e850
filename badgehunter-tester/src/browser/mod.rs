pub mod page;
pub mod session;

pub use page::PageProbe;
pub use session::{BrowserConfig, BrowserKind, new_session};
