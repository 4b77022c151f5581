pub mod regions;
pub mod render;
pub mod surface;

pub use regions::Region;
pub use render::{format_created, render, NotebookRow, PageCommand};
pub use surface::{MemorySurface, PageSurface, RegionState, TerminalSurface};
