//! Interactive relocation tools: tax savings, Golden Visa eligibility, and free zone comparison.
//!
//! Each tool is a leaf over a static reference table. The engines are synchronous and total;
//! presentation concerns such as currency formatting live in [`display`] and HTTP wiring lives
//! in [`router`].

pub mod display;
pub mod eligibility;
pub mod free_zones;
pub mod router;
pub mod tax;

pub use router::{tools_router, ToolsSettings};
