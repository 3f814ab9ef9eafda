pub mod asyncio;
pub mod control_flow;
pub mod data_types;
pub mod modern_libs;
pub mod oop_core;
pub mod typing_static;

pub use asyncio::AsyncioLesson;
pub use control_flow::ControlFlowLesson;
pub use data_types::DataTypesLesson;
pub use modern_libs::ModernLibsLesson;
pub use oop_core::OopCoreLesson;
pub use typing_static::TypingStaticLesson;
