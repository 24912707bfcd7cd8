//! Row store implementations.

pub mod item;
pub mod memory;

pub use item::ItemRepository;
pub use memory::MemoryRowStore;
