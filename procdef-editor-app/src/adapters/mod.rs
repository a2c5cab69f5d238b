//! Adapters for hosts without a browser DOM

mod memory;

pub use memory::{LogNotifier, MemoryNavigator, MemoryPage, PageSnapshot, RecordingNotifier};
