mod in_memory_event_bus;

pub use in_memory_event_bus::InMemoryEventBus;
