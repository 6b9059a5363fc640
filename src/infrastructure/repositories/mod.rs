pub mod in_memory_telemetry_repository;
