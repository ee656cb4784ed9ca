//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod memory;
pub mod supabase;

// Re-exports
pub use memory::InMemoryCooldownLedger;
pub use supabase::SupabaseProfileRepository;
