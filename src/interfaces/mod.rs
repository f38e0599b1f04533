// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod fixed_sqrt;

pub use fixed_sqrt::FixedSqrt;
