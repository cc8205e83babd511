pub mod profiles;

// Re-export commonly used types for convenience.
pub use profiles::{
    ProfileError, ProfileRecord, ProfileUpdateOutcome, ProfileUpdateRequest, UpdateStatus,
};
