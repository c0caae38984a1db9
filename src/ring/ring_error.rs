use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RingError {
    InvalidCapacity {
        capacity: usize,
        reason: &'static str,
    },
}

impl fmt::Display for RingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCapacity { capacity, reason } => {
                write!(f, "Invalid capacity {}: {}", capacity, reason)
            }
        }
    }
}

impl std::error::Error for RingError {}
