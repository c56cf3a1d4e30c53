//! Error types for the Borůvka core library.
//!
//! Every public error enum carries a stable machine-readable code so callers
//! can log or match on failures without depending on message text.

use std::{fmt, num::NonZeroUsize};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Errors returned while computing a minimum spanning forest.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// An edge referenced a vertex outside `0..vertex_count`.
    #[error("edge {edge} references vertex {vertex}, but vertex_count is {vertex_count}")]
    InvalidVertex {
        /// Position of the offending edge in the input list.
        edge: usize,
        /// The out-of-range vertex id.
        vertex: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
    /// The edge list is too long to be addressed by a minimum-edge slot.
    #[error("graph has {edge_count} edges but at most {limit} are supported")]
    TooManyEdges {
        /// Number of edges supplied.
        edge_count: usize,
        /// Largest supported edge count.
        limit: usize,
    },
    /// The configured round limit was reached before the forest converged.
    #[error("forest did not converge within {limit} rounds ({components} components remain)")]
    RoundLimitExceeded {
        /// The configured round limit.
        limit: NonZeroUsize,
        /// Number of components left when the engine stopped.
        components: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// An edge referenced a vertex outside the graph.
        InvalidVertex => InvalidVertex { .. } => "MST_INVALID_VERTEX",
        /// The edge list exceeds the supported length.
        TooManyEdges => TooManyEdges { .. } => "MST_TOO_MANY_EDGES",
        /// The configured round limit was reached.
        RoundLimitExceeded => RoundLimitExceeded { .. } => "MST_ROUND_LIMIT_EXCEEDED",
    }
}

/// Error produced when a [`crate::BoruvkaBuilder`] holds an invalid setting.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ConfigError {
    /// A round limit must allow at least one round.
    #[error("max_rounds must be at least 1 (got {got})")]
    InvalidRoundLimit {
        /// The rejected round limit.
        got: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`ConfigError`] variants.
    enum ConfigErrorCode for ConfigError {
        /// A round limit must allow at least one round.
        InvalidRoundLimit => InvalidRoundLimit { .. } => "CONFIG_INVALID_ROUND_LIMIT",
    }
}

/// Convenient alias for results returned by the engine.
pub type Result<T> = core::result::Result<T, MstError>;
