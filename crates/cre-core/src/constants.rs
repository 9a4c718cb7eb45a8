//! Physical constants and sanity limits shared by every reactor model.

/// Universal gas constant, J/(mol·K).
pub const R_GAS: f64 = 8.314;

/// Temperature at which user-supplied rate constants are quoted, K.
pub const T_REF_K: f64 = 300.0;

/// Upper bound on operating temperature accepted at the boundary, K.
pub const T_MAX_K: f64 = 2000.0;
