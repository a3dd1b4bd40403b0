// Adapters: concrete implementations behind the domain ports, plus the
// dataset file reader used by the reporting binary.

pub mod dataset;
pub mod linear_model;
