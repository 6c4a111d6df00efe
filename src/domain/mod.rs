// Domain layer: value types shared by the conversion and literal modules.
// No dependencies beyond chrono/serde.

pub mod model;
