pub mod documents;
pub mod probes;
pub mod settings;
pub mod tutor;
