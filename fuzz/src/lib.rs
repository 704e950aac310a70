pub mod noisy_source;
pub mod structured_string;
