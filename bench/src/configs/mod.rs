pub mod bench_config;
pub mod config_provider;
pub mod validators;

pub trait Validatable<E> {
    fn validate(&self) -> Result<(), E>;
}
