pub mod client;
pub mod credentials;
pub mod entry;
pub mod error;
pub mod folder;
pub mod image;
pub mod prelude;

#[cfg(test)]
mod tests {
    pub fn init() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    }
}
