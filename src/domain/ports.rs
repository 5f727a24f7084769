use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    /// Tolerance for treating a computed volume as a whole number.
    fn epsilon(&self) -> f64;
    /// How many matches the console report prints per price.
    fn display_limit(&self) -> usize;
    fn currency_symbol(&self) -> &str;
    /// Plural unit label used in reports, e.g. `litres`.
    fn volume_unit(&self) -> &str;
}
