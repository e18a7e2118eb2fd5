//! Configuration access port trait.

pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;
    fn get_int(&self, section: &str, key: &str, default: i64) -> i64;
    fn get_double(&self, section: &str, key: &str, default: f64) -> f64;
    fn get_bool(&self, section: &str, key: &str, default: bool) -> bool;

    /// All section names present, so strategy sections can be enumerated.
    fn sections(&self) -> Vec<String>;

    /// All keys present in one section.
    fn keys(&self, section: &str) -> Vec<String>;
}
