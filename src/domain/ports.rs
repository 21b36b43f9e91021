/// Settings the interactive shell needs, independent of where they came from.
pub trait ConfigProvider {
    fn title(&self) -> &str;
    fn trim_input(&self) -> bool;
    fn log_level(&self) -> Option<&str>;
}
