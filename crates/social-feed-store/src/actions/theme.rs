#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    /// Switch between light and dark mode
    Toggle,
}
