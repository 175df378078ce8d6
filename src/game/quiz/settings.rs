#[derive(Clone, Debug)]
pub struct Settings {
    /// Performance ratio above which hard questions are favored.
    pub hard_threshold: f64,
    /// Performance ratio above which medium questions are favored.
    pub medium_threshold: f64,
    pub shuffle_choices: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            hard_threshold: 0.7,
            medium_threshold: 0.4,
            shuffle_choices: true,
        }
    }
}
