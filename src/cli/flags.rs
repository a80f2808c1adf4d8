use crate::settings::Settings;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub print: bool,
    pub clipboard: bool,
    pub quiet: bool,
    pub verbose: bool,
    pub no_upper: bool,
    pub no_lower: bool,
    pub no_number: bool,
    pub no_symbol: bool,
    pub length: Option<usize>,
    pub exclude: Option<String>,
    pub seed: Option<u64>,
    pub log_dir: Option<String>,
}

impl CliFlags {
    /// Produce a single password instead of opening the form.
    pub fn one_shot(&self) -> bool {
        self.print || self.clipboard
    }

    /// Override settings with whatever was given on the command line.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(len) = self.length {
            settings.length = len;
        }
        if self.no_upper {
            settings.include_uppercase = false;
        }
        if self.no_lower {
            settings.include_lowercase = false;
        }
        if self.no_number {
            settings.include_number = false;
        }
        if self.no_symbol {
            settings.include_symbol = false;
        }
        if let Some(ref chars) = self.exclude {
            settings.exclude_characters = chars.clone();
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        if let Some(ref dir) = self.log_dir {
            settings.log_dir = dir.into();
        }
        if self.verbose {
            settings.log_level = log::LevelFilter::Debug;
        }
        settings.quiet = self.quiet;
    }
}
