pub mod lots_core;

use const_format::formatcp;

// Directory where output files can be found
pub const OUTPUT_DIR: &str = ".";

// Files the collector and packager write to
pub const LOTS_OUTPUT: &str = formatcp!("{}/sims4_worlds_lots_full.csv", OUTPUT_DIR);
pub const SCRIPT_OUTPUT: &str = formatcp!("{}/data.js", OUTPUT_DIR);

/// Locations of the generated files, shared by the collector and the packager
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputFiles {
    /// The CSV catalog written by the collector
    pub lots_output: String,
    /// The script asset written by the packager
    pub script_output: String,
}

impl OutputFiles {
    pub fn new() -> Self {
        OutputFiles {
            lots_output: String::from(LOTS_OUTPUT),
            script_output: String::from(SCRIPT_OUTPUT),
        }
    }

    pub fn with_lots_output(mut self, new_lots_output: String) -> Self {
        self.lots_output = new_lots_output;
        self
    }

    pub fn with_script_output(mut self, new_script_output: String) -> Self {
        self.script_output = new_script_output;
        self
    }
}

impl Default for OutputFiles {
    fn default() -> Self {
        Self::new()
    }
}
