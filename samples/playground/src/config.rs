//! Command line configuration.
//!
//! Every option can also be supplied through an environment variable. With
//! no arguments the session applies four increments to `3,4,5,6`.

use clap::Parser;

/// Arguments for the playground binary.
#[derive(Debug, Clone, Parser)]
#[command(name = "playground", about = "Run the runes sequence combinators on sample data")]
pub struct PlaygroundConfig {
    /// Values the increment functions are applied to.
    #[arg(long, env = "PLAYGROUND_VALUES", value_delimiter = ',', default_value = "3,4,5,6")]
    pub values: Vec<i32>,

    /// JSON array used for the bind demonstrations.
    #[arg(long, env = "PLAYGROUND_JSON", default_value = "[3,4,5,6]")]
    pub json: String,

    /// Amount each increment function adds.
    #[arg(long, env = "PLAYGROUND_OFFSET", default_value_t = 1, allow_negative_numbers = true)]
    pub offset: i32,

    /// Number of increment functions.
    #[arg(long, env = "PLAYGROUND_FUNCTIONS", default_value_t = 4)]
    pub functions: usize,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            values: vec![3, 4, 5, 6],
            json: "[3,4,5,6]".to_string(),
            offset: 1,
            functions: 4,
        }
    }
}
