use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "scorebook", version)]
#[command(about = "Interactive flat-file store for student scores", long_about = None)]
pub struct Cli {
    /// Data file holding the records (created if missing)
    pub file: PathBuf,

    /// Keep records already in the file instead of starting empty
    #[arg(short, long)]
    pub keep: bool,

    /// Directory holding config.json
    #[arg(long, env = "SCOREBOOK_CONFIG_DIR", value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
