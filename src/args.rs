use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// OpenPose JSON export to classify (reads stdin when omitted)
    #[arg(short, long)]
    pub file: Option<String>,

    /// Classifier to run (face, body)
    #[arg(long)]
    pub strategy: Option<String>,

    /// Emit the result as a JSON object under the host output names
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// List registered classifiers
    #[arg(long)]
    pub list: bool,
}
