//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "wikiclean", about = "Chinese Wikipedia corpus cleaning tool.")]
/// Holds every command that is callable by the `wikiclean` command.
pub enum WikiClean {
    #[structopt(about = "Download Wikipedia dump files")]
    Download(Download),
    #[structopt(about = "Clean a dump into a JSONL corpus")]
    Process(Process),
    #[structopt(about = "Copy the first valid records of a corpus")]
    Sample(Sample),
    #[structopt(about = "Check that every line of a corpus is a valid record")]
    Validate(Validate),
}

#[derive(Debug, StructOpt)]
/// Download command and parameters.
/// ```sh
/// wikiclean download [OPTIONS] [files]...
/// ```
/// Files that already exist in `dst` are not downloaded again.
pub struct Download {
    #[structopt(
        parse(from_os_str),
        long = "dst",
        default_value = "data",
        help = "download folder"
    )]
    pub dst: PathBuf,
    #[structopt(
        long = "base-url",
        default_value = "https://dumps.wikimedia.org/zhwiki/20250401/",
        help = "url of the dump folder"
    )]
    pub base_url: String,
    #[structopt(help = "files to download. Defaults to the pages-articles dump.")]
    pub files: Vec<String>,
}

#[derive(Debug, StructOpt)]
/// Process command and parameters.
/// ```sh
/// wikiclean process [OPTIONS] <src>
/// ```
pub struct Process {
    #[structopt(parse(from_os_str), help = "dump file (.xml, .xml.bz2 or .xml.gz)")]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        short = "o",
        long = "output-dir",
        default_value = "output",
        help = "output folder"
    )]
    pub output_dir: PathBuf,
    #[structopt(long = "max-articles", help = "stop after writing this many articles")]
    pub max_articles: Option<u64>,
    #[structopt(
        long = "sample",
        default_value = "1000",
        help = "number of records in the sample file"
    )]
    pub sample: usize,
    #[structopt(
        parse(from_os_str),
        long = "thresholds",
        help = "JSON file overriding filtering thresholds"
    )]
    pub thresholds: Option<PathBuf>,
    #[structopt(
        long = "source",
        default_value = "zh_wikipedia_20250201",
        help = "source tag written in each record"
    )]
    pub source: String,
}

#[derive(Debug, StructOpt)]
pub struct Sample {
    #[structopt(parse(from_os_str), help = "source corpus")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "sample file")]
    pub dst: PathBuf,
    #[structopt(short = "n", default_value = "1000", help = "number of records")]
    pub size: usize,
}

#[derive(Debug, StructOpt)]
pub struct Validate {
    #[structopt(parse(from_os_str), help = "corpus to validate")]
    pub src: PathBuf,
}
