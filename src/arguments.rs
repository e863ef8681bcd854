use clap::Parser;

#[derive(Parser)]
#[clap(about = "Meta-build generator writing Ninja files for resolved targets", version)]
pub struct Arguments {
    #[clap(help = "Set a description file written by the build file evaluator")]
    pub description: String,
    #[clap(short = 'C', help = "Set a working directory")]
    pub directory: Option<String>,
    #[clap(short, help = "Set a job limit")]
    pub job_limit: Option<usize>,
    #[clap(long, help = "Set a file listing labels whose runtime dependencies are written")]
    pub runtime_deps_list_file: Option<String>,
    #[clap(long, help = "Resolve targets without writing build files")]
    pub check: bool,
    #[clap(long, help = "Set a log prefix")]
    pub log_prefix: Option<String>,
    #[clap(long, help = "Show debug logs", env = "KILN_DEBUG")]
    pub debug: bool,
    #[clap(long, help = "Show profile timings", env = "KILN_PROFILE")]
    pub profile: bool,
}
