use super::{Engine, Job, path_arg};
use crate::config::Config;

/// clean-css CLI for stylesheets.
#[derive(Debug)]
pub struct CleanCss;

impl Engine for CleanCss {
    fn name(&self) -> &'static str {
        "cleancss"
    }

    fn command(&self, job: &Job, cfg: &Config) -> (String, Vec<String>) {
        let mut args = vec!["-o".to_string(), path_arg(&job.output)];
        args.extend(job.options.to_tokens());
        args.push(path_arg(&job.input));
        (cfg.cleancss_bin.clone(), args)
    }
}
