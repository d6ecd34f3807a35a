use super::{Engine, Job, path_arg};
use crate::config::Config;

/// terser CLI (the maintained uglify-es successor).
#[derive(Debug)]
pub struct Terser;

impl Engine for Terser {
    fn name(&self) -> &'static str {
        "terser"
    }

    fn command(&self, job: &Job, cfg: &Config) -> (String, Vec<String>) {
        let mut args = vec![
            path_arg(&job.input),
            "-o".to_string(),
            path_arg(&job.output),
        ];
        args.extend(job.options.to_tokens());
        (cfg.terser_bin.clone(), args)
    }
}
