use super::{Engine, Job, path_arg};
use crate::config::Config;

/// uglify-js CLI. Same surface as terser but ES5-only, kept for projects
/// pinned to it.
#[derive(Debug)]
pub struct UglifyJs;

impl Engine for UglifyJs {
    fn name(&self) -> &'static str {
        "uglifyjs"
    }

    fn command(&self, job: &Job, cfg: &Config) -> (String, Vec<String>) {
        let mut args = vec![
            path_arg(&job.input),
            "-o".to_string(),
            path_arg(&job.output),
        ];
        args.extend(job.options.to_tokens());
        (cfg.uglify_bin.clone(), args)
    }
}
