use super::{Engine, Job, path_arg};
use crate::config::Config;

/// YUI Compressor via `java -jar`. One jar handles both languages, picked
/// with `--type`.
#[derive(Debug)]
pub struct Yui {
    pub css: bool,
}

impl Engine for Yui {
    fn name(&self) -> &'static str {
        if self.css { "yui-css" } else { "yui" }
    }

    fn command(&self, job: &Job, cfg: &Config) -> (String, Vec<String>) {
        let mut args = vec![
            "-jar".to_string(),
            cfg.yui_jar.clone(),
            "--type".to_string(),
            if self.css { "css" } else { "js" }.to_string(),
            "-o".to_string(),
            path_arg(&job.output),
        ];
        args.extend(job.options.to_tokens());
        args.push(path_arg(&job.input));
        (cfg.java_bin.clone(), args)
    }
}
