pub struct DefaultsConfig {
    pub output: String,
    pub resubmit_script: String,
    pub resubmit_command: String,
    pub worker_count: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            output: "output.xyz".to_string(),
            resubmit_script: "resub.sh".to_string(),
            resubmit_command: "./rung16".to_string(),
            worker_count: 4,
        }
    }
}
