use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use log2xyz::workflows::progress::{Progress, ProgressCallback};

/// Renders conversion progress as a bar on stderr.
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: ProgressBar,
}

impl CliProgressHandler {
    pub fn new(visible: bool) -> Self {
        let pb = ProgressBar::new(0);
        let target = if visible {
            ProgressDrawTarget::stderr()
        } else {
            ProgressDrawTarget::hidden()
        };
        pb.set_draw_target(target);
        Self { pb }
    }

    /// Handle to the underlying bar, shared with the console log writer.
    pub fn bar(&self) -> ProgressBar {
        self.pb.clone()
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb = self.pb.clone();

        Box::new(move |progress: Progress| match progress {
            Progress::BatchStart { total_jobs } => {
                pb.reset();
                pb.set_style(Self::bar_style());
                pb.set_length(total_jobs);
                pb.set_position(0);
            }
            Progress::JobFinished { job_name, .. } => {
                pb.set_message(job_name);
                pb.inc(1);
            }
            Progress::BatchFinish => {
                pb.finish_and_clear();
            }
        })
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-")
    }
}
