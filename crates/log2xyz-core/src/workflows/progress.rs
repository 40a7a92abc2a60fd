/// Events emitted while a batch is being converted.
#[derive(Debug, Clone)]
pub enum Progress {
    BatchStart { total_jobs: u64 },
    JobFinished { job_name: String, converged: bool },
    BatchFinish,
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn reporter_without_callback_ignores_events() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::BatchStart { total_jobs: 3 });
        reporter.report(Progress::BatchFinish);
    }

    #[test]
    fn reporter_forwards_events_to_callback_in_order() {
        let seen = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event: Progress| {
            let label = match event {
                Progress::BatchStart { total_jobs } => format!("start:{}", total_jobs),
                Progress::JobFinished {
                    job_name,
                    converged,
                } => format!("{}:{}", job_name, converged),
                Progress::BatchFinish => "finish".to_string(),
            };
            seen.lock().unwrap().push(label);
        }));

        reporter.report(Progress::BatchStart { total_jobs: 1 });
        reporter.report(Progress::JobFinished {
            job_name: "water.gjf".to_string(),
            converged: true,
        });
        reporter.report(Progress::BatchFinish);
        drop(reporter);

        assert_eq!(
            seen.into_inner().unwrap(),
            vec!["start:1", "water.gjf:true", "finish"]
        );
    }
}
