use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for multi-document extraction runs
pub struct ProgressTracker {
    bar: ProgressBar,
}

impl ProgressTracker {
    /// Creates a tracker sized for the given number of jobs
    pub fn new(total: u64, description: &str) -> Self {
        let bar = ProgressBar::new(total);
        bar.set_style(ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} notebooks {msg}")
            .unwrap()
            .progress_chars("#>-"));
        bar.set_message(description.to_string());

        ProgressTracker {
            bar,
        }
    }

    /// Advances the bar after a job completes
    pub fn increment(&self, amount: u64) {
        self.bar.inc(amount);
    }

    /// Finishes the bar once every job has run
    pub fn finish(&self) {
        self.bar.finish_with_message("All notebooks processed");
    }

    /// Shows the document currently being processed
    pub fn set_message(&self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }
}
