use std::time::Duration;

use indicatif::ProgressStyle;

pub struct ProgressBar(indicatif::ProgressBar);

impl twitter_thread::ProgressBar for ProgressBar {
    fn init(total: Option<usize>, description: &str) -> Self {
        let pb = match total {
            Some(total) => {
                let pb = indicatif::ProgressBar::new(total as u64);
                let sty = ProgressStyle::default_bar()
                    .template("{prefix}[{wide_bar}] {pos:>3}/{len:3} {msg}")
                    .unwrap()
                    .progress_chars("=> ");
                pb.set_style(sty);
                pb
            }
            None => {
                let pb = indicatif::ProgressBar::new_spinner();
                let sty = ProgressStyle::default_spinner()
                    .template("{prefix}{spinner} {pos} found {msg}")
                    .unwrap();
                pb.set_style(sty);
                pb.enable_steady_tick(Duration::from_millis(100));
                pb
            }
        };
        if !description.is_empty() {
            pb.set_prefix(format!("{} ", description));
        }
        Self(pb)
    }

    fn increment(&self) {
        self.0.inc(1);
    }

    fn warn(self, msg: &str) {
        self.0.abandon_with_message(format!("(stopped at {})", msg));
    }

    fn destroy(self) {
        self.0.finish();
    }
}
