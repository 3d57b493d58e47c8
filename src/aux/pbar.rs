use std::fmt::Write;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressState, ProgressStyle};

use super::global_settings::global_settings;

pub fn prepare_pbar(len: u64) -> ProgressBar {
    // --quiet hides the bar, the summary goes to the log.
    if !global_settings().show_progress {
        return ProgressBar::hidden();
    }

    _prepare_pbar(len)
}

fn _prepare_pbar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_draw_target(ProgressDrawTarget::stderr_with_hz(8));

    let template = match len {
        1.. => "{spinner:.green} [{elapsed_precise}] {msg} [{bar:.cyan/blue}] {pos}/{len} ({eta}, {per_sec})",
        0 => "{spinner:.green} [{elapsed_precise}] {msg} [ ? ] {pos} ({per_sec})",
    };

    match ProgressStyle::with_template(template) {
        Ok(style) => pb.set_style(style.with_key("eta", |state: &ProgressState, w: &mut dyn Write| {
            let _ = write!(w, "{:.1}s", state.eta().as_secs_f64());
        })),
        Err(err) => log::debug!("bad progress template: {err}"),
    }

    pb
}

pub trait PBSummary {
    fn finish_with_summary(&self);
}

impl PBSummary for ProgressBar {
    /// A hidden bar draws nothing, so its count and rate go to the log.
    fn finish_with_summary(&self) {
        if self.is_hidden() {
            let elapsed = self.elapsed();
            log::info!(
                "{}: {} steps in {:.1?} ({:.0} steps/s)",
                self.message(),
                self.position(),
                elapsed,
                self.position() as f64 / elapsed.as_secs_f64().max(1e-9),
            );
        }

        self.finish();
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn hidden_bar_still_counts() {
        let pb = ProgressBar::hidden();
        pb.set_message("i8 counter");
        pb.inc(128);
        pb.finish_with_summary();
        assert_eq!(pb.position(), 128);
        assert!(pb.is_finished());
    }

    #[test]
    fn counts_positions() {
        let pb = _prepare_pbar(10);
        pb.inc(4);
        assert_eq!(pb.position(), 4);
        pb.finish_with_summary();
    }
}
