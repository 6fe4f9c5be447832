use alchemist::engine::progress::{Progress, ProgressCallback};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressState, ProgressStyle};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::warn;

const SPINNER_TICK_MS: u64 = 80;

/// Renders engine progress events on stderr. Clones share one bar.
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: ProgressBar,
    phase: Arc<Mutex<&'static str>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        let pb = ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::stderr())
            .with_style(Self::spinner_style())
            .with_message("Initializing...");
        pb.finish_and_clear();

        Self {
            pb,
            phase: Arc::new(Mutex::new("")),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb = self.pb.clone();
        let phase = Arc::clone(&self.phase);

        Box::new(move |progress: Progress| match progress {
            Progress::PhaseStart { name } => {
                match phase.lock() {
                    Ok(mut current) => *current = name,
                    Err(_) => warn!("Progress phase mutex was poisoned."),
                }
                pb.reset();
                pb.set_length(0);
                pb.set_style(Self::spinner_style());
                pb.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
                pb.set_message(name);
            }
            Progress::PhaseFinish => {
                pb.disable_steady_tick();
                pb.finish_with_message("✓ Done");
            }
            Progress::TaskStart { total_steps } => {
                let name = phase.lock().map(|current| *current).unwrap_or_default();
                pb.disable_steady_tick();
                pb.reset();
                pb.set_length(total_steps);
                pb.set_position(0);
                pb.set_style(Self::bar_style());
                pb.set_message(name);
            }
            Progress::TaskIncrement => pb.inc(1),
            Progress::TaskFinish => {
                let length = pb.length().unwrap_or(0);
                if pb.position() < length {
                    pb.set_position(length);
                }
                pb.finish();
            }
            Progress::Message(msg) => {
                if pb.is_finished() {
                    pb.set_message(msg);
                } else {
                    pb.println(format!("  {}", msg));
                }
            }
        })
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{msg:<32} [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .with_key(
                "eta",
                |state: &ProgressState, w: &mut dyn std::fmt::Write| {
                    let _ = write!(w, "{:.1}s", state.eta().as_secs_f64());
                },
            )
            .progress_chars("##-")
    }
}

impl Default for CliProgressHandler {
    fn default() -> Self {
        Self::new()
    }
}
