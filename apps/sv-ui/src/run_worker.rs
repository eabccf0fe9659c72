use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread::{self, JoinHandle};
use sv_app::{ConfigOverrides, RunProgressEvent, RunRequest, RunResponse, run_service};

pub struct RunWorker {
    pub progress_rx: Receiver<WorkerMessage>,
    _handle: JoinHandle<()>,
}

#[derive(Debug)]
pub enum WorkerMessage {
    Progress(RunProgressEvent),
    Complete(Box<RunResponse>),
    Error { message: String },
}

impl RunWorker {
    pub fn start(config_path: Option<PathBuf>, overrides: ConfigOverrides) -> Self {
        let (tx, rx) = channel();

        let handle = thread::spawn(move || {
            let request = RunRequest {
                config_path: config_path.as_deref(),
                overrides,
            };
            match Self::run_simulation(&request, &tx) {
                Ok(response) => {
                    let _ = tx.send(WorkerMessage::Complete(Box::new(response)));
                }
                Err(e) => {
                    let _ = tx.send(WorkerMessage::Error {
                        message: format!("Run failed: {}", e),
                    });
                }
            }
        });

        Self {
            progress_rx: rx,
            _handle: handle,
        }
    }

    fn run_simulation(
        request: &RunRequest<'_>,
        tx: &Sender<WorkerMessage>,
    ) -> sv_app::AppResult<RunResponse> {
        // Forward roughly one event per percent
        let mut last_fraction = -1.0f64;
        let mut progress_callback = |event: RunProgressEvent| {
            let fraction = event.sim.as_ref().map(|s| s.fraction_complete);
            let send = match fraction {
                Some(f) if (f - last_fraction) < 0.01 && f < 1.0 => false,
                Some(f) => {
                    last_fraction = f;
                    true
                }
                None => true,
            };
            if send {
                let _ = tx.send(WorkerMessage::Progress(event));
            }
        };
        run_service::run_with_progress(request, Some(&mut progress_callback))
    }
}
